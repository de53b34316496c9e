/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Main traits for compressed string dictionaries.

*/

pub mod indexed_dict;
pub use indexed_dict::{IndexedDict, Rank};
