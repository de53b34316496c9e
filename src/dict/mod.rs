/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Indexed dictionaries.

pub mod rear_coded_dict;
pub use rear_coded_dict::{
    BlockInfo, BuildError, HeaderIter, Headers, RearCodedDict, RearCodedDictBuilder,
};
