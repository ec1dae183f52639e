// arrlist - arrlist-error
// Module: Error Helpers
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common error patterns.

use crate::{Error, Operation};

// Re-export error kind creation functions
pub use crate::kinds::index_out_of_range;

/// Create an index-out-of-range error for an indexed read
#[must_use]
pub const fn read_out_of_range_error(index: usize, len: usize) -> Error {
    Error::index_out_of_range(Operation::Get, index, len)
}

/// Create an index-out-of-range error for an indexed write
#[must_use]
pub const fn write_out_of_range_error(index: usize, len: usize) -> Error {
    Error::index_out_of_range(Operation::Set, index, len)
}

/// Create an index-out-of-range error for a positional insertion.
///
/// `len` is the current element count; the reported bound is `len + 1`
/// since inserting at `len` is valid.
#[must_use]
pub const fn insert_out_of_range_error(index: usize, len: usize) -> Error {
    Error::index_out_of_range(Operation::Insert, index, len.saturating_add(1))
}

/// Create an index-out-of-range error for a positional removal
#[must_use]
pub const fn remove_out_of_range_error(index: usize, len: usize) -> Error {
    Error::index_out_of_range(Operation::Remove, index, len)
}

/// Create an index-out-of-range error for one side of an exchange
#[must_use]
pub const fn exchange_out_of_range_error(index: usize, len: usize) -> Error {
    Error::index_out_of_range(Operation::Exchange, index, len)
}
