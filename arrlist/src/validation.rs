// arrlist - arrlist
// Module: Validation Utilities
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Capacity reporting and index validation for the sequence container.
//!
//! Every index-taking operation validates through this module before it
//! touches storage, so a rejected call never leaves partial state behind.

use arrlist_error::{helpers, Error};

/// Trait for types with a tracked capacity
pub trait BoundedCapacity {
    /// Number of elements the current storage can hold without growing
    fn capacity(&self) -> usize;

    /// Current number of elements
    fn len(&self) -> usize;

    /// Check if the container is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the next insertion has to grow the storage
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Slots left before the next growth
    fn remaining_capacity(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }
}

/// Logs a rejected index and hands the error back.
fn rejected(error: Error) -> Error {
    if let Some(ctx) = error.context {
        log::trace!("rejected {ctx}");
    }
    error
}

/// Accepts `index` for `get`, `get_mut`, and `set`: `index < len`.
pub(crate) fn check_read(index: usize, len: usize) -> Result<(), Error> {
    if index < len {
        Ok(())
    } else {
        Err(rejected(helpers::read_out_of_range_error(index, len)))
    }
}

/// Same range as [`check_read`], reported as a write.
pub(crate) fn check_write(index: usize, len: usize) -> Result<(), Error> {
    if index < len {
        Ok(())
    } else {
        Err(rejected(helpers::write_out_of_range_error(index, len)))
    }
}

/// Accepts `index` for `insert_at`: `index <= len`.
pub(crate) fn check_insert(index: usize, len: usize) -> Result<(), Error> {
    if index <= len {
        Ok(())
    } else {
        Err(rejected(helpers::insert_out_of_range_error(index, len)))
    }
}

/// Accepts `index` for `remove_at`: `index < len`.
pub(crate) fn check_remove(index: usize, len: usize) -> Result<(), Error> {
    if index < len {
        Ok(())
    } else {
        Err(rejected(helpers::remove_out_of_range_error(index, len)))
    }
}

/// Accepts both sides of an exchange, checking `i` first.
pub(crate) fn check_exchange(i: usize, j: usize, len: usize) -> Result<(), Error> {
    for index in [i, j] {
        if index >= len {
            return Err(rejected(helpers::exchange_out_of_range_error(index, len)));
        }
    }
    Ok(())
}
