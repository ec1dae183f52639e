// arrlist - arrlist-error
// Module: Error Kinds
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Defines the specific error kinds raised by the container.

use core::fmt::{self, Display};

use crate::{codes, errors::ErrorSource, ErrorCategory};

/// The container operation that validated an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Indexed read
    Get,
    /// Indexed overwrite or mutable borrow
    Set,
    /// Positional insertion
    Insert,
    /// Positional removal
    Remove,
    /// Pairwise exchange
    Exchange,
}

impl Operation {
    /// Name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Insert => "insert_at",
            Self::Remove => "remove_at",
            Self::Exchange => "exchange",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An index fell outside `0..bound` for the operation that received it.
///
/// `bound` is exclusive. For [`Operation::Insert`] it is `len + 1`, since
/// inserting at `len` appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfRange {
    /// Operation that rejected the index
    pub operation: Operation,
    /// Offending index
    pub index: usize,
    /// Exclusive upper bound of the valid range
    pub bound: usize,
}

impl IndexOutOfRange {
    /// Create a new index-out-of-range kind.
    #[must_use]
    pub const fn new(operation: Operation, index: usize, bound: usize) -> Self {
        Self { operation, index, bound }
    }
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for {} (valid range 0..{})",
            self.index, self.operation, self.bound
        )
    }
}

impl ErrorSource for IndexOutOfRange {
    fn code(&self) -> u16 {
        codes::INDEX_OUT_OF_RANGE
    }

    fn message(&self) -> &'static str {
        "Index out of range"
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Bounds
    }
}

/// Create an [`IndexOutOfRange`] kind
#[must_use]
pub const fn index_out_of_range(operation: Operation, index: usize, bound: usize) -> IndexOutOfRange {
    IndexOutOfRange::new(operation, index, bound)
}
