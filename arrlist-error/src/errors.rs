// arrlist - arrlist-error
// Module: Error Types
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error type for arrlist
//!
//! This module provides the `Error` value returned by every fallible
//! container operation, together with its category.

use core::fmt;

use crate::{codes, kinds::IndexOutOfRange, Operation, ToErrorCategory};

/// `Error` categories for arrlist operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Index bounds errors
    Bounds = 1,
}

/// Base trait for all error kinds
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// arrlist `Error` type
///
/// Categorized error with a numeric code, a static message, and, for bounds
/// errors, the rejected index.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code: u16,
    /// `Error` message
    pub message: &'static str,
    /// Rejected index, when the error came from index validation
    pub context: Option<IndexOutOfRange>,
}

impl Error {
    /// Create a new error without index context.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
            context: None,
        }
    }

    /// Create an index-out-of-range error for `operation`.
    #[must_use]
    pub const fn index_out_of_range(operation: Operation, index: usize, bound: usize) -> Self {
        Self {
            category: ErrorCategory::Bounds,
            code: codes::INDEX_OUT_OF_RANGE,
            message: "Index out of range",
            context: Some(IndexOutOfRange::new(operation, index, bound)),
        }
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this error reports a rejected index
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        self.code == codes::INDEX_OUT_OF_RANGE
    }

    /// Rejected index, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.context.map(|ctx| ctx.index)
    }

    /// Exclusive bound the index was checked against, if any.
    #[must_use]
    pub fn bound(&self) -> Option<usize> {
        self.context.map(|ctx| ctx.bound)
    }

    /// Operation that rejected the index, if any.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.context.map(|ctx| ctx.operation)
    }
}

impl From<IndexOutOfRange> for Error {
    fn from(kind: IndexOutOfRange) -> Self {
        Self::index_out_of_range(kind.operation, kind.index, kind.bound)
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04X}] {}", self.category, self.code, self.message)?;
        if let Some(ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
