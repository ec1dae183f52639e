// arrlist - arrlist
// Module: Crate Root
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Growable, indexable sequence container
//!
//! [`ArrayList<T>`] keeps its elements densely packed in one owned region of
//! explicitly tracked capacity. Appends are amortized O(1) through capacity
//! doubling; positional insertion and removal shift the tail of the list.
//! Every index-taking operation validates before it mutates, so a rejected
//! call leaves the list untouched.
//!
//! ```
//! use arrlist::{array_list, ArrayList, Render};
//!
//! let names = array_list!["Boris", "Peter"];
//! let nums = array_list![10, 20];
//! let dates: ArrayList<u64> = ArrayList::new();
//!
//! let nested: ArrayList<Box<dyn Render>> =
//!     array_list![Box::new(names) as Box<dyn Render>, Box::new(nums), Box::new(dates)];
//! assert_eq!(nested.render(), "[[Boris, Peter], [10, 20], []]");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

/// The sequence container
pub mod list;
/// Construction macros
#[macro_use]
mod macros;
/// Operation tracking and fuel metering
pub mod operations;
/// Canonical string rendering
pub mod render;
/// Owned slot storage
mod storage;
/// Capacity reporting and index validation
pub mod validation;

// Re-export error related types for convenience
pub use arrlist_error::{Error, ErrorCategory, IndexOutOfRange, Operation, Result};

pub use list::{ArrayList, DEFAULT_CAPACITY, GROWTH_FACTOR, MIN_GROWTH_CAPACITY};
pub use operations::{
    global_fuel_consumed, global_operation_summary, record_global_operation,
    reset_global_operations, OperationCounter, OperationSummary, OperationTracking, OperationType,
};
pub use render::Render;
pub use validation::BoundedCapacity;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
}
