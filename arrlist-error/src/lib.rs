// arrlist - arrlist-error
// Module: Error Handling
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the `arrlist` sequence container.
//!
//! The container reports exactly one kind of failure: an index that lies
//! outside the valid range of the operation that received it. This crate
//! provides the `Error` value that carries that failure, its category and
//! numeric code, and the typed [`kinds::IndexOutOfRange`] kind that records
//! the offending index.
//!
//! # Error Categories
//!
//! ## Bounds Errors (1000-1099)
//! - Index out of range for read, write, insert, remove, or exchange
//!
//! # Usage
//!
//! ```
//! use arrlist_error::{kinds::IndexOutOfRange, Error, Operation};
//!
//! let error = Error::from(IndexOutOfRange::new(Operation::Get, 17, 7));
//! assert!(error.is_index_out_of_range());
//! assert_eq!(error.index(), Some(17));
//! assert_eq!(error.bound(), Some(7));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for arrlist
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod helpers;
pub mod prelude;

pub use errors::{Error, ErrorCategory, ErrorSource};
pub use helpers::*;
pub use kinds::{IndexOutOfRange, Operation};

/// A specialized `Result` type for arrlist operations.
///
/// `Error` is `Copy` and allocation free, so this alias is usable in
/// `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;

/// Error conversion trait for converting to specific error categories
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
