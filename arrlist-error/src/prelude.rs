// arrlist - arrlist-error
// Module: Error Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for arrlist-error
//!
//! Re-exports the error types and helpers so that dependent crates can pull
//! them in with a single `use`.

pub use crate::helpers::*;
pub use crate::{
    codes,
    kinds::{self, IndexOutOfRange, Operation},
    Error, ErrorCategory, ErrorSource, Result, ToErrorCategory,
};
