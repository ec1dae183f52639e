// arrlist - arrlist
// Module: Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for arrlist
//!
//! Brings the container, its traits, and the error types into scope with a
//! single `use arrlist::prelude::*;`.

pub use arrlist_error::prelude::*;

pub use crate::{
    array_list,
    list::{ArrayList, DEFAULT_CAPACITY, GROWTH_FACTOR, MIN_GROWTH_CAPACITY},
    operations::{OperationSummary, OperationTracking, OperationType},
    render::Render,
    validation::BoundedCapacity,
};
