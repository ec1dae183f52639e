// arrlist - arrlist-error
// Module: Error Codes
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for arrlist

// Bounds error codes (1000-1099)
/// Index outside the valid range of the receiving operation
pub const INDEX_OUT_OF_RANGE: u16 = 1000;

/// First code reserved for bounds errors
pub const BOUNDS_RANGE_START: u16 = 1000;
/// One past the last code reserved for bounds errors
pub const BOUNDS_RANGE_END: u16 = 1100;
