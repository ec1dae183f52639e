// arrlist - arrlist
// Module: Operation Tracking
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Operation tracking for the sequence container
//!
//! Every public container operation records an [`OperationType`] into a
//! process-wide [`OperationCounter`]. Each operation has a fixed fuel cost;
//! the accumulated fuel is a coarse, allocation-free measure of the work the
//! container has performed.

use core::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_OPERATIONS_COUNTER: OperationCounter = OperationCounter::new();

/// Operation types that can be tracked for fuel consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// List construction
    CollectionCreate,
    /// Indexed read
    CollectionRead,
    /// Indexed overwrite or mutable borrow
    CollectionWrite,
    /// Append at the end
    CollectionPush,
    /// Positional insertion
    CollectionInsert,
    /// Positional removal
    CollectionRemove,
    /// Pairwise exchange
    CollectionExchange,
    /// Clear
    CollectionClear,
    /// Storage reallocation to a larger capacity
    CollectionGrow,
    /// Canonical rendering
    CollectionRender,
}

impl OperationType {
    /// Returns the base fuel cost of the operation.
    #[must_use]
    pub const fn cost(self) -> u64 {
        match self {
            OperationType::CollectionCreate => 5,
            OperationType::CollectionRead => 1,
            OperationType::CollectionWrite => 2,
            OperationType::CollectionPush => 2,
            OperationType::CollectionInsert => 3,
            OperationType::CollectionRemove => 3,
            OperationType::CollectionExchange => 2,
            OperationType::CollectionClear => 5,
            OperationType::CollectionGrow => 10,
            OperationType::CollectionRender => 4,
        }
    }
}

/// A counter for tracking operation counts
#[derive(Debug)]
pub struct OperationCounter {
    creates: AtomicU64,
    reads: AtomicU64,
    writes: AtomicU64,
    pushes: AtomicU64,
    inserts: AtomicU64,
    removes: AtomicU64,
    exchanges: AtomicU64,
    clears: AtomicU64,
    grows: AtomicU64,
    renders: AtomicU64,
    /// Total fuel consumed by operations
    fuel_consumed: AtomicU64,
}

impl Default for OperationCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationCounter {
    /// Create a new operation counter with all counts at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            creates: AtomicU64::new(0),
            reads: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            pushes: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            removes: AtomicU64::new(0),
            exchanges: AtomicU64::new(0),
            clears: AtomicU64::new(0),
            grows: AtomicU64::new(0),
            renders: AtomicU64::new(0),
            fuel_consumed: AtomicU64::new(0),
        }
    }

    fn slot(&self, op_type: OperationType) -> &AtomicU64 {
        match op_type {
            OperationType::CollectionCreate => &self.creates,
            OperationType::CollectionRead => &self.reads,
            OperationType::CollectionWrite => &self.writes,
            OperationType::CollectionPush => &self.pushes,
            OperationType::CollectionInsert => &self.inserts,
            OperationType::CollectionRemove => &self.removes,
            OperationType::CollectionExchange => &self.exchanges,
            OperationType::CollectionClear => &self.clears,
            OperationType::CollectionGrow => &self.grows,
            OperationType::CollectionRender => &self.renders,
        }
    }

    /// Record an operation and update fuel consumption
    pub fn record_operation(&self, op_type: OperationType) {
        self.slot(op_type).fetch_add(1, Ordering::Relaxed);
        self.fuel_consumed.fetch_add(op_type.cost(), Ordering::Relaxed);
    }

    /// Get the total fuel consumed by all operations
    #[must_use]
    pub fn get_fuel_consumed(&self) -> u64 {
        self.fuel_consumed.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        for counter in [
            &self.creates,
            &self.reads,
            &self.writes,
            &self.pushes,
            &self.inserts,
            &self.removes,
            &self.exchanges,
            &self.clears,
            &self.grows,
            &self.renders,
            &self.fuel_consumed,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get a summary of all operation counts
    #[must_use]
    pub fn get_summary(&self) -> OperationSummary {
        OperationSummary {
            collection_creates: self.creates.load(Ordering::Relaxed),
            collection_reads: self.reads.load(Ordering::Relaxed),
            collection_writes: self.writes.load(Ordering::Relaxed),
            collection_pushes: self.pushes.load(Ordering::Relaxed),
            collection_inserts: self.inserts.load(Ordering::Relaxed),
            collection_removes: self.removes.load(Ordering::Relaxed),
            collection_exchanges: self.exchanges.load(Ordering::Relaxed),
            collection_clears: self.clears.load(Ordering::Relaxed),
            collection_grows: self.grows.load(Ordering::Relaxed),
            collection_renders: self.renders.load(Ordering::Relaxed),
            fuel_consumed: self.fuel_consumed.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of operation counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSummary {
    /// Number of list constructions
    pub collection_creates: u64,
    /// Number of indexed reads
    pub collection_reads: u64,
    /// Number of indexed writes
    pub collection_writes: u64,
    /// Number of appends
    pub collection_pushes: u64,
    /// Number of positional insertions
    pub collection_inserts: u64,
    /// Number of positional removals
    pub collection_removes: u64,
    /// Number of exchanges
    pub collection_exchanges: u64,
    /// Number of clears
    pub collection_clears: u64,
    /// Number of storage reallocations
    pub collection_grows: u64,
    /// Number of renders
    pub collection_renders: u64,
    /// Total fuel consumed by operations
    pub fuel_consumed: u64,
}

/// Trait for types that need to track operation counts
pub trait OperationTracking {
    /// Record an operation occurred
    fn record_operation(&self, op_type: OperationType);

    /// Get the current operation statistics
    fn operation_stats(&self) -> OperationSummary;

    /// Reset operation counters
    fn reset_operation_stats(&self);
}

impl OperationTracking for OperationCounter {
    fn record_operation(&self, op_type: OperationType) {
        OperationCounter::record_operation(self, op_type);
    }

    fn operation_stats(&self) -> OperationSummary {
        self.get_summary()
    }

    fn reset_operation_stats(&self) {
        self.reset();
    }
}

/// Record an operation in the global counter
pub fn record_global_operation(op_type: OperationType) {
    GLOBAL_OPERATIONS_COUNTER.record_operation(op_type);
}

/// Get the summary from the global counter
#[must_use]
pub fn global_operation_summary() -> OperationSummary {
    GLOBAL_OPERATIONS_COUNTER.get_summary()
}

/// Reset the global counter
pub fn reset_global_operations() {
    GLOBAL_OPERATIONS_COUNTER.reset();
}

/// Get the total fuel consumed from the global counter
#[must_use]
pub fn global_fuel_consumed() -> u64 {
    GLOBAL_OPERATIONS_COUNTER.get_fuel_consumed()
}
