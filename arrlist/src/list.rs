// arrlist - arrlist
// Module: Array List
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Growable, indexable sequence container.

use alloc::vec::Vec;
use core::fmt;

use arrlist_error::Result;

use crate::{
    operations::{record_global_operation, OperationType},
    render::{render_sequence, Render},
    storage::Slots,
    validation::{self, BoundedCapacity},
};

/// Capacity of a list built with [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Capacity a zero-capacity list grows to on its first insertion.
pub const MIN_GROWTH_CAPACITY: usize = 16;

/// Factor applied to the capacity on every growth step.
pub const GROWTH_FACTOR: usize = 2;

/// An ordered, zero-indexed, growable sequence of `T`.
///
/// # Invariants
///
/// 1. `len <= capacity` always holds
/// 2. Slots `[0, len)` are occupied, in logical order
/// 3. Slots `[len, capacity)` are empty and never observed
///
/// # Examples
///
/// ```
/// use arrlist::{array_list, ArrayList, Render};
///
/// let mut nums = array_list![5, 17, 26];
/// nums.insert_at(0, 47)?;
/// assert_eq!(nums.render(), "[47, 5, 17, 26]");
///
/// nums.exchange(0, 3)?;
/// assert_eq!(nums.render(), "[26, 5, 17, 47]");
/// assert!(nums.get(4).is_err());
/// # Ok::<(), arrlist::Error>(())
/// ```
pub struct ArrayList<T> {
    storage: Slots<T>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        record_global_operation(OperationType::CollectionCreate);
        Self { storage: Slots::with_capacity(DEFAULT_CAPACITY), len: 0 }
    }

    /// Creates a list holding `items` in order, with capacity equal to
    /// `items.len()`.
    ///
    /// An empty `items` yields a list of capacity 0, unlike [`ArrayList::new`].
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        record_global_operation(OperationType::CollectionCreate);
        let len = items.len();
        Self { storage: Slots::from_vec(items), len }
    }

    /// Number of elements in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current storage holds before it must grow.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Index out of range when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        record_global_operation(OperationType::CollectionRead);
        validation::check_read(index, self.len)?;
        self.storage
            .get(index)
            .ok_or_else(|| arrlist_error::read_out_of_range_error(index, self.len))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Index out of range when `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        record_global_operation(OperationType::CollectionWrite);
        validation::check_write(index, self.len)?;
        let len = self.len;
        self.storage
            .get_mut(index)
            .ok_or_else(|| arrlist_error::write_out_of_range_error(index, len))
    }

    /// Overwrites the element at `index` in place.
    ///
    /// # Errors
    ///
    /// Index out of range when `index >= len()`; `value` is dropped and the
    /// list is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Appends `value`, growing the storage when it is full.
    pub fn add(&mut self, value: T) {
        record_global_operation(OperationType::CollectionPush);
        self.reserve_for(1);
        self.storage.put(self.len, value);
        self.len += 1;
    }

    /// Appends every element of `values` in order.
    ///
    /// Reserves once for the iterator's lower size bound; iterators that
    /// under-report their length fall back to per-element growth.
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        self.reserve_for(values.size_hint().0);
        for value in values {
            self.add(value);
        }
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one place right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Index out of range when `index > len()`; the list is unchanged.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        record_global_operation(OperationType::CollectionInsert);
        validation::check_insert(index, self.len)?;
        self.reserve_for(1);
        self.storage.shift_right(index, self.len);
        self.storage.put(index, value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `(index, len)`
    /// one place left. Capacity is kept.
    ///
    /// # Errors
    ///
    /// Index out of range when `index >= len()`; the list is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        record_global_operation(OperationType::CollectionRemove);
        validation::check_remove(index, self.len)?;
        let removed = self
            .storage
            .take(index)
            .ok_or_else(|| arrlist_error::remove_out_of_range_error(index, self.len))?;
        self.storage.shift_left(index, self.len);
        self.len -= 1;
        Ok(removed)
    }

    /// Swaps the elements at `i` and `j`. `i == j` is a no-op.
    ///
    /// # Errors
    ///
    /// Index out of range for the first of `i`, `j` that is `>= len()`; the
    /// list is unchanged.
    pub fn exchange(&mut self, i: usize, j: usize) -> Result<()> {
        record_global_operation(OperationType::CollectionExchange);
        validation::check_exchange(i, j, self.len)?;
        if i != j {
            self.storage.swap(i, j);
        }
        Ok(())
    }

    /// Drops every element and resets the storage to [`DEFAULT_CAPACITY`]
    /// slots, leaving the list indistinguishable from [`ArrayList::new`].
    pub fn clear(&mut self) {
        record_global_operation(OperationType::CollectionClear);
        log::debug!("clearing list of {} elements (capacity {})", self.len, self.capacity());
        self.storage = Slots::with_capacity(DEFAULT_CAPACITY);
        self.len = 0;
    }

    /// Makes room for `additional` more elements.
    ///
    /// Capacity only ever doubles (or jumps from 0 to
    /// [`MIN_GROWTH_CAPACITY`]), repeated until the request fits, and the
    /// move happens in a single reallocation.
    fn reserve_for(&mut self, additional: usize) {
        let required = self.len.saturating_add(additional);
        let capacity = self.capacity();
        if required <= capacity {
            return;
        }

        let mut new_capacity = capacity;
        while new_capacity < required {
            new_capacity = if new_capacity == 0 {
                MIN_GROWTH_CAPACITY
            } else {
                new_capacity.saturating_mul(GROWTH_FACTOR)
            };
        }

        record_global_operation(OperationType::CollectionGrow);
        log::trace!("growing list storage from {capacity} to {new_capacity} slots");
        self.storage.grow_to(new_capacity, self.len);
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.storage.iter(self.len)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(Vec::from(items))
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    /// The clone keeps the source's capacity.
    fn clone(&self) -> Self {
        let mut storage = Slots::with_capacity(self.capacity());
        for (index, item) in self.elements().enumerate() {
            storage.put(index, item.clone());
        }
        Self { storage, len: self.len }
    }
}

impl<T> BoundedCapacity for ArrayList<T> {
    fn capacity(&self) -> usize {
        ArrayList::capacity(self)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Render> Render for ArrayList<T> {
    fn render_into(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        record_global_operation(OperationType::CollectionRender);
        render_sequence(self.elements(), out)
    }
}

impl<T: Render> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a ArrayList<T>);

impl<T: fmt::Debug> fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.elements()).finish()
    }
}
