// arrlist - arrlist
// Module: Canonical Rendering
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The [`Render`] capability.
//!
//! A list renders as `[` + its elements joined by `, ` + `]`, each element
//! through its own `Render` impl. Lists of lists therefore render
//! recursively, and `ArrayList<Box<dyn Render>>` holds lists of different
//! element types side by side.

use alloc::{boxed::Box, string::String};
use core::fmt::{self, Write};

/// Types with a canonical string form.
pub trait Render {
    /// Writes the canonical form of `self` into `out`.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying writer.
    fn render_into(&self, out: &mut dyn Write) -> fmt::Result;

    /// Returns the canonical form of `self`, or the writer's error if any
    /// part of it fails to render.
    ///
    /// # Errors
    ///
    /// Returns [`fmt::Error`] when a `render_into` call inside `self` fails.
    fn try_render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Returns the canonical form of `self`.
    ///
    /// The output is complete only if every `render_into` involved succeeds.
    /// On failure the text written up to that point is returned and a
    /// warning is logged; use [`Render::try_render`] to observe the error.
    fn render(&self) -> String {
        let mut out = String::new();
        if self.render_into(&mut out).is_err() {
            log::warn!("rendering stopped after {} bytes: an element failed to render", out.len());
        }
        out
    }
}

macro_rules! impl_render_via_display {
    ($($T:ty),* $(,)?) => {
        $(impl Render for $T {
            fn render_into(&self, out: &mut dyn Write) -> fmt::Result {
                write!(out, "{self}")
            }
        })*
    };
}

impl_render_via_display! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    bool, char,
}

impl Render for str {
    fn render_into(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(self)
    }
}

impl Render for String {
    fn render_into(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(self)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render_into(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).render_into(out)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render_into(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).render_into(out)
    }
}

/// Writes `[a, b, c]` for the given elements.
pub(crate) fn render_sequence<'a, T, I>(items: I, out: &mut dyn Write) -> fmt::Result
where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    out.write_char('[')?;
    for (position, item) in items.into_iter().enumerate() {
        if position > 0 {
            out.write_str(", ")?;
        }
        item.render_into(out)?;
    }
    out.write_char(']')
}
