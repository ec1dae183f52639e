// arrlist - arrlist
// Module: Construction Macros
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Builds an [`ArrayList`](crate::ArrayList) from its elements.
///
/// With no elements this is [`ArrayList::new`](crate::ArrayList::new), with
/// the default capacity. With elements, the capacity equals the element
/// count.
///
/// # Examples
///
/// ```
/// use arrlist::{array_list, ArrayList, Render};
///
/// let empty: ArrayList<i32> = array_list![];
/// assert_eq!(empty.capacity(), 16);
///
/// let nums = array_list![5, 10, 15];
/// assert_eq!(nums.capacity(), 3);
/// assert_eq!(nums.render(), "[5, 10, 15]");
/// ```
#[macro_export]
macro_rules! array_list {
    () => {
        $crate::ArrayList::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::ArrayList::from_vec($crate::__private::vec![$($item),+])
    };
}
