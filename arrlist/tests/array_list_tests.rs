//! Behavioural tests for `ArrayList`, covering construction, indexed access,
//! positional mutation, and the failure contract.

#![allow(clippy::unwrap_used)]

use arrlist::{array_list, ArrayList, Error, Operation, Render, Result, DEFAULT_CAPACITY};

fn assert_out_of_range(error: Error, operation: Operation, index: usize) {
    assert!(error.is_index_out_of_range());
    assert_eq!(error.operation(), Some(operation));
    assert_eq!(error.index(), Some(index));
}

#[test]
fn test_empty_constructor() {
    let nums: ArrayList<i32> = ArrayList::new();

    assert_eq!(nums.len(), 0);
    assert_eq!(nums.capacity(), DEFAULT_CAPACITY);
    assert_eq!(nums.render(), "[]");
}

#[test]
fn test_macro_without_items_matches_default_constructor() {
    let nums: ArrayList<i32> = array_list![];
    assert_eq!(nums.capacity(), 16);
    let defaulted: ArrayList<i32> = ArrayList::default();
    assert_eq!(defaulted.capacity(), 16);
}

#[test]
fn test_explicit_empty_list_has_zero_capacity() {
    let nums: ArrayList<i32> = ArrayList::from_vec(Vec::new());
    assert_eq!(nums.len(), 0);
    assert_eq!(nums.capacity(), 0);
    assert_eq!(nums.render(), "[]");

    let from_array: ArrayList<i32> = ArrayList::from([]);
    assert_eq!(from_array.capacity(), 0);
}

#[test]
fn test_constructor_single_item() {
    let nums = array_list![5];
    assert_eq!(nums.render(), "[5]");
    assert_eq!(nums.capacity(), 1);
}

#[test]
fn test_constructor_multiple_items() {
    let nums = array_list![5, 10, 15];
    assert_eq!(nums.render(), "[5, 10, 15]");
    assert_eq!(nums.len(), 3);
    assert_eq!(nums.capacity(), 3);
}

#[test]
fn test_add() {
    let mut nums = ArrayList::new();

    nums.add(8);
    nums.add(14);

    assert_eq!(nums.render(), "[8, 14]");
}

#[test]
fn test_add_range_with_grow() {
    let mut nums: ArrayList<i32> = ArrayList::new();
    let old_capacity = nums.capacity();

    let new_nums: Vec<i32> = (1000..3000).collect();
    nums.add_range(new_nums.iter().copied());

    let expected = format!(
        "[{}]",
        new_nums.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    );
    assert_eq!(nums.render(), expected);
    assert!(nums.capacity() >= old_capacity);
    assert!(nums.capacity() >= nums.len());
    assert!(nums.capacity() >= 2000);
}

#[test]
fn test_add_range() {
    let mut nums = array_list![5, 10, 15];

    nums.add_range([20, 25, 35]);

    let expected = array_list![5, 10, 15, 20, 25, 35];
    assert_eq!(nums.render(), expected.render());
}

#[test]
fn test_add_range_larger_than_list() {
    let mut nums = array_list![1, 2];
    nums.add_range(3..=50);
    assert_eq!(nums.len(), 50);
    assert!(nums.capacity() >= 50);
    for (index, expected) in (1..=50).enumerate() {
        assert_eq!(*nums.get(index).unwrap(), expected);
    }
}

#[test]
fn test_add_range_from_own_copy() -> Result<()> {
    let mut nums = array_list![1, 2, 3];
    let snapshot = nums.clone();
    nums.add_range((0..snapshot.len()).map(|i| *snapshot.get(i).unwrap()));
    assert_eq!(nums.render(), "[1, 2, 3, 1, 2, 3]");
    Ok(())
}

#[test]
fn test_get_by_index() -> Result<()> {
    let nums = array_list![5, 10, 18, 7, 68, 6, 74];

    assert_eq!(*nums.get(3)?, 7);
    assert_eq!(*nums.get(0)?, 5);
    assert_eq!(*nums.get(2)?, *nums.get(2)?);
    Ok(())
}

#[test]
fn test_get_by_invalid_index() {
    let nums = array_list![5, 10, 18, 7, 68, 6, 74];

    assert_out_of_range(nums.get(17).unwrap_err(), Operation::Get, 17);
    assert_out_of_range(nums.get(7).unwrap_err(), Operation::Get, 7);
    assert_out_of_range(nums.get(usize::MAX).unwrap_err(), Operation::Get, usize::MAX);
}

#[test]
fn test_set_by_index() -> Result<()> {
    let mut nums = array_list![5, 10, 15, 20, 15, 30];

    nums.set(4, 17)?;

    assert_eq!(*nums.get(4)?, 17);
    assert_eq!(nums.render(), "[5, 10, 15, 20, 17, 30]");
    Ok(())
}

#[test]
fn test_set_by_invalid_index() {
    let mut nums = array_list![5, 10, 15, 20, 25, 30, 35];

    assert_out_of_range(nums.set(7, 1).unwrap_err(), Operation::Set, 7);
    assert_eq!(nums.render(), "[5, 10, 15, 20, 25, 30, 35]");
}

#[test]
fn test_insert_at_start() -> Result<()> {
    let mut nums = array_list![5, 17, 26];

    nums.insert_at(0, 47)?;

    let expected = array_list![47, 5, 17, 26];
    assert_eq!(nums.render(), expected.render());
    Ok(())
}

#[test]
fn test_insert_before_last() -> Result<()> {
    let mut nums = array_list![5, 17, 26];

    nums.insert_at(2, 47)?;

    assert_eq!(nums.render(), "[5, 17, 47, 26]");
    Ok(())
}

#[test]
fn test_insert_at_middle() -> Result<()> {
    let mut nums = array_list![5, 10, 15, 19, 24, 32];

    nums.insert_at(3, 24)?;

    assert_eq!(nums.render(), "[5, 10, 15, 24, 19, 24, 32]");
    Ok(())
}

#[test]
fn test_insert_at_with_grow() -> Result<()> {
    let mut nums = array_list![5, 10];
    let old_capacity = nums.capacity();
    nums.insert_at(0, 45)?;
    nums.insert_at(3, 17)?;
    nums.insert_at(4, 6)?;

    for i in (0..=nums.len()).rev() {
        let value = *nums.get(0)? + i32::try_from(i).unwrap();
        nums.insert_at(i, value)?;
    }

    assert!(nums.capacity() >= old_capacity);
    assert_eq!(nums.render(), "[45, 45, 46, 5, 47, 10, 48, 17, 49, 6, 50]");
    assert!(nums.capacity() >= nums.len());
    Ok(())
}

#[test]
fn test_insert_at_invalid_index() {
    let mut nums = array_list![5, 10, 15, 19, 24, 32];

    let error = nums.insert_at(7, 42).unwrap_err();
    assert_out_of_range(error, Operation::Insert, 7);
    assert_eq!(error.bound(), Some(7));
    assert_eq!(nums.len(), 6);
}

#[test]
fn test_exchange_middle() -> Result<()> {
    let mut nums = array_list![11, 8, 23, 65];

    nums.exchange(2, 1)?;

    assert_eq!(nums.render(), array_list![11, 23, 8, 65].render());
    Ok(())
}

#[test]
fn test_exchange_first_last() -> Result<()> {
    let mut nums = array_list![11, 8, 23, 65];

    nums.exchange(0, 3)?;

    assert_eq!(nums.render(), "[65, 8, 23, 11]");
    Ok(())
}

#[test]
fn test_exchange_invalid_indexes() {
    let mut nums = array_list![11, 8, 23, 11];

    assert_out_of_range(nums.exchange(5, 2).unwrap_err(), Operation::Exchange, 5);
    assert_out_of_range(nums.exchange(2, 4).unwrap_err(), Operation::Exchange, 4);
    assert_out_of_range(nums.exchange(9, 8).unwrap_err(), Operation::Exchange, 9);
    assert_eq!(nums.render(), "[11, 8, 23, 11]");
}

#[test]
fn test_remove_at_start() -> Result<()> {
    let mut nums = array_list![5, 10, 15, 20, 25, 30];

    assert_eq!(nums.remove_at(0)?, 5);

    assert_eq!(nums.render(), array_list![10, 15, 20, 25, 30].render());
    Ok(())
}

#[test]
fn test_remove_at_end() -> Result<()> {
    let mut nums = array_list![5, 10, 15, 20, 25, 30];

    assert_eq!(nums.remove_at(5)?, 30);

    assert_eq!(nums.render(), "[5, 10, 15, 20, 25]");
    Ok(())
}

#[test]
fn test_remove_at_middle() -> Result<()> {
    let mut nums = array_list![5, 10, 15, 20, 25, 30];

    assert_eq!(nums.remove_at(3)?, 20);

    assert_eq!(nums.render(), "[5, 10, 15, 25, 30]");
    assert_eq!(nums.len(), 5);
    assert_eq!(nums.capacity(), 6);
    Ok(())
}

#[test]
fn test_remove_at_invalid_index() {
    let mut nums = array_list![5, 10, 15, 20, 25, 30];

    assert_out_of_range(nums.remove_at(6).unwrap_err(), Operation::Remove, 6);
    assert_eq!(nums.len(), 6);

    let mut empty: ArrayList<i32> = ArrayList::new();
    assert_out_of_range(empty.remove_at(0).unwrap_err(), Operation::Remove, 0);
}

#[test]
fn test_clear() {
    let mut nums = array_list![5, 10, 15, 20, 25, 30];

    nums.clear();

    let expected: ArrayList<i32> = ArrayList::new();
    assert_eq!(nums.render(), expected.render());
    assert_eq!(nums.len(), expected.len());
    assert_eq!(nums.capacity(), expected.capacity());
}

#[test]
fn test_cleared_list_is_reusable() -> Result<()> {
    let mut nums = array_list![1, 2, 3];
    nums.clear();
    nums.add(4);
    nums.insert_at(0, 3)?;
    assert_eq!(nums.render(), "[3, 4]");
    Ok(())
}

#[test]
fn test_count() {
    let nums = array_list![5, 10, 15, 7, 68, 56, 74];
    assert_eq!(nums.len(), 7);
    assert!(!nums.is_empty());
}

#[test]
fn test_dropped_elements_are_released() {
    use std::rc::Rc;

    let tracker = Rc::new(());
    let mut list = ArrayList::new();
    for _ in 0..40 {
        list.add(Rc::clone(&tracker));
    }
    assert_eq!(Rc::strong_count(&tracker), 41);

    drop(list.remove_at(0));
    assert_eq!(Rc::strong_count(&tracker), 40);

    list.clear();
    assert_eq!(Rc::strong_count(&tracker), 1);

    list.add(Rc::clone(&tracker));
    drop(list);
    assert_eq!(Rc::strong_count(&tracker), 1);
}
