use proptest::prelude::*;

use crate::growth::capacity_after;
use crate::{DynamicArray, SinglyLinkedList};

#[derive(Debug, Clone)]
enum ListOp {
    PushFront(i32),
    PushBack(i32),
    Insert(i32, usize),
    Remove(usize),
    PopFront,
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        any::<i32>().prop_map(ListOp::PushFront),
        any::<i32>().prop_map(ListOp::PushBack),
        (any::<i32>(), any::<usize>()).prop_map(|(value, index)| ListOp::Insert(value, index)),
        any::<usize>().prop_map(ListOp::Remove),
        Just(ListOp::PopFront),
    ]
}

proptest! {
    #[test]
    fn array_matches_source_sequence(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let arr = DynamicArray::from_slice(&values);
        prop_assert_eq!(arr.len(), values.len());
        prop_assert_eq!(arr.reserved(), 0);
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(arr[i], *value);
        }
    }

    #[test]
    fn array_capacity_follows_doubling(count in 0usize..300) {
        let mut arr = DynamicArray::new();
        for i in 0..count {
            arr.push(i);
        }
        prop_assert_eq!(Some(arr.capacity()), capacity_after(count));
        prop_assert_eq!(arr.reserved(), arr.capacity() - count);
    }

    #[test]
    fn array_copy_is_independent(
        values in prop::collection::vec(any::<u16>(), 0..32),
        extra in prop::collection::vec(any::<u16>(), 1..8),
    ) {
        let original = DynamicArray::from_slice(&values);
        let mut copy = original.clone();
        copy.extend(extra.iter().copied());
        prop_assert_eq!(&original, &values);
        prop_assert_eq!(copy.len(), values.len() + extra.len());
    }

    #[test]
    fn array_concatenation_preserves_order(
        left in prop::collection::vec(any::<i32>(), 0..32),
        right in prop::collection::vec(any::<i32>(), 0..32),
    ) {
        let a = DynamicArray::from_slice(&left);
        let b = DynamicArray::from_slice(&right);
        let expected: Vec<i32> = left.iter().chain(right.iter()).copied().collect();

        prop_assert_eq!(&a + &b, expected.clone());
        let mut appended = a.clone();
        appended += &b;
        prop_assert_eq!(appended, expected);
        prop_assert_eq!(a, left);
        prop_assert_eq!(b, right);
    }

    #[test]
    fn list_matches_source_sequence(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let list: SinglyLinkedList<i64> = values.iter().copied().collect();
        prop_assert_eq!(list.len(), values.len());
        let copy = list.clone();
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(list[i], *value);
            prop_assert_eq!(copy[i], *value);
        }
    }

    #[test]
    fn list_concatenation_preserves_order(
        left in prop::collection::vec(any::<i32>(), 0..24),
        right in prop::collection::vec(any::<i32>(), 0..24),
    ) {
        let a: SinglyLinkedList<i32> = left.iter().copied().collect();
        let b: SinglyLinkedList<i32> = right.iter().copied().collect();
        let expected: Vec<i32> = left.iter().chain(right.iter()).copied().collect();

        prop_assert_eq!(&a + &b, expected);
        prop_assert_eq!(a, left);
        prop_assert_eq!(b, right);
    }

    #[test]
    fn list_edits_match_vec_model(ops in prop::collection::vec(list_op(), 0..96)) {
        let mut list = SinglyLinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                ListOp::PushFront(value) => {
                    list.push_front(value);
                    model.insert(0, value);
                }
                ListOp::PushBack(value) => {
                    list.push_back(value);
                    model.push(value);
                }
                ListOp::Insert(value, index) => {
                    let index = index % (model.len() + 1);
                    list.insert(value, index);
                    model.insert(index, value);
                }
                ListOp::Remove(index) => {
                    if model.is_empty() {
                        continue;
                    }
                    let index = index % model.len();
                    prop_assert_eq!(list.remove(index), model.remove(index));
                }
                ListOp::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.pop_front(), expected);
                }
            }
            prop_assert_eq!(list.len(), model.len());
        }
        prop_assert_eq!(list, model);
    }
}
