/// Builds a [`DynamicArray`](crate::DynamicArray) from a literal sequence or
/// from a fill value and a count, allocating exactly as many slots as
/// elements.
///
/// ```
/// use raii_containers::dynamic_array;
///
/// let digits = dynamic_array![1, 2, 3];
/// assert_eq!(digits, [1, 2, 3]);
/// assert_eq!(digits.reserved(), 0);
///
/// let ones = dynamic_array![1u8; 4];
/// assert_eq!(ones, [1, 1, 1, 1]);
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::DynamicArray::with_len($len, $value)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($item),+])
    };
}

/// Builds a [`SinglyLinkedList`](crate::SinglyLinkedList) from a literal
/// sequence. An empty invocation yields an empty list.
///
/// ```
/// use raii_containers::singly_linked_list;
///
/// let list = singly_linked_list![1, 2, 3];
/// assert_eq!(list, [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! singly_linked_list {
    () => {
        $crate::SinglyLinkedList::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::SinglyLinkedList::from([$($item),+])
    };
}
