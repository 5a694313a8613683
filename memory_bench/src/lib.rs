use raii_containers::{DynamicArray, SinglyLinkedList};

/// One heap allocation per element: every value gets its own node.
pub fn create_linked_list(size: usize) -> SinglyLinkedList<i32> {
    let mut list = SinglyLinkedList::new();
    for i in 0..size {
        list.push_front(i as i32);
    }
    list
}

/// Grows from empty, so the buffer is reallocated `log2(size)` times.
pub fn create_dynamic_array(size: usize) -> DynamicArray<i32> {
    let mut array = DynamicArray::new();
    for i in 0..size {
        array.push(i as i32);
    }
    array
}

/// A single allocation sized up front.
pub fn create_exact_dynamic_array(size: usize) -> DynamicArray<i32> {
    let mut array = DynamicArray::with_capacity(size);
    for i in 0..size {
        array.push(i as i32);
    }
    array
}

pub fn create_vec_allocation(size: usize) -> Vec<i32> {
    let mut vec = Vec::with_capacity(size);
    for i in 0..size {
        vec.push(i as i32);
    }
    vec
}

/// Number of elements relocated by growth while pushing `pushes` values
/// into an empty [`DynamicArray`].
pub fn relocated_elements(pushes: usize) -> usize {
    let mut array = DynamicArray::new();
    let mut relocated = 0;
    for i in 0..pushes {
        if array.reserved() == 0 {
            relocated += array.len();
        }
        array.push(i);
    }
    relocated
}
