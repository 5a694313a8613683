pub mod cli;
pub mod demo;

// Re-export the containers so the driver and the integration tests share one path
pub use raii_containers;
pub use raii_containers::{
    dynamic_array, singly_linked_list, AllocError, DynamicArray, SinglyLinkedList,
    SinglyLinkedNode,
};
