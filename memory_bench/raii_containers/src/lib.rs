//! Two hand-rolled sequence containers.
//!
//! - [`DynamicArray`]: contiguous storage from the global allocator that
//!   doubles when full and drops its elements back to front.
//! - [`SinglyLinkedList`]: a chain of boxed [`SinglyLinkedNode`]s, each
//!   owning the next.
//!
//! Copying is [`Clone`]; a copy never shares storage with its source.
//! Moving out with `take`/`move_from` leaves the source empty.
//! Indexing is bounds-checked and panics on an out-of-range index; the
//! array still offers the unchecked path through `get_unchecked`.

mod macros;

pub mod dynamic_array;
pub mod error;
pub mod growth;
pub mod singly_linked_list;

pub use dynamic_array::DynamicArray;
pub use error::AllocError;
pub use singly_linked_list::{SinglyLinkedList, SinglyLinkedNode};

#[cfg(test)]
mod tests;
