use raii_containers::{DynamicArray, SinglyLinkedList};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Tracked(usize, Arc<AtomicUsize>);

impl Drop for Tracked {
    fn drop(&mut self) {
        println!("Dropping element {}", self.0);
        self.1.fetch_add(1, Ordering::SeqCst);
    }
}

fn main() {
    println!("--- RAII Teardown Example ---");
    let drop_count = Arc::new(AtomicUsize::new(0));

    {
        let mut arr = DynamicArray::new();
        for i in 0..3 {
            arr.push(Tracked(i, drop_count.clone()));
        }
        println!("Array created with 3 elements, dropping in reverse:");
        // Scope ends here, arr is dropped
    }
    assert_eq!(drop_count.load(Ordering::SeqCst), 3);

    {
        let mut list = SinglyLinkedList::new();
        for i in 3..6 {
            list.push_back(Tracked(i, drop_count.clone()));
        }
        let mut moved = list.take();
        println!("List moved out, source len: {}", list.len());
        println!("Removing middle node:");
        moved.remove(1);
        println!("Dropping the rest front to back:");
    }

    println!("Total elements dropped: {}", drop_count.load(Ordering::SeqCst));
    assert_eq!(drop_count.load(Ordering::SeqCst), 6);
}
