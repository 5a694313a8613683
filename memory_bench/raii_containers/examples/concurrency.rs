use raii_containers::{DynamicArray, SinglyLinkedList};
use std::thread;

fn main() {
    println!("--- Cross-thread Ownership Transfer Example ---");
    let mut arr = DynamicArray::new();
    for i in 0..10 {
        arr.push(i);
    }
    let list: SinglyLinkedList<i32> = arr.iter().copied().collect();

    println!("Original array (thread main): {:?}", arr);

    // Move ownership to another thread
    let handle = thread::spawn(move || {
        println!("Array in new thread: {:?}", arr);
        println!("List in new thread: {:?}", list);
        arr.push(100);
        (arr, list)
    });

    let (arr, list) = handle.join().expect("worker thread panicked");
    println!("Array back in main thread: {:?}", arr);
    println!("List back in main thread: {:?}", list);
}
