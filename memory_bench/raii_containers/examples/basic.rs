use raii_containers::{dynamic_array, DynamicArray};

fn main() {
    println!("--- Growth Example ---");
    let mut arr = DynamicArray::new();

    for i in 1..=9 {
        arr.push(i * 10);
        println!(
            "Pushed: {}, len: {}, cap: {}, reserved: {}",
            i * 10,
            arr.len(),
            arr.capacity(),
            arr.reserved()
        );
    }

    println!("Elements: {:?}", &arr[..]);

    let copy = arr.clone();
    println!("Copy: len {}, cap {} (sized to len)", copy.len(), copy.capacity());

    let joined = &dynamic_array![1, 2, 3] + &dynamic_array![4, 5];
    println!("Joined: {:?}", joined);

    while let Some(val) = arr.pop() {
        println!("Popped: {}, len: {}", val, arr.len());
    }
}
