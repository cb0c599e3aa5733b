use tiny_std::collections::adapters::{PriorityQueue, Stack};
use tiny_std::collections::contiguous::Vector;
use tiny_std::ptr::shared::SharedPtr;
use tiny_std::ptr::unique::UniquePtr;

#[derive(Debug, Clone)]
struct MyZST;

impl Drop for MyZST {
    fn drop(&mut self) {
        println!("Dropped MyZST");
    }
}

fn main() {
    println!("\n[Vector]\n");

    let mut vec = Vector::<u8>::new();
    println!("{:?}", vec);

    for i in 0..8 {
        vec.push(i);
        println!("{:?}", vec);
    }

    vec.insert(2, 100);
    println!("{:?}", vec);
    println!("{:?}, {:?}", vec.remove(3), vec);

    vec.reserve(40);
    println!("{:?}", vec);
    vec.clear();
    println!("{:?}", vec);

    println!("ZST Testing");

    let mut vec = Vector::<MyZST>::new();
    for _ in 0..3 {
        vec.push(MyZST);
    }
    println!("{:?}", vec);
    drop(vec);

    println!("\n[Adapters]\n");

    let mut stack: Stack<_> = ["a", "b", "c"].into_iter().collect();
    println!("{:?}", stack);
    println!("{:?}, {:?}", stack.pop(), stack.top());

    let mut queue: PriorityQueue<_> = [5, 3, 8, 1].into_iter().collect();
    while let Some(top) = queue.pop() {
        print!("{top} ");
    }
    println!();

    println!("\n[UniquePtr]\n");

    let mut unique = UniquePtr::new(MyZST);
    println!("{:?}", unique);
    let moved = unique.take();
    println!("{:?}, {:?}", unique, moved);
    drop(moved);

    println!("\n[SharedPtr]\n");

    let shared = SharedPtr::new(String::from("shared"));
    let mut alias = shared.clone();
    println!("{:?}", shared);

    let taken = alias.take();
    println!("{:?}, {:?}, {:?}", shared, alias, taken);
    drop(taken);
    println!("{}: {:?}", shared, shared.use_count());
}
