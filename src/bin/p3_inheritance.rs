//! Pattern 3: Single-Level Inheritance
//! Example: A Base Capability with Two Overriding Variants
//!
//! Run with: cargo run --bin p3_inheritance

use fundamentals_examples::animals::{Animal, Cat, Dog};

fn introduce(animal: &dyn Animal) {
    println!("{} says {}", animal.name(), animal.make_sound());
}

fn main() {
    println!("=== Concrete Variants ===");
    let dog = Dog::new("Buddy");
    let cat = Cat::new("Whiskers");
    println!("{}", dog.name()); // Output: Buddy
    println!("{}", dog.make_sound()); // Output: Woof!
    println!("{}", cat.make_sound()); // Output: Meow!

    println!("\n=== Shared Interface ===");
    introduce(&dog);
    introduce(&cat);

    println!("\n=== Heterogeneous Collection ===");
    let shelter: Vec<Box<dyn Animal>> = vec![
        Box::new(Dog::new("Wang")),
        Box::new(Cat::new("Mao")),
        Box::new(Dog::new("Rex")),
    ];
    for animal in &shelter {
        introduce(animal.as_ref());
    }
}
