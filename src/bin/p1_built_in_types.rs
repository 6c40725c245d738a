//! Pattern 1: Built-in Value Categories
//! Example: Inspecting Values and Their Categories
//!
//! Run with: cargo run --bin p1_built_in_types

use fundamentals_examples::values::{category_table, Inspected, Value};

fn main() {
    println!("=== Inspecting Single Values ===");
    let samples = vec![
        Inspected::new(37),
        Inspected::new("Hello, Mars!"),
        Inspected::new(2.5),
        Inspected::new(true),
        Inspected::new(vec![1u8, 2, 3]),
        Inspected::default(),
    ];
    for inspected in &samples {
        println!("{:?} has category '{}'", inspected.value(), inspected.kind());
    }

    println!("\n=== Values Stay Readable After Construction ===");
    let held = Inspected::new(77);
    println!("Held value: {:?}", held.value());
    println!("Reported kind: {}", held.kind());

    println!("\n=== Absent Values ===");
    let missing = Value::from(Option::<i64>::None);
    let present = Value::from(Some(42));
    println!("From None: {:?} ({})", missing, missing.kind());
    println!("From Some(42): {:?} ({})", present, present.kind());

    println!("\n=== Built-in Categories ===");
    for (category, types) in category_table() {
        println!("{:<10} {}", format!("{}:", category), types);
    }
}
