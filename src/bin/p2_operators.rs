//! Pattern 2: Arithmetic Operators
//! Example: Division, Exponentiation, and Approximate Equality
//!
//! Run with: cargo run --bin p2_operators

use fundamentals_examples::operators::{add, approx_equal, divide, floor_divide, power};

fn main() {
    println!("=== Real Division ===");
    println!("divide(5, 2)  = {:?}", divide(5.0, 2.0));
    println!("divide(6, 2)  = {:?}", divide(6.0, 2.0));
    match divide(5.0, 0.0) {
        Ok(q) => println!("divide(5, 0)  = {}", q),
        Err(e) => println!("divide(5, 0)  -> error: {}", e),
    }

    println!("\n=== Floor Division (toward negative infinity) ===");
    println!("floor_divide(5, 2)   = {:?}", floor_divide(5, 2));
    println!("floor_divide(10, -4) = {:?}", floor_divide(10, -4));
    println!("10 / -4 truncated would be {}", 10 / -4);

    println!("\n=== Exponentiation ===");
    println!("power(2, 3)  = {}", power(2.0, 3.0));
    println!("power(2, -1) = {}", power(2.0, -1.0));
    println!("power(9, 0.5) = {}", power(9.0, 0.5));

    println!("\n=== Float Addition and Approximate Equality ===");
    let sum = add(1.1, 2.2);
    println!("add(1.1, 2.2) = {}", sum);
    println!("sum == 3.3 exactly: {}", sum == 3.3);
    println!("approx_equal(sum, 3.3): {}", approx_equal(sum, 3.3));

    println!("\n=== Key Points ===");
    println!("1. Division by zero is an explicit error, never an infinity");
    println!("2. Floor division rounds down, truncation rounds toward zero");
    println!("3. Compare floats with a tolerance, not with ==");
}
