//! # Language Fundamentals in Rust
//!
//! This crate collects five small, independent teaching examples:
//!
//! ## Pattern 1: Built-in Value Categories
//! - A closed `Value` union over the basic categories
//! - Runtime category inspection with `kind()`
//! - `From` conversions from native types
//!
//! ## Pattern 2: Arithmetic Operators
//! - Real and floor division (toward negative infinity)
//! - Exponentiation, addition
//! - Approximate float equality
//!
//! ## Pattern 3: Single-Level Inheritance
//! - A base capability as a trait (`Animal`)
//! - Two concrete variants overriding one method
//!
//! ## Pattern 4: Regular Expression Practice
//! - match / search / find-all / split over a compiled pattern
//!
//! ## Pattern 5: Date Countdown
//! - Calendar-unit difference to a fixed kickoff timestamp
//! - Rendering that drops zero-valued units
//!
//! Each pattern has a runnable demo: `cargo run --bin <name>`

pub mod animals;
pub mod countdown;
pub mod operators;
pub mod patterns;
pub mod values;
