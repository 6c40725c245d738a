//! Pattern 4: Regular Expression Practice
//! Example: Match, Search, Find-All, and Split
//!
//! Run with: cargo run --bin p4_regex_practice

use fundamentals_examples::patterns::PatternMatcher;

fn main() {
    let digits = PatternMatcher::new(r"\d+").expect("pattern compiles");

    println!("=== Match (anchored at the start) ===");
    println!("'123abc' -> {:?}", digits.match_start("123abc"));
    println!("'abc123' -> {:?}", digits.match_start("abc123"));

    println!("\n=== Search (anywhere) ===");
    println!("'abc123def' -> {:?}", digits.search("abc123def"));
    println!("'abcdef'    -> {:?}", digits.search("abcdef"));

    println!("\n=== Find All ===");
    println!("'123abc456def789' -> {:?}", digits.find_all("123abc456def789"));
    println!("'abcdef'          -> {:?}", digits.find_all("abcdef"));

    println!("\n=== Split ===");
    println!("'123abc456def789' -> {:?}", digits.split("123abc456def789"));
    println!("'abcdef'          -> {:?}", digits.split("abcdef"));

    println!("\n=== Malformed Patterns Fail Up Front ===");
    match PatternMatcher::new(r"(unclosed") {
        Ok(_) => println!("unexpectedly compiled"),
        Err(e) => println!("error: {}", e),
    }
}
