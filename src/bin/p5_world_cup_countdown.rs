//! Pattern 5: Date Countdown
//! Example: Counting Down to World Cup 2026
//!
//! Run with: cargo run --bin p5_world_cup_countdown

use chrono::Local;
use colored::Colorize;
use fundamentals_examples::countdown::{countdown_to_kickoff, KICKOFF};

fn main() {
    println!("{}", "=== Countdown to World Cup 2026 ===".bold());

    let kickoff_line = KICKOFF.format("%A, %B %d, %Y at %I:%M %p %z");
    println!("World Cup 2026 will start on: {}", kickoff_line);

    let now = Local::now().fixed_offset();
    let remaining = countdown_to_kickoff(now);
    if remaining.is_zero() {
        println!("{}", "Kickoff is now!".green().bold());
    } else {
        println!("Countdown to World Cup 2026: {}", remaining.render().green());
    }
}
