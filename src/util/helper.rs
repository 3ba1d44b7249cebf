// src/util/helper.rs
use std::io::{self, BufRead, Write};

/// Interactive confirmation prompt
pub fn confirm(prompt: &str) -> bool {
    print!("{} (y/N): ", prompt);
    io::stdout().flush().ok();

    let mut user_input = String::new();
    if io::stdin().lock().read_line(&mut user_input).is_err() {
        return false;
    }

    matches!(user_input.trim().to_lowercase().as_str(), "y" | "yes")
}
