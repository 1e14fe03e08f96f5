//! Typed console prompts.
//!
//! Every helper re-prompts on invalid input and only ever returns a fully
//! parsed value, so a malformed entry can never leave an order or the
//! catalog half-updated.

use std::io::{self, Write as _};

/// Print `prompt` and read one trimmed line from stdin.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Read a line, re-prompting until it is non-empty.
pub fn read_nonempty(prompt: &str) -> io::Result<String> {
    loop {
        let line = read_line(prompt)?;
        if !line.is_empty() {
            return Ok(line);
        }
        println!("A value is required.");
    }
}

/// Read a non-negative integer quantity.
pub fn read_u32(prompt: &str) -> io::Result<u32> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("'{line}' is not a valid quantity."),
        }
    }
}

/// Read a non-negative amount.
pub fn read_amount(prompt: &str) -> io::Result<f64> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
            _ => println!("'{line}' is not a valid amount."),
        }
    }
}

/// Ask a yes/no question; `y`/`Y` means yes.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let line = read_line(prompt)?;
    Ok(line.eq_ignore_ascii_case("y"))
}

/// Pause until the user presses Enter.
pub fn press_enter_to_continue() -> io::Result<()> {
    read_line("\nPress Enter to continue...")?;
    Ok(())
}
