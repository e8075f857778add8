use crate::error::{CliError, Result};
use std::io::{self, BufRead, Write};

/// Reads one trimmed line from stdin after printing `message`.
pub fn read_line(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(CliError::Argument("No input provided.".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Keeps asking until the user enters a number. Used when a remote lookup
/// comes back without a value and interactive entry is allowed.
pub fn read_f64(label: &str) -> Result<f64> {
    loop {
        let answer = read_line(&format!(
            "⚠️ {label} not found. Please enter {label} manually: "
        ))?;
        match answer.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}
