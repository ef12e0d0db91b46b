//! Interactive input handling for CLI prompts

use crate::{Error, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What the user chose from the interactive lookup menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupChoice {
    Crs,
    Tiploc,
    Name,
    Describe,
}

/// Prompt the user to pick a lookup mode
pub fn prompt_lookup_choice() -> Result<LookupChoice> {
    println!();
    println!("{}", "How would you like to look up a station?".bold());
    println!("  1. By CRS (3-alpha) code");
    println!("  2. By TIPLOC code");
    println!("  3. By name");
    println!("  9. Explain the station code systems");
    println!();

    let input = prompt_line("Enter choice (1/2/3/9): ")?;

    match input.as_str() {
        "1" => Ok(LookupChoice::Crs),
        "2" => Ok(LookupChoice::Tiploc),
        "3" => Ok(LookupChoice::Name),
        "9" => Ok(LookupChoice::Describe),
        other => {
            println!(
                "{}",
                format!("Invalid choice '{other}'. Please enter 1, 2, 3, or 9.").yellow()
            );
            prompt_lookup_choice()
        }
    }
}

/// Read one trimmed line from stdin after printing a prompt
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout", e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input", e))?;

    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation with a default
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    let options = if default_yes { "[Y/n]" } else { "[y/N]" };
    let input = prompt_line(&format!("{message} {options}: "))?;

    match input.to_lowercase().as_str() {
        "" => Ok(default_yes),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => {
            println!(
                "{}",
                format!("Invalid input '{other}'. Please enter 'y' or 'n'.").yellow()
            );
            prompt_confirmation(message, default_yes)
        }
    }
}

/// Prompt the user to pick one entry from a numbered list of `count` items
///
/// Items are presented to the user 1-based; the returned index is 0-based.
pub fn prompt_index_selection(count: usize) -> Result<usize> {
    if count == 0 {
        return Err(Error::invalid_input("No entries to select from"));
    }

    let input = prompt_line(&format!("Enter selection (1-{count}): "))?;

    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Ok(n - 1),
        _ => {
            println!(
                "{}",
                format!("Invalid selection '{input}'. Please enter a number between 1 and {count}.")
                    .yellow()
            );
            prompt_index_selection(count)
        }
    }
}
