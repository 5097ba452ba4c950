//! Input prompts for the menu session.
//!
//! Every retry loop lives here; the rules themselves come from
//! [`clientele::validate`] so the core never re-implements prompting.

use clientele::error::{CrmError, Result};
use clientele::model::Category;
use clientele::validate;
use std::io::{self, BufRead, Write};

/// Prints a prompt and reads one trimmed line. `None` means end of input.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut buf = String::new();
    let bytes = io::stdin().lock().read_line(&mut buf)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn read_line_or_eof(prompt: &str) -> Result<String> {
    read_line(prompt)?.ok_or_else(|| CrmError::Input("unexpected end of input".to_string()))
}

/// Re-prompts until the value passes the validator and is safe for the
/// line format.
pub fn required<F>(label: &str, validator: F, hint: &str) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    loop {
        let value = read_line_or_eof(&format!("  {}: ", label))?;
        if !validate::safe_field(&value) {
            println!("  [!] The value must not contain ';'.");
        } else if !validator(&value) {
            println!("  [!] {}", hint);
        } else {
            return Ok(value);
        }
    }
}

/// Optional field: blank means "no value". Non-blank values still must be
/// safe for the line format.
pub fn optional(label: &str) -> Result<Option<String>> {
    loop {
        let value = read_line_or_eof(&format!("  {}: ", label))?;
        if value.is_empty() {
            return Ok(None);
        }
        if !validate::safe_field(&value) {
            println!("  [!] The value must not contain ';'.");
            continue;
        }
        return Ok(Some(value));
    }
}

/// Fixed-choice category menu. An out-of-range choice falls back to
/// `particular` with a notice, same as the create form always has.
pub fn category() -> Result<Category> {
    println!("  Category:");
    println!("    1. Particular");
    println!("    2. Empresa");
    println!("    3. VIP");
    let choice = read_line_or_eof("  Choice (1-3): ")?;

    Ok(match choice.as_str() {
        "1" => Category::Particular,
        "2" => Category::Empresa,
        "3" => Category::Vip,
        _ => {
            println!("  [!] Invalid choice, defaulting to 'particular'.");
            Category::Particular
        }
    })
}

/// Numeric id prompt with retry on non-numeric input.
pub fn id(label: &str) -> Result<u32> {
    loop {
        let value = read_line_or_eof(&format!("  {}: ", label))?;
        match value.parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("  [!] '{}' is not a valid number.", value),
        }
    }
}

/// y/n confirmation; anything but "y"/"yes" counts as no.
pub fn confirm(label: &str) -> Result<bool> {
    let answer = read_line_or_eof(&format!("  {} (y/n): ", label))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
