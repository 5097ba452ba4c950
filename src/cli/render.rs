//! Console rendering: the customer table, statistics block and message
//! output colored by level.

use clientele::api::{CmdMessage, MessageLevel};
use clientele::model::Customer;
use clientele::store::Statistics;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 20;
const EMAIL_WIDTH: usize = 25;
const PHONE_WIDTH: usize = 12;
const COMPANY_WIDTH: usize = 15;
const CATEGORY_WIDTH: usize = 10;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("  {}", message.content.dimmed()),
            MessageLevel::Success => println!("  {}", message.content.green()),
            MessageLevel::Warning => println!("  {}", message.content.yellow()),
            MessageLevel::Error => println!("  {}", message.content.red()),
        }
    }
}

pub fn print_table(customers: &[Customer]) {
    let header = table_row(
        "ID",
        "NAME",
        "EMAIL",
        "PHONE",
        "COMPANY",
        "CATEGORY",
    );
    println!("  {}", header.bold());
    println!("  {}", "-".repeat(header.width()));
    for customer in customers {
        println!("  {}", record_row(customer));
    }
    println!("  Total: {} customer(s)", customers.len());
}

pub fn print_record(customer: &Customer) {
    println!("  {}", record_row(customer));
}

pub fn print_statistics(stats: &Statistics) {
    println!("  Total customers:  {}", stats.total);
    println!("  {}", "-".repeat(28));
    println!("  Particulares:     {}", stats.particulares);
    println!("  Empresas:         {}", stats.empresas);
    println!("  VIP:              {}", stats.vips);
    if stats.unrecognized > 0 {
        println!(
            "  {}",
            format!(
                "{} record(s) have an unrecognized category and are not counted above.",
                stats.unrecognized
            )
            .yellow()
        );
    }
    if stats.last_assigned_id == 0 {
        println!("  Last assigned id: none");
    } else {
        println!("  Last assigned id: {}", stats.last_assigned_id);
    }
    if stats.total == 0 {
        println!("  {}", "The store is empty. Add customers to see more.".dimmed());
    }
}

fn record_row(customer: &Customer) -> String {
    table_row(
        &customer.id.to_string(),
        &customer.name,
        &customer.email,
        &customer.phone,
        &customer.company,
        customer.category.as_str(),
    )
}

fn table_row(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    company: &str,
    category: &str,
) -> String {
    format!(
        "| {} | {} | {} | {} | {} | {} |",
        fit(id, ID_WIDTH),
        fit(name, NAME_WIDTH),
        fit(email, EMAIL_WIDTH),
        fit(phone, PHONE_WIDTH),
        fit(company, COMPANY_WIDTH),
        fit(category, CATEGORY_WIDTH),
    )
}

/// Pads or truncates to an exact display width, so the table stays aligned
/// for values with wide characters.
fn fit(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_to_exact_width() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abc", 5).width(), 5);
    }

    #[test]
    fn fit_truncates_with_ellipsis() {
        let fitted = fit("abcdefgh", 5);
        assert_eq!(fitted.width(), 5);
        assert!(fitted.ends_with('…'));
    }

    #[test]
    fn fit_handles_wide_characters() {
        assert_eq!(fit("你好", 6).width(), 6);
    }
}
