//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rust_decimal::Decimal;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Color an account status for terminal display
pub fn status_label(status: &str) -> String {
    match status {
        "active" => status.green().to_string(),
        "pending" => status.cyan().to_string(),
        "frozen" => status.yellow().to_string(),
        "closed" => status.dimmed().to_string(),
        _ => status.to_string(),
    }
}

/// Format an amount with two decimal places and its currency code
pub fn format_amount(amount: &Decimal, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(&Decimal::new(482347, 2), "USD"), "4823.47 USD");
        assert_eq!(format_amount(&Decimal::new(-5, 0), "EUR"), "-5.00 EUR");
    }
}
