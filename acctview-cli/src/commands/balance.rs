//! Balance command - show the latest balance of an account

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(account_id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let balance = ctx.account_service.get_balance(account_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&balance)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Balance for".bold(),
        balance.account_id.to_string().bold()
    );
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["", "Amount"]);
    table.add_row(vec![
        "Posted".to_string(),
        output::format_amount(&balance.posted, &balance.currency),
    ]);
    table.add_row(vec![
        "Pending".to_string(),
        output::format_amount(&balance.pending, &balance.currency),
    ]);
    table.add_row(vec![
        "Available".to_string(),
        output::format_amount(&balance.available, &balance.currency),
    ]);
    println!("{}", table);
    println!("As of {}", balance.as_of.format("%Y-%m-%d %H:%M:%S UTC"));

    Ok(())
}
