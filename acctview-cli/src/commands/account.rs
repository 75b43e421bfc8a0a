//! Account command - show a single account

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::get_context;
use crate::output;

pub fn run(id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let account = ctx.account_service.get_account(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&account)?);
        return Ok(());
    }

    println!("{}", "Account".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["ID".to_string(), account.id.to_string()]);
    table.add_row(vec!["Owner".to_string(), account.owner_id.to_string()]);
    table.add_row(vec!["Currency".to_string(), account.currency.clone()]);
    table.add_row(vec!["Status".to_string(), output::status_label(&account.status)]);
    table.add_row(vec!["Created".to_string(), account.created_at.to_rfc3339()]);
    table.add_row(vec!["Updated".to_string(), account.updated_at.to_rfc3339()]);
    println!("{}", table);

    if !account.metadata.is_empty() {
        println!();
        println!("{}", "Metadata".bold());
        for (key, value) in &account.metadata {
            match value.as_str() {
                Some(text) => println!("  {}: {}", key, text),
                None => println!("  {}: {}", key, value),
            }
        }
    }

    Ok(())
}
