//! Accounts command - list accounts one page at a time

use std::collections::HashMap;

use anyhow::Result;
use colored::Colorize;

use acctview_core::domain::pagination::{LIMIT_PARAM, OFFSET_PARAM};
use acctview_core::services::STATUS_PARAM;

use super::get_context;
use crate::output;

pub fn run(
    limit: Option<String>,
    offset: Option<String>,
    status: Option<String>,
    json: bool,
) -> Result<()> {
    // Raw strings go straight into the query map so the parser sees exactly
    // what an HTTP client would have sent
    let mut query = HashMap::new();
    if let Some(limit) = limit {
        query.insert(LIMIT_PARAM.to_string(), limit);
    }
    if let Some(offset) = offset {
        query.insert(OFFSET_PARAM.to_string(), offset);
    }
    if let Some(status) = status {
        query.insert(STATUS_PARAM.to_string(), status);
    }

    let ctx = get_context()?;
    let page = ctx.account_service.list_accounts(&query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        output::info("No accounts on this page");
    } else {
        let mut table = output::create_table();
        table.set_header(vec!["ID", "Owner", "Currency", "Status", "Created"]);
        for account in &page.items {
            table.add_row(vec![
                account.id.to_string(),
                account.owner_id.to_string(),
                account.currency.clone(),
                output::status_label(&account.status),
                account.created_at.format("%Y-%m-%d").to_string(),
            ]);
        }
        println!("{}", table);
    }

    let first = if page.items.is_empty() { page.offset } else { page.offset + 1 };
    let last = page.offset + page.items.len() as u64;
    println!(
        "Showing {}-{} of {} (limit {})",
        first, last, page.total, page.limit
    );
    if page.has_more {
        println!(
            "{}",
            format!("Next page: --offset {}", last).dimmed()
        );
    }

    Ok(())
}
