//! Status command - directory summary

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::shell::Shell;
use crate::output;

pub fn run(shell: &Shell, json: bool) -> Result<()> {
    let status = shell.ctx.status_service.get_status()?;

    if json {
        return output::print_ok(serde_json::json!({
            "directory": status,
            "session": shell.ctx.current_user(),
            "sort": shell.ctx.sort(),
        }));
    }

    println!("{}", "Portfolio Directory Status".bold());
    println!();

    let dash = || "-".to_string();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Portfolios".to_string(), status.total_portfolios.to_string()]);
    table.add_row(vec!["With photos".to_string(), status.total_with_photos.to_string()]);
    table.add_row(vec![
        "Mean GPA".to_string(),
        status.gpa.mean.map(|g| format!("{:.2}", g)).unwrap_or_else(dash),
    ]);
    table.add_row(vec![
        "GPA range".to_string(),
        match (status.gpa.min, status.gpa.max) {
            (Some(min), Some(max)) => format!("{:.2} - {:.2}", min, max),
            _ => dash(),
        },
    ]);
    println!("{}", table);
    println!();

    if !status.majors.is_empty() {
        println!("{}", "Majors".bold());
        for m in &status.majors {
            println!("  • {} ({})", m.major, m.count);
        }
        println!();
    }

    let sort = shell.ctx.sort();
    println!("Listing order: {} {}", sort.key, sort.direction.as_str());
    match shell.ctx.current_user() {
        Some(identity) => println!("Signed in as {} ({})", identity.display_name, identity.role),
        None => println!("Not logged in"),
    }

    Ok(())
}
