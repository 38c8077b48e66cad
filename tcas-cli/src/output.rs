//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use serde::Serialize;

use rust_decimal::Decimal;
use tcas_core::{OperationResult, SortConfig, SortDirection, SortKey, ValidationErrors};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Print a dimmed hint
pub fn hint(msg: &str) {
    println!("{}", msg.dimmed());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Pretty-print any serializable value
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `--json` output for a successful command
pub fn print_ok<T: Serialize>(data: T) -> anyhow::Result<()> {
    print_json(&OperationResult::ok(data))
}

/// `--json` output for a rejected form
pub fn print_rejected(errors: &ValidationErrors) -> anyhow::Result<()> {
    print_json(&OperationResult::<()>::rejected(errors))
}

/// GPAs from this value up get the green badge
pub const HIGH_GPA: Decimal = Decimal::from_parts(35, 0, 0, false, 1);

/// GPA with two decimals, green from 3.50 up, yellow below
pub fn gpa_badge(gpa: Decimal) -> String {
    let text = format!("{:.2}", gpa);
    if gpa >= HIGH_GPA {
        text.green().to_string()
    } else {
        text.yellow().to_string()
    }
}

/// Column header with an arrow on the active sort column
pub fn sort_header(label: &str, key: SortKey, sort: SortConfig) -> String {
    if sort.key != key {
        return label.to_string();
    }
    match sort.direction {
        SortDirection::Asc => format!("{} ▲", label),
        SortDirection::Desc => format!("{} ▼", label),
    }
}

/// One line per offending field, in form order
pub fn validation_errors(errors: &ValidationErrors) {
    error(&format!(
        "Please fix {} field{}:",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    ));
    for (field, issue) in errors.iter() {
        eprintln!("  {} {} ({})", format!("{}:", field).bold(), issue, issue.key().dimmed());
    }
}
