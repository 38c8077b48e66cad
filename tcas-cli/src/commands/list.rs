//! List and sort commands - the teacher's portfolio table

use anyhow::Result;
use colored::Colorize;

use tcas_core::{Command, OperationResult, Outcome, SortKey};

use super::shell::Shell;
use crate::output;

pub fn run(shell: &mut Shell, json: bool) -> Result<()> {
    let sort = shell.ctx.sort();

    if json {
        let result = shell.ctx.listing().map(|records| {
            serde_json::json!({
                "sort": sort,
                "portfolios": records,
            })
        });
        return output::print_json(&OperationResult::from(result));
    }

    let records = shell.ctx.listing()?;

    if !shell.is_teacher() {
        output::hint("This is the teacher view. Use `login --role teacher` to switch roles.");
    }

    println!("{}", "TCAS Portfolio Applicants".bold());

    if records.is_empty() {
        println!("No portfolios submitted yet.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec![
        "ID".to_string(),
        output::sort_header("Name", SortKey::FirstName, sort),
        output::sort_header("GPA", SortKey::Gpa, sort),
        output::sort_header("Major", SortKey::Major, sort),
        "University".to_string(),
        "Photos".to_string(),
    ]);

    for record in &records {
        table.add_row(vec![
            record.id.clone(),
            record.full_name(),
            output::gpa_badge(record.gpa),
            record.major.clone(),
            record.university.clone(),
            record.photos.len().to_string(),
        ]);
    }

    println!("{}", table);
    output::hint("`sort <gpa|major|firstName>` to reorder, `show <id>` for details");
    Ok(())
}

/// Header click: same column flips direction, a new column starts descending
pub fn run_sort(shell: &mut Shell, key: SortKey, json: bool) -> Result<()> {
    if let Outcome::SortChanged(sort) = shell.ctx.dispatch(Command::SetSort(key))? {
        if !json {
            output::info(&format!("Sorted by {} {}", sort.key, sort.direction.as_str()));
        }
    }
    run(shell, json)
}
