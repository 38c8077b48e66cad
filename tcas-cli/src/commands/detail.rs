//! Detail view commands - show one portfolio and step through its photos

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tcas_core::services::DetailView;
use tcas_core::{Command, LogEvent, Outcome};

use super::shell::Shell;
use crate::output;

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn print_detail(detail: &DetailView) {
    let r = &detail.record;

    println!("{}", r.full_name().bold());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let gpa = output::gpa_badge(r.gpa);
    let rows = [
        ("School", r.school.as_str()),
        ("GPA", gpa.as_str()),
        ("Address", r.address.as_str()),
        ("Phone", r.phone.as_str()),
        ("Major", r.major.as_str()),
        ("University", r.university.as_str()),
        ("Skills", or_dash(&r.skills)),
        ("Reason", or_dash(&r.reason)),
    ];
    for (label, value) in rows {
        table.add_row(vec![label, value]);
    }
    println!("{}", table);

    print_photo(detail);
}

fn print_photo(detail: &DetailView) {
    if let (Some(handle), Some(label)) = (detail.current_photo(), detail.cursor.position_label()) {
        println!("{} {}", label.cyan(), handle);
        if detail.cursor.len() > 1 {
            output::hint("`next` / `prev` to browse photos, `close` to go back");
        }
    }
}

pub fn run_show(shell: &mut Shell, id: String, json: bool) -> Result<()> {
    let outcome = shell.ctx.dispatch(Command::Open(id))?;

    if let Outcome::NotFound(_) = &outcome {
        shell.log(LogEvent::new("detail_not_found").with_command("show"));
    }

    if json {
        return output::print_ok(shell.ctx.detail());
    }

    match shell.ctx.detail() {
        Some(detail) => print_detail(detail),
        None => output::warning("No portfolio with that id."),
    }
    Ok(())
}

pub fn run_photo(shell: &mut Shell, forward: bool, json: bool) -> Result<()> {
    let command = if forward { Command::NextPhoto } else { Command::PrevPhoto };
    let outcome = shell.ctx.dispatch(command)?;

    if json {
        return output::print_ok(&outcome);
    }

    match shell.ctx.detail() {
        None => println!("No portfolio is open. Use `show <id>` first."),
        Some(detail) if detail.cursor.is_empty() => println!("This portfolio has no photos."),
        Some(detail) => print_photo(detail),
    }
    Ok(())
}

pub fn run_close(shell: &mut Shell) -> Result<()> {
    shell.ctx.dispatch(Command::Close)?;
    Ok(())
}
