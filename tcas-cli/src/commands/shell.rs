//! Interactive shell
//!
//! The portfolio directory only lives in memory, so everything happens in
//! one long-running session: each line is parsed as a command and applied
//! to a single `TcasContext`. When stdin is not a terminal, lines are read
//! as a script without prompts.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::io::BufRead;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use tcas_core::{EntryPoint, LogEvent, LoggingService, SortKey, TcasContext};

use super::session::LoginArgs;
use super::submit::SubmitArgs;
use super::{detail, get_context, get_logger, is_interactive, list, log_event, session, status, submit};
use crate::output;

const COMMANDS: &[&str] = &[
    "submit", "list", "sort", "show", "next", "prev", "close", "login", "logout", "whoami",
    "status", "help", "exit",
];

/// One shell line
#[derive(Parser, Debug)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Fill in a student portfolio (prompts when no fields are given)
    Submit(SubmitArgs),
    /// Show all portfolios in the current order
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        json: bool,
    },
    /// Sort by a column; repeating the same column flips the direction
    Sort {
        /// gpa, major or firstName
        #[arg(value_parser = parse_sort_key)]
        key: SortKey,
        #[arg(long)]
        json: bool,
    },
    /// Open one portfolio
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Next photo of the open portfolio
    Next {
        #[arg(long)]
        json: bool,
    },
    /// Previous photo of the open portfolio
    Prev {
        #[arg(long)]
        json: bool,
    },
    /// Close the open portfolio
    Close,
    /// Choose a role (no password check beyond length)
    Login(LoginArgs),
    Logout,
    /// Show the current role
    Whoami {
        #[arg(long)]
        json: bool,
    },
    /// Directory summary
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

fn parse_sort_key(s: &str) -> std::result::Result<SortKey, String> {
    s.parse()
}

/// State owned by one shell session
pub struct Shell {
    pub ctx: TcasContext,
    logger: Option<LoggingService>,
}

impl Shell {
    pub fn new(ctx: TcasContext, logger: Option<LoggingService>) -> Self {
        Self { ctx, logger }
    }

    /// Record an event tagged with the current role
    pub fn log(&self, mut event: LogEvent) {
        if let Some(identity) = self.ctx.current_user() {
            event = event.with_role(identity.role.as_str());
        }
        log_event(&self.logger, event);
    }

    pub fn is_teacher(&self) -> bool {
        self.ctx.current_user().map_or(false, |u| u.is_teacher())
    }

    fn prompt(&self) -> String {
        match self.ctx.current_user() {
            Some(identity) => format!("tcas ({}/{})> ", identity.display_name, identity.role),
            None => "tcas> ".to_string(),
        }
    }

    /// Run one line. Returns false when the shell should exit.
    pub fn execute_line(&mut self, line: &str) -> bool {
        let tokens = match split_line(line) {
            Ok(tokens) if tokens.is_empty() => return true,
            Ok(tokens) => tokens,
            Err(e) => {
                output::error(&e);
                return true;
            }
        };

        let parsed = match ShellLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                return true;
            }
        };

        if matches!(parsed.command, ShellCommand::Exit) {
            return false;
        }

        let name = tokens[0].clone();
        self.log(LogEvent::new("command_executed").with_command(&name));

        if let Err(e) = self.run(parsed.command) {
            self.log(
                LogEvent::new("command_failed")
                    .with_command(&name)
                    .with_error(e.to_string())
                    .with_error_details(format!("{:#}", e)),
            );
            output::error(&format!("{:#}", e));
        }
        true
    }

    fn run(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Submit(args) => submit::run(self, args),
            ShellCommand::List { json } => list::run(self, json),
            ShellCommand::Sort { key, json } => list::run_sort(self, key, json),
            ShellCommand::Show { id, json } => detail::run_show(self, id, json),
            ShellCommand::Next { json } => detail::run_photo(self, true, json),
            ShellCommand::Prev { json } => detail::run_photo(self, false, json),
            ShellCommand::Close => detail::run_close(self),
            ShellCommand::Login(args) => session::run_login(self, args),
            ShellCommand::Logout => session::run_logout(self),
            ShellCommand::Whoami { json } => session::run_whoami(self, json),
            ShellCommand::Status { json } => status::run(self, json),
            ShellCommand::Exit => Ok(()),
        }
    }
}

/// Split a line into words, honouring single quotes, double quotes and
/// backslash escapes
fn split_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Completion and hints for command names
struct ShellHelper;

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for ShellHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Borrowed(line)
    }
}

impl Validator for ShellHelper {}

fn run_interactive(shell: &mut Shell) -> Result<()> {
    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper));

    println!("{}", "=== TCAS69 Portfolio ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'submit' to add a portfolio, 'list' to browse, 'help' for all commands, 'exit' to quit."
            .bright_black()
    );
    println!();

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                if !shell.execute_line(&line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'exit' to quit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                output::error(&format!("Error: {:?}", err));
                break;
            }
        }
    }

    println!("{}", "Goodbye! Unsaved portfolios are discarded.".bright_green());
    Ok(())
}

fn run_script(shell: &mut Shell) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if !shell.execute_line(trimmed) {
            break;
        }
    }
    Ok(())
}

pub fn run(demo: bool) -> Result<()> {
    let ctx = get_context(demo)?;
    let logger = get_logger(EntryPoint::Shell);
    let mut shell = Shell::new(ctx, logger);
    shell.log(LogEvent::new("shell_started"));

    if is_interactive() {
        run_interactive(&mut shell)
    } else {
        run_script(&mut shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcas_core::config::Config;

    fn shell() -> Shell {
        Shell::new(TcasContext::with_config(Config::default()).unwrap(), None)
    }

    #[test]
    fn test_split_plain_words() {
        assert_eq!(split_line("sort  gpa ").unwrap(), vec!["sort", "gpa"]);
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_quotes_and_escapes() {
        assert_eq!(
            split_line(r#"submit --address "99 Phayathai Rd" --reason 'I can\'t wait'"#).unwrap_err(),
            "Unterminated quote"
        );
        assert_eq!(
            split_line(r#"submit --address "99 Phayathai Rd" --skills It\'s\ fine"#).unwrap(),
            vec!["submit", "--address", "99 Phayathai Rd", "--skills", "It's fine"]
        );
        assert_eq!(split_line(r#"show """#).unwrap(), vec!["show", ""]);
    }

    #[test]
    fn test_parse_shell_lines() {
        let parsed = ShellLine::try_parse_from(["sort", "firstName"]).unwrap();
        assert!(matches!(parsed.command, ShellCommand::Sort { key: SortKey::FirstName, .. }));

        let parsed = ShellLine::try_parse_from(["submit", "--gpa", "-0.01", "--photo", "a", "--photo", "b"]).unwrap();
        match parsed.command {
            ShellCommand::Submit(args) => {
                assert_eq!(args.gpa.as_deref(), Some("-0.01"));
                assert_eq!(args.photos, vec!["a", "b"]);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(ShellLine::try_parse_from(["sort", "school"]).is_err());
        assert!(ShellLine::try_parse_from(["frobnicate"]).is_err());
    }

    #[test]
    fn test_execute_lines_against_state() {
        let mut shell = shell();
        assert!(shell.execute_line(
            "submit --first-name Nok --last-name Srisuk --address Bangkok --phone 0812345678 \
             --school Satit --gpa 3.80 --major Law --university Thammasat --json"
        ));
        assert!(shell.execute_line("submit --first-name '' --gpa 5 --json"));
        assert_eq!(shell.ctx.listing().unwrap().len(), 1);

        assert!(shell.execute_line("login --role teacher --email teacher1@school.ac.th --password abcd --json"));
        assert!(shell.is_teacher());
        assert_eq!(shell.prompt(), "tcas (teacher1/teacher)> ");

        assert!(shell.execute_line("logout"));
        assert!(shell.ctx.current_user().is_none());

        assert!(!shell.execute_line("exit"));
    }
}
