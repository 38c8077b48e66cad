//! Session commands - pick a role, drop it, show it
//!
//! There is no account store. `login` only checks the shape of the form.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{Input, Password, Select};

use tcas_core::domain::form::MIN_PASSWORD_LEN;
use tcas_core::{Command, LogEvent, LoginForm, Outcome, Role};

use super::is_interactive;
use super::shell::Shell;
use crate::output;

#[derive(Args, Debug, Default)]
pub struct LoginArgs {
    /// student or teacher
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Ask for whatever the flags left out
fn complete_form(args: LoginArgs) -> Result<LoginForm> {
    let role = match args.role {
        Some(role) => role,
        None => {
            let roles = [Role::Student, Role::Teacher];
            let choice = Select::new()
                .with_prompt("Role")
                .items(&roles.map(|r| r.as_str()))
                .default(0)
                .interact()?;
            roles[choice].as_str().to_string()
        }
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt(format!("Password (at least {} characters)", MIN_PASSWORD_LEN))
            .allow_empty_password(true)
            .interact()?,
    };
    Ok(LoginForm::new(role, email, password))
}

pub fn run_login(shell: &mut Shell, args: LoginArgs) -> Result<()> {
    let json = args.json;
    let complete = args.role.is_some() && args.email.is_some() && args.password.is_some();
    let form = if !complete && is_interactive() {
        complete_form(args)?
    } else {
        LoginForm::new(
            args.role.unwrap_or_default(),
            args.email.unwrap_or_default(),
            args.password.unwrap_or_default(),
        )
    };

    let outcome = shell.ctx.dispatch(Command::Login(form))?;

    match &outcome {
        Outcome::LoggedIn(identity) => {
            shell.log(LogEvent::new("login").with_command("login"));
            if !json {
                output::success(&format!("Welcome, {} ({})", identity.display_name, identity.role));
            }
        }
        Outcome::Rejected(errors) => {
            shell.log(
                LogEvent::new("login_rejected")
                    .with_command("login")
                    .with_fields(errors.field_names()),
            );
            if !json {
                output::validation_errors(errors);
            }
        }
        _ => {}
    }

    if json {
        match &outcome {
            Outcome::Rejected(errors) => output::print_rejected(errors)?,
            _ => output::print_ok(&outcome)?,
        }
    }
    Ok(())
}

pub fn run_logout(shell: &mut Shell) -> Result<()> {
    let was_logged_in = shell.ctx.current_user().is_some();
    shell.log(LogEvent::new("logout").with_command("logout"));
    shell.ctx.dispatch(Command::Logout)?;
    if was_logged_in {
        output::success("Logged out");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

pub fn run_whoami(shell: &Shell, json: bool) -> Result<()> {
    let user = shell.ctx.current_user();
    if json {
        return output::print_ok(user);
    }
    match user {
        Some(identity) => println!(
            "{} <{}> as {}",
            identity.display_name.bold(),
            identity.email,
            identity.role.to_string().cyan()
        ),
        None => println!("Not logged in."),
    }
    Ok(())
}
