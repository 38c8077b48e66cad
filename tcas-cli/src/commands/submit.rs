//! Submit command - fill in and save a student portfolio

use anyhow::Result;
use clap::Args;
use dialoguer::Input;

use tcas_core::domain::form::MIN_PHONE_LEN;
use tcas_core::{Command, LogEvent, Outcome, PortfolioForm};

use super::is_interactive;
use super::shell::Shell;
use crate::output;

#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub school: Option<String>,
    /// Grade point average, 0 to 4
    #[arg(long, allow_hyphen_values = true)]
    pub gpa: Option<String>,
    /// Special skills (optional)
    #[arg(long)]
    pub skills: Option<String>,
    /// Reason for applying (optional)
    #[arg(long)]
    pub reason: Option<String>,
    /// Chosen major
    #[arg(long)]
    pub major: Option<String>,
    #[arg(long)]
    pub university: Option<String>,
    /// Photo handle; repeat for several photos
    #[arg(long = "photo")]
    pub photos: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SubmitArgs {
    /// Any form input on the command line; prompting would drop it
    fn has_form_fields(&self) -> bool {
        let any_text = [
            &self.first_name,
            &self.last_name,
            &self.address,
            &self.phone,
            &self.school,
            &self.gpa,
            &self.skills,
            &self.reason,
            &self.major,
            &self.university,
        ]
        .iter()
        .any(|f| f.is_some());
        any_text || !self.photos.is_empty()
    }

    /// Form from flags; missing fields are left empty for validation to flag
    fn into_form(self) -> PortfolioForm {
        let mut form = PortfolioForm {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            school: self.school.unwrap_or_default(),
            gpa: self.gpa.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            reason: self.reason.unwrap_or_default(),
            major: self.major.unwrap_or_default(),
            university: self.university.unwrap_or_default(),
            photos: Vec::new(),
        };
        form.select_photos(self.photos);
        form
    }
}

fn ask(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Walk through the form one field at a time
fn prompt_form() -> Result<PortfolioForm> {
    output::info("Personal information");
    let first_name = ask("First name")?;
    let last_name = ask("Last name")?;
    let address = ask("Address")?;
    let phone = ask(&format!("Phone (at least {} digits)", MIN_PHONE_LEN))?;
    let school = ask("School")?;
    let gpa = ask("GPA (0-4)")?;

    output::info("Skills and reasons");
    let skills = ask("Special skills (optional)")?;
    let reason = ask("Reason for applying (optional)")?;
    let major = ask("Chosen major")?;
    let university = ask("University")?;

    output::info("Photos");
    let photos = ask("Photo handles, comma-separated (optional)")?;

    let mut form = PortfolioForm {
        first_name,
        last_name,
        address,
        phone,
        school,
        gpa,
        skills,
        reason,
        major,
        university,
        photos: Vec::new(),
    };
    form.select_photos(photos.split(','));
    Ok(form)
}

pub fn run(shell: &mut Shell, args: SubmitArgs) -> Result<()> {
    let json = args.json;
    let form = if !args.has_form_fields() && is_interactive() {
        prompt_form()?
    } else {
        args.into_form()
    };

    let outcome = shell.ctx.dispatch(Command::Submit(form))?;

    match &outcome {
        Outcome::Submitted(record) => {
            shell.log(LogEvent::new("portfolio_submitted").with_command("submit"));
            if !json {
                output::success(&format!("Portfolio saved for {} (id {})", record.full_name(), record.id));
            }
        }
        Outcome::Rejected(errors) => {
            shell.log(
                LogEvent::new("portfolio_rejected")
                    .with_command("submit")
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
