use std::io::{self, Write};

use clap::{Args, Subcommand};

use sprig::config::{load_settings, save_settings, settings_file_path};
use sprig::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored settings.
    Show,
    /// Print the settings file path.
    Path,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
        ConfigCommand::Path => run_path(),
    }
}

fn run_init() -> AppResult<()> {
    let mut settings = load_settings()?;

    println!("Configuring sprig.");
    println!("Press Enter to keep the current value.");
    println!();

    apply_prompt("Username", &mut settings.username)?;
    apply_prompt(
        "Branch name template",
        &mut settings.templates.branch_name,
    )?;
    apply_prompt("PR title template", &mut settings.templates.pr_title)?;
    apply_prompt(
        "Replacement character",
        &mut settings.replacement_character,
    )?;

    if let Some(answer) = prompt(&format!(
        "Enforce lowercase (y/n) [{}]",
        if settings.enforce_lowercase { "y" } else { "n" }
    ))? {
        settings.enforce_lowercase = answer.eq_ignore_ascii_case("y");
    }

    save_settings(&settings)?;

    let path = settings_file_path()?;
    println!("\nSettings saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let settings = load_settings()?;
    let path = settings_file_path()?;

    println!("Settings file: {}", path.display());
    println!("Username: {}", settings.username);
    println!("Branch name template: {}", settings.templates.branch_name);
    println!("PR title template: {}", settings.templates.pr_title);
    println!(
        "Categories: {}",
        settings
            .categories
            .iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Enforce lowercase: {}", settings.enforce_lowercase);
    println!(
        "Replacement character: {:?}",
        settings.replacement_character
    );

    Ok(())
}

fn run_path() -> AppResult<()> {
    println!("{}", settings_file_path()?.display());
    Ok(())
}

fn apply_prompt(field: &str, target: &mut String) -> AppResult<()> {
    if let Some(value) = prompt(&format!("{field} [{target}]"))? {
        *target = value;
    }
    Ok(())
}

fn prompt(label: &str) -> AppResult<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}: ")?;
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
