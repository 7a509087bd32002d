use clap::{Args, ValueEnum};

use sprig::config;
use sprig::domain::settings::Settings;
use sprig::error::{AppError, AppResult};
use sprig::generate::{branch_name, pr_title};
use sprig::providers::ProviderRegistry;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Ticket URL (GitHub issue, Trello card or Linear issue).
    pub url: String,
    /// Ticket title to use when the URL does not carry one.
    #[arg(short, long)]
    pub title: Option<String>,
    /// Category name to use instead of the configured default.
    #[arg(short, long)]
    pub category: Option<String>,
    /// Branch name template override for this run.
    #[arg(long)]
    pub template: Option<String>,
    /// What to generate.
    #[arg(short, long, value_enum, default_value_t = OutputMode::Both)]
    pub mode: OutputMode,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Branch,
    Pr,
    Both,
}

pub fn run(registry: &ProviderRegistry, args: GenerateArgs) -> AppResult<()> {
    let mut settings = config::load_settings()?;
    apply_overrides(&mut settings, &args)?;

    let ticket = registry.extract_ticket_info(&args.url, args.title.as_deref())?;

    match args.mode {
        OutputMode::Branch => println!("{}", branch_name(&settings, &ticket)?),
        OutputMode::Pr => println!("{}", pr_title(&settings, &ticket)?),
        OutputMode::Both => {
            println!("branch: {}", branch_name(&settings, &ticket)?);
            println!("title:  {}", pr_title(&settings, &ticket)?);
        }
    }

    Ok(())
}

fn apply_overrides(settings: &mut Settings, args: &GenerateArgs) -> AppResult<()> {
    if let Some(name) = &args.category {
        let index = settings
            .categories
            .iter()
            .position(|category| category.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                AppError::Configuration(format!("unknown category: {name}"))
            })?;
        settings.last_selected_category_index = Some(index);
    }
    if let Some(template) = &args.template {
        settings.templates.branch_name = template.clone();
        settings.validate()?;
    }
    Ok(())
}
