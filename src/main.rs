mod cmd;

use clap::{Parser, Subcommand};

use sprig::error::AppResult;
use sprig::providers::ProviderRegistry;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::generate::{self, GenerateArgs};

#[derive(Parser)]
#[command(
    name = "sprig",
    author,
    version,
    about = "Generate git branch names and PR titles from ticket URLs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a branch name and PR title for a ticket URL.
    Generate(GenerateArgs),
    /// Manage stored settings.
    Config(ConfigArgs),
    /// List the URL patterns the built-in providers match.
    Patterns,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let registry = ProviderRegistry::with_default_providers();

    match cli.command {
        Commands::Generate(args) => generate::run(&registry, args),
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Patterns => {
            for pattern in registry.match_patterns() {
                println!("{pattern}");
            }
            Ok(())
        }
    }
}
