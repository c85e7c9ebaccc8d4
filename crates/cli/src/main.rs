mod cmd;
mod logging;
mod prompt;
mod tui;

use clap::{Args, Parser, Subcommand, ValueEnum};
use signup_core::config::types::PreviewFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "signup", version, about = "Registration form with schema validation")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Validate a registration record stored in a JSON or YAML file
    Validate(ValidateArgs),

    /// Fill in the registration form through prompts
    Register(RegisterArgs),

    /// Open the full-screen registration form
    Tui,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Quiet,
}

/// Preview format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewArg {
    Json,
    Yaml,
}

impl From<PreviewArg> for PreviewFormat {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Json => PreviewFormat::Json,
            PreviewArg::Yaml => PreviewFormat::Yaml,
        }
    }
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Record file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Output format for errors
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    /// Path to the avatar image
    #[arg(long)]
    pub avatar: Option<PathBuf>,

    /// Technology as title=knowledge (repeatable)
    #[arg(long = "tech", value_name = "TITLE=KNOWLEDGE")]
    pub techs: Vec<String>,

    /// Never prompt; missing values are left empty
    #[arg(long)]
    pub batch: bool,

    /// Preview format (defaults to the profile setting)
    #[arg(long, value_enum)]
    pub format: Option<PreviewArg>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Validate(args) => {
            cmd::validate::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
        Commands::Register(args) => {
            cmd::register::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
        Commands::Tui => {
            if let Err(e) = tui::run(cli.config.as_deref(), cli.profile.as_deref()) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
