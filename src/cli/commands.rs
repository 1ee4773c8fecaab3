use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio", about = concat!("folio v", env!("CARGO_PKG_VERSION"), " - a portfolio in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read config, preferences and logs from a different directory
    #[arg(short = 'C', long = "config-dir", global = true)]
    pub config_dir: Option<String>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// GitHub username to show (overrides config)
    #[arg(long, global = true)]
    pub github_user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects (filter/sort default to saved preferences)
    Projects(ProjectsArgs),
    /// Show the skills heatmap entries
    Skills(SkillsArgs),
    /// Fetch a GitHub user's most recently updated repositories
    Repos(ReposArgs),
    /// Validate a contact message (nothing is sent)
    Contact(ContactArgs),
}

#[derive(Args)]
pub struct ProjectsArgs {
    /// Project type (all, frontend, fullstack, practice)
    #[arg(long)]
    pub filter: Option<String>,
    /// Sort order (newest, oldest, az, za)
    #[arg(long)]
    pub sort: Option<String>,
    /// Case-insensitive search over titles and tags
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct SkillsArgs {
    /// Focus area (all, frontend, backend, tooling)
    #[arg(long)]
    pub focus: Option<String>,
    /// Minimum strength, 1-5
    #[arg(long)]
    pub min: Option<u8>,
}

#[derive(Args)]
pub struct ReposArgs {
    /// GitHub username (default: --github-user, then config)
    pub username: Option<String>,
}

#[derive(Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub message: String,
}
