use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "quillpress")]
#[command(about = "Category metadata and post listings for blog content")]
#[command(version)]
pub struct Cli {
    /// Quiet output (results only, no headers)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Site directory (default: $QUILLPRESS_SITE or current directory)
    #[arg(long, global = true)]
    pub site_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect category metadata across posts
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// List posts in publication order
    Posts {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize a quillpress.toml in the site directory
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List every category label in use, sorted
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Group posts under their categories ("Uncategorized" for unlabeled posts)
    Posts {
        /// Show a single category only
        category: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}
