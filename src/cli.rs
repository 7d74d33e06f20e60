use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Share Selection - build a list of files and folders to share
#[derive(Parser, Debug)]
#[command(name = "share-selection")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the selection built from the given paths with sizes
    List(ListArgs),

    /// Edit a selection interactively
    Tui(TuiArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files and folders to select
    #[arg(required = true, value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Follow symbolic links when sizing folders
    #[arg(short = 'L', long)]
    pub follow_symlinks: bool,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Files and folders to start with
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Follow symbolic links when sizing folders
    #[arg(short = 'L', long)]
    pub follow_symlinks: bool,
}
