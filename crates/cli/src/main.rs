mod cmd;
mod insert;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand, ValueEnum};
use notekit_core::board::BoardFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nk", version, about = "Note lookup and task boards for a plain-text second brain")]
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

    /// Find a note by title and emit a "Title [[uid]]" reference
    Find(FindArgs),

    /// Read todo.txt lines on stdin and write a status board to stdout
    Board(BoardArgs),
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Title query; prompted for interactively when omitted
    pub query: Option<String>,

    /// Pre-selected text: seeds the query prompt and is replaced on insertion
    #[arg(long)]
    pub selection: Option<String>,

    /// Print every match instead of prompting for one
    #[arg(long)]
    pub batch: bool,

    /// Print matches as JSON (implies --batch)
    #[arg(long)]
    pub json: bool,

    /// Print matching uids only (implies --batch)
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Table dialect; overrides the configured one
    #[arg(long, value_enum)]
    pub format: Option<BoardFormatArg>,

    /// Drop @context/+project tags from rendered descriptions
    #[arg(long)]
    pub strip_tags: bool,

    /// Truncate cells to this many characters
    #[arg(long)]
    pub max_width: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BoardFormatArg {
    Markdown,
    Grid,
}

impl From<BoardFormatArg> for BoardFormat {
    fn from(arg: BoardFormatArg) -> Self {
        match arg {
            BoardFormatArg::Markdown => BoardFormat::Markdown,
            BoardFormatArg::Grid => BoardFormat::Grid,
        }
    }
}

/// How batch find results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Quiet,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Find(args) => {
            cmd::find::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
        Commands::Board(args) => cmd::board::run(cli.config.as_deref(), args),
    }
}
