use std::path::PathBuf;

use clap::Parser;

/// Resolve JSON action messages read from stdin against the demo game actions.
///
/// Each line is one message: `{"code": "game.start", "args": [2]}`.
#[derive(Debug, Parser)]
#[command(name = "actionstore", version)]
pub struct Cli {
    /// Registry config file (JSON).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the registered action codes and exit.
    #[arg(long)]
    pub list: bool,
}
