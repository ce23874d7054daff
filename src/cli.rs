use clap::Parser;
use std::path::PathBuf;

/// tarefas — a to-do list for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tarefas", version, about)]
pub struct Cli {
    /// Path to the configuration file (defaults to
    /// ~/.config/tarefas/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
