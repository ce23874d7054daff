use anyhow::Context;
use clap::Parser;

use tarefas::cli::Cli;
use tarefas::config::Config;
use tarefas::logging::init_tracing;
use tarefas::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    ui::run(&config).context("terminal UI failed")?;
    Ok(())
}
