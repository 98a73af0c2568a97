//! totui CLI - keyboard-navigable terminal tree menu
//!
//! Usage: totui <COMMAND>
//!
//! Commands:
//!   cli    Browse the command tree interactively
//!   print  Print one frame of the command tree and exit

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use totui::config::Config;
use totui::ui::context::UiContext;
use totui::ui::views::commands;
use totui::ui::widgets::tree_menu::run_interactive;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let (config, warnings) = Config::load_or_default(Some(cwd.as_path()))?;
    let config = apply_cli_overrides(config, &cli);

    totui::logging::init_logging(&config.log)?;
    for warning in &warnings {
        tracing::warn!(%warning, "configuration warning");
        eprintln!("Warning: {}", warning);
    }

    let ui = UiContext::new(&config);
    tracing::debug!(color = ui.color, unicode = ui.unicode, "ui context resolved");

    match cli.command {
        Commands::Cli => cmd_cli(&ui),
        Commands::Print { expand_all } => cmd_print(&ui, expand_all),
    }
}

fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(color) = cli.color {
        config.output.color = color.into();
    }
    if cli.ascii {
        config.output.unicode = false;
    }
    if let Some(level) = cli::verbosity_level(cli.verbose) {
        config.log.level = level.to_string();
    }
    if let Some(file) = &cli.log_file {
        config.log.file = Some(file.clone());
    }
    config
}

fn cmd_cli(ui: &UiContext) -> Result<()> {
    if !ui.caps.is_tty || !io::stdin().is_terminal() {
        anyhow::bail!("`totui cli` needs an interactive terminal; try `totui print`");
    }

    let mut menu = commands::command_tree().build()?;
    run_interactive(&mut menu, |menu, state| {
        commands::render_view(menu, ui, state)
    })
    .context("interactive session failed")?;
    Ok(())
}

fn cmd_print(ui: &UiContext, expand_all: bool) -> Result<()> {
    let mut menu = commands::command_tree().build()?;
    if expand_all {
        menu.expand_all();
    }

    let frame = commands::render_snapshot(&menu, ui);
    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
