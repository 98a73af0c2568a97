use std::path::PathBuf;

use clap::{Parser, Subcommand};
use totui::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// totui - keyboard-navigable terminal tree menu
#[derive(Parser, Debug)]
#[command(name = "totui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Use ASCII glyphs and borders instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the command tree interactively
    Cli,

    /// Print one frame of the command tree and exit
    Print {
        /// Expand every node before printing
        #[arg(long)]
        expand_all: bool,
    },
}

/// Log level for a `-v` count; `None` keeps the configured level
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_cli() {
        let cli = Cli::try_parse_from(["totui", "cli"]).unwrap();
        assert!(matches!(cli.command, Commands::Cli));
        assert_eq!(cli.color, None);
        assert!(!cli.ascii);
    }

    #[test]
    fn test_cli_parse_print_expand_all() {
        let cli = Cli::try_parse_from(["totui", "print", "--expand-all"]).unwrap();
        if let Commands::Print { expand_all } = cli.command {
            assert!(expand_all);
        } else {
            panic!("Expected Print command");
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["totui"]).is_err());
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["totui", "--color", "never", "print"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
        assert_eq!(ColorMode::from(ColorWhen::Never), ColorMode::Never);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "totui",
            "print",
            "--ascii",
            "-vv",
            "--log-file",
            "/tmp/totui.log",
        ])
        .unwrap();
        assert!(cli.ascii);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/totui.log")));
    }

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some("info"));
        assert_eq!(verbosity_level(2), Some("debug"));
        assert_eq!(verbosity_level(7), Some("trace"));
    }
}
