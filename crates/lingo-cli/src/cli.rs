use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lingo",
    about = "Lingo — three-way sync for translation resources",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the config file (skips discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile local, anchor, and remote resources
    Sync,
    /// Overwrite local and anchor with the remote copy
    Clone,
    /// Print the resolved configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sync() {
        let cli = Cli::try_parse_from(["lingo", "sync"]).unwrap();
        assert!(matches!(cli.command, Command::Sync));
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_clone() {
        let cli = Cli::try_parse_from(["lingo", "clone"]).unwrap();
        assert!(matches!(cli.command, Command::Clone));
    }

    #[test]
    fn parse_config_command() {
        let cli = Cli::try_parse_from(["lingo", "config"]).unwrap();
        assert!(matches!(cli.command, Command::Config));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["lingo", "--verbose", "sync"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_config_override_after_subcommand() {
        let cli = Cli::try_parse_from(["lingo", "sync", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["lingo"]).is_err());
    }
}
