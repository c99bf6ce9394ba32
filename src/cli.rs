//! Command-line interface for clusternet
//!
//! Uses clap with derive for type-safe CLI parsing

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// clusternet - shared cluster network provisioning
#[derive(Parser)]
#[command(name = "clusternet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Container runtime binary (overrides runtime.command)
    #[arg(long, global = true)]
    pub runtime: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create the cluster network if it does not exist yet
    Ensure {
        /// Network name (overrides network.name)
        name: Option<String>,
    },

    /// Report whether the cluster network exists
    Exists {
        /// Network name (overrides network.name)
        name: Option<String>,
    },

    /// Print the IPv6 subnet derived for a network name
    Subnet {
        /// Network name (overrides network.name)
        name: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Generate shell completion scripts
    pub fn generate_completion(shell: Shell) {
        let mut cmd = Self::command();
        clap_complete::generate(shell, &mut cmd, "clusternet", &mut std::io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ensure_with_globals() {
        let cli = Cli::try_parse_from(["clusternet", "ensure", "lab", "--runtime", "podman", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.runtime.as_deref(), Some("podman"));
        match cli.command {
            Commands::Ensure { name } => assert_eq!(name.as_deref(), Some("lab")),
            _ => panic!("expected ensure"),
        }
    }

    #[test]
    fn test_parse_subnet_json() {
        let cli = Cli::try_parse_from(["clusternet", "subnet", "--json"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Subnet { name, json } => {
                assert!(name.is_none());
                assert!(json);
            }
            _ => panic!("expected subnet"),
        }
    }
}
