use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "geonotes")]
#[command(version, about = "Keep, search and export geolocated notes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    Interactive,

    /// Load the sample notes and print an export
    Examples {
        /// Export format (json, markdown)
        #[arg(long, default_value = "json")]
        format: ExportFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["geonotes"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_examples_format() {
        let cli = Cli::try_parse_from(["geonotes", "examples", "--format", "markdown"]).unwrap();
        match cli.command {
            Some(Commands::Examples { format }) => assert_eq!(format, ExportFormat::Markdown),
            other => panic!("Expected Examples, got {:?}", other),
        }
    }

    #[test]
    fn test_examples_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["geonotes", "examples", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["geonotes", "interactive", "--config", "cfg.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert!(matches!(cli.command, Some(Commands::Interactive)));
    }
}
