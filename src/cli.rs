//! Command-line interface definitions and parsing
//!
//! The tool is interactive, so the command line only carries settings that
//! override the configuration file.
//!
//! # Examples
//!
//! ```bash
//! # Use tools_database.txt in the current directory
//! toolfinder
//!
//! # Pick another database and show five records per page
//! toolfinder --database ~/music/plugins.txt --page-size 5
//!
//! # Debug logging of skipped lines and queries to stderr
//! toolfinder -v
//! ```

use crate::config::FinderConfig;
use clap::Parser;
use std::path::PathBuf;

/// Interactive finder for music-production tools
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "toolfinder", version, about)]
pub struct Cli {
    /// Tool database file (Name,Type,Developer,Price,Tag1;Tag2 per line)
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Number of records shown per page
    #[arg(short, long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Layer command-line overrides on top of the loaded configuration
    #[must_use]
    pub fn apply(&self, mut config: FinderConfig) -> FinderConfig {
        if let Some(database) = &self.database {
            config.database.clone_from(database);
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if self.no_color {
            config.color = false;
        }
        config
    }

    /// Default log filter for the tracing subscriber
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["toolfinder"]).unwrap();
        assert_eq!(cli, Cli::default());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "toolfinder",
            "-d",
            "plugins.txt",
            "--page-size",
            "4",
            "-v",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("plugins.txt")));
        assert_eq!(cli.page_size, Some(4));
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_rejects_non_numeric_page_size() {
        assert!(Cli::try_parse_from(["toolfinder", "-p", "two"]).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli::try_parse_from(["toolfinder", "-d", "other.txt", "--no-color"]).unwrap();
        let config = cli.apply(FinderConfig {
            page_size: 7,
            ..FinderConfig::default()
        });

        assert_eq!(config.database, PathBuf::from("other.txt"));
        assert_eq!(config.page_size, 7);
        assert!(!config.color);
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let config = Cli::default().apply(FinderConfig::default());
        assert_eq!(config, FinderConfig::default());
    }
}
