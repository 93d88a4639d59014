//! Toolfinder - an interactive finder for music-production tools
//!
//! Loads a flat-file catalog of plugins and instruments and lets the user
//! query it by type, price tier, tag, or free-text keywords, with paginated
//! results.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod menu;
pub mod output;
pub mod pager;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use catalog::{Catalog, Tool};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FinderError {
    /// Catalog loading error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// User input error
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
}
