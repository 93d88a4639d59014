//! Catalog-specific error types
//!
//! Malformed lines are not errors; the loader drops them. Only failures to
//! read the database file surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the tool database
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The database file does not exist
    #[error("The file '{}' was not found", .0.display())]
    NotFound(PathBuf),

    /// Any other failure while reading the file
    #[error("Failed to read tool database: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = CatalogError::NotFound(PathBuf::from("tools_database.txt"));
        assert_eq!(
            error.to_string(),
            "The file 'tools_database.txt' was not found"
        );
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: CatalogError = io_err.into();
        assert!(matches!(error, CatalogError::Io(_)));
        assert!(error.to_string().contains("denied"));
    }
}
