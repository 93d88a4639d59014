//! Record loader for the flat-file tool database
//!
//! Each line is `Name,Type,Developer,Price,Tag1;Tag2;...`. Lines that do not
//! have exactly five fields, or whose price is not a non-negative integer,
//! are dropped without raising an error.

use super::{Catalog, CatalogError, Tool};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const FIELD_COUNT: usize = 5;
const TAG_SEPARATOR: char = ';';

/// Load the catalog from a database file
///
/// # Errors
///
/// Returns `CatalogError::NotFound` if the file does not exist, or
/// `CatalogError::Io` if it cannot be opened for another reason.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::Io(e),
    })?;

    let catalog = parse(file);
    tracing::debug!(path = %path.display(), tools = catalog.len(), "loaded tool database");
    Ok(catalog)
}

/// Parse database content from any reader
///
/// Blank lines are ignored. Malformed lines are skipped and only reported
/// through a debug log event.
pub fn parse<R: Read>(reader: R) -> Catalog {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut tools = Vec::new();
    for result in rdr.records() {
        match result {
            Ok(record) => {
                let line = record.position().map_or(0, csv::Position::line);
                match parse_record(&record) {
                    Some(tool) => tools.push(tool),
                    None => tracing::debug!(line, fields = record.len(), "skipping malformed line"),
                }
            }
            Err(e) => tracing::debug!(error = %e, "skipping unreadable line"),
        }
    }

    Catalog::from_tools(tools)
}

fn parse_record(record: &csv::StringRecord) -> Option<Tool> {
    if record.len() != FIELD_COUNT {
        return None;
    }

    let name = record.get(0)?;
    if name.is_empty() {
        return None;
    }
    let price = record.get(3)?.parse::<u64>().ok()?;
    let tags = split_tags(record.get(4)?);

    Some(Tool::new(name, record.get(1)?, record.get(2)?, price, tags))
}

fn split_tags(field: &str) -> Vec<String> {
    field
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
