//! Free command - list every free tool

use super::Session;
use crate::{FinderError, pager, search};

type Result<T> = std::result::Result<T, FinderError>;

pub const RETURN_PROMPT: &str = "Press Enter to return to the main menu";

/// List all free tools, then wait for the user before returning
///
/// # Errors
///
/// Returns `FinderError::Input` if reading user input fails.
pub fn execute(session: &Session<'_>) -> Result<()> {
    let found = search::free(session.catalog);

    if found.is_empty() {
        session
            .output
            .warning("Sorry, no free tools found in the database.");
    } else {
        session
            .output
            .write(&format!("Found {} FREE tool(s):", found.len()));
        pager::paginate(&found, session.page_size, session.input, session.output)?;
    }

    session.input.prompt_text(RETURN_PROMPT)?;
    Ok(())
}
