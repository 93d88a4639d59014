//! Search commands - type, tag and smart search
//!
//! All three share one sub-loop: prompt for a term, show the results, ask
//! whether to search again. Only an affirmative answer repeats; anything
//! else, an interrupt, or closed input returns to the main menu.

use super::Session;
use crate::{
    FinderError,
    catalog::Tool,
    pager,
    search::{self, Query, SmartQuery},
};

type Result<T> = std::result::Result<T, FinderError>;

/// Which search the sub-loop runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Type,
    Tag,
    Smart,
}

impl SearchKind {
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Type => "Enter the type to search for (e.g., EQ, Synth)",
            Self::Tag => "Enter the tag to search for (e.g., vintage, mastering)",
            Self::Smart => {
                "Enter keywords to search for (e.g., 'free ambient reverb', empty to go back)"
            }
        }
    }

    #[must_use]
    pub const fn repeat_prompt(self) -> &'static str {
        match self {
            Self::Type => "Search for another type?",
            Self::Tag => "Search for another tag?",
            Self::Smart => "Perform another smart search?",
        }
    }

    /// Build the query for a search term
    ///
    /// `None` means the user cancelled, which only an empty smart search does.
    #[must_use]
    pub fn query(self, term: &str) -> Option<Query> {
        match self {
            Self::Type => Some(Query::tool_type(term)),
            Self::Tag => Some(Query::tag(term)),
            Self::Smart => SmartQuery::parse(term).map(Query::Smart),
        }
    }

    #[must_use]
    pub fn found_message(self, count: usize, term: &str) -> String {
        match self {
            Self::Type => format!("Found {count} tool(s) of type '{term}':"),
            Self::Tag => format!("Found {count} tool(s) with the tag '{term}':"),
            Self::Smart => format!("Found {count} relevant tool(s) for '{term}':"),
        }
    }

    #[must_use]
    pub fn empty_message(self, term: &str) -> String {
        match self {
            Self::Type => format!("Sorry, no tools found of type '{term}'."),
            Self::Tag => format!("Sorry, no tools found with the tag '{term}'."),
            Self::Smart => format!("Sorry, no tools found matching all keywords: '{term}'."),
        }
    }
}

/// States of the search sub-loop
enum SearchState<'a> {
    Prompting,
    ShowingResults { term: String, found: Vec<&'a Tool> },
    AskRepeat,
    Done,
}

/// Run the search sub-loop for `kind` until the user goes back
///
/// # Errors
///
/// Returns `FinderError::Input` if reading user input fails.
pub fn execute(session: &Session<'_>, kind: SearchKind) -> Result<()> {
    let mut state = SearchState::Prompting;

    loop {
        state = match state {
            SearchState::Prompting => prompt_for_results(session, kind)?,
            SearchState::ShowingResults { term, found } => {
                show_results(session, kind, &term, &found)?;
                SearchState::AskRepeat
            }
            SearchState::AskRepeat => match session.input.prompt_confirm(kind.repeat_prompt())? {
                Some(true) => SearchState::Prompting,
                Some(false) | None => SearchState::Done,
            },
            SearchState::Done => return Ok(()),
        };
    }
}

fn prompt_for_results<'a>(session: &Session<'a>, kind: SearchKind) -> Result<SearchState<'a>> {
    let Some(raw) = session.input.prompt_text(kind.prompt())? else {
        return Ok(SearchState::Done);
    };
    let term = raw.trim().to_lowercase();

    let Some(query) = kind.query(&term) else {
        tracing::debug!(?kind, "empty query, leaving search");
        return Ok(SearchState::Done);
    };

    Ok(SearchState::ShowingResults {
        found: search::filter(session.catalog, &query),
        term,
    })
}

fn show_results(session: &Session<'_>, kind: SearchKind, term: &str, found: &[&Tool]) -> Result<()> {
    if found.is_empty() {
        session.output.warning(&kind.empty_message(term));
        return Ok(());
    }

    session.output.write(&kind.found_message(found.len(), term));
    pager::paginate(found, session.page_size, session.input, session.output)?;
    Ok(())
}
