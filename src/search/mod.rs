//! Filter engine over the tool catalog
//!
//! Every query runs over the full catalog, matches case-insensitively, and
//! returns borrowed records in catalog order.
//!
//! # Examples
//!
//! ```
//! use toolfinder::catalog::{Catalog, Tool};
//! use toolfinder::search::{self, Query, SmartQuery};
//!
//! let catalog = Catalog::from_tools(vec![
//!     Tool::new("ReverbX", "Reverb", "Acme", 0, vec!["reverb".into()]),
//!     Tool::new("ReverbPro", "Reverb", "Acme", 99, vec!["reverb".into()]),
//! ]);
//!
//! let query = SmartQuery::parse("free reverb").unwrap();
//! let found = search::filter(&catalog, &Query::Smart(query));
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name, "ReverbX");
//! ```

pub mod query;

pub use query::{PriceFilter, SmartQuery};

use crate::catalog::{Catalog, Tool};

/// Tag query that selects every paid tool instead of matching tags
pub const PAID_TAG: &str = "paid";

/// A single predicate over the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Substring of the tool type
    Type(String),
    /// Tools with a price of zero
    Free,
    /// Substring of any tag, or every paid tool for `"paid"`
    Tag(String),
    /// AND of keywords over all fields, with price keywords
    Smart(SmartQuery),
}

impl Query {
    /// Build a type query, normalizing the search term
    #[must_use]
    pub fn tool_type(term: &str) -> Self {
        Self::Type(term.trim().to_lowercase())
    }

    /// Build a tag query, normalizing the search term
    #[must_use]
    pub fn tag(term: &str) -> Self {
        Self::Tag(term.trim().to_lowercase())
    }

    /// Check whether a single tool satisfies this query
    #[must_use]
    pub fn matches(&self, tool: &Tool) -> bool {
        match self {
            Self::Type(term) => tool.tool_type.to_lowercase().contains(term.as_str()),
            Self::Free => tool.is_free(),
            Self::Tag(term) if term == PAID_TAG => tool.is_paid(),
            Self::Tag(term) => tool
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(term.as_str())),
            Self::Smart(query) => query.matches(tool),
        }
    }
}

/// Return every tool matching the query, in catalog order
#[must_use]
pub fn filter<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a Tool> {
    let found: Vec<&Tool> = catalog.iter().filter(|tool| query.matches(tool)).collect();
    tracing::debug!(?query, matches = found.len(), "filtered catalog");
    found
}

/// Tools whose type contains `term`
#[must_use]
pub fn by_type<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Tool> {
    filter(catalog, &Query::tool_type(term))
}

/// Tools with a price of zero
#[must_use]
pub fn free(catalog: &Catalog) -> Vec<&Tool> {
    filter(catalog, &Query::Free)
}

/// Tools with a tag containing `term`; `"paid"` selects every paid tool
#[must_use]
pub fn by_tag<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Tool> {
    filter(catalog, &Query::tag(term))
}

/// Smart keyword search
///
/// Returns `None` when the query is empty, which callers treat as cancel.
#[must_use]
pub fn smart<'a>(catalog: &'a Catalog, text: &str) -> Option<Vec<&'a Tool>> {
    SmartQuery::parse(text).map(|query| filter(catalog, &Query::Smart(query)))
}
