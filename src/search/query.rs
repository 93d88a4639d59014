//! Smart search query parsing
//!
//! A smart query is a set of lowercase keywords. The keywords `free` and
//! `paid` are pulled out of the set and turned into price constraints; the
//! rest must all appear as substrings of a tool's search blob.

use crate::catalog::Tool;
use std::collections::BTreeSet;

const FREE_KEYWORD: &str = "free";
const PAID_KEYWORD: &str = "paid";

/// Price constraints extracted from a smart query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceFilter {
    pub free: bool,
    pub paid: bool,
}

impl PriceFilter {
    /// Both constraints may be set at once, in which case nothing matches
    #[must_use]
    pub const fn allows(self, tool: &Tool) -> bool {
        (!self.free || tool.is_free()) && (!self.paid || tool.is_paid())
    }
}

/// Parsed free-text query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartQuery {
    words: BTreeSet<String>,
    price: PriceFilter,
}

impl SmartQuery {
    /// Parse raw user input
    ///
    /// Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut words: BTreeSet<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();

        if words.is_empty() {
            return None;
        }

        let price = PriceFilter {
            free: words.remove(FREE_KEYWORD),
            paid: words.remove(PAID_KEYWORD),
        };

        Some(Self { words, price })
    }

    /// Keywords left after removing price keywords
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub const fn price(&self) -> PriceFilter {
        self.price
    }

    #[must_use]
    pub fn matches(&self, tool: &Tool) -> bool {
        if !self.price.allows(tool) {
            return false;
        }
        let blob = tool.search_blob();
        self.words.iter().all(|word| blob.contains(word.as_str()))
    }
}
