//! Tool catalog and record types
//!
//! The catalog is the read-only collection of tool records loaded once at
//! startup. Every query borrows from it; nothing mutates it after load.
//!
//! # Examples
//!
//! ```
//! use toolfinder::catalog::{Catalog, Tool};
//!
//! let catalog = Catalog::from_tools(vec![
//!     Tool::new("ReverbX", "Reverb", "Acme", 0, vec!["reverb".into()]),
//! ]);
//! assert_eq!(catalog.len(), 1);
//! assert!(catalog.tools()[0].is_free());
//! ```

pub mod error;
pub mod loader;

pub use error::CatalogError;
pub use loader::{load, parse};

/// A single music-production tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub tool_type: String,
    pub developer: String,
    /// Price in whole currency units, `0` means free
    pub price: u64,
    pub tags: Vec<String>,
}

impl Tool {
    /// Create a new tool record
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tool_type: impl Into<String>,
        developer: impl Into<String>,
        price: u64,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tool_type: tool_type.into(),
            developer: developer.into(),
            price,
            tags,
        }
    }

    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.price == 0
    }

    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.price > 0
    }

    /// Lowercased text covering every searchable field
    ///
    /// Layout is `name type developer tag1 tag2 ...`, used by smart search
    /// for plain substring matching.
    #[must_use]
    pub fn search_blob(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.tool_type,
            self.developer,
            self.tags.join(" ")
        )
        .to_lowercase()
    }
}

/// Ordered, immutable collection of tools
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Build a catalog from already-parsed tools, keeping their order
    #[must_use]
    pub const fn from_tools(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tool> {
        self.tools.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Tool;
    type IntoIter = std::slice::Iter<'a, Tool>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
