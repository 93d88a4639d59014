//! Command implementations
//!
//! Each query mode is a module with an `execute` function that takes the
//! shared [`Session`] and runs its own prompt loop.

pub mod free;
pub mod search;

pub use free::execute as free;
pub use search::SearchKind;

use crate::catalog::Catalog;
use crate::pager::DEFAULT_PAGE_SIZE;
use crate::ui::{OutputWriter, UserInput};

/// Everything a command needs: the catalog and the console handles
#[derive(Clone, Copy)]
pub struct Session<'a> {
    pub catalog: &'a Catalog,
    pub input: &'a dyn UserInput,
    pub output: &'a dyn OutputWriter,
    pub page_size: usize,
}

impl<'a> Session<'a> {
    /// Create a session with the default page size
    #[must_use]
    pub fn new(catalog: &'a Catalog, input: &'a dyn UserInput, output: &'a dyn OutputWriter) -> Self {
        Self {
            catalog,
            input,
            output,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}
