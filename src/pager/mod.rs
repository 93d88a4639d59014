//! Paginated display of result sets
//!
//! [`Pages`] slices an ordered list into fixed-size pages. [`paginate`]
//! shows one page at a time and lets the user jump to any page by number
//! until they quit or interrupt.
//!
//! # Examples
//!
//! ```
//! use toolfinder::pager::Pages;
//!
//! let items = [1, 2, 3, 4, 5];
//! let pages = Pages::new(&items, 2);
//!
//! assert_eq!(pages.total_pages(), 3);
//! assert_eq!(pages.page(3), Some(&items[4..]));
//! ```

use crate::catalog::Tool;
use crate::output;
use crate::ui::{InputError, OutputWriter, UserInput};

/// Records shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Token that leaves the page prompt
pub const QUIT_TOKEN: &str = "q";

/// Fixed-size pages over a borrowed slice
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a, T> {
    items: &'a [T],
    size: usize,
}

impl<'a, T> Pages<'a, T> {
    /// Split `items` into pages of `size`; a size of zero is treated as one
    #[must_use]
    pub fn new(items: &'a [T], size: usize) -> Self {
        Self {
            items,
            size: size.max(1),
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.size)
    }

    /// Items on 1-based page `number`, `None` when out of range
    #[must_use]
    pub fn page(&self, number: usize) -> Option<&'a [T]> {
        if number == 0 || number > self.total_pages() {
            return None;
        }
        let start = (number - 1) * self.size;
        let end = (start + self.size).min(self.items.len());
        Some(&self.items[start..end])
    }
}

/// What the user asked for at the page prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    /// Jump to a page; not yet checked against the page count
    Goto(i64),
    /// A whole number too large to represent, kept as typed
    OutOfRange(String),
    Quit,
    /// Neither a number nor the quit token
    Invalid(String),
}

impl PageCommand {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(QUIT_TOKEN) {
            return Self::Quit;
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Self::Goto(n),
            Err(_) if is_integer(trimmed) => Self::OutOfRange(trimmed.to_string()),
            Err(_) => Self::Invalid(trimmed.to_string()),
        }
    }
}

/// Optional sign followed by at least one ASCII digit
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Show `tools` page by page
///
/// A single page is printed without prompting and an empty list prints
/// nothing. Quitting, interrupting or closing input returns to the caller.
///
/// # Errors
///
/// Returns `InputError` if reading from the input backend fails.
pub fn paginate(
    tools: &[&Tool],
    page_size: usize,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
) -> Result<(), InputError> {
    let pages = Pages::new(tools, page_size);
    let total = pages.total_pages();

    match total {
        0 => return Ok(()),
        1 => {
            show_page(&pages, 1, out);
            return Ok(());
        }
        _ => {}
    }

    let prompt = format!("Enter a page number (1-{total}) or '{QUIT_TOKEN}' to return");
    let mut current = 1;
    loop {
        out.info(&output::page_header(current, total));
        show_page(&pages, current, out);

        let Some(answer) = input.prompt_text(&prompt)? else {
            tracing::debug!(page = current, "page prompt interrupted");
            return Ok(());
        };

        match PageCommand::parse(&answer) {
            PageCommand::Quit => return Ok(()),
            PageCommand::Goto(n) => match usize::try_from(n) {
                Ok(n) if (1..=total).contains(&n) => current = n,
                _ => out.error(&format!("Page {n} is out of range (1-{total}).")),
            },
            PageCommand::OutOfRange(text) => {
                out.error(&format!("Page {text} is out of range (1-{total})."));
            }
            PageCommand::Invalid(text) => {
                out.error(&format!("'{text}' is not a page number."));
            }
        }
    }
}

fn show_page(pages: &Pages<'_, &Tool>, number: usize, out: &dyn OutputWriter) {
    for tool in pages.page(number).unwrap_or_default() {
        out.write(&output::tool_details(tool));
    }
}
