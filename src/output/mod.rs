//! Output formatting for CLI display
//!
//! Pure string builders for tool records and result headers; writing them
//! is left to an [`OutputWriter`](crate::ui::OutputWriter).

use crate::catalog::Tool;

/// Display label for a price, `Free` for zero
#[must_use]
pub fn price_label(price: u64) -> String {
    if price == 0 {
        "Free".to_string()
    } else {
        format!("${price}")
    }
}

/// Full detail block for a single tool
///
/// ```
/// use toolfinder::catalog::Tool;
/// use toolfinder::output::tool_details;
///
/// let tool = Tool::new("Vital", "Synth", "Matt Tytel", 0, vec!["wavetable".into()]);
/// assert!(tool_details(&tool).starts_with("--- Vital ---"));
/// ```
#[must_use]
pub fn tool_details(tool: &Tool) -> String {
    format!(
        "--- {} ---\n\tType: {}\n\tDeveloper: {}\n\tPrice: {}\n\tTags: {}\n{}",
        tool.name,
        tool.tool_type,
        tool.developer,
        price_label(tool.price),
        tool.tags.join(", "),
        "-".repeat(tool.name.chars().count() + 8)
    )
}

/// Header shown above a page when results span several pages
#[must_use]
pub fn page_header(page: usize, total: usize) -> String {
    format!("Page {page} of {total}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(0), "Free");
        assert_eq!(price_label(179), "$179");
    }

    #[test]
    fn test_tool_details_layout() {
        let tool = Tool::new(
            "Pro-Q 3",
            "EQ",
            "FabFilter",
            179,
            vec!["mastering".into(), "surgical".into()],
        );

        assert_eq!(
            tool_details(&tool),
            "--- Pro-Q 3 ---\n\tType: EQ\n\tDeveloper: FabFilter\n\tPrice: $179\n\tTags: mastering, surgical\n---------------"
        );
    }

    #[test]
    fn test_tool_details_free_without_tags() {
        let tool = Tool::new("Go", "EQ", "Dev", 0, vec![]);
        let details = tool_details(&tool);

        assert!(details.contains("\tPrice: Free\n"));
        assert!(details.contains("\tTags: \n"));
        assert!(details.ends_with("----------"));
    }

    #[test]
    fn test_page_header() {
        assert_eq!(page_header(2, 3), "Page 2 of 3");
    }
}
