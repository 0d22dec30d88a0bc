// Accessibility helpers

/// Element id of the polite live region rendered by the layout.
pub const STATUS_REGION_ID: &str = "status-live";

/// CSS for visible focus indicators and screen reader utilities.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #F97316;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message through the live region, if present.
pub fn announce(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Screen reader summary of a filtered list.
#[must_use]
pub fn results_summary(count: usize, noun: &str) -> String {
    match count {
        0 => format!("No {noun} found"),
        1 => format!("1 {} found", noun.trim_end_matches('s')),
        n => format!("{n} {noun} found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_pluralizes() {
        assert_eq!(results_summary(0, "items"), "No items found");
        assert_eq!(results_summary(1, "stores"), "1 store found");
        assert_eq!(results_summary(12, "items"), "12 items found");
    }
}
