// src/utils.rs
use scraper::ElementRef;

pub const RAW_TEXT_DELIMITER: &str = " | ";

/// Collapse all whitespace runs to single spaces.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text of an element as one cleaned string.
pub fn element_text(element: &ElementRef) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Visible text fragments of an element joined with [`RAW_TEXT_DELIMITER`].
pub fn element_fields(element: &ElementRef) -> String {
    element
        .text()
        .map(clean_text)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(RAW_TEXT_DELIMITER)
}

/// Split a comma-separated keyword list, trimming each entry and dropping blanks.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
