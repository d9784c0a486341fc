//! Theme/Focus Section Extractor.
//!
//! Org strategy documents are hand-written markdown with no consistent heading
//! style. A theme section is recognised by layout alone: the line that mentions
//! the theme, followed by every indented or `-` bulleted line under it. The first
//! line that starts flush-left with anything other than `-` begins the next
//! section.
//!
//! Kept as a standalone pure function so a stricter markdown parser can replace
//! it without touching the composer.

/// Extracts the section describing `theme` from `document`.
///
/// Only the first case-sensitive literal occurrence of `theme` is considered,
/// even when it appears mid-line or in unrelated prose. Returns an empty string
/// when the theme is empty or absent.
pub fn extract_theme_section(document: &str, theme: &str) -> String {
    if theme.is_empty() {
        return String::new();
    }
    let Some(found) = document.find(theme) else {
        return String::new();
    };

    let line_start = document[..found].rfind('\n').map_or(0, |nl| nl + 1);
    let mut lines = document[line_start..].lines();

    let mut section: Vec<&str> = lines.next().into_iter().collect();
    section.extend(lines.take_while(|line| !starts_next_section(line)));

    section.join("\n").trim().to_string()
}

/// A flush-left line that is not a bullet. Blank lines never end a section.
fn starts_next_section(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| !c.is_whitespace() && c != '-')
}
