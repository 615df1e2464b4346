//! Extraction strategies.
//!
//! Each strategy is a pure `fn(&str) -> Vec<String>` returning every item it
//! recognises, trimmed and non-empty, in its own priority order. Truncation to
//! the suggestion limit is done by the chain, not here. A pattern miss is an
//! empty vector.

use once_cell::sync::Lazy;
use regex::Regex;

/// An item marker at the start of the text or of a line: optional
/// indentation, an integer, then `.` or `)`. The whitespace that must follow
/// is checked separately so a rejected marker never swallows the next line.
static ITEM_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\A|\n)\s*(\d+)[.)]").expect("Invalid item marker regex")
});

/// A numbered prefix on a single trimmed line.
static LINE_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s+").expect("Invalid line prefix regex"));

/// Sentence terminators, one or more in a row.
static SENTENCE_END_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence terminator regex"));

/// Whitespace runs that contain at least one line break.
static LINE_BREAK_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\n\s*").expect("Invalid line break regex"));

/// Minimum character count (exclusive) for a sentence fragment to count.
pub const MIN_SENTENCE_CHARS: usize = 10;

struct Marker {
    index: u64,
    start: usize,
    end: usize,
}

fn item_markers(text: &str) -> Vec<Marker> {
    ITEM_MARKER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let followed_by_space = text[whole.end()..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace);
            if !followed_by_space {
                return None;
            }
            let index = caps.get(1)?.as_str().parse::<u64>().ok()?;
            Some(Marker {
                index,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Trim an item body and fold each line break (with its surrounding
/// whitespace) into a single space.
fn clean_item(body: &str) -> String {
    LINE_BREAK_RUN_REGEX
        .replace_all(body.trim(), " ")
        .into_owned()
}

/// Numbered items anywhere in the text, sorted by their parsed index.
///
/// An item body runs from its marker to the start of the next marker (or end
/// of text) and may span lines. Items sharing an index keep their order of
/// appearance.
pub fn numbered_items(text: &str) -> Vec<String> {
    let markers = item_markers(text);

    let mut items: Vec<(u64, String)> = markers
        .iter()
        .enumerate()
        .filter_map(|(i, marker)| {
            let body_end = markers.get(i + 1).map_or(text.len(), |next| next.start);
            let body = clean_item(&text[marker.end..body_end]);
            (!body.is_empty()).then_some((marker.index, body))
        })
        .collect();

    // sort_by_key is stable
    items.sort_by_key(|(index, _)| *index);
    items.into_iter().map(|(_, body)| body).collect()
}

/// Lines that begin with a numbered prefix, prefix removed, in line order.
pub fn numbered_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let prefix = LINE_PREFIX_REGEX.find(line)?;
            let rest = line[prefix.end()..].trim();
            (!rest.is_empty()).then(|| rest.to_string())
        })
        .collect()
}

/// Sentence fragments longer than [`MIN_SENTENCE_CHARS`] characters.
pub fn sentences(text: &str) -> Vec<String> {
    SENTENCE_END_REGEX
        .split(text)
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// The whole text as a single item, if it has any visible content.
pub fn verbatim(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // numbered_items

    #[test]
    fn test_numbered_items_basic() {
        assert_eq!(
            numbered_items("1. Buy milk\n2. Call Alice\n3. Book flight"),
            vec!["Buy milk", "Call Alice", "Book flight"]
        );
    }

    #[test]
    fn test_numbered_items_paren_marker() {
        assert_eq!(
            numbered_items("1) Water plants\n2) Feed cat"),
            vec!["Water plants", "Feed cat"]
        );
    }

    #[test]
    fn test_numbered_items_sorted_by_index() {
        assert_eq!(
            numbered_items("2. Second\n1. First\n3. Third"),
            vec!["First", "Second", "Third"]
        );
    }

    #[test]
    fn test_numbered_items_index_is_numeric_not_lexical() {
        assert_eq!(
            numbered_items("10. Ten\n9. Nine\n1. One"),
            vec!["One", "Nine", "Ten"]
        );
    }

    #[test]
    fn test_numbered_items_duplicate_index_keeps_appearance_order() {
        assert_eq!(
            numbered_items("2. Late\n1. Alpha\n1. Beta"),
            vec!["Alpha", "Beta", "Late"]
        );
    }

    #[test]
    fn test_numbered_items_with_preamble() {
        let text = "Here are some follow-ups:\n\n1. Buy milk\n2. Call Alice";
        assert_eq!(numbered_items(text), vec!["Buy milk", "Call Alice"]);
    }

    #[test]
    fn test_numbered_items_indented_markers() {
        let text = "  1. Buy milk\n   2. Call Alice";
        assert_eq!(numbered_items(text), vec!["Buy milk", "Call Alice"]);
    }

    #[test]
    fn test_numbered_items_multiline_body_is_folded() {
        let text = "1. Buy milk\n   and bread\n2. Call Alice";
        assert_eq!(numbered_items(text), vec!["Buy milk and bread", "Call Alice"]);
    }

    #[test]
    fn test_numbered_items_body_excludes_next_marker() {
        let items = numbered_items("1. A\n2. B");
        assert_eq!(items, vec!["A", "B"]);
        assert!(items.iter().all(|item| !item.contains("2.")));
    }

    #[test]
    fn test_numbered_items_inline_number_is_content() {
        let text = "1. Buy 2. liters of milk\n2. Call Alice";
        assert_eq!(
            numbered_items(text),
            vec!["Buy 2. liters of milk", "Call Alice"]
        );
    }

    #[test]
    fn test_numbered_items_decimal_is_not_a_marker() {
        assert!(numbered_items("1.5 liters of milk").is_empty());
    }

    #[test]
    fn test_numbered_items_marker_needs_whitespace() {
        assert!(numbered_items("1.Buy milk\n2.Call Alice").is_empty());
    }

    #[test]
    fn test_numbered_items_empty_body_skipped() {
        assert_eq!(numbered_items("1.\n2. Call Alice"), vec!["Call Alice"]);
    }

    #[test]
    fn test_numbered_items_last_runs_to_end() {
        let text = "1. First\n2. Second item\n\nHope this helps";
        assert_eq!(
            numbered_items(text),
            vec!["First", "Second item Hope this helps"]
        );
    }

    #[test]
    fn test_numbered_items_overflowing_index_ignored() {
        let text = "99999999999999999999999. Huge\n1. Small";
        assert_eq!(numbered_items(text), vec!["Small"]);
    }

    #[test]
    fn test_numbered_items_none() {
        assert!(numbered_items("No numbers here at all").is_empty());
        assert!(numbered_items("").is_empty());
    }

    // numbered_lines

    #[test]
    fn test_numbered_lines_strips_prefix() {
        assert_eq!(
            numbered_lines("intro\n1. Alpha\nnot numbered\n2) Beta\n"),
            vec!["Alpha", "Beta"]
        );
    }

    #[test]
    fn test_numbered_lines_keeps_line_order() {
        assert_eq!(
            numbered_lines("3. Gamma\n1. Alpha"),
            vec!["Gamma", "Alpha"]
        );
    }

    #[test]
    fn test_numbered_lines_requires_whitespace() {
        assert!(numbered_lines("1.Alpha\n2)Beta").is_empty());
    }

    // sentences

    #[test]
    fn test_sentences_split_and_filter() {
        let text = "Buy groceries today. Call the dentist tomorrow. Finish the report by Friday.";
        assert_eq!(
            sentences(text),
            vec![
                "Buy groceries today",
                "Call the dentist tomorrow",
                "Finish the report by Friday"
            ]
        );
    }

    #[test]
    fn test_sentences_drop_short_fragments() {
        assert_eq!(
            sentences("Yes! Okay?? Schedule the team meeting!!! No."),
            vec!["Schedule the team meeting"]
        );
    }

    #[test]
    fn test_sentences_length_is_exclusive() {
        // exactly 10 characters is too short, 11 is enough
        assert!(sentences("abcdefghij.").is_empty());
        assert_eq!(sentences("abcdefghijk."), vec!["abcdefghijk"]);
    }

    #[test]
    fn test_sentences_counts_chars_not_bytes() {
        // 6 characters, 12 bytes
        assert!(sentences("éééééé.").is_empty());
    }

    // verbatim

    #[test]
    fn test_verbatim() {
        assert_eq!(verbatim("  short  "), vec!["short"]);
        assert!(verbatim("").is_empty());
        assert!(verbatim(" \n\t ").is_empty());
    }
}
