//! Suggestion extraction chain.
//!
//! Strategies are tried in a fixed order; the first one that yields any items
//! wins and later ones are never consulted. The result is capped at
//! [`MAX_SUGGESTIONS`].

use super::diagnostics::Diagnostic;
use super::strategies::{numbered_items, numbered_lines, sentences, verbatim};

/// Maximum number of suggestions returned to the caller.
pub const MAX_SUGGESTIONS: usize = 3;

/// Extraction strategies in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Numbered items anywhere in the text, sorted by index
    NumberedList,
    /// Numbered lines in line order
    NumberedLines,
    /// Sentence fragments
    Sentences,
    /// The whole text as one suggestion
    Verbatim,
}

impl Strategy {
    /// All strategies, highest priority first
    pub const CHAIN: [Strategy; 4] = [
        Strategy::NumberedList,
        Strategy::NumberedLines,
        Strategy::Sentences,
        Strategy::Verbatim,
    ];

    /// Run this strategy on its own, without truncation
    pub fn apply(self, text: &str) -> Vec<String> {
        let run: fn(&str) -> Vec<String> = match self {
            Strategy::NumberedList => numbered_items,
            Strategy::NumberedLines => numbered_lines,
            Strategy::Sentences => sentences,
            Strategy::Verbatim => verbatim,
        };
        run(text)
    }

    /// Short label for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::NumberedList => "numbered_list",
            Strategy::NumberedLines => "numbered_lines",
            Strategy::Sentences => "sentences",
            Strategy::Verbatim => "verbatim",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running the chain over one accumulated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// A strategy produced between 1 and [`MAX_SUGGESTIONS`] items
    Found {
        strategy: Strategy,
        suggestions: Vec<String>,
    },
    /// No strategy produced anything (the text was blank)
    NothingParsed,
}

impl Extraction {
    /// The strategy that produced the suggestions, if any
    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Extraction::Found { strategy, .. } => Some(*strategy),
            Extraction::NothingParsed => None,
        }
    }

    /// Render to the list handed to the caller. Never empty.
    pub fn into_suggestions(self) -> Vec<String> {
        match self {
            Extraction::Found { suggestions, .. } => suggestions,
            Extraction::NothingParsed => Diagnostic::NothingParsed.suggestions(),
        }
    }
}

/// Run the strategy chain over `text`.
pub fn extract(text: &str) -> Extraction {
    for strategy in Strategy::CHAIN {
        let mut suggestions = strategy.apply(text);
        if suggestions.is_empty() {
            continue;
        }
        suggestions.truncate(MAX_SUGGESTIONS);
        tracing::debug!(
            strategy = strategy.as_str(),
            count = suggestions.len(),
            "Extracted suggestions"
        );
        return Extraction::Found {
            strategy,
            suggestions,
        };
    }

    tracing::debug!("No strategy matched; text is blank");
    Extraction::NothingParsed
}

/// Run the chain and render the caller-facing list of 1 to 3 strings.
pub fn extract_suggestions(text: &str) -> Vec<String> {
    extract(text).into_suggestions()
}
