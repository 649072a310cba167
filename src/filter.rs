//! # Text Filter Module
//!
//! The filter box from the log window's context menu.
//!
//! ## Plain English
//!
//! Type some words separated by commas and only the lines containing at
//! least one of them stay visible. Put a `-` in front of a word to hide
//! lines containing it instead.
//!
//! ```text
//! "error,warn"   lines with "error" or "warn"
//! "-debug"       everything except lines with "debug"
//! "net,-timeout" lines with "net", unless they also say "timeout"
//! ```
//!
//! Matching ignores (ASCII) case.

/// One comma-separated piece of the filter text
#[derive(Clone, Debug, PartialEq, Eq)]
enum Term {
    Include(String),
    Exclude(String),
}

/// A parsed include/exclude filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFilter {
    /// Exactly what the user typed
    text: String,

    /// Parsed, lowercased terms
    terms: Vec<Term>,

    /// How many terms are inclusions
    include_count: usize,
}

impl TextFilter {
    /// Parses `text` into a filter.
    pub fn new(text: impl Into<String>) -> Self {
        let mut filter = Self::default();
        filter.set_text(text);
        filter
    }

    /// Replaces the filter text and re-parses it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.terms = self
            .text
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(|term| match term.strip_prefix('-') {
                Some(excluded) => Term::Exclude(excluded.to_ascii_lowercase()),
                None => Term::Include(term.to_ascii_lowercase()),
            })
            .collect();
        self.include_count = self
            .terms
            .iter()
            .filter(|term| matches!(term, Term::Include(_)))
            .count();
    }

    /// Empties the filter so everything passes.
    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// The raw filter text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when anything at all has been typed.
    ///
    /// Blank input such as `" "` or `","` counts as active even though it
    /// filters nothing out, the same as Dear ImGui's text filter.
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    /// Checks `text` against the filter.
    ///
    /// Exclusions win over inclusions, whatever order they were typed in.
    pub fn passes(&self, text: &str) -> bool {
        let haystack = text.to_ascii_lowercase();

        let excluded = self.terms.iter().any(|term| match term {
            // A bare "-" excludes nothing
            Term::Exclude(needle) => !needle.is_empty() && haystack.contains(needle.as_str()),
            Term::Include(_) => false,
        });
        if excluded {
            return false;
        }

        // Only exclusions given (or nothing at all), and none matched
        if self.include_count == 0 {
            return true;
        }

        self.terms.iter().any(|term| match term {
            Term::Include(needle) => haystack.contains(needle.as_str()),
            Term::Exclude(_) => false,
        })
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = TextFilter::default();
        assert!(!filter.is_active());
        assert!(filter.passes("anything"));
        assert!(filter.passes(""));
    }

    #[test]
    fn test_blank_terms_are_ignored() {
        let filter = TextFilter::new(" , ,");
        assert!(filter.is_active());
        assert!(filter.passes("anything"));

        let filter = TextFilter::new(" ");
        assert!(filter.is_active());
        assert!(filter.passes("anything"));
    }

    #[test]
    fn test_include_terms() {
        let filter = TextFilter::new("error, warn");
        assert!(filter.is_active());
        assert!(filter.passes("Network ERROR: timeout"));
        assert!(filter.passes("warning: disk"));
        assert!(!filter.passes("all good"));
    }

    #[test]
    fn test_exclude_only() {
        let filter = TextFilter::new("-debug");
        assert!(filter.passes("info: ready"));
        assert!(!filter.passes("DEBUG: frame 12"));
    }

    #[test]
    fn test_include_and_exclude() {
        let filter = TextFilter::new("-timeout,net");
        assert!(filter.passes("net: connected"));
        assert!(!filter.passes("net: timeout"));
        assert!(!filter.passes("disk: ok"));
    }

    #[test]
    fn test_exclusion_wins_regardless_of_order() {
        let filter = TextFilter::new("net,-timeout");
        assert!(filter.passes("net: connected"));
        assert!(!filter.passes("net: timeout"));
        assert!(!filter.passes("disk: ok"));

        let filter = TextFilter::new("error, warn, -ignored");
        assert!(!filter.passes("warn: ignored"));
        assert!(filter.passes("ERROR: boom"));
    }

    #[test]
    fn test_bare_dash_excludes_nothing() {
        let filter = TextFilter::new("-");
        assert!(filter.is_active());
        assert!(filter.passes("anything"));
    }

    #[test]
    fn test_set_text_and_clear() {
        let mut filter = TextFilter::new("abc");
        assert_eq!(filter.text(), "abc");
        assert!(!filter.passes("xyz"));

        filter.set_text("xyz");
        assert!(filter.passes("xyz"));

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.text(), "");
    }
}
