//! Parsing context for one entry's template invocations.

use std::mem;

use crate::extractor::error::ExtractionWarning;
use crate::types::{Entry, WordForm};

/// Context handle the engine uses while parsing one entry.
///
/// The context borrows the entry under construction for the duration of the
/// parse and gives handlers:
/// - read access to the word forms appended so far (for block-offset
///   computation),
/// - the append operation that flushes completed forms,
/// - a warning channel for non-fatal anomalies.
///
/// A context is never shared across entries.
pub struct ParseContext<'a> {
    /// The entry currently being built.
    entry: &'a mut Entry,
    /// Warnings collected during extraction.
    warnings: Vec<ExtractionWarning>,
}

impl<'a> ParseContext<'a> {
    /// Create a context for the given entry.
    pub fn new(entry: &'a mut Entry) -> ParseContext<'a> {
        ParseContext {
            entry,
            warnings: Vec::new(),
        }
    }

    /// The entry currently being built.
    pub fn entry(&self) -> &Entry {
        self.entry
    }

    /// The maximum inflection group among already appended word forms,
    /// or 0 if the entry has none yet.
    pub fn max_inflection_group(&self) -> u32 {
        self.entry
            .word_forms()
            .iter()
            .map(|form| form.inflection_group)
            .max()
            .unwrap_or(0)
    }

    /// Append a completed word form to the entry.
    pub fn append_word_form(&mut self, form: WordForm) {
        self.entry.push_word_form(form);
    }

    /// Record a warning, suppressing exact duplicates.
    pub fn add_warning(&mut self, warning: ExtractionWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Drain all collected warnings from this context.
    pub fn take_warnings(&mut self) -> Vec<ExtractionWarning> {
        mem::take(&mut self.warnings)
    }

    /// Get a reference to collected warnings.
    pub fn warnings(&self) -> &[ExtractionWarning] {
        &self.warnings
    }
}
