use serde::{Deserialize, Serialize};

use super::WordForm;

/// A dictionary entry under construction.
///
/// The entry owns the ordered sequence of word forms extracted so far.
/// Forms are appended in completion order and never removed or deduplicated;
/// the sequence is only readable back through [`word_forms`](Entry::word_forms)
/// so insertion order is preserved by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    /// The headword as written on the page.
    pub header: String,

    word_forms: Vec<WordForm>,
}

impl Entry {
    /// Create an entry for the given headword, with no word forms yet.
    pub fn new(header: impl Into<String>) -> Entry {
        Entry {
            header: header.into(),
            word_forms: Vec::new(),
        }
    }

    /// Append a completed word form.
    pub fn push_word_form(&mut self, form: WordForm) {
        self.word_forms.push(form);
    }

    /// The word forms appended so far, in completion order.
    pub fn word_forms(&self) -> &[WordForm] {
        &self.word_forms
    }
}
