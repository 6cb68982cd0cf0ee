//! Handler set and driver for German noun-table templates.
//!
//! The declension tables of German dictionary pages name their parameters
//! with composite labels such as "Nominativ Singular" or, in numbered
//! variants, "Genus 2" and "Nominativ Singular 2". Case handlers anchor at
//! the start of the label, number handlers at the end, so one composite
//! label fires both. Legacy templates use "Einzahl"/"Mehrzahl" in place of
//! "Singular"/"Plural", sometimes parenthesized ("Wer oder was? (Einzahl)").

use regex::Regex;

use crate::extractor::chain::{HandlerChain, ParameterHandler};
use crate::extractor::context::ParseContext;
use crate::extractor::error::{ChainError, ExtractionWarning};
use crate::extractor::indexed::IndexedPattern;
use crate::extractor::slots::GenusSlots;
use crate::types::{Case, GenusMarker, Number, WordForm};

/// Highest local column index one table block may use before its indices
/// alias into the next nominal block.
pub const MAX_INFLECTION_GROUPS: u32 = 4;

/// Stores the genus marker of a table column in the slot store.
///
/// The marker is keyed by the column's global inflection group so that
/// number handlers of the same column can inherit it. An unparseable value
/// records a warning and writes nothing.
pub struct GenusHandler {
    pattern: IndexedPattern,
}

impl GenusHandler {
    pub fn new(block_size: u32) -> Result<GenusHandler, ChainError> {
        Ok(GenusHandler {
            pattern: IndexedPattern::new(r"^Genus(?: ([1-9]))?$", block_size)?,
        })
    }
}

impl ParameterHandler for GenusHandler {
    fn matches(&self, label: &str, _value: &str, _form: &WordForm, _ctx: &ParseContext<'_>) -> bool {
        self.pattern.is_match(label)
    }

    fn apply(
        &self,
        label: &str,
        value: &str,
        _form: &mut WordForm,
        slots: &mut GenusSlots,
        ctx: &mut ParseContext<'_>,
    ) {
        let Some(index) = self.pattern.global_index(label, ctx) else {
            return;
        };
        match GenusMarker::parse(value) {
            Some(marker) => slots.set(index, marker),
            None => ctx.add_warning(ExtractionWarning::UnknownGenus {
                value: value.trim().to_string(),
            }),
        }
    }
}

/// Stamps grammatical number and the block-aligned inflection group, and
/// inherits gender from the column's genus slot when one was recorded.
pub struct NumberHandler {
    pattern: IndexedPattern,
    number: Number,
}

impl NumberHandler {
    pub fn new(pattern: &str, number: Number, block_size: u32) -> Result<NumberHandler, ChainError> {
        Ok(NumberHandler {
            pattern: IndexedPattern::new(pattern, block_size)?,
            number,
        })
    }
}

impl ParameterHandler for NumberHandler {
    fn matches(&self, label: &str, _value: &str, _form: &WordForm, _ctx: &ParseContext<'_>) -> bool {
        self.pattern.is_match(label)
    }

    fn apply(
        &self,
        label: &str,
        _value: &str,
        form: &mut WordForm,
        slots: &mut GenusSlots,
        ctx: &mut ParseContext<'_>,
    ) {
        let Some(index) = self.pattern.global_index(label, ctx) else {
            return;
        };
        form.number = Some(self.number);
        form.inflection_group = index;
        if let Some(gender) = slots.get(index).and_then(GenusMarker::gender) {
            form.gender = Some(gender);
        }
    }
}

/// Stamps grammatical case; carries no positional state.
pub struct CaseHandler {
    regex: Regex,
    case: Case,
}

impl CaseHandler {
    pub fn new(pattern: &str, case: Case) -> Result<CaseHandler, ChainError> {
        let regex = Regex::new(pattern).map_err(|source| ChainError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(CaseHandler { regex, case })
    }
}

impl ParameterHandler for CaseHandler {
    fn matches(&self, label: &str, _value: &str, _form: &WordForm, _ctx: &ParseContext<'_>) -> bool {
        self.regex.is_match(label)
    }

    fn apply(
        &self,
        _label: &str,
        _value: &str,
        form: &mut WordForm,
        _slots: &mut GenusSlots,
        _ctx: &mut ParseContext<'_>,
    ) {
        form.case = Some(self.case);
    }
}

/// The noun-table handler set, in declaration order.
///
/// Every pattern is compiled eagerly so a malformed one fails here, at
/// configuration time, and never during traversal of input pairs.
pub fn handlers(block_size: u32) -> Result<Vec<Box<dyn ParameterHandler>>, ChainError> {
    Ok(vec![
        Box::new(GenusHandler::new(block_size)?),
        Box::new(NumberHandler::new(
            r"Singular(?: ([1-9]))?$",
            Number::Singular,
            block_size,
        )?),
        Box::new(NumberHandler::new(
            r"Einzahl(?: ([1-9]))?\)?$",
            Number::Singular,
            block_size,
        )?),
        Box::new(NumberHandler::new(
            r"Plural(?: ([1-9]))?$",
            Number::Plural,
            block_size,
        )?),
        Box::new(NumberHandler::new(
            r"Mehrzahl(?: ([1-9]))?\)?$",
            Number::Plural,
            block_size,
        )?),
        Box::new(CaseHandler::new(r"^Nominativ", Case::Nominative)?),
        Box::new(CaseHandler::new(r"^Genitiv", Case::Genitive)?),
        Box::new(CaseHandler::new(r"^Dativ", Case::Dative)?),
        Box::new(CaseHandler::new(r"^Akkusativ", Case::Accusative)?),
    ])
}

/// Caller-side driver around the noun-table chain.
///
/// The chain itself never allocates or filters word forms. The driver owns
/// that contract: one fresh form per parameter pair, seeded with the cell's
/// surface text, dispatched through the chain, buffered, and flushed to the
/// entry only after the whole invocation was processed. Flushing late keeps
/// the entry's maximum inflection group stable across the invocation, which
/// is what makes one invocation one block.
pub struct NounTableExtractor {
    chain: HandlerChain,
}

impl NounTableExtractor {
    /// Build an extractor with the standard noun-table chain.
    pub fn new() -> Result<NounTableExtractor, ChainError> {
        Ok(NounTableExtractor {
            chain: HandlerChain::new(handlers(MAX_INFLECTION_GROUPS)?),
        })
    }

    /// Process the parameter pairs of one template invocation.
    ///
    /// A form is kept only if at least one handler matched its pair, the
    /// cell carried a surface text, and a case or number was extracted; pure
    /// genus parameters and placeholder cells produce no word forms. Kept
    /// forms are appended to the entry in completion order.
    pub fn process_invocation<L, V>(
        &mut self,
        params: impl IntoIterator<Item = (L, V)>,
        ctx: &mut ParseContext<'_>,
    ) where
        L: AsRef<str>,
        V: AsRef<str>,
    {
        let mut completed = Vec::new();
        for (label, value) in params {
            let (label, value) = (label.as_ref(), value.as_ref());
            let mut form = WordForm {
                form: surface_text(value),
                ..WordForm::default()
            };
            let matched = self.chain.dispatch(label, value, &mut form, ctx);
            if matched && form.form.is_some() && (form.case.is_some() || form.number.is_some()) {
                completed.push(form);
            }
        }
        for form in completed {
            ctx.append_word_form(form);
        }
    }

    /// Read access to the underlying chain.
    pub fn chain(&self) -> &HandlerChain {
        &self.chain
    }

    /// Clear per-entry state. Required before parsing a different entry.
    pub fn reset(&mut self) {
        self.chain.reset();
    }
}

/// The cell's surface text, or `None` for empty cells and the placeholder
/// glyphs table authors use for nonexistent forms.
fn surface_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || matches!(trimmed, "-" | "\u{2013}" | "\u{2014}" | "?") {
        None
    } else {
        Some(trimmed.to_string())
    }
}
