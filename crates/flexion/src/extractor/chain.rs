//! Ordered handler chain dispatching template parameters.

use crate::extractor::context::ParseContext;
use crate::extractor::slots::GenusSlots;
use crate::types::WordForm;

/// One attribute-extraction rule: a match predicate plus an apply mutator.
///
/// Handlers are independent rules composed by ordered iteration, not by
/// single dispatch: a single label frequently carries several grammatical
/// facets ("Nominativ Singular" is relevant to a case handler and to a
/// number handler), so the chain runs every handler that matches.
pub trait ParameterHandler {
    /// Whether this handler applies to the given parameter pair.
    fn matches(
        &self,
        label: &str,
        value: &str,
        form: &WordForm,
        ctx: &ParseContext<'_>,
    ) -> bool;

    /// Decorate the word form and/or update the genus slots.
    fn apply(
        &self,
        label: &str,
        value: &str,
        form: &mut WordForm,
        slots: &mut GenusSlots,
        ctx: &mut ParseContext<'_>,
    );
}

/// An ordered collection of handlers sharing one genus slot store.
///
/// A chain instance is scoped to one entry's parse. Reuse on a different
/// entry requires an explicit [`reset`](HandlerChain::reset) first; sharing
/// one instance across concurrent entry parses would corrupt block-offset
/// and genus-inheritance computations.
pub struct HandlerChain {
    handlers: Vec<Box<dyn ParameterHandler>>,
    slots: GenusSlots,
}

impl HandlerChain {
    /// Create a chain that runs the given handlers in order.
    pub fn new(handlers: Vec<Box<dyn ParameterHandler>>) -> HandlerChain {
        HandlerChain {
            handlers,
            slots: GenusSlots::new(),
        }
    }

    /// Whether any handler in the chain matches the pair.
    pub fn matches(
        &self,
        label: &str,
        value: &str,
        form: &WordForm,
        ctx: &ParseContext<'_>,
    ) -> bool {
        self.handlers
            .iter()
            .any(|handler| handler.matches(label, value, form, ctx))
    }

    /// Run every matching handler against the pair, in declaration order.
    ///
    /// Returns whether at least one handler matched. A pair matched by no
    /// handler is ignored without error; unrecognized parameters are common
    /// in organically edited source data and must not abort extraction.
    pub fn dispatch(
        &mut self,
        label: &str,
        value: &str,
        form: &mut WordForm,
        ctx: &mut ParseContext<'_>,
    ) -> bool {
        let mut matched = false;
        for handler in &self.handlers {
            if handler.matches(label, value, form, ctx) {
                handler.apply(label, value, form, &mut self.slots, ctx);
                matched = true;
            }
        }
        matched
    }

    /// Read access to the genus slot store.
    pub fn slots(&self) -> &GenusSlots {
        &self.slots
    }

    /// Clear per-entry state. Required before parsing a different entry.
    pub fn reset(&mut self) {
        self.slots.reset();
    }
}
