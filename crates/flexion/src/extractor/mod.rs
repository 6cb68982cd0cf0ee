//! Attribute-extraction dispatch engine.
//!
//! This module provides the core that interprets the (label, value)
//! parameter pairs of one template invocation: an ordered chain of
//! pattern-based handlers, the positional index translation that keeps
//! locally numbered table columns globally unambiguous across blocks, and
//! the per-entry genus slot store handlers inherit gender from.

mod chain;
mod context;
mod error;
mod indexed;
pub mod noun_table;
mod slots;

pub use chain::{HandlerChain, ParameterHandler};
pub use context::ParseContext;
pub use error::{ChainError, ExtractionWarning};
pub use indexed::{IndexedPattern, block_offset};
pub use noun_table::{MAX_INFLECTION_GROUPS, NounTableExtractor};
pub use slots::GenusSlots;
