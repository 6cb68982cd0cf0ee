//! Positional index resolution for handlers keyed by table columns.
//!
//! Table templates number their columns locally: every block restarts at 1
//! ("Genus", "Genus 2", ...). Downstream consumers need ids that stay unique
//! across all blocks of one entry, so a handler translates the local index
//! it reads from a label into a global one by adding a block offset derived
//! from the inflection groups already recorded on the entry.

use regex::{Captures, Regex};

use crate::extractor::context::ParseContext;
use crate::extractor::error::ChainError;

/// A label pattern that may capture a local column index.
///
/// Matching uses unanchored search semantics, so an end-anchored pattern
/// like `Singular( ([1-9]))?$` fires for the composite label
/// "Nominativ Singular" as well as for a bare "Singular 2".
#[derive(Debug)]
pub struct IndexedPattern {
    regex: Regex,
    block_size: u32,
}

impl IndexedPattern {
    /// Compile a pattern for chains with the given block size.
    ///
    /// Returns [`ChainError::Pattern`] for a pattern that does not compile;
    /// this surfaces misconfiguration at chain-construction time rather than
    /// during traversal of input pairs.
    pub fn new(pattern: &str, block_size: u32) -> Result<IndexedPattern, ChainError> {
        debug_assert!(block_size > 0, "block size must be positive");
        let regex = Regex::new(pattern).map_err(|source| ChainError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(IndexedPattern { regex, block_size })
    }

    /// Whether the pattern matches anywhere in the label.
    pub fn is_match(&self, label: &str) -> bool {
        self.regex.is_match(label)
    }

    /// Resolve the label to a block-aligned global index.
    ///
    /// A matching label without a captured numeral defaults to local
    /// index 1. Returns `None` when the pattern does not match at all,
    /// which is unreachable behind a match predicate built on the same
    /// pattern.
    pub fn global_index(&self, label: &str, ctx: &ParseContext<'_>) -> Option<u32> {
        let caps = self.regex.captures(label)?;
        let local = extract_index(&caps).unwrap_or(1);
        Some(local + block_offset(ctx.max_inflection_group(), self.block_size))
    }
}

/// The first capture group that parses as an integer, scanning in order.
fn extract_index(caps: &Captures<'_>) -> Option<u32> {
    caps.iter()
        .skip(1)
        .flatten()
        .find_map(|group| group.as_str().parse().ok())
}

/// Offset that lifts a block's local indices past every global index already
/// assigned to the entry.
///
/// The smallest multiple of `block_size` that is >= `max_group`; 0 when the
/// entry has no word forms yet. Local indices beyond `block_size` alias into
/// the next nominal block; that limitation is inherent to the max-based
/// heuristic and is not corrected here.
pub fn block_offset(max_group: u32, block_size: u32) -> u32 {
    if max_group == 0 {
        0
    } else {
        max_group.div_ceil(block_size) * block_size
    }
}
