use serde::{Deserialize, Serialize};

use super::Gender;

/// A gender marker as written in German inflection-table templates.
///
/// Template authors abbreviate freely (`m`, `m.`, `mask.`), and a handful of
/// entries mark the gender as unknown or not applicable (`x`, `0`). The
/// marker keeps that distinction: an indeterminate marker parses successfully
/// but maps to no [`Gender`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenusMarker {
    Maskulinum,
    Femininum,
    Neutrum,
    Indeterminate,
}

impl GenusMarker {
    /// Parse a template value into a genus marker.
    ///
    /// Accepts the abbreviated, dotted, and spelled-out spellings found in
    /// organically edited templates, case-insensitively. Returns `None` for
    /// anything else.
    pub fn parse(text: &str) -> Option<GenusMarker> {
        let token = text.trim().trim_end_matches('.').to_ascii_lowercase();
        match token.as_str() {
            "m" | "mask" | "maskulinum" => Some(GenusMarker::Maskulinum),
            "f" | "fem" | "femininum" => Some(GenusMarker::Femininum),
            "n" | "neutr" | "neutrum" => Some(GenusMarker::Neutrum),
            "x" | "0" => Some(GenusMarker::Indeterminate),
            _ => None,
        }
    }

    /// The grammatical gender this marker denotes, if it denotes one.
    pub fn gender(self) -> Option<Gender> {
        match self {
            GenusMarker::Maskulinum => Some(Gender::Masculine),
            GenusMarker::Femininum => Some(Gender::Feminine),
            GenusMarker::Neutrum => Some(Gender::Neuter),
            GenusMarker::Indeterminate => None,
        }
    }
}
