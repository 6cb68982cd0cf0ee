//! Error and warning types for the extraction engine.

use thiserror::Error;

/// An error raised while assembling a handler chain.
///
/// Chain construction is the only fallible step of the engine; once a chain
/// exists, traversing input pairs has no error outcomes.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A handler was configured with a pattern that does not compile.
    #[error("invalid handler pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A non-fatal anomaly observed while extracting word forms.
///
/// Extraction is permissive: anomalies are recorded on the parsing context
/// and never abort processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionWarning {
    /// A genus label carried a value no known marker spelling matches.
    #[error("unrecognized genus marker '{value}'")]
    UnknownGenus { value: String },
}
