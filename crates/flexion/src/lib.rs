pub mod extractor;
pub mod normalize;
pub mod types;

pub use extractor::{
    ChainError, ExtractionWarning, GenusSlots, HandlerChain, IndexedPattern, NounTableExtractor,
    ParameterHandler, ParseContext, block_offset,
};
pub use normalize::normalize_title;
pub use types::{Case, Entry, Gender, GenusMarker, Number, WordForm};

/// Creates a `Vec<(String, String)>` of (label, value) parameter pairs.
///
/// Labels and values are converted with `to_string`, so string literals can
/// be passed directly.
///
/// # Example
///
/// ```
/// use flexion::pairs;
///
/// let params = pairs! { "Genus" => "m", "Nominativ Singular" => "Hund" };
/// assert_eq!(params.len(), 2);
/// assert_eq!(params[0], ("Genus".to_string(), "m".to_string()));
/// ```
#[macro_export]
macro_rules! pairs {
    {} => {
        ::std::vec::Vec::<(String, String)>::new()
    };
    { $($label:expr => $value:expr),+ $(,)? } => {
        {
            let mut params = ::std::vec::Vec::<(String, String)>::new();
            $(
                params.push(($label.to_string(), $value.to_string()));
            )+
            params
        }
    };
}
