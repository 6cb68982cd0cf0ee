use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{Case, Gender, Number};

/// One inflected surface form extracted from a template invocation.
///
/// Word forms are decorated attribute by attribute while the parameters of
/// one template invocation are processed, and are immutable once appended to
/// an [`Entry`](super::Entry). Every categorical attribute is independently
/// optional; noisy source data routinely yields forms with only some of them
/// set.
///
/// # Example
///
/// ```
/// use flexion::{Case, Number, WordForm};
///
/// let form = WordForm::builder()
///     .form("Hunde".to_string())
///     .case(Case::Nominative)
///     .number(Number::Plural)
///     .build();
///
/// assert_eq!(form.form.as_deref(), Some("Hunde"));
/// assert_eq!(form.inflection_group, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct WordForm {
    /// The surface text, absent for table cells with no written form.
    pub form: Option<String>,

    /// Grammatical case, when a case-bearing label was seen.
    pub case: Option<Case>,

    /// Grammatical number, when a number-bearing label was seen.
    pub number: Option<Number>,

    /// Grammatical gender, explicit or inherited from the genus slot of the
    /// form's inflection group.
    pub gender: Option<Gender>,

    /// The table block this form belongs to. Always >= 1; forms that never
    /// pass through an indexed handler stay in group 1.
    #[builder(default = 1)]
    pub inflection_group: u32,
}

impl WordForm {
    /// Returns an empty word form with no text and no attributes.
    pub fn empty() -> WordForm {
        WordForm::default()
    }
}

impl Default for WordForm {
    fn default() -> Self {
        WordForm {
            form: None,
            case: None,
            number: None,
            gender: None,
            inflection_group: 1,
        }
    }
}
