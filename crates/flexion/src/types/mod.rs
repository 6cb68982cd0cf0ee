mod entry;
mod genus_marker;
mod grammar;
mod word_form;

pub use entry::Entry;
pub use genus_marker::GenusMarker;
pub use grammar::{Case, Gender, Number};
pub use word_form::WordForm;
