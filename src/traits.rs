use crate::question::TaggedQuestion;

pub type RoteError = Box<dyn std::error::Error + Send + Sync>;

/// Something that maps free text to a yes/no verdict.
///
/// The drill only needs this one capability, so anything implementing it is
/// interchangeable; see [`crate::classify`] for the two provided variants.
pub trait Classifier: std::fmt::Debug {
    /// Classify text into a boolean. Must be total, any input produces a
    /// defined result.
    fn classify(&self, text: &str) -> bool;
}

/// Something that produces the initial ordered working set of questions.
///
/// A deck only influences what the queue starts with, never how it
/// transitions.
pub trait Deck: std::fmt::Debug {
    /// Produce the questions, in the order the drill should first ask them.
    fn questions(&self) -> Vec<TaggedQuestion>;
}
