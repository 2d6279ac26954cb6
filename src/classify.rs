use crate::distance::edit_distance;
use crate::traits::Classifier;
use serde::{Deserialize, Serialize};

/// A reference phrase with its known yes/no label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LabeledExample {
    example: String,
    label: bool,
}

impl LabeledExample {
    pub fn new(example: &str, label: bool) -> Self {
        LabeledExample {
            example: example.to_owned(),
            label,
        }
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn label(&self) -> bool {
        self.label
    }
}

/// The first `k` entries of `items` ranked by `metric`, highest first.
///
/// The sort is stable, entries with equal metric keep their original
/// relative order. Usable for any scoring, the classifier below feeds it a
/// negated distance.
pub fn top_k<'a, T, M, S>(items: &'a [T], metric: M, k: usize) -> Vec<&'a T>
where
    M: Fn(&T) -> S,
    S: PartialOrd,
{
    let mut scored: Vec<(&T, S)> = items.iter().map(|item| (item, metric(item))).collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(k).map(|(item, _)| item).collect()
}

/// Built-in yes/no reference phrases, nine of each.
pub fn yes_no_examples() -> Vec<LabeledExample> {
    [
        ("yes", true),
        ("no", false),
        ("yeah", true),
        ("nope", false),
        ("yep", true),
        ("nah", false),
        ("yup", true),
        ("nay", false),
        ("negative", false),
        ("affirmative", true),
        ("never", false),
        ("not really", false),
        ("sure", true),
        ("by no means", false),
        ("indeed", true),
        ("absolutely not", false),
        ("ok", true),
        ("certainly", true),
    ]
    .iter()
    .map(|(e, l)| LabeledExample::new(e, *l))
    .collect()
}

/// Nearest-neighbour yes/no classifier over a labeled reference set.
///
/// A query matching a reference phrase exactly (ignoring case) takes that
/// label directly. Otherwise the `k` reference phrases closest in edit
/// distance vote by majority, with a tie counting as no.
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    examples: Vec<LabeledExample>,
    k: usize,
}

impl KnnClassifier {
    /// Classifier over the built-in reference set with k = 3.
    pub fn new() -> Self {
        Self::with_examples(yes_no_examples(), 3)
    }

    pub fn with_examples(examples: Vec<LabeledExample>, k: usize) -> Self {
        KnnClassifier { examples, k }
    }

    /// Like [`Classifier::classify`], but also reports how many of the `k`
    /// nearest neighbours voted for the winning label. An exact match counts
    /// as unanimous.
    ///
    /// Both sides are lowercased, so matching and distance ignore case no
    /// matter how the reference set is spelled.
    pub fn classify_with_votes(&self, text: &str) -> (bool, usize) {
        let query = text.to_lowercase();
        if let Some(hit) = self
            .examples
            .iter()
            .find(|e| e.example.to_lowercase() == query)
        {
            return (hit.label, self.k);
        }
        let nearest = top_k(
            &self.examples,
            |e| -(edit_distance(&query, &e.example.to_lowercase()) as i64),
            self.k,
        );
        let yes_votes = nearest.iter().filter(|e| e.label).count();
        let no_votes = nearest.len() - yes_votes;
        // A tie is a no.
        if yes_votes > no_votes {
            (true, yes_votes)
        } else {
            (false, no_votes)
        }
    }
}

impl Default for KnnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for KnnClassifier {
    fn classify(&self, text: &str) -> bool {
        self.classify_with_votes(text).0
    }
}

/// Trivial heuristic, yes iff the input starts with a `y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveClassifier;

impl Classifier for NaiveClassifier {
    fn classify(&self, text: &str) -> bool {
        text.to_uppercase().starts_with('Y')
    }
}
