//! Study drill functionality.

// The drill loop is deliberately dumb: show question, reveal answer, judge.
// Questions judged wrong rotate to the back of the queue, questions judged
// right retire, done when nothing is left. The judgement itself can come
// from free text through a small nearest-neighbour classifier.

/// Main traits
pub mod traits;

// / Question value type and record parsing.
pub mod question;

// / The rotating question queue.
pub mod queue;

// / Edit distance between strings.
pub mod distance;

// / Free text yes/no classifiers.
pub mod classify;

// / Deck backends and storage.
pub mod deck;

// / Composition of queue and classifier for a driver loop.
pub mod drill;
