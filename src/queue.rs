use crate::question::TaggedQuestion;
use serde::{Deserialize, Serialize};

/// What the drill is currently showing for the head question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Stage {
    /// Showing the question text, waiting for a reveal.
    Questioning,
    /// Showing the answer text, waiting for a judgement.
    Answering,
    /// Nothing left, terminal.
    Completed,
}

/// The rotating question queue.
///
/// Every transition returns a new value and leaves `self` untouched, so old
/// snapshots stay valid; two sessions can branch from a common ancestor
/// without affecting each other. The head of `remaining` is the question on
/// display. Judged wrong it rotates to the back, judged right it moves to
/// `retired` and never comes back.
///
/// Invariant: the stage is `Completed` exactly when `remaining` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DrillQueue {
    remaining: Vec<TaggedQuestion>,
    stage: Stage,
    retired: Vec<TaggedQuestion>,
}

impl DrillQueue {
    /// Start a drill over the provided questions, in order. An empty list
    /// starts (and ends) in `Completed`.
    pub fn new(questions: Vec<TaggedQuestion>) -> Self {
        let stage = if questions.is_empty() {
            Stage::Completed
        } else {
            Stage::Questioning
        };
        DrillQueue {
            remaining: questions,
            stage,
            retired: vec![],
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The text to display: question when questioning, answer when
    /// answering, nothing when completed.
    pub fn current_text(&self) -> Option<&str> {
        let head = self.remaining.first()?;
        match self.stage {
            Stage::Questioning => Some(head.question()),
            Stage::Answering => Some(head.answer()),
            Stage::Completed => None,
        }
    }

    /// Flip the head question over to its answer. In any other stage this is
    /// a no-op returning an equal value, not an error.
    pub fn reveal(&self) -> DrillQueue {
        match self.stage {
            Stage::Questioning => DrillQueue {
                stage: Stage::Answering,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }

    /// Judge the revealed answer. Correct retires the head, incorrect
    /// rotates it to the back of the queue to come around again. Outside the
    /// answering stage this is a no-op.
    pub fn judge(&self, was_correct: bool) -> DrillQueue {
        if self.stage != Stage::Answering {
            return self.clone();
        }
        let mut remaining = self.remaining.clone();
        let mut retired = self.retired.clone();
        // Answering implies non-empty, the head exists.
        let head = remaining.remove(0);
        if was_correct {
            retired.push(head);
        } else {
            remaining.push(head);
        }
        let stage = if remaining.is_empty() {
            Stage::Completed
        } else {
            Stage::Questioning
        };
        DrillQueue {
            remaining,
            stage,
            retired,
        }
    }

    /// Number of questions still in play.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The live working set, head first. For derived banks and filtering,
    /// the drill loop itself never needs it.
    pub fn questions(&self) -> &[TaggedQuestion] {
        &self.remaining
    }

    /// Questions answered correctly, in retirement order.
    pub fn retired(&self) -> &[TaggedQuestion] {
        &self.retired
    }
}
