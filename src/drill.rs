use crate::queue::{DrillQueue, Stage};
use crate::traits::Classifier;

/*
Supports the generic driver flow;

    Load deck
    Pick classifier
    Create Drill(deck questions, classifier)

    Show prompt
    Obtain line of input
    Advance

    Go to show prompt, until the prompt is gone.
*/

/// A drill session: the question queue plus the classifier that judges
/// free-text answers.
///
/// Like the queue itself this is an immutable value, `advance` returns the
/// next session state. The classifier travels inside the value rather than
/// in any ambient storage, so a driver threads exactly one thing.
#[derive(Debug, Clone)]
pub struct Drill<C: Classifier> {
    queue: DrillQueue,
    classifier: C,
}

impl<C: Classifier> Drill<C> {
    pub fn new(queue: DrillQueue, classifier: C) -> Self {
        Drill { queue, classifier }
    }

    /// The text to put in front of the learner, `None` once the drill is
    /// done.
    pub fn prompt(&self) -> Option<&str> {
        self.queue.current_text()
    }

    /// Step the session with one line of learner input.
    ///
    /// While questioning, any input reveals the answer. While answering, the
    /// input is classified into a correctness verdict and the head question
    /// is judged by it. Once completed this is a no-op.
    pub fn advance(&self, line: &str) -> Drill<C>
    where
        C: Clone,
    {
        let queue = match self.queue.stage() {
            Stage::Questioning => self.queue.reveal(),
            Stage::Answering => self.queue.judge(self.classifier.classify(line)),
            Stage::Completed => self.queue.clone(),
        };
        Drill {
            queue,
            classifier: self.classifier.clone(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.queue.stage() == Stage::Completed
    }

    pub fn queue(&self) -> &DrillQueue {
        &self.queue
    }
}
