use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to interpret serialized drill data.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    /// A pipe-delimited question record had fewer than three fields.
    #[error("malformed question record (expected question|answer|tags): {0:?}")]
    MalformedRecord(String),

    /// A deck file extension we do not know how to read.
    #[error("file type not supported for {0:?}, use .txt, .deck or .yaml")]
    UnsupportedFile(String),
}

/// A question, its answer, and the tags it can be filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaggedQuestion {
    question: String,
    answer: String,
    tags: Vec<String>,
}

impl TaggedQuestion {
    pub fn new(question: &str, answer: &str, tags: &[&str]) -> Self {
        TaggedQuestion {
            question: question.to_owned(),
            answer: answer.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tag membership, ignoring ascii case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Parses the `question|answer|comma,separated,tags` record encoding.
///
/// Fails fast on records with fewer than three fields rather than defaulting
/// anything. An empty tag field yields no tags.
impl std::str::FromStr for TaggedQuestion {
    type Err = FormatError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.splitn(3, '|');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(question), Some(answer), Some(tags)) => Ok(TaggedQuestion {
                question: question.to_owned(),
                answer: answer.to_owned(),
                tags: tags
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_owned)
                    .collect(),
            }),
            _ => Err(FormatError::MalformedRecord(line.to_owned())),
        }
    }
}
