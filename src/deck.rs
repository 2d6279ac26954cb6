use crate::question::{FormatError, TaggedQuestion};
use crate::traits::{Deck, RoteError};
use serde::{Deserialize, Serialize};

/// Deck backed by a caller-supplied list of questions.
#[derive(Debug, Clone, Default)]
pub struct ListDeck {
    questions: Vec<TaggedQuestion>,
}

impl ListDeck {
    pub fn new(questions: Vec<TaggedQuestion>) -> Self {
        ListDeck { questions }
    }

    /// The same deck with its initial order randomized. Only the seed order
    /// changes, the drill transitions are unaffected.
    pub fn shuffled<R: rand::Rng>(mut self, rng: &mut R) -> Self {
        use rand::seq::SliceRandom;
        self.questions.shuffle(rng);
        self
    }
}

impl Deck for ListDeck {
    fn questions(&self) -> Vec<TaggedQuestion> {
        self.questions.clone()
    }
}

/// Procedurally generated deck, "What is n cubed?" for n = 1..=N.
#[derive(Debug, Clone)]
pub struct CubesDeck {
    up_to: u64,
}

impl CubesDeck {
    pub fn new(up_to: u64) -> Self {
        CubesDeck { up_to }
    }
}

impl Deck for CubesDeck {
    fn questions(&self) -> Vec<TaggedQuestion> {
        (1..=self.up_to)
            .map(|n| {
                TaggedQuestion::new(
                    &format!("What is {n} cubed?"),
                    &(n * n * n).to_string(),
                    &["cubes", "generated"],
                )
            })
            .collect()
    }
}

/// A derived bank: the questions carrying `tag`, ignoring case, original
/// order preserved.
pub fn filter_by_tag(questions: &[TaggedQuestion], tag: &str) -> Vec<TaggedQuestion> {
    questions
        .iter()
        .filter(|q| q.has_tag(tag))
        .cloned()
        .collect()
}

/// Representation on disk for yaml decks. Machine readable only.
#[derive(Debug, Default, Deserialize, Serialize)]
struct DeckStorage {
    name: String,
    questions: Vec<TaggedQuestion>,
}

/// Load a deck from disk. `.txt` and `.deck` files hold one pipe-delimited
/// record per line (blank lines and `#` comments skipped), `.yaml` files
/// hold the storage format written by [`save_deck`].
pub fn load_deck(filename: &str) -> Result<ListDeck, RoteError> {
    let contents = std::fs::read_to_string(filename)
        .map_err(|e| format!("failed to open {filename}: {e}"))?;
    if filename.ends_with("yaml") {
        let storage: DeckStorage = serde_yaml::from_str(&contents)?;
        return Ok(ListDeck::new(storage.questions));
    }
    if filename.ends_with("txt") || filename.ends_with("deck") {
        let questions = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::parse)
            .collect::<Result<Vec<TaggedQuestion>, _>>()?;
        return Ok(ListDeck::new(questions));
    }
    Err(Box::new(FormatError::UnsupportedFile(filename.to_owned())))
}

/// Write a deck to a yaml file, overwriting it if present.
pub fn save_deck(filename: &str, name: &str, questions: &[TaggedQuestion]) -> Result<(), RoteError> {
    let storage = DeckStorage {
        name: name.to_owned(),
        questions: questions.to_vec(),
    };
    use std::fs::OpenOptions;
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(filename)?;
    serde_yaml::to_writer(file, &storage)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubes_deck_generates_in_order() {
        let deck = CubesDeck::new(4);
        let questions = deck.questions();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0].question(), "What is 1 cubed?");
        assert_eq!(questions[0].answer(), "1");
        assert_eq!(questions[2].answer(), "27");
        assert_eq!(questions[3].answer(), "64");
        assert!(questions[0].has_tag("cubes"));
    }

    #[test]
    fn both_backends_feed_the_same_queue_contract() {
        use crate::queue::{DrillQueue, Stage};
        let decks: Vec<Box<dyn Deck>> = vec![
            Box::new(ListDeck::new(vec![
                TaggedQuestion::new("q1", "a1", &[]),
                TaggedQuestion::new("q2", "a2", &[]),
            ])),
            Box::new(CubesDeck::new(2)),
        ];
        for deck in &decks {
            let mut state = DrillQueue::new(deck.questions());
            assert_eq!(state.len(), 2);
            state = state.reveal().judge(false);
            assert_eq!(state.len(), 2);
            state = state.reveal().judge(true);
            state = state.reveal().judge(true);
            assert_eq!(state.stage(), Stage::Completed);
        }
    }

    #[test]
    fn shuffle_keeps_the_same_questions() {
        use rand::SeedableRng;
        let questions: Vec<TaggedQuestion> = (0..20)
            .map(|n| TaggedQuestion::new(&format!("q{n}"), "a", &[]))
            .collect();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let shuffled = ListDeck::new(questions.clone()).shuffled(&mut rng).questions();
        assert_eq!(shuffled.len(), questions.len());
        for q in &questions {
            assert!(shuffled.contains(q));
        }
    }

    #[test]
    fn filter_by_tag_keeps_order() {
        let questions = vec![
            TaggedQuestion::new("q1", "a", &["geo"]),
            TaggedQuestion::new("q2", "a", &["math"]),
            TaggedQuestion::new("q3", "a", &["GEO", "math"]),
        ];
        let geo = filter_by_tag(&questions, "geo");
        assert_eq!(geo.len(), 2);
        assert_eq!(geo[0].question(), "q1");
        assert_eq!(geo[1].question(), "q3");
    }

    #[test]
    fn loads_pipe_records_and_skips_comments() {
        let dir = std::env::temp_dir().join("rote_deck_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("basic.txt");
        std::fs::write(
            &path,
            "# capitals\nCapital of Italy?|Rome|geo\n\nCapital of France?|Paris|geo\n",
        )
        .unwrap();
        let deck = load_deck(path.to_str().unwrap()).unwrap();
        let questions = deck.questions();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].answer(), "Paris");
    }

    #[test]
    fn malformed_record_fails_the_load() {
        let dir = std::env::temp_dir().join("rote_deck_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.txt");
        std::fs::write(&path, "only one field\n").unwrap();
        assert!(load_deck(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn yaml_roundtrip() {
        let dir = std::env::temp_dir().join("rote_deck_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deck.yaml");
        let questions = vec![TaggedQuestion::new("q", "a", &["t"])];
        save_deck(path.to_str().unwrap(), "test deck", &questions).unwrap();
        let loaded = load_deck(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.questions(), questions);
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let dir = std::env::temp_dir().join("rote_deck_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deck.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(load_deck(path.to_str().unwrap()).is_err());
    }
}
