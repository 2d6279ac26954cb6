// Thin console driver for the drill engine. All the interesting state lives
// in the `Drill` value that gets threaded through the loop.

use rote::classify::{KnnClassifier, NaiveClassifier};
use rote::deck::{filter_by_tag, load_deck, CubesDeck, ListDeck};
use rote::drill::Drill;
use rote::queue::{DrillQueue, Stage};
use rote::traits::{Classifier, Deck, RoteError};

use clap::Parser;
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(about = "Drill through a question deck until everything is retired.")]
struct Args {
    /// Deck file (.txt/.deck with question|answer|tags lines, or .yaml).
    /// Omit to drill generated cube questions instead.
    deck: Option<String>,

    /// Only drill questions carrying this tag.
    #[arg(long)]
    tag: Option<String>,

    /// Judge answers with the first-letter heuristic instead of the
    /// nearest-neighbour classifier.
    #[arg(long)]
    naive: bool,

    /// Shuffle the deck before starting.
    #[arg(long)]
    shuffle: bool,

    /// How many cube questions to generate when no deck file is given.
    #[arg(long, default_value_t = 10)]
    cubes: u64,
}

#[derive(Debug, Clone)]
enum AnswerJudge {
    Naive(NaiveClassifier),
    Knn(KnnClassifier),
}

impl Classifier for AnswerJudge {
    fn classify(&self, text: &str) -> bool {
        match self {
            AnswerJudge::Naive(c) => c.classify(text),
            AnswerJudge::Knn(c) => c.classify(text),
        }
    }
}

fn main() -> Result<(), RoteError> {
    let args = Args::parse();

    let mut questions = match &args.deck {
        Some(path) => load_deck(path)?.questions(),
        None => CubesDeck::new(args.cubes).questions(),
    };
    if let Some(tag) = &args.tag {
        questions = filter_by_tag(&questions, tag);
    }
    if args.shuffle {
        questions = ListDeck::new(questions)
            .shuffled(&mut rand::thread_rng())
            .questions();
    }
    if questions.is_empty() {
        println!("Nothing to drill.");
        return Ok(());
    }

    let judge = if args.naive {
        AnswerJudge::Naive(NaiveClassifier)
    } else {
        AnswerJudge::Knn(KnnClassifier::new())
    };
    let mut drill = Drill::new(DrillQueue::new(questions), judge);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    while let Some(text) = drill.prompt().map(str::to_owned) {
        match drill.queue().stage() {
            Stage::Questioning => {
                println!("\n[{} left] {text}", drill.queue().len());
                print!("(enter to reveal) ");
            }
            Stage::Answering => {
                println!("answer: {text}");
                print!("did you have it right? ");
            }
            Stage::Completed => unreachable!("prompt is None once completed"),
        }
        std::io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        drill = drill.advance(&line);
    }

    println!("\nDone, {} questions retired.", drill.queue().retired().len());
    Ok(())
}
