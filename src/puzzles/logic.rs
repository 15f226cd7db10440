//! Hand-written logic riddles: number sequences, analogies and odd-one-out.

use rand::Rng;

use crate::config::LOGIC_POINTS;
use crate::model::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicFamily {
    Sequence,
    Analogy,
    OddOneOut,
}

impl LogicFamily {
    pub const ALL: [LogicFamily; 3] = [LogicFamily::Sequence, LogicFamily::Analogy, LogicFamily::OddOneOut];

    pub fn title(self) -> &'static str {
        match self {
            LogicFamily::Sequence => "Logical sequence",
            LogicFamily::Analogy => "Analogy",
            LogicFamily::OddOneOut => "Odd one out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogicQuestion {
    pub family: LogicFamily,
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`.
    pub correct: usize,
    pub explanation: &'static str,
}

impl LogicQuestion {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

const fn q(
    family: LogicFamily,
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
) -> LogicQuestion {
    LogicQuestion { family, question, options, correct, explanation }
}

use LogicFamily::{Analogy, OddOneOut, Sequence};

const SEQUENCES: [LogicQuestion; 3] = [
    q(Sequence, "What comes next: 2, 4, 8, 16, ?", ["24", "32", "20", "18"], 1,
        "Each number doubles the previous one (16 × 2 = 32)."),
    q(Sequence, "Complete the sequence: 1, 4, 9, 16, ?", ["20", "24", "25", "30"], 2,
        "These are the squares 1², 2², 3², 4², so next is 5² = 25."),
    q(Sequence, "What comes next: 3, 6, 12, 24, ?", ["36", "48", "42", "50"], 1,
        "Each number doubles the previous one (24 × 2 = 48)."),
];
const SEQUENCE_HARD: LogicQuestion = q(Sequence, "Complete: 1, 1, 2, 3, 5, 8, ?", ["11", "13", "15", "10"], 1,
    "Fibonacci: each term is the sum of the two before it (5 + 8 = 13).");

const ANALOGIES: [LogicQuestion; 3] = [
    q(Analogy, "Pen : writing = knife : ?", ["cooking", "cutting", "kitchen", "food"], 1,
        "A pen is used for writing and a knife is used for cutting."),
    q(Analogy, "Sun : day = moon : ?", ["darkness", "night", "stars", "sky"], 1,
        "The sun shows by day and the moon shows by night."),
    q(Analogy, "Eye : sight = ear : ?", ["sound", "hearing", "music", "speech"], 1,
        "The eye is for seeing and the ear is for hearing."),
];
const ANALOGY_HARD: LogicQuestion = q(Analogy, "Doctor : illness = teacher : ?", ["school", "students", "ignorance", "book"], 2,
    "A doctor cures illness and a teacher cures ignorance.");

const ODD_ONE_OUT: [LogicQuestion; 3] = [
    q(OddOneOut, "Which word does not belong?", ["apple", "banana", "orange", "carrot"], 3,
        "A carrot is a vegetable; the rest are fruit."),
    q(OddOneOut, "Which number is different?", ["2", "4", "6", "9"], 3,
        "9 is odd; the rest are even."),
    q(OddOneOut, "Which animal is different?", ["dog", "cat", "lion", "fish"], 3,
        "A fish lives in water; the rest live on land."),
];
const ODD_ONE_OUT_HARD: LogicQuestion = q(OddOneOut, "Which word is different?", ["wheat", "rice", "barley", "iron"], 3,
    "Iron is a metal; the rest are grains.");

/// Questions available for `family`; hard adds one tougher item per family.
pub fn bank(family: LogicFamily, difficulty: Difficulty) -> Vec<LogicQuestion> {
    let (base, hard) = match family {
        Sequence => (&SEQUENCES, SEQUENCE_HARD),
        Analogy => (&ANALOGIES, ANALOGY_HARD),
        OddOneOut => (&ODD_ONE_OUT, ODD_ONE_OUT_HARD),
    };
    let mut items = base.to_vec();
    if difficulty == Difficulty::Hard {
        items.push(hard);
    }
    items
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> LogicQuestion {
    let family = LogicFamily::ALL[rng.gen_range(0..LogicFamily::ALL.len())];
    let items = bank(family, difficulty);
    items[rng.gen_range(0..items.len())]
}

pub fn points(difficulty: Difficulty) -> i64 {
    difficulty.scale(LOGIC_POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn banks_are_well_formed() {
        for family in LogicFamily::ALL {
            for d in Difficulty::ALL {
                for item in bank(family, d) {
                    assert_eq!(item.family, family);
                    assert!(item.correct < item.options.len());
                    let distinct: HashSet<_> = item.options.iter().collect();
                    assert_eq!(distinct.len(), 4, "duplicate option in {:?}", item.question);
                    assert!(!item.explanation.is_empty());
                }
            }
        }
    }

    #[test]
    fn hard_unlocks_extra_items() {
        for family in LogicFamily::ALL {
            assert_eq!(bank(family, Difficulty::Easy).len(), 3);
            assert_eq!(bank(family, Difficulty::Medium).len(), 3);
            assert_eq!(bank(family, Difficulty::Hard).len(), 4);
        }
    }

    #[test]
    fn easy_never_draws_hard_items() {
        let mut rng = StdRng::seed_from_u64(41);
        let hard = [SEQUENCE_HARD, ANALOGY_HARD, ODD_ONE_OUT_HARD];
        for _ in 0..300 {
            let item = generate(&mut rng, Difficulty::Easy);
            assert!(!hard.contains(&item));
        }
    }
}
