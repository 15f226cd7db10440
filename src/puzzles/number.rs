//! Arithmetic puzzles: free-answer expressions, progression completion and
//! multiple-choice sums.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::NUMBER_POINTS;
use crate::model::Difficulty;

const CHOICE_COUNT: usize = 4;
const MULTIPLY_MAX: i64 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    Arithmetic,
    Sequence,
    MultipleChoice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPuzzle {
    pub kind: NumberKind,
    pub question: String,
    pub answer: i64,
    /// Shuffled choices; empty unless `kind` is `MultipleChoice`.
    pub options: Vec<i64>,
}

impl NumberPuzzle {
    /// Typed answers that do not parse as an integer are simply wrong.
    pub fn check_typed(&self, input: &str) -> bool {
        input.trim().parse::<i64>().is_ok_and(|n| n == self.answer)
    }

    pub fn check_choice(&self, choice: i64) -> bool {
        choice == self.answer
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> NumberPuzzle {
    match rng.gen_range(0..3) {
        0 => generate_arithmetic(rng, difficulty),
        1 => generate_sequence(rng, difficulty),
        _ => generate_multiple_choice(rng, difficulty),
    }
}

pub fn generate_arithmetic<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> NumberPuzzle {
    let profile = difficulty.profile();
    let max = profile.arith_max as i64;
    let ops: &[char] = if profile.allow_multiply {
        &['+', '-', '×']
    } else {
        &['+', '-']
    };
    let a = rng.gen_range(1..=max);
    let b = rng.gen_range(1..=max);
    let (question, answer) = match ops[rng.gen_range(0..ops.len())] {
        '-' => {
            let (hi, lo) = (a.max(b), a.min(b));
            (format!("{} - {}", hi, lo), hi - lo)
        }
        '×' => {
            let x = rng.gen_range(1..=MULTIPLY_MAX);
            let y = rng.gen_range(1..=MULTIPLY_MAX);
            (format!("{} × {}", x, y), x * y)
        }
        _ => (format!("{} + {}", a, b), a + b),
    };
    NumberPuzzle {
        kind: NumberKind::Arithmetic,
        question,
        answer,
        options: Vec::new(),
    }
}

/// Shows the first terms of an arithmetic progression; the answer is the next one.
pub fn generate_sequence<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> NumberPuzzle {
    let terms = difficulty.profile().sequence_terms as i64;
    let step = rng.gen_range(1..=5);
    let start = rng.gen_range(1..=10);
    let shown: Vec<String> = (0..terms).map(|i| (start + i * step).to_string()).collect();
    NumberPuzzle {
        kind: NumberKind::Sequence,
        question: format!("{}, ?", shown.join(", ")),
        answer: start + terms * step,
        options: Vec::new(),
    }
}

pub fn generate_multiple_choice<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: Difficulty,
) -> NumberPuzzle {
    let max = difficulty.profile().choice_max as i64;
    let a = rng.gen_range(1..=max);
    let b = rng.gen_range(1..=max);
    let answer = a + b;
    let mut options = vec![answer];
    // answer >= 2, so answer+1..=answer+9 always leaves enough positive decoys.
    while options.len() < CHOICE_COUNT {
        let decoy = answer + rng.gen_range(-10..10);
        if decoy > 0 && !options.contains(&decoy) {
            options.push(decoy);
        }
    }
    options.shuffle(rng);
    NumberPuzzle {
        kind: NumberKind::MultipleChoice,
        question: format!("{} + {}", a, b),
        answer,
        options,
    }
}

pub fn points(difficulty: Difficulty) -> i64 {
    difficulty.scale(NUMBER_POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn eval(question: &str) -> i64 {
        let parts: Vec<&str> = question.split_whitespace().collect();
        let a: i64 = parts[0].parse().unwrap();
        let b: i64 = parts[2].parse().unwrap();
        match parts[1] {
            "+" => a + b,
            "-" => a - b,
            "×" => a * b,
            op => panic!("unexpected operator {op}"),
        }
    }

    #[test]
    fn multiple_choice_options_are_valid() {
        let mut rng = StdRng::seed_from_u64(21);
        for d in Difficulty::ALL {
            for _ in 0..200 {
                let p = generate_multiple_choice(&mut rng, d);
                assert_eq!(p.options.len(), 4);
                assert_eq!(p.options.iter().filter(|&&o| o == p.answer).count(), 1);
                let distinct: HashSet<_> = p.options.iter().collect();
                assert_eq!(distinct.len(), 4);
                assert!(p.options.iter().all(|&o| o > 0));
                assert_eq!(eval(&p.question), p.answer);
            }
        }
    }

    #[test]
    fn arithmetic_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(22);
        for d in Difficulty::ALL {
            for _ in 0..300 {
                let p = generate_arithmetic(&mut rng, d);
                assert!(p.answer >= 0);
                assert_eq!(eval(&p.question), p.answer);
                assert!(p.options.is_empty());
            }
        }
    }

    #[test]
    fn easy_arithmetic_has_no_multiplication() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..300 {
            let p = generate_arithmetic(&mut rng, Difficulty::Easy);
            assert!(!p.question.contains('×'));
            assert!(p.answer <= 40);
        }
    }

    #[test]
    fn sequence_answer_continues_progression() {
        let mut rng = StdRng::seed_from_u64(24);
        let p = generate_sequence(&mut rng, Difficulty::Medium);
        let terms: Vec<i64> = p
            .question
            .trim_end_matches(", ?")
            .split(", ")
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(terms.len(), 4);
        let step = terms[1] - terms[0];
        assert!(terms.windows(2).all(|w| w[1] - w[0] == step));
        assert_eq!(p.answer, terms[3] + step);
    }

    #[test]
    fn typed_answers_must_parse() {
        let p = NumberPuzzle {
            kind: NumberKind::Arithmetic,
            question: "3 + 4".into(),
            answer: 7,
            options: Vec::new(),
        };
        assert!(p.check_typed(" 7 "));
        assert!(!p.check_typed("seven"));
        assert!(!p.check_typed(""));
        assert!(!p.check_typed("8"));
    }

    #[test]
    fn generate_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(25);
        let kinds: HashSet<_> = (0..100)
            .map(|_| format!("{:?}", generate(&mut rng, Difficulty::Hard).kind))
            .collect();
        assert_eq!(kinds.len(), 3);
    }
}
