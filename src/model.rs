//! Core data models for Puzzle Rush.
//! Session state, the persisted high-score record and the actions the view layer dispatches.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::IDLE_TIME_LEFT;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PuzzleType {
    #[default]
    Memory,
    Color,
    Number,
    Pattern,
    Logic,
    Speed,
}

impl PuzzleType {
    pub const ALL: [PuzzleType; 6] = [
        PuzzleType::Memory,
        PuzzleType::Color,
        PuzzleType::Number,
        PuzzleType::Pattern,
        PuzzleType::Logic,
        PuzzleType::Speed,
    ];

    /// Uniform pick; the previous type may come up again.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            PuzzleType::Memory => "Memory",
            PuzzleType::Color => "Colors",
            PuzzleType::Number => "Numbers",
            PuzzleType::Pattern => "Patterns",
            PuzzleType::Logic => "Logic",
            PuzzleType::Speed => "Speed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Menu,
    DifficultySelect,
    Playing,
    Results,
}

/// Best score per difficulty plus the running total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScores {
    pub easy: i64,
    pub medium: i64,
    pub hard: i64,
    pub total: i64,
}

impl HighScores {
    pub fn best(&self, difficulty: Difficulty) -> i64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn best_mut(&mut self, difficulty: Difficulty) -> &mut i64 {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Folds a finished run into the record and reports whether it beat the stored best.
    ///
    /// `total` becomes `max(previous total, easy + medium + hard)`, so it never shrinks
    /// even when it drifts away from the plain sum.
    pub fn record_run(&mut self, difficulty: Difficulty, score: i64) -> bool {
        let previous_total = self.total;
        let beaten = score > self.best(difficulty);
        if beaten {
            *self.best_mut(difficulty) = score;
        }
        let sum = self
            .easy
            .saturating_add(self.medium)
            .saturating_add(self.hard);
        self.total = sum.max(previous_total);
        beaten
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub current_puzzle_type: PuzzleType,
    pub score: i64,
    /// 1-based position within the run.
    pub level: u32,
    /// Seconds left on the current puzzle.
    pub time_left: u32,
    pub high_scores: HighScores,
    pub is_new_high_score: bool,
    /// Bumped whenever a run starts over, so puzzle views remount even on the same level.
    pub run: u32,
}

impl GameState {
    pub fn new(high_scores: HighScores) -> Self {
        Self {
            phase: Phase::Menu,
            difficulty: Difficulty::Easy,
            current_puzzle_type: PuzzleType::Memory,
            score: 0,
            level: 1,
            time_left: IDLE_TIME_LEFT,
            high_scores,
            is_new_high_score: false,
            run: 0,
        }
    }

    /// Fraction of the current puzzle's budget still available, in `0.0..=1.0`.
    pub fn time_fraction(&self) -> f64 {
        let budget = self.difficulty.time_limit().max(1);
        (self.time_left as f64 / budget as f64).clamp(0.0, 1.0)
    }

    /// Rates the run against 20 points per level reached.
    pub fn performance(&self) -> Performance {
        let expected = (self.level.max(1) as f64) * 20.0;
        let pct = self.score as f64 / expected * 100.0;
        if pct >= 90.0 {
            Performance::Excellent
        } else if pct >= 70.0 {
            Performance::Great
        } else if pct >= 50.0 {
            Performance::Good
        } else {
            Performance::KeepPracticing
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Performance {
    Excellent,
    Great,
    Good,
    KeepPracticing,
}

impl Performance {
    pub fn message(self) -> &'static str {
        match self {
            Performance::Excellent => "Outstanding performance! 🏆",
            Performance::Great => "Very good performance! 🌟",
            Performance::Good => "Good performance! 👍",
            Performance::KeepPracticing => "Keep practicing! 💪",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Performance::Excellent => "#d4af37",
            Performance::Great => "#3fb950",
            Performance::Good => "#58a6ff",
            Performance::KeepPracticing => "#8b949e",
        }
    }
}

// ---------------- Actions -----------------
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameAction {
    StartGame,
    SelectDifficulty(Difficulty),
    AddScore(i64),
    NextPuzzle,
    ResetGame,
    RestartGame,
    BackToMenu,
    EndGame,
    DecrementTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn record_run_matches_reconciliation_example() {
        let mut hs = HighScores { easy: 10, medium: 20, hard: 5, total: 35 };
        assert!(hs.record_run(Difficulty::Hard, 8));
        assert_eq!(hs, HighScores { easy: 10, medium: 20, hard: 8, total: 38 });
    }

    #[test]
    fn record_run_keeps_larger_previous_total() {
        let mut hs = HighScores { easy: 1, medium: 1, hard: 1, total: 100 };
        assert!(!hs.record_run(Difficulty::Easy, 1));
        assert_eq!(hs.total, 100);
        assert_eq!(hs.easy, 1);
    }

    #[test]
    fn equal_score_is_not_a_new_record() {
        let mut hs = HighScores { easy: 40, ..Default::default() };
        assert!(!hs.record_run(Difficulty::Easy, 40));
        assert_eq!(hs.total, 40);
    }

    #[test]
    fn performance_is_relative_to_level() {
        let mut st = GameState::new(HighScores::default());
        st.level = 5;
        st.score = 90;
        assert_eq!(st.performance(), Performance::Excellent);
        st.score = 70;
        assert_eq!(st.performance(), Performance::Great);
        st.score = 50;
        assert_eq!(st.performance(), Performance::Good);
        st.score = 49;
        assert_eq!(st.performance(), Performance::KeepPracticing);
    }

    #[test]
    fn time_fraction_uses_difficulty_budget() {
        let mut st = GameState::new(HighScores::default());
        st.difficulty = Difficulty::Hard;
        st.time_left = 5;
        assert!((st.time_fraction() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn random_puzzle_type_reaches_every_variant() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(PuzzleType::random(&mut rng));
        }
        assert_eq!(seen.len(), PuzzleType::ALL.len());
    }

    #[test]
    fn high_scores_serialize_with_lowercase_keys() {
        let hs = HighScores { easy: 1, medium: 2, hard: 3, total: 6 };
        let json = serde_json::to_string(&hs).unwrap();
        assert_eq!(json, r#"{"easy":1,"medium":2,"hard":3,"total":6}"#);
    }
}
