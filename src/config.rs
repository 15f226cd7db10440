//! Game tunables. Everything difficulty-dependent lives in [`DifficultyProfile`].

use crate::model::Difficulty;

/// A run ends once the level counter passes this value.
pub const MAX_LEVEL: u32 = 10;
/// Countdown tick period.
pub const TICK_MS: u32 = 1000;
/// Delay between the countdown reaching zero and the run ending.
pub const END_GAME_DELAY_MS: u32 = 100;
/// `localStorage` key of the persisted high-score record.
pub const HIGH_SCORE_KEY: &str = "puzzleHighScores";
/// Time budget shown before any run has started.
pub const IDLE_TIME_LEFT: u32 = 30;

// Base points per solved puzzle, scaled by `DifficultyProfile::score_multiplier`.
pub const MEMORY_POINTS: i64 = 10;
pub const COLOR_POINTS: i64 = 15;
pub const NUMBER_POINTS: i64 = 20;
pub const PATTERN_POINTS: i64 = 25;
pub const LOGIC_POINTS: i64 = 30;

/// Milliseconds each memory cell stays lit while the sequence is shown.
pub const MEMORY_STEP_MS: u32 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub time_limit_secs: u32,
    pub score_multiplier: i64,
    /// Memory sequence length before the level is added.
    pub memory_base_len: usize,
    pub color_options: usize,
    pub pattern_grid: usize,
    pub pattern_reveal_ms: u32,
    /// Upper bound of operands in free-answer arithmetic.
    pub arith_max: u32,
    /// Upper bound of operands in multiple-choice addition.
    pub choice_max: u32,
    /// Visible terms of an arithmetic progression puzzle.
    pub sequence_terms: usize,
    pub allow_multiply: bool,
    pub speed_base_secs: u32,
}

const EASY: DifficultyProfile = DifficultyProfile {
    time_limit_secs: 45,
    score_multiplier: 1,
    memory_base_len: 3,
    color_options: 4,
    pattern_grid: 3,
    pattern_reveal_ms: 3000,
    arith_max: 20,
    choice_max: 50,
    sequence_terms: 3,
    allow_multiply: false,
    speed_base_secs: 5,
};

const MEDIUM: DifficultyProfile = DifficultyProfile {
    time_limit_secs: 35,
    score_multiplier: 2,
    memory_base_len: 4,
    color_options: 6,
    pattern_grid: 4,
    pattern_reveal_ms: 2500,
    arith_max: 50,
    choice_max: 100,
    sequence_terms: 4,
    allow_multiply: true,
    speed_base_secs: 3,
};

const HARD: DifficultyProfile = DifficultyProfile {
    time_limit_secs: 25,
    score_multiplier: 3,
    memory_base_len: 5,
    color_options: 8,
    pattern_grid: 5,
    pattern_reveal_ms: 2000,
    arith_max: 100,
    choice_max: 200,
    sequence_terms: 5,
    allow_multiply: true,
    speed_base_secs: 2,
};

impl Difficulty {
    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    pub fn time_limit(self) -> u32 {
        self.profile().time_limit_secs
    }

    /// Scales a puzzle's base points by this difficulty's multiplier.
    pub fn scale(self, base: i64) -> i64 {
        base * self.profile().score_multiplier
    }
}
