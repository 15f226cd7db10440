pub mod memory_round;
pub mod pattern_board;
pub mod speed_clock;

pub use memory_round::{MemoryRound, Press};
pub use pattern_board::PatternBoard;
pub use speed_clock::{SpeedClock, SpeedPhase};

/// Shared by the rounds that first show something, then take input, then show the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    Showing,
    Input,
    Result,
}
