//! Content generators for the six puzzle types.
//!
//! Generators take the random source explicitly so callers can inject a seeded
//! one; the views pass `rand::thread_rng()`.

pub mod color;
pub mod logic;
pub mod memory;
pub mod number;
pub mod pattern;
pub mod speed;

pub use color::{ColorPuzzle, PaletteColor};
pub use logic::{LogicFamily, LogicQuestion};
pub use number::{NumberKind, NumberPuzzle};
pub use pattern::PatternPuzzle;
pub use speed::{SpeedChallenge, SpeedRound};
