use rand::Rng;

use crate::config::PATTERN_POINTS;
use crate::model::Difficulty;

pub const PATTERN_COLORS: [&str; 8] = [
    "#ef4444", "#22c55e", "#3b82f6", "#f59e0b", "#8b5cf6", "#ec4899", "#06b6d4", "#f97316",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternPuzzle {
    /// Side length of the square grid.
    pub size: usize,
    /// Row-major activation mask; length = size * size.
    pub mask: Vec<bool>,
    pub color: &'static str,
}

impl PatternPuzzle {
    /// Cell-by-cell comparison of activation only; color is not part of the answer.
    pub fn matches(&self, attempt: &[bool]) -> bool {
        attempt.len() == self.mask.len() && attempt.iter().zip(&self.mask).all(|(a, m)| a == m)
    }

    pub fn active_count(&self) -> usize {
        self.mask.iter().filter(|&&on| on).count()
    }
}

/// Cross for easy, both diagonals for medium, a diamond for hard.
pub fn activation_mask(difficulty: Difficulty, size: usize) -> Vec<bool> {
    let mut mask = vec![false; size * size];
    let center = size / 2;
    match difficulty {
        Difficulty::Easy => {
            for i in 0..size {
                mask[center * size + i] = true;
                mask[i * size + center] = true;
            }
        }
        Difficulty::Medium => {
            for i in 0..size {
                mask[i * size + i] = true;
                mask[i * size + (size - 1 - i)] = true;
            }
        }
        Difficulty::Hard => {
            for row in 0..size {
                for col in 0..size {
                    let dist = row.abs_diff(center) + col.abs_diff(center);
                    if dist <= 1 || dist == size / 2 {
                        mask[row * size + col] = true;
                    }
                }
            }
        }
    }
    mask
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> PatternPuzzle {
    let size = difficulty.profile().pattern_grid;
    PatternPuzzle {
        size,
        mask: activation_mask(difficulty, size),
        color: PATTERN_COLORS[rng.gen_range(0..PATTERN_COLORS.len())],
    }
}

pub fn points(difficulty: Difficulty) -> i64 {
    difficulty.scale(PATTERN_POINTS)
}
