use rand::Rng;

use crate::config::MEMORY_POINTS;
use crate::model::Difficulty;

/// Cells of the 3x3 board, indexed row-major.
pub const GRID_CELLS: usize = 9;

pub fn sequence_length(difficulty: Difficulty, level: u32) -> usize {
    difficulty.profile().memory_base_len + level as usize
}

/// Independent draws, so a cell may repeat.
pub fn generate_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<usize> {
    (0..len).map(|_| rng.gen_range(0..GRID_CELLS)).collect()
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty, level: u32) -> Vec<usize> {
    generate_sequence(rng, sequence_length(difficulty, level))
}

pub fn points(difficulty: Difficulty) -> i64 {
    difficulty.scale(MEMORY_POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn length_grows_with_level() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(&mut rng, Difficulty::Easy, 1).len(), 4);
        assert_eq!(generate(&mut rng, Difficulty::Medium, 3).len(), 7);
        assert_eq!(generate(&mut rng, Difficulty::Hard, 10).len(), 15);
    }

    #[test]
    fn cells_stay_on_board() {
        let mut rng = StdRng::seed_from_u64(2);
        let seq = generate_sequence(&mut rng, 500);
        assert!(seq.iter().all(|&c| c < GRID_CELLS));
    }
}
