use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::COLOR_POINTS;
use crate::model::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const PALETTE: [PaletteColor; 8] = [
    PaletteColor { name: "Red", hex: "#ef4444" },
    PaletteColor { name: "Blue", hex: "#3b82f6" },
    PaletteColor { name: "Green", hex: "#22c55e" },
    PaletteColor { name: "Yellow", hex: "#eab308" },
    PaletteColor { name: "Purple", hex: "#a855f7" },
    PaletteColor { name: "Orange", hex: "#f97316" },
    PaletteColor { name: "Pink", hex: "#ec4899" },
    PaletteColor { name: "Cyan", hex: "#06b6d4" },
];

/// The player sees `target.name` and must pick the swatch with the matching hex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPuzzle {
    pub target: PaletteColor,
    pub options: Vec<PaletteColor>,
}

impl ColorPuzzle {
    pub fn is_correct(&self, pick: &PaletteColor) -> bool {
        pick.hex == self.target.hex
    }
}

/// Shuffles `palette`, keeps `count` swatches and picks the target among them.
/// Returns `None` only for an empty palette.
pub fn generate_from<R: Rng + ?Sized>(
    rng: &mut R,
    palette: &[PaletteColor],
    count: usize,
) -> Option<ColorPuzzle> {
    let mut options = palette.to_vec();
    options.shuffle(rng);
    options.truncate(count.clamp(1, palette.len().max(1)));
    let target = *options.choose(rng)?;
    Some(ColorPuzzle { target, options })
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> ColorPuzzle {
    let count = difficulty.profile().color_options;
    generate_from(rng, &PALETTE, count).unwrap_or_else(|| ColorPuzzle {
        target: PALETTE[0],
        options: vec![PALETTE[0]],
    })
}

pub fn points(difficulty: Difficulty) -> i64 {
    difficulty.scale(COLOR_POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn options_are_distinct_and_hold_target_once() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [4, 6, 8] {
            for _ in 0..50 {
                let p = generate_from(&mut rng, &PALETTE, n).unwrap();
                assert_eq!(p.options.len(), n);
                let distinct: HashSet<_> = p.options.iter().map(|c| c.hex).collect();
                assert_eq!(distinct.len(), n);
                assert_eq!(p.options.iter().filter(|c| **c == p.target).count(), 1);
            }
        }
    }

    #[test]
    fn difficulty_picks_option_count() {
        let mut rng = StdRng::seed_from_u64(12);
        assert_eq!(generate(&mut rng, Difficulty::Easy).options.len(), 4);
        assert_eq!(generate(&mut rng, Difficulty::Medium).options.len(), 6);
        assert_eq!(generate(&mut rng, Difficulty::Hard).options.len(), 8);
    }

    #[test]
    fn empty_palette_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(13);
        assert!(generate_from(&mut rng, &[], 4).is_none());
    }

    #[test]
    fn only_target_is_correct() {
        let mut rng = StdRng::seed_from_u64(14);
        let p = generate(&mut rng, Difficulty::Hard);
        let correct: Vec<_> = p.options.iter().filter(|c| p.is_correct(c)).collect();
        assert_eq!(correct, vec![&p.target]);
    }
}
