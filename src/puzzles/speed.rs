use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::Difficulty;

pub const GLYPHS: [char; 4] = ['●', '■', '▲', '♦'];
pub const COLOR_NAMES: [&str; 5] = ["Red", "Blue", "Green", "Yellow", "Purple"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeedChallenge {
    /// Press as soon as the button appears.
    Reaction { time_limit: u32 },
    /// Count the repeated glyph.
    Counting { glyph: char, count: u32, time_limit: u32 },
    /// Pick the named color among shuffled names.
    Matching { target: &'static str, options: Vec<&'static str>, time_limit: u32 },
}

impl SpeedChallenge {
    pub fn time_limit(&self) -> u32 {
        match self {
            SpeedChallenge::Reaction { time_limit }
            | SpeedChallenge::Counting { time_limit, .. }
            | SpeedChallenge::Matching { time_limit, .. } => *time_limit,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SpeedChallenge::Reaction { .. } => "Reaction challenge",
            SpeedChallenge::Counting { .. } => "Quick count",
            SpeedChallenge::Matching { .. } => "Quick match",
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            SpeedChallenge::Reaction { .. } => "Press as soon as the green button shows!".to_string(),
            SpeedChallenge::Counting { glyph, count, .. } => {
                let row: String = std::iter::repeat(*glyph).take(*count as usize).collect();
                format!("How many {}? {}", glyph, row)
            }
            SpeedChallenge::Matching { target, .. } => format!("Pick: {}", target),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeedRound {
    pub challenge: SpeedChallenge,
    /// Wait before the challenge appears.
    pub start_delay_ms: u32,
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> SpeedRound {
    let base = difficulty.profile().speed_base_secs;
    let challenge = match rng.gen_range(0..3) {
        0 => SpeedChallenge::Reaction { time_limit: base },
        1 => SpeedChallenge::Counting {
            glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            count: rng.gen_range(5..15),
            time_limit: base + 2,
        },
        _ => {
            let target = COLOR_NAMES[rng.gen_range(0..COLOR_NAMES.len())];
            let mut options = COLOR_NAMES.to_vec();
            options.shuffle(rng);
            SpeedChallenge::Matching { target, options, time_limit: base + 1 }
        }
    };
    SpeedRound {
        challenge,
        start_delay_ms: rng.gen_range(1000..3000),
    }
}

pub fn reaction_points(elapsed_ms: f64, difficulty: Difficulty) -> i64 {
    let base = if elapsed_ms < 500.0 {
        50
    } else if elapsed_ms < 1000.0 {
        30
    } else if elapsed_ms < 1500.0 {
        20
    } else {
        10
    };
    difficulty.scale(base)
}

pub fn counting_points(secs_left: u32, difficulty: Difficulty) -> i64 {
    difficulty.scale(25 + 5 * secs_left as i64)
}

pub fn matching_points(secs_left: u32, difficulty: Difficulty) -> i64 {
    difficulty.scale(20 + 3 * secs_left as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn limits_follow_difficulty() {
        let mut rng = StdRng::seed_from_u64(51);
        for _ in 0..200 {
            let round = generate(&mut rng, Difficulty::Medium);
            assert!((1000..3000).contains(&round.start_delay_ms));
            let expected = match round.challenge {
                SpeedChallenge::Reaction { .. } => 3,
                SpeedChallenge::Counting { count, .. } => {
                    assert!((5..15).contains(&count));
                    5
                }
                SpeedChallenge::Matching { target, ref options, .. } => {
                    assert_eq!(options.len(), COLOR_NAMES.len());
                    assert!(options.contains(&target));
                    4
                }
            };
            assert_eq!(round.challenge.time_limit(), expected);
        }
    }

    #[test]
    fn reaction_thresholds() {
        assert_eq!(reaction_points(120.0, Difficulty::Easy), 50);
        assert_eq!(reaction_points(500.0, Difficulty::Easy), 30);
        assert_eq!(reaction_points(1499.0, Difficulty::Medium), 40);
        assert_eq!(reaction_points(4000.0, Difficulty::Hard), 30);
    }

    #[test]
    fn time_bonus_decays() {
        assert_eq!(counting_points(4, Difficulty::Easy), 45);
        assert_eq!(counting_points(0, Difficulty::Hard), 75);
        assert_eq!(matching_points(3, Difficulty::Medium), 58);
    }

    #[test]
    fn counting_prompt_repeats_glyph() {
        let c = SpeedChallenge::Counting { glyph: '▲', count: 6, time_limit: 7 };
        assert_eq!(c.prompt().matches('▲').count(), 7);
    }
}
