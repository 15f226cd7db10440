// Memory round: the sequence is revealed one cell per step, then replayed by the player.
use super::RoundPhase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    Ignored,
    Correct,
    Completed,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryRound {
    pub sequence: Vec<usize>,
    pub input: Vec<usize>,
    pub phase: RoundPhase,
    /// Steps shown so far; cell `sequence[revealed - 1]` is lit.
    pub revealed: usize,
}

impl MemoryRound {
    pub fn new(sequence: Vec<usize>) -> Self {
        Self {
            sequence,
            input: Vec::new(),
            phase: RoundPhase::Showing,
            revealed: 0,
        }
    }

    /// Advances the reveal by one step. After the last cell it switches to input.
    pub fn step_reveal(&mut self) {
        if self.phase != RoundPhase::Showing {
            return;
        }
        if self.revealed < self.sequence.len() {
            self.revealed += 1;
        } else {
            self.phase = RoundPhase::Input;
        }
    }

    pub fn lit_cell(&self) -> Option<usize> {
        if self.phase == RoundPhase::Showing && self.revealed > 0 {
            self.sequence.get(self.revealed - 1).copied()
        } else {
            None
        }
    }

    pub fn press(&mut self, cell: usize) -> Press {
        if self.phase != RoundPhase::Input {
            return Press::Ignored;
        }
        let pos = self.input.len();
        self.input.push(cell);
        if self.sequence.get(pos) != Some(&cell) {
            self.phase = RoundPhase::Result;
            return Press::Wrong;
        }
        if self.input.len() == self.sequence.len() {
            self.phase = RoundPhase::Result;
            Press::Completed
        } else {
            Press::Correct
        }
    }

    pub fn progress(&self) -> f64 {
        if self.sequence.is_empty() {
            return 0.0;
        }
        self.input.len() as f64 / self.sequence.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(seq: Vec<usize>) -> MemoryRound {
        let mut r = MemoryRound::new(seq);
        while r.phase == RoundPhase::Showing {
            r.step_reveal();
        }
        r
    }

    #[test]
    fn reveal_lights_each_cell_in_order() {
        let mut r = MemoryRound::new(vec![4, 2, 4]);
        let mut lit = Vec::new();
        for _ in 0..3 {
            r.step_reveal();
            lit.extend(r.lit_cell());
        }
        assert_eq!(lit, vec![4, 2, 4]);
        r.step_reveal();
        assert_eq!(r.phase, RoundPhase::Input);
        assert_eq!(r.lit_cell(), None);
    }

    #[test]
    fn presses_before_input_are_ignored() {
        let mut r = MemoryRound::new(vec![1]);
        assert_eq!(r.press(1), Press::Ignored);
        assert!(r.input.is_empty());
    }

    #[test]
    fn full_replay_completes() {
        let mut r = ready(vec![0, 8, 0]);
        assert_eq!(r.press(0), Press::Correct);
        assert_eq!(r.press(8), Press::Correct);
        assert_eq!(r.press(0), Press::Completed);
        assert_eq!(r.phase, RoundPhase::Result);
        assert_eq!(r.progress(), 1.0);
        assert_eq!(r.press(0), Press::Ignored);
    }

    #[test]
    fn wrong_cell_ends_round() {
        let mut r = ready(vec![3, 5]);
        assert_eq!(r.press(3), Press::Correct);
        assert_eq!(r.press(6), Press::Wrong);
        assert_eq!(r.phase, RoundPhase::Result);
    }
}
