// Pattern round: shown for a fixed time, then rebuilt by toggling cells.
use super::RoundPhase;
use crate::puzzles::PatternPuzzle;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternBoard {
    pub puzzle: PatternPuzzle,
    pub selected: Vec<bool>,
    pub phase: RoundPhase,
    /// Set once the attempt has been checked.
    pub solved: Option<bool>,
}

impl PatternBoard {
    pub fn new(puzzle: PatternPuzzle) -> Self {
        let cells = puzzle.mask.len();
        Self {
            puzzle,
            selected: vec![false; cells],
            phase: RoundPhase::Showing,
            solved: None,
        }
    }

    pub fn hide(&mut self) {
        if self.phase == RoundPhase::Showing {
            self.phase = RoundPhase::Input;
        }
    }

    pub fn toggle(&mut self, cell: usize) {
        if self.phase != RoundPhase::Input {
            return;
        }
        if let Some(on) = self.selected.get_mut(cell) {
            *on = !*on;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&on| on).count()
    }

    /// Checks the attempt once; later calls return `None`.
    pub fn submit(&mut self) -> Option<bool> {
        if self.phase != RoundPhase::Input {
            return None;
        }
        let ok = self.puzzle.matches(&self.selected);
        self.phase = RoundPhase::Result;
        self.solved = Some(ok);
        Some(ok)
    }

    /// What a cell shows right now: the target while showing, the attempt afterwards.
    pub fn cell_active(&self, cell: usize) -> bool {
        let source = match self.phase {
            RoundPhase::Showing => &self.puzzle.mask,
            RoundPhase::Input | RoundPhase::Result => &self.selected,
        };
        source.get(cell).copied().unwrap_or(false)
    }
}
