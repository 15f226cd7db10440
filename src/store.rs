//! The game state store: the single owner of [`GameState`] and every phase transition.

use rand::RngCore;

use crate::config::{END_GAME_DELAY_MS, MAX_LEVEL};
use crate::countdown::{Countdown, CountdownEvent};
use crate::model::{Difficulty, GameAction, GameState, Phase, PuzzleType};
use crate::persistence::{HighScoreStore, KeyValueStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&GameState)>;

pub struct GameStore<C, K> {
    state: GameState,
    countdown: C,
    scores: HighScoreStore<K>,
    rng: Box<dyn RngCore>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<C: Countdown, K: KeyValueStore> GameStore<C, K> {
    /// Builds the store in `Phase::Menu` with the persisted high scores.
    pub fn new(countdown: C, scores: HighScoreStore<K>, rng: Box<dyn RngCore>) -> Self {
        let state = GameState::new(scores.load());
        Self {
            state,
            countdown,
            scores,
            rng,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn countdown(&self) -> &C {
        &self.countdown
    }

    pub fn scores(&self) -> &HighScoreStore<K> {
        &self.scores
    }

    pub fn subscribe(&mut self, listener: impl Fn(&GameState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    /// Applies one action and notifies observers once.
    pub fn dispatch(&mut self, action: GameAction) {
        use GameAction::*;
        match action {
            StartGame => self.apply_start_game(),
            SelectDifficulty(d) => self.apply_select_difficulty(d),
            AddScore(points) => self.apply_add_score(points),
            NextPuzzle => self.apply_next_puzzle(),
            ResetGame => self.apply_reset_game(),
            RestartGame => self.set_phase(Phase::DifficultySelect),
            BackToMenu => self.set_phase(Phase::Menu),
            EndGame => self.apply_end_game(),
            DecrementTime => self.apply_decrement_time(),
        }
        self.notify();
    }

    pub fn start_game(&mut self) {
        self.dispatch(GameAction::StartGame);
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.dispatch(GameAction::SelectDifficulty(difficulty));
    }

    pub fn add_score(&mut self, points: i64) {
        self.dispatch(GameAction::AddScore(points));
    }

    pub fn next_puzzle(&mut self) {
        self.dispatch(GameAction::NextPuzzle);
    }

    pub fn reset_game(&mut self) {
        self.dispatch(GameAction::ResetGame);
    }

    pub fn restart_game(&mut self) {
        self.dispatch(GameAction::RestartGame);
    }

    pub fn back_to_menu(&mut self) {
        self.dispatch(GameAction::BackToMenu);
    }

    pub fn end_game(&mut self) {
        self.dispatch(GameAction::EndGame);
    }

    pub fn decrement_time(&mut self) {
        self.dispatch(GameAction::DecrementTime);
    }

    /// Entry point for the countdown scheduler.
    pub fn on_countdown(&mut self, event: CountdownEvent) {
        match event {
            CountdownEvent::Tick => self.decrement_time(),
            CountdownEvent::DeferredEnd => {
                // The player may have left the run during the delay.
                if self.state.phase == Phase::Playing {
                    self.end_game();
                } else {
                    log::debug!("deferred end ignored in {:?}", self.state.phase);
                }
            }
        }
    }

    // Every phase change goes through here. `arm` cancels the live timer before starting one.
    fn set_phase(&mut self, phase: Phase) {
        self.countdown.cancel_deferred();
        if self.state.phase != phase {
            log::info!("phase {:?} -> {:?}", self.state.phase, phase);
        }
        self.state.phase = phase;
        if phase == Phase::Playing {
            self.countdown.arm();
        } else {
            self.countdown.cancel();
        }
    }

    fn roll_puzzle_type(&mut self) {
        self.state.current_puzzle_type = PuzzleType::random(self.rng.as_mut());
    }

    fn apply_start_game(&mut self) {
        self.set_phase(Phase::DifficultySelect);
    }

    fn apply_select_difficulty(&mut self, difficulty: Difficulty) {
        let s = &mut self.state;
        s.difficulty = difficulty;
        s.score = 0;
        s.level = 1;
        s.time_left = difficulty.time_limit();
        s.is_new_high_score = false;
        s.run = s.run.wrapping_add(1);
        self.roll_puzzle_type();
        self.set_phase(Phase::Playing);
    }

    fn apply_add_score(&mut self, points: i64) {
        self.state.score = self.state.score.saturating_add(points);
    }

    fn apply_next_puzzle(&mut self) {
        self.state.level += 1;
        self.state.time_left = self.state.difficulty.time_limit();
        self.roll_puzzle_type();
        if self.state.level > MAX_LEVEL {
            self.apply_end_game();
        }
    }

    fn apply_reset_game(&mut self) {
        let s = &mut self.state;
        s.score = 0;
        s.level = 1;
        s.time_left = s.difficulty.time_limit();
        s.is_new_high_score = false;
        s.run = s.run.wrapping_add(1);
        self.roll_puzzle_type();
    }

    fn apply_end_game(&mut self) {
        let difficulty = self.state.difficulty;
        let score = self.state.score;
        let mut record = self.state.high_scores;
        let beaten = record.record_run(difficulty, score);
        self.scores.save(&record);
        self.state.high_scores = record;
        self.state.is_new_high_score = beaten;
        log::info!(
            "run ended: {} score {} at level {} (new record: {})",
            difficulty.label(),
            score,
            self.state.level,
            beaten
        );
        self.set_phase(Phase::Results);
    }

    fn apply_decrement_time(&mut self) {
        if self.state.time_left <= 1 {
            self.state.time_left = 0;
            self.countdown.defer_end(END_GAME_DELAY_MS);
        } else {
            self.state.time_left -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HIGH_SCORE_KEY;
    use crate::countdown::ManualCountdown;
    use crate::persistence::MemoryStorage;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn store() -> GameStore<ManualCountdown, MemoryStorage> {
        GameStore::new(
            ManualCountdown::new(),
            HighScoreStore::new(MemoryStorage::new(), HIGH_SCORE_KEY),
            Box::new(StdRng::seed_from_u64(42)),
        )
    }

    #[test]
    fn starts_in_menu_with_idle_countdown() {
        let s = store();
        assert_eq!(s.state().phase, Phase::Menu);
        assert!(!s.countdown().is_armed());
    }

    #[test]
    fn select_difficulty_sets_budget_and_arms() {
        for (d, secs) in [(Difficulty::Easy, 45), (Difficulty::Medium, 35), (Difficulty::Hard, 25)] {
            let mut s = store();
            s.start_game();
            s.add_score(99);
            s.select_difficulty(d);
            let st = s.state();
            assert_eq!(st.phase, Phase::Playing);
            assert_eq!(st.time_left, secs);
            assert_eq!(st.score, 0);
            assert_eq!(st.level, 1);
            assert!(!st.is_new_high_score);
            assert!(s.countdown().is_armed());
        }
    }

    #[test]
    fn leaving_playing_cancels_countdown() {
        let mut s = store();
        s.start_game();
        s.select_difficulty(Difficulty::Easy);
        s.back_to_menu();
        assert!(!s.countdown().is_armed());
        s.start_game();
        s.select_difficulty(Difficulty::Hard);
        s.restart_game();
        assert_eq!(s.state().phase, Phase::DifficultySelect);
        assert!(!s.countdown().is_armed());
        assert_eq!(s.countdown().arms(), 2);
    }

    #[test]
    fn reset_keeps_phase_and_countdown() {
        let mut s = store();
        s.select_difficulty(Difficulty::Medium);
        s.add_score(40);
        s.next_puzzle();
        s.decrement_time();
        s.reset_game();
        let st = s.state();
        assert_eq!(st.phase, Phase::Playing);
        assert_eq!((st.score, st.level, st.time_left), (0, 1, 35));
        assert!(s.countdown().is_armed());
        assert_eq!(s.countdown().arms(), 1);
    }

    #[test]
    fn phase_churn_never_stacks_timers() {
        let mut s = store();
        s.start_game();
        s.select_difficulty(Difficulty::Easy);
        s.select_difficulty(Difficulty::Hard);
        s.back_to_menu();
        s.start_game();
        s.select_difficulty(Difficulty::Medium);
        s.reset_game();
        for _ in 0..MAX_LEVEL {
            s.next_puzzle();
        }
        assert_eq!(s.state().phase, Phase::Results);
        assert_eq!(s.countdown().arms(), 3);
        assert_eq!(s.countdown().peak(), 1);
        assert!(!s.countdown().is_armed());
    }

    #[test]
    fn reset_and_selection_start_a_new_run() {
        let mut s = store();
        let first = s.state().run;
        s.select_difficulty(Difficulty::Easy);
        assert_eq!(s.state().run, first + 1);
        s.reset_game();
        assert_eq!(s.state().run, first + 2);
        s.next_puzzle();
        s.add_score(10);
        assert_eq!(s.state().run, first + 2);
    }

    #[test]
    fn restart_does_not_touch_progress() {
        let mut s = store();
        s.select_difficulty(Difficulty::Easy);
        s.add_score(25);
        s.next_puzzle();
        s.restart_game();
        assert_eq!((s.state().score, s.state().level), (25, 2));
    }

    #[test]
    fn add_score_accepts_any_integer() {
        let mut s = store();
        s.add_score(-5);
        s.add_score(i64::MAX);
        assert_eq!(s.state().score, i64::MAX - 5);
    }

    #[test]
    fn decrement_clamps_and_defers_end() {
        let mut s = store();
        s.select_difficulty(Difficulty::Hard);
        for _ in 0..24 {
            s.decrement_time();
        }
        assert_eq!(s.state().time_left, 1);
        assert_eq!(s.countdown().pending_end(), None);
        s.decrement_time();
        assert_eq!(s.state().time_left, 0);
        assert_eq!(s.countdown().pending_end(), Some(END_GAME_DELAY_MS));
        assert_eq!(s.state().phase, Phase::Playing);
        s.decrement_time();
        assert_eq!(s.state().time_left, 0);
        s.on_countdown(CountdownEvent::DeferredEnd);
        assert_eq!(s.state().phase, Phase::Results);
        assert_eq!(s.countdown().pending_end(), None);
        assert!(!s.countdown().is_armed());
    }

    #[test]
    fn deferred_end_after_leaving_run_is_ignored() {
        let mut s = store();
        s.select_difficulty(Difficulty::Easy);
        s.add_score(10);
        for _ in 0..45 {
            s.on_countdown(CountdownEvent::Tick);
        }
        s.back_to_menu();
        s.on_countdown(CountdownEvent::DeferredEnd);
        assert_eq!(s.state().phase, Phase::Menu);
        assert_eq!(s.state().high_scores.easy, 0);
    }

    #[test]
    fn end_game_persists_record() {
        let mut s = store();
        s.select_difficulty(Difficulty::Medium);
        s.add_score(70);
        s.end_game();
        assert!(s.state().is_new_high_score);
        assert_eq!(s.state().high_scores.medium, 70);
        assert_eq!(s.scores().load(), s.state().high_scores);
    }

    #[test]
    fn listeners_see_each_action_until_unsubscribed() {
        let mut s = store();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        let id = s.subscribe(move |_| seen.set(seen.get() + 1));
        s.start_game();
        s.select_difficulty(Difficulty::Easy);
        assert_eq!(calls.get(), 2);
        s.unsubscribe(id);
        s.add_score(1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn next_puzzle_past_last_level_ends_once() {
        let mut s = store();
        let ends = Rc::new(Cell::new(0));
        let seen = ends.clone();
        s.subscribe(move |st| {
            if st.phase == Phase::Results {
                seen.set(seen.get() + 1);
            }
        });
        s.select_difficulty(Difficulty::Easy);
        for _ in 0..MAX_LEVEL {
            s.next_puzzle();
        }
        assert_eq!(s.state().level, MAX_LEVEL + 1);
        assert_eq!(s.state().phase, Phase::Results);
        assert_eq!(ends.get(), 1);
    }
}
