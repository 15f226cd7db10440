use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::{CARD_STYLE, PuzzleProps, Timers, award, feedback, header, miss, use_timers};
use crate::model::Difficulty;
use crate::puzzles::pattern;
use crate::state::{PatternBoard, RoundPhase};

const SUCCESS_DELAY_MS: u32 = 1500;
const RETRY_DELAY_MS: u32 = 2000;

#[derive(Clone)]
struct Board {
    state: Rc<RefCell<PatternBoard>>,
    timers: Timers,
    redraw: UseForceUpdateHandle,
    difficulty: Difficulty,
}

impl Board {
    /// New pattern, shown for the difficulty's reveal time, then hidden for input.
    fn begin(&self) {
        let puzzle = pattern::generate(&mut rand::thread_rng(), self.difficulty);
        *self.state.borrow_mut() = PatternBoard::new(puzzle);
        let this = self.clone();
        self.timers
            .after(self.difficulty.profile().pattern_reveal_ms, move || {
                this.state.borrow_mut().hide();
                this.redraw.force_update();
            });
        self.redraw.force_update();
    }
}

#[function_component(PatternView)]
pub fn pattern_view(props: &PuzzleProps) -> Html {
    let difficulty = props.difficulty;
    let state = use_mut_ref(|| PatternBoard::new(pattern::generate(&mut rand::thread_rng(), difficulty)));
    let timers = use_timers();
    let redraw = use_force_update();
    let board = Board {
        state: state.clone(),
        timers: timers.clone(),
        redraw,
        difficulty,
    };
    {
        let board = board.clone();
        use_effect_with((), move |_| {
            board.begin();
            || ()
        });
    }

    let snapshot = state.borrow().clone();
    let size = snapshot.puzzle.size;
    let cells = (0..size * size)
        .map(|cell| {
            let onclick = {
                let board = board.clone();
                Callback::from(move |_| {
                    board.state.borrow_mut().toggle(cell);
                    board.redraw.force_update();
                })
            };
            let active = snapshot.cell_active(cell);
            let bg = if active { snapshot.puzzle.color } else { "#e5e7eb" };
            html! {
                <button key={cell} {onclick} disabled={snapshot.phase != RoundPhase::Input}
                    style={format!("aspect-ratio:1; border:none; border-radius:6px; background:{}; transition:background 0.2s;", bg)} />
            }
        })
        .collect::<Html>();

    let on_submit = {
        let board = board.clone();
        let dispatch = props.dispatch.clone();
        Callback::from(move |_| {
            let verdict = board.state.borrow_mut().submit();
            match verdict {
                Some(true) => award(&dispatch, &board.timers, pattern::points(difficulty), SUCCESS_DELAY_MS),
                Some(false) => {
                    let again = board.clone();
                    miss(&board.timers, RETRY_DELAY_MS, move || again.begin());
                }
                None => return,
            }
            board.redraw.force_update();
        })
    };

    let hint = match snapshot.phase {
        RoundPhase::Showing => "Memorize the pattern",
        RoundPhase::Input | RoundPhase::Result => "Rebuild the pattern",
    };
    let result = match snapshot.solved {
        Some(ok) => feedback(ok, "Perfect match!", "Not the same pattern, try a new one..."),
        None => html! {},
    };
    html! {
        <div style={CARD_STYLE}>
            { header("Patterns", hint) }
            <div style={format!("display:grid; grid-template-columns:repeat({}, 1fr); gap:8px; max-width:320px; margin:0 auto 18px auto;", size.max(1))}>
                { cells }
            </div>
            if snapshot.phase == RoundPhase::Input {
                <div style="text-align:center;">
                    <div style="font-size:13px; color:#4b5563; margin-bottom:8px;">
                        { format!("Selected: {} / {}", snapshot.selected_count(), snapshot.puzzle.active_count()) }
                    </div>
                    <button onclick={on_submit}
                        style="padding:10px 28px; font-size:17px; font-weight:600; background:#22c55e; color:#fff; border:none; border-radius:8px;">
                        {"Check pattern"}
                    </button>
                </div>
            }
            { result }
        </div>
    }
}
