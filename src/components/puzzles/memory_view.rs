use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::{CARD_STYLE, PuzzleProps, Timers, award, header, miss, use_timers};
use crate::audio::{self, Sfx};
use crate::config::MEMORY_STEP_MS;
use crate::model::Difficulty;
use crate::puzzles::memory;
use crate::state::{MemoryRound, Press, RoundPhase};

const SUCCESS_DELAY_MS: u32 = 1000;
const RETRY_DELAY_MS: u32 = 1000;

#[derive(Clone)]
struct Round {
    state: Rc<RefCell<MemoryRound>>,
    timers: Timers,
    redraw: UseForceUpdateHandle,
    difficulty: Difficulty,
    level: u32,
}

impl Round {
    /// Fresh sequence, then light one cell per step until input opens.
    fn begin(&self) {
        let seq = memory::generate(&mut rand::thread_rng(), self.difficulty, self.level);
        *self.state.borrow_mut() = MemoryRound::new(seq);
        let this = self.clone();
        self.timers.every(MEMORY_STEP_MS, move || {
            let showing = {
                let mut r = this.state.borrow_mut();
                r.step_reveal();
                r.phase == RoundPhase::Showing
            };
            if !showing {
                this.timers.stop_ticker();
            }
            this.redraw.force_update();
        });
        self.redraw.force_update();
    }
}

#[function_component(MemoryView)]
pub fn memory_view(props: &PuzzleProps) -> Html {
    let state = use_mut_ref(|| MemoryRound::new(Vec::new()));
    let timers = use_timers();
    let redraw = use_force_update();
    let round = Round {
        state: state.clone(),
        timers: timers.clone(),
        redraw,
        difficulty: props.difficulty,
        level: props.level,
    };
    {
        let round = round.clone();
        use_effect_with((), move |_| {
            round.begin();
            || ()
        });
    }

    let snapshot = state.borrow().clone();
    let cells = (0..memory::GRID_CELLS)
        .map(|cell| {
            let lit = snapshot.lit_cell() == Some(cell) || snapshot.input.contains(&cell);
            let onclick = {
                let round = round.clone();
                let dispatch = props.dispatch.clone();
                let points = memory::points(props.difficulty);
                Callback::from(move |_| {
                    let outcome = round.state.borrow_mut().press(cell);
                    match outcome {
                        Press::Ignored => return,
                        Press::Correct => audio::play(Sfx::Hit),
                        Press::Completed => {
                            audio::play(Sfx::Hit);
                            award(&dispatch, &round.timers, points, SUCCESS_DELAY_MS);
                        }
                        Press::Wrong => {
                            let again = round.clone();
                            miss(&round.timers, RETRY_DELAY_MS, move || again.begin());
                        }
                    }
                    round.redraw.force_update();
                })
            };
            let bg = if lit { "#3b82f6" } else { "#e5e7eb" };
            let fg = if lit { "#fff" } else { "#374151" };
            html! {
                <button
                    key={cell}
                    {onclick}
                    disabled={snapshot.phase != RoundPhase::Input}
                    style={format!("aspect-ratio:1; font-size:22px; font-weight:700; border:none; border-radius:10px; background:{}; color:{}; transition:all 0.3s; {}", bg, fg, if lit { "transform:scale(1.05);" } else { "" })}
                >
                    { cell + 1 }
                </button>
            }
        })
        .collect::<Html>();

    let hint = match snapshot.phase {
        RoundPhase::Showing => "Memorize the sequence",
        RoundPhase::Input | RoundPhase::Result => "Tap the cells in the same order",
    };
    html! {
        <div style={CARD_STYLE}>
            { header("Memory", hint) }
            <div style="display:grid; grid-template-columns:repeat(3, 1fr); gap:12px; margin-bottom:18px;">
                { cells }
            </div>
            <div style="text-align:center; font-size:13px; color:#4b5563; margin-bottom:6px;">
                { format!("Progress: {} / {}", snapshot.input.len(), snapshot.sequence.len()) }
            </div>
            <div style="height:8px; background:#e5e7eb; border-radius:4px; overflow:hidden;">
                <div style={format!("height:100%; width:{:.0}%; background:#3b82f6; transition:width 0.3s;", snapshot.progress() * 100.0)}></div>
            </div>
        </div>
    }
}
