use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{CARD_STYLE, PuzzleProps, Timers, award, feedback, header, miss, use_timers};
use crate::model::{Difficulty, GameAction};
use crate::puzzles::speed::{self, SpeedChallenge, SpeedRound};
use crate::state::{SpeedClock, SpeedPhase};

const REACTION_DELAY_MS: u32 = 2000;
const SUCCESS_DELAY_MS: u32 = 1500;
const RETRY_DELAY_MS: u32 = 2000;

struct SpeedState {
    round: SpeedRound,
    clock: SpeedClock,
    answer: String,
    /// Outcome and the line shown under the challenge.
    verdict: Option<(bool, String)>,
}

impl SpeedState {
    fn fresh(difficulty: Difficulty) -> Self {
        let round = speed::generate(&mut rand::thread_rng(), difficulty);
        let clock = SpeedClock::new(round.challenge.time_limit());
        Self {
            round,
            clock,
            answer: String::new(),
            verdict: None,
        }
    }
}

#[derive(Clone)]
struct Session {
    state: Rc<RefCell<SpeedState>>,
    timers: Timers,
    redraw: UseForceUpdateHandle,
    difficulty: Difficulty,
    dispatch: Callback<GameAction>,
}

impl Session {
    /// New challenge after a random wait; the per-challenge clock starts on reveal.
    fn begin(&self) {
        *self.state.borrow_mut() = SpeedState::fresh(self.difficulty);
        let delay = self.state.borrow().round.start_delay_ms;
        let this = self.clone();
        self.timers.after(delay, move || {
            this.state.borrow_mut().clock.reveal(js_sys::Date::now());
            let ticking = this.clone();
            this.timers.every(1000, move || ticking.tick());
            this.redraw.force_update();
        });
        self.redraw.force_update();
    }

    fn tick(&self) {
        let timed_out = self.state.borrow_mut().clock.tick();
        if timed_out {
            self.timers.stop_ticker();
            self.state.borrow_mut().verdict = Some((false, "Time's up!".to_string()));
            let again = self.clone();
            miss(&self.timers, RETRY_DELAY_MS, move || again.begin());
        }
        self.redraw.force_update();
    }

    /// Closes the challenge. Returns the elapsed ms and the seconds left, or `None` if it was not open.
    fn close(&self) -> Option<(f64, u32)> {
        let mut st = self.state.borrow_mut();
        let secs_left = st.clock.time_left;
        let elapsed = st.clock.finish(js_sys::Date::now())?;
        drop(st);
        self.timers.stop_ticker();
        Some((elapsed, secs_left))
    }

    fn settle(&self, points: Option<i64>, delay_ms: u32, message: String) {
        self.state.borrow_mut().verdict = Some((points.is_some(), message));
        match points {
            Some(points) => award(&self.dispatch, &self.timers, points, delay_ms),
            None => {
                let again = self.clone();
                miss(&self.timers, RETRY_DELAY_MS, move || again.begin());
            }
        }
        self.redraw.force_update();
    }

    fn react(&self) {
        let Some((elapsed, _)) = self.close() else {
            return;
        };
        let points = speed::reaction_points(elapsed, self.difficulty);
        self.settle(Some(points), REACTION_DELAY_MS, format!("Reaction time: {:.0} ms", elapsed));
    }

    fn submit_count(&self) {
        let (expected, typed) = {
            let st = self.state.borrow();
            let SpeedChallenge::Counting { count, .. } = st.round.challenge else {
                return;
            };
            (count, st.answer.trim().parse::<u32>().ok())
        };
        let Some((_, secs_left)) = self.close() else {
            return;
        };
        if typed == Some(expected) {
            let points = speed::counting_points(secs_left, self.difficulty);
            self.settle(Some(points), SUCCESS_DELAY_MS, "Correct count!".to_string());
        } else {
            self.settle(None, RETRY_DELAY_MS, format!("There were {}", expected));
        }
    }

    fn pick(&self, option: &'static str) {
        let target = match self.state.borrow().round.challenge {
            SpeedChallenge::Matching { target, .. } => target,
            _ => return,
        };
        let Some((_, secs_left)) = self.close() else {
            return;
        };
        if option == target {
            let points = speed::matching_points(secs_left, self.difficulty);
            self.settle(Some(points), SUCCESS_DELAY_MS, "Match!".to_string());
        } else {
            self.settle(None, RETRY_DELAY_MS, format!("It was {}", target));
        }
    }
}

#[function_component(SpeedView)]
pub fn speed_view(props: &PuzzleProps) -> Html {
    let difficulty = props.difficulty;
    let state = use_mut_ref(|| SpeedState::fresh(difficulty));
    let timers = use_timers();
    let redraw = use_force_update();
    let session = Session {
        state: state.clone(),
        timers,
        redraw,
        difficulty,
        dispatch: props.dispatch.clone(),
    };
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            session.begin();
            || ()
        });
    }

    let st = state.borrow();
    let phase = st.clock.phase;
    let body = match (phase, &st.round.challenge) {
        (SpeedPhase::Waiting, _) => html! {
            <div style="text-align:center; font-size:22px; font-weight:700; color:#6b7280; padding:30px 0;">{"Get ready..."}</div>
        },
        (_, SpeedChallenge::Reaction { .. }) => {
            let onclick = {
                let session = session.clone();
                Callback::from(move |_| session.react())
            };
            html! {
                <div style="text-align:center; padding:20px 0;">
                    <button {onclick} disabled={phase != SpeedPhase::Challenge}
                        style="width:160px; height:160px; border-radius:50%; border:none; background:#22c55e; color:#fff; font-size:24px; font-weight:800; cursor:pointer;">
                        {"NOW!"}
                    </button>
                </div>
            }
        }
        (_, SpeedChallenge::Counting { .. }) => {
            let oninput = {
                let state = state.clone();
                let redraw = session.redraw.clone();
                Callback::from(move |e: InputEvent| {
                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                        state.borrow_mut().answer = input.value();
                        redraw.force_update();
                    }
                })
            };
            let onkeydown = {
                let session = session.clone();
                Callback::from(move |e: KeyboardEvent| {
                    if e.key() == "Enter" {
                        session.submit_count();
                    }
                })
            };
            let onclick = {
                let session = session.clone();
                Callback::from(move |_| session.submit_count())
            };
            let open = phase == SpeedPhase::Challenge;
            html! {
                <div style="display:flex; flex-direction:column; align-items:center; gap:12px;">
                    <div style="font-size:22px; letter-spacing:4px; word-break:break-all; text-align:center;">{ st.round.challenge.prompt() }</div>
                    <div style="display:flex; gap:8px;">
                        <input type="number" value={st.answer.clone()} {oninput} {onkeydown} disabled={!open}
                            style="width:100px; text-align:center; font-size:20px; font-weight:700; padding:6px; border:2px solid #d1d5db; border-radius:8px;" />
                        <button {onclick} disabled={!open || st.answer.trim().is_empty()}
                            style="padding:8px 18px; font-weight:600; background:#22c55e; color:#fff; border:none; border-radius:8px;">
                            {"Submit"}
                        </button>
                    </div>
                </div>
            }
        }
        (_, SpeedChallenge::Matching { options, .. }) => {
            let buttons = options
                .iter()
                .map(|&option| {
                    let onclick = {
                        let session = session.clone();
                        Callback::from(move |_| session.pick(option))
                    };
                    html! {
                        <button key={option} {onclick} disabled={phase != SpeedPhase::Challenge}
                            style="padding:12px; font-size:16px; font-weight:600; background:#fff; color:#374151; border:2px solid #d1d5db; border-radius:8px;">
                            { option }
                        </button>
                    }
                })
                .collect::<Html>();
            html! {
                <div style="display:flex; flex-direction:column; gap:12px;">
                    <div style="text-align:center; font-size:22px; font-weight:700;">{ st.round.challenge.prompt() }</div>
                    <div style="display:grid; grid-template-columns:repeat(2, 1fr); gap:10px;">{ buttons }</div>
                </div>
            }
        }
    };

    let title = match phase {
        SpeedPhase::Waiting => "Speed",
        SpeedPhase::Challenge | SpeedPhase::Result => st.round.challenge.title(),
    };
    let hint = match &st.round.challenge {
        SpeedChallenge::Reaction { .. } => "Press as soon as the green button shows!",
        SpeedChallenge::Counting { .. } => "Count the symbols before time runs out",
        SpeedChallenge::Matching { .. } => "Pick the named color before time runs out",
    };
    let result = match &st.verdict {
        Some((ok, msg)) => feedback(*ok, msg, msg),
        None => html! {},
    };
    html! {
        <div style={CARD_STYLE}>
            { header(title, if phase == SpeedPhase::Waiting { "Wait for it..." } else { hint }) }
            if phase == SpeedPhase::Challenge {
                <div style="text-align:center; font-size:14px; font-weight:700; color:#dc2626; margin-bottom:10px;">
                    { format!("⏱ {}s", st.clock.time_left) }
                </div>
            }
            { body }
            { result }
        </div>
    }
}
