use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::audio::{self, Sfx};
use crate::model::{Difficulty, GameAction};

pub mod color_view;
pub mod logic_view;
pub mod memory_view;
pub mod number_view;
pub mod pattern_view;
pub mod speed_view;

pub use color_view::ColorView;
pub use logic_view::LogicView;
pub use memory_view::MemoryView;
pub use number_view::NumberView;
pub use pattern_view::PatternView;
pub use speed_view::SpeedView;

#[derive(Properties, PartialEq, Clone)]
pub struct PuzzleProps {
    pub difficulty: Difficulty,
    pub level: u32,
    pub dispatch: Callback<GameAction>,
}

/// One pending follow-up and one repeating ticker per puzzle view.
/// Both are cancelled when replaced and when the view unmounts.
#[derive(Clone, Default)]
pub struct Timers {
    pending: Rc<RefCell<Option<Timeout>>>,
    ticker: Rc<RefCell<Option<Interval>>>,
}

impl Timers {
    pub fn after(&self, ms: u32, f: impl FnOnce() + 'static) {
        *self.pending.borrow_mut() = Some(Timeout::new(ms, f));
    }

    pub fn every(&self, ms: u32, f: impl FnMut() + 'static) {
        *self.ticker.borrow_mut() = Some(Interval::new(ms, f));
    }

    pub fn stop_ticker(&self) {
        self.ticker.borrow_mut().take();
    }

    pub fn clear(&self) {
        self.pending.borrow_mut().take();
        self.ticker.borrow_mut().take();
    }
}

#[hook]
pub fn use_timers() -> Timers {
    let timers = use_memo((), |_| Timers::default());
    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.clear());
    }
    (*timers).clone()
}

/// Success cue, score now, next puzzle after `delay_ms`.
pub fn award(dispatch: &Callback<GameAction>, timers: &Timers, points: i64, delay_ms: u32) {
    audio::play(Sfx::Success);
    dispatch.emit(GameAction::AddScore(points));
    let dispatch = dispatch.clone();
    timers.after(delay_ms, move || dispatch.emit(GameAction::NextPuzzle));
}

/// Miss cue, then `retry` after `delay_ms`.
pub fn miss(timers: &Timers, delay_ms: u32, retry: impl FnOnce() + 'static) {
    audio::play(Sfx::Hit);
    timers.after(delay_ms, retry);
}

pub(crate) const CARD_STYLE: &str = "background:rgba(255,255,255,0.95); color:#1f2937; border-radius:14px; padding:24px; box-shadow:0 20px 40px rgba(0,0,0,0.4);";

pub(crate) fn header(title: &str, hint: &str) -> Html {
    html! {
        <div style="text-align:center; margin-bottom:18px;">
            <h3 style="margin:0 0 6px 0; font-size:20px;">{ title.to_string() }</h3>
            <p style="margin:0; color:#4b5563;">{ hint.to_string() }</p>
        </div>
    }
}

pub(crate) fn feedback(ok: bool, good: &str, bad: &str) -> Html {
    let (color, text) = if ok { ("#16a34a", good) } else { ("#dc2626", bad) };
    html! {
        <div style={format!("margin-top:14px; text-align:center; font-weight:600; color:{};", color)}>{ text.to_string() }</div>
    }
}
