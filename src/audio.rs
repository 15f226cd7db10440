// Sound cues played by the puzzle views on hits and solved puzzles.

use std::cell::Cell;

use web_sys::HtmlAudioElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sfx {
    Hit,
    Success,
}

impl Sfx {
    fn src(self) -> &'static str {
        match self {
            Sfx::Hit => "sounds/hit.mp3",
            Sfx::Success => "sounds/success.mp3",
        }
    }

    fn volume(self) -> f64 {
        match self {
            Sfx::Hit => 0.3,
            Sfx::Success => 0.5,
        }
    }
}

thread_local! {
    static MUTED: Cell<bool> = const { Cell::new(false) };
}

pub fn is_muted() -> bool {
    MUTED.with(Cell::get)
}

pub fn set_muted(muted: bool) {
    MUTED.with(|m| m.set(muted));
}

pub fn play(sfx: Sfx) {
    if is_muted() {
        return;
    }
    match HtmlAudioElement::new_with_src(sfx.src()) {
        Ok(el) => {
            el.set_volume(sfx.volume());
            // Autoplay may be refused before the first user gesture.
            if let Err(e) = el.play() {
                log::debug!("sfx {:?} refused: {:?}", sfx, e);
            }
        }
        Err(e) => log::debug!("sfx {:?} unavailable: {:?}", sfx, e),
    }
}
