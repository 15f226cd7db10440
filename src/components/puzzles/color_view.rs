use yew::prelude::*;

use super::{CARD_STYLE, PuzzleProps, award, feedback, header, miss, use_timers};
use crate::puzzles::color::{self, PaletteColor};

const SUCCESS_DELAY_MS: u32 = 1000;
const RETRY_DELAY_MS: u32 = 1500;

#[function_component(ColorView)]
pub fn color_view(props: &PuzzleProps) -> Html {
    let difficulty = props.difficulty;
    let puzzle = use_state(|| color::generate(&mut rand::thread_rng(), difficulty));
    let picked = use_state(|| None::<PaletteColor>);
    let timers = use_timers();

    let swatches = puzzle
        .options
        .iter()
        .map(|&swatch| {
            let onclick = {
                let puzzle = puzzle.clone();
                let picked = picked.clone();
                let timers = timers.clone();
                let dispatch = props.dispatch.clone();
                Callback::from(move |_| {
                    if picked.is_some() {
                        return;
                    }
                    picked.set(Some(swatch));
                    if puzzle.is_correct(&swatch) {
                        award(&dispatch, &timers, color::points(difficulty), SUCCESS_DELAY_MS);
                    } else {
                        let puzzle = puzzle.clone();
                        let picked = picked.clone();
                        miss(&timers, RETRY_DELAY_MS, move || {
                            puzzle.set(color::generate(&mut rand::thread_rng(), difficulty));
                            picked.set(None);
                        });
                    }
                })
            };
            let ring = match *picked {
                Some(p) if p == swatch && puzzle.is_correct(&p) => "box-shadow:0 0 0 4px #4ade80;",
                Some(p) if p == swatch => "box-shadow:0 0 0 4px #f87171;",
                Some(_) if puzzle.is_correct(&swatch) => "box-shadow:0 0 0 4px #4ade80;",
                _ => "",
            };
            html! {
                <button
                    key={swatch.hex}
                    {onclick}
                    disabled={picked.is_some()}
                    title={swatch.name}
                    style={format!("height:72px; border:none; border-radius:10px; cursor:pointer; background:{}; transition:all 0.3s; {}", swatch.hex, ring)}
                />
            }
        })
        .collect::<Html>();

    let result = match *picked {
        Some(p) => feedback(puzzle.is_correct(&p), "Correct!", "Not quite, new colors coming..."),
        None => html! {},
    };
    html! {
        <div style={CARD_STYLE}>
            { header("Colors", "Pick the swatch that matches the name") }
            <div style={format!("text-align:center; font-size:30px; font-weight:800; margin-bottom:18px; color:{};", puzzle.target.hex)}>
                { puzzle.target.name }
            </div>
            <div style="display:grid; grid-template-columns:repeat(4, 1fr); gap:12px;">
                { swatches }
            </div>
            { result }
        </div>
    }
}
