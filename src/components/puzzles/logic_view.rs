use yew::prelude::*;

use super::{CARD_STYLE, PuzzleProps, award, header, miss, use_timers};
use crate::puzzles::logic;

const SUCCESS_DELAY_MS: u32 = 2000;
const RETRY_DELAY_MS: u32 = 3000;

#[function_component(LogicView)]
pub fn logic_view(props: &PuzzleProps) -> Html {
    let difficulty = props.difficulty;
    let question = use_state(|| logic::generate(&mut rand::thread_rng(), difficulty));
    let picked = use_state(|| None::<usize>);
    let timers = use_timers();

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let onclick = {
                let question = question.clone();
                let picked = picked.clone();
                let timers = timers.clone();
                let dispatch = props.dispatch.clone();
                Callback::from(move |_| {
                    if picked.is_some() {
                        return;
                    }
                    picked.set(Some(idx));
                    if question.is_correct(idx) {
                        award(&dispatch, &timers, logic::points(difficulty), SUCCESS_DELAY_MS);
                    } else {
                        let question = question.clone();
                        let picked = picked.clone();
                        miss(&timers, RETRY_DELAY_MS, move || {
                            question.set(logic::generate(&mut rand::thread_rng(), difficulty));
                            picked.set(None);
                        });
                    }
                })
            };
            let style = match *picked {
                Some(_) if question.is_correct(idx) => "background:#22c55e; color:#fff; border-color:#16a34a;",
                Some(p) if p == idx => "background:#ef4444; color:#fff; border-color:#dc2626;",
                _ => "background:#fff; color:#374151; border-color:#d1d5db;",
            };
            html! {
                <button key={idx} {onclick} disabled={picked.is_some()}
                    style={format!("padding:12px; font-size:16px; font-weight:600; border:2px solid; border-radius:8px; text-align:left; {}", style)}>
                    { format!("{}. {}", (b'A' + idx as u8) as char, label) }
                </button>
            }
        })
        .collect::<Html>();

    let explanation = match *picked {
        Some(p) => {
            let ok = question.is_correct(p);
            html! {
                <div style={format!("margin-top:14px; padding:12px; border-radius:8px; background:{};", if ok { "#dcfce7" } else { "#fee2e2" })}>
                    <div style="font-weight:700; margin-bottom:4px;">{ if ok { "Correct!" } else { "Wrong answer" } }</div>
                    <div style="font-size:14px; color:#374151;">{ question.explanation }</div>
                </div>
            }
        }
        None => html! {},
    };
    html! {
        <div style={CARD_STYLE}>
            { header(question.family.title(), "Choose the right answer") }
            <div style="background:#f3f4f6; border-radius:10px; padding:18px; margin-bottom:16px; text-align:center; font-size:20px; font-weight:700;">
                { question.question }
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                { options }
            </div>
            { explanation }
        </div>
    }
}
