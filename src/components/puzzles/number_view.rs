use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{CARD_STYLE, PuzzleProps, award, feedback, header, miss, use_timers};
use crate::puzzles::number::{self, NumberKind};

const SUCCESS_DELAY_MS: u32 = 1000;
const RETRY_DELAY_MS: u32 = 1500;

#[function_component(NumberView)]
pub fn number_view(props: &PuzzleProps) -> Html {
    let difficulty = props.difficulty;
    let puzzle = use_state(|| number::generate(&mut rand::thread_rng(), difficulty));
    let typed = use_state(String::new);
    let choice = use_state(|| None::<i64>);
    let verdict = use_state(|| None::<bool>);
    let timers = use_timers();

    let answered = match puzzle.kind {
        NumberKind::MultipleChoice => choice.is_some(),
        NumberKind::Arithmetic | NumberKind::Sequence => !typed.trim().is_empty(),
    };

    let submit = {
        let puzzle = puzzle.clone();
        let typed = typed.clone();
        let choice = choice.clone();
        let verdict = verdict.clone();
        let timers = timers.clone();
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: ()| {
            if verdict.is_some() || !answered {
                return;
            }
            let ok = match (puzzle.kind, *choice) {
                (NumberKind::MultipleChoice, Some(c)) => puzzle.check_choice(c),
                (NumberKind::MultipleChoice, None) => false,
                _ => puzzle.check_typed(&typed),
            };
            verdict.set(Some(ok));
            if ok {
                award(&dispatch, &timers, number::points(difficulty), SUCCESS_DELAY_MS);
            } else {
                let puzzle = puzzle.clone();
                let typed = typed.clone();
                let choice = choice.clone();
                let verdict = verdict.clone();
                miss(&timers, RETRY_DELAY_MS, move || {
                    puzzle.set(number::generate(&mut rand::thread_rng(), difficulty));
                    typed.set(String::new());
                    choice.set(None);
                    verdict.set(None);
                });
            }
        })
    };

    let answer_area = match puzzle.kind {
        NumberKind::MultipleChoice => {
            let buttons = puzzle
                .options
                .iter()
                .map(|&option| {
                    let onclick = {
                        let choice = choice.clone();
                        Callback::from(move |_| choice.set(Some(option)))
                    };
                    let style = match *verdict {
                        Some(_) if option == puzzle.answer => "background:#22c55e; color:#fff;",
                        Some(_) if Some(option) == *choice => "background:#ef4444; color:#fff;",
                        _ if Some(option) == *choice => "background:#3b82f6; color:#fff;",
                        _ => "background:#fff; color:#374151; border:2px solid #d1d5db;",
                    };
                    html! {
                        <button key={option} {onclick} disabled={verdict.is_some()}
                            style={format!("padding:14px; font-size:18px; font-weight:600; border-radius:8px; border:none; {}", style)}>
                            { option }
                        </button>
                    }
                })
                .collect::<Html>();
            html! {
                <div style="display:grid; grid-template-columns:repeat(2, 1fr); gap:12px;">{ buttons }</div>
            }
        }
        NumberKind::Arithmetic | NumberKind::Sequence => {
            let oninput = {
                let typed = typed.clone();
                Callback::from(move |e: InputEvent| {
                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                        typed.set(input.value());
                    }
                })
            };
            let onkeydown = {
                let submit = submit.clone();
                Callback::from(move |e: KeyboardEvent| {
                    if e.key() == "Enter" {
                        submit.emit(());
                    }
                })
            };
            html! {
                <div style="display:flex; align-items:center; justify-content:center; gap:12px;">
                    <input type="number" value={(*typed).clone()} {oninput} {onkeydown}
                        disabled={verdict.is_some()} placeholder="Answer"
                        style="width:120px; text-align:center; font-size:20px; font-weight:700; padding:6px; border:2px solid #d1d5db; border-radius:8px;" />
                    <span style="font-size:20px; font-weight:700; color:#6b7280;">{"= ?"}</span>
                </div>
            }
        }
    };

    let on_check = {
        let submit = submit.clone();
        Callback::from(move |_| submit.emit(()))
    };
    let result = match *verdict {
        Some(true) => feedback(true, "Correct!", ""),
        Some(false) => feedback(false, "", &format!("Wrong, the answer was {}", puzzle.answer)),
        None => html! {},
    };
    html! {
        <div style={CARD_STYLE}>
            { header("Numbers", "Solve the problem") }
            <div style="background:#f3f4f6; border-radius:10px; padding:20px; margin-bottom:18px; text-align:center;">
                <div style="font-size:26px; font-weight:800; margin-bottom:14px;">{ puzzle.question.clone() }</div>
                { answer_area }
            </div>
            <div style="text-align:center;">
                <button onclick={on_check} disabled={!answered || verdict.is_some()}
                    style="padding:10px 28px; font-size:17px; font-weight:600; background:#22c55e; color:#fff; border:none; border-radius:8px;">
                    {"Check answer"}
                </button>
            </div>
            { result }
        </div>
    }
}
