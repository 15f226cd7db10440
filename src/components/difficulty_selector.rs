use yew::prelude::*;

use super::GameContext;
use crate::model::{Difficulty, GameAction};

fn accent(d: Difficulty) -> &'static str {
    match d {
        Difficulty::Easy => "#3fb950",
        Difficulty::Medium => "#d29922",
        Difficulty::Hard => "#f85149",
    }
}

#[function_component(DifficultySelector)]
pub fn difficulty_selector() -> Html {
    let Some(ctx) = use_context::<GameContext>() else {
        return html! {};
    };
    let back_cb = {
        let cb = ctx.dispatch.clone();
        Callback::from(move |_| cb.emit(GameAction::BackToMenu))
    };
    let cards = Difficulty::ALL
        .iter()
        .map(|&d| {
            let profile = d.profile();
            let pick = {
                let cb = ctx.dispatch.clone();
                Callback::from(move |_| cb.emit(GameAction::SelectDifficulty(d)))
            };
            let best = ctx.state.high_scores.best(d);
            html! {
                <button onclick={pick} style={format!("display:flex; flex-direction:column; gap:4px; padding:14px 18px; background:#161b22; color:#e6edf3; border:2px solid {}; border-radius:10px; cursor:pointer; text-align:left;", accent(d))}>
                    <span style={format!("font-size:20px; font-weight:700; color:{};", accent(d))}>{ d.label() }</span>
                    <span style="font-size:13px; opacity:0.85;">{ format!("⏱ {}s per puzzle · ×{} points", profile.time_limit_secs, profile.score_multiplier) }</span>
                    <span style="font-size:12px; opacity:0.7;">{ format!("Best: {}", best) }</span>
                </button>
            }
        })
        .collect::<Html>();
    html! {
        <div style="min-height:100%; display:flex; align-items:center; justify-content:center;">
            <div style="background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:14px; padding:24px 28px; max-width:420px; width:90%; display:flex; flex-direction:column; gap:12px;">
                <h2 style="margin:0; text-align:center;">{"Choose a difficulty"}</h2>
                { cards }
                <button onclick={back_cb} style="padding:6px 12px;">{"Back"}</button>
            </div>
        </div>
    }
}
