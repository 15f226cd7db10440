use yew::prelude::*;

use super::GameContext;
use crate::model::GameAction;

#[function_component(MainMenu)]
pub fn main_menu() -> Html {
    let Some(ctx) = use_context::<GameContext>() else {
        return html! {};
    };
    let start_cb = {
        let cb = ctx.dispatch.clone();
        Callback::from(move |_| cb.emit(GameAction::StartGame))
    };
    let best = ctx.state.high_scores.total;
    html! {
        <div style="min-height:100%; display:flex; align-items:center; justify-content:center;">
            <div style="background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:14px; padding:32px 40px; text-align:center; max-width:420px; width:90%; display:flex; flex-direction:column; gap:14px;">
                <h1 style="margin:0; font-size:32px; color:#58a6ff;">{"🧩 Puzzle Rush"}</h1>
                <p style="margin:0; opacity:0.85;">{"Ten quick puzzles against the clock: memory, colors, numbers, patterns, logic and speed."}</p>
                <button onclick={start_cb} style="padding:12px 20px; font-size:18px; font-weight:600; background:#238636; color:#fff; border:1px solid #2ea043; border-radius:8px; cursor:pointer;">{"Start Game"}</button>
                if best > 0 {
                    <div style="font-size:14px; color:#d4af37;">{ format!("🏆 Best total: {}", best) }</div>
                }
            </div>
        </div>
    }
}
