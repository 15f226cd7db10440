use yew::prelude::*;

use super::GameContext;
use crate::config::MAX_LEVEL;
use crate::model::{Difficulty, GameAction};

#[function_component(ResultsScreen)]
pub fn results_screen() -> Html {
    let Some(ctx) = use_context::<GameContext>() else {
        return html! {};
    };
    let st = &ctx.state;
    let restart_btn = {
        let cb = ctx.dispatch.clone();
        Callback::from(move |_| cb.emit(GameAction::RestartGame))
    };
    let menu_btn = {
        let cb = ctx.dispatch.clone();
        Callback::from(move |_| cb.emit(GameAction::BackToMenu))
    };
    let performance = st.performance();
    let bests = Difficulty::ALL
        .iter()
        .map(|&d| {
            let highlight = d == st.difficulty && st.is_new_high_score;
            html! {
                <div style={format!("display:flex; justify-content:space-between; {}", if highlight { "color:#d4af37; font-weight:700;" } else { "" })}>
                    <span>{ d.label() }</span>
                    <span>{ st.high_scores.best(d) }</span>
                </div>
            }
        })
        .collect::<Html>();
    html! {
        <div style="min-height:100%; display:flex; align-items:center; justify-content:center;">
            <div style="background:rgba(0,0,0,0.85); border:2px solid #58a6ff; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px; display:flex; flex-direction:column; gap:10px;">
                <h2 style="margin:0; color:#58a6ff;">{"🎯 Results"}</h2>
                <div style={format!("font-weight:600; color:{};", performance.color())}>{ performance.message() }</div>
                <div style="font-size:40px; font-weight:800;">{ st.score }</div>
                if st.is_new_high_score {
                    <div style="color:#d4af37; font-weight:700;">{"🎉 New high score!"}</div>
                }
                <p style="margin:4px 0;">{ format!("Level reached: {}/{}", st.level.min(MAX_LEVEL), MAX_LEVEL) }</p>
                <p style="margin:4px 0;">{ format!("Difficulty: {}", st.difficulty.label()) }</p>
                <div style="border-top:1px solid #30363d; padding-top:8px; display:flex; flex-direction:column; gap:4px; font-size:14px;">
                    { bests }
                    <div style="display:flex; justify-content:space-between; border-top:1px dashed #30363d; padding-top:4px;">
                        <span>{"Total"}</span>
                        <span>{ st.high_scores.total }</span>
                    </div>
                </div>
                <div style="margin-top:8px; display:flex; gap:12px; justify-content:center;">
                    <button onclick={restart_btn}>{"Play Again"}</button>
                    <button onclick={menu_btn}>{"Main Menu"}</button>
                </div>
            </div>
        </div>
    }
}
