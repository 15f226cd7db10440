use yew::prelude::*;

use super::GameContext;
use crate::audio;
use crate::config::MAX_LEVEL;
use crate::model::GameAction;
use crate::util::format_time;

#[function_component(GameUi)]
pub fn game_ui() -> Html {
    let muted = use_state(audio::is_muted);
    let Some(ctx) = use_context::<GameContext>() else {
        return html! {};
    };
    let st = &ctx.state;

    let reset_cb = {
        let cb = ctx.dispatch.clone();
        Callback::from(move |_| cb.emit(GameAction::ResetGame))
    };
    let menu_cb = {
        let cb = ctx.dispatch.clone();
        Callback::from(move |_| cb.emit(GameAction::BackToMenu))
    };
    let mute_cb = {
        let muted = muted.clone();
        Callback::from(move |_| {
            let next = !*muted;
            audio::set_muted(next);
            muted.set(next);
        })
    };

    let row_style = "display:flex; align-items:center; gap:8px;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    let time_color = if st.time_left <= 10 { "#f85149" } else { "#58a6ff" };
    let bar_width = st.time_fraction() * 100.0;
    html! {
        <div style="max-width:560px; margin:12px auto 0 auto; padding:0 12px; display:flex; flex-direction:column; gap:8px;">
            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; justify-content:space-between; align-items:center; font-size:14px;">
                <div style={row_style}>
                    <span style="color:#d4af37;">{"⭐"}</span>
                    <span style={format!("{} color:#d4af37;", value_style)}>{ st.score }</span>
                </div>
                <div style={row_style}>
                    <span>{"⏱"}</span>
                    <span style={format!("{} color:{};", value_style, time_color)}>{ format_time(st.time_left) }</span>
                </div>
                <div style="opacity:0.85;">{ format!("Level {}/{} · {}", st.level.min(MAX_LEVEL), MAX_LEVEL, st.difficulty.label()) }</div>
                <span style="background:#1f6feb; color:#fff; border-radius:10px; padding:2px 10px; font-size:12px;">{ st.current_puzzle_type.label() }</span>
            </div>
            <div style="height:6px; background:#30363d; border-radius:3px; overflow:hidden;">
                <div style={format!("height:100%; width:{:.1}%; background:{}; transition:width 0.3s;", bar_width, time_color)}></div>
            </div>
            <div style="display:flex; gap:8px; justify-content:flex-end;">
                <button onclick={mute_cb} style="padding:4px 10px; font-size:12px;">{ if *muted { "🔇" } else { "🔊" } }</button>
                <button onclick={reset_cb} style="padding:4px 10px; font-size:12px;">{"Reset"}</button>
                <button onclick={menu_cb} style="padding:4px 10px; font-size:12px;">{"Menu"}</button>
            </div>
        </div>
    }
}
