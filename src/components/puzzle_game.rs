use yew::prelude::*;

use super::GameContext;
use super::puzzles::{ColorView, LogicView, MemoryView, NumberView, PatternView, SpeedView};
use crate::model::{GameState, PuzzleType};

/// Identity of the puzzle on screen: run, puzzle type and level.
pub fn view_key(state: &GameState) -> String {
    format!("{}-{:?}-{}", state.run, state.current_puzzle_type, state.level)
}

/// Hosts the view for the current puzzle type. The key changes with every level
/// and every reset, so each puzzle starts from fresh local state.
#[function_component(PuzzleGame)]
pub fn puzzle_game() -> Html {
    let Some(ctx) = use_context::<GameContext>() else {
        return html! {};
    };
    let st = &ctx.state;
    let key = view_key(st);
    let difficulty = st.difficulty;
    let level = st.level;
    let dispatch = ctx.dispatch.clone();
    let view = match st.current_puzzle_type {
        PuzzleType::Memory => html! { <MemoryView key={key} {difficulty} {level} {dispatch} /> },
        PuzzleType::Color => html! { <ColorView key={key} {difficulty} {level} {dispatch} /> },
        PuzzleType::Number => html! { <NumberView key={key} {difficulty} {level} {dispatch} /> },
        PuzzleType::Pattern => html! { <PatternView key={key} {difficulty} {level} {dispatch} /> },
        PuzzleType::Logic => html! { <LogicView key={key} {difficulty} {level} {dispatch} /> },
        PuzzleType::Speed => html! { <SpeedView key={key} {difficulty} {level} {dispatch} /> },
    };
    html! {
        <div style="display:flex; justify-content:center; padding:24px 12px;">
            <div style="width:100%; max-width:520px;">{ view }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HighScores;

    #[test]
    fn reset_on_same_puzzle_changes_key() {
        let mut st = GameState::new(HighScores::default());
        st.current_puzzle_type = PuzzleType::Color;
        let before = view_key(&st);
        st.run += 1;
        assert_ne!(view_key(&st), before);
        let same_run = view_key(&st);
        st.level += 1;
        assert_ne!(view_key(&st), same_run);
    }
}
