use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

use super::{
    difficulty_selector::DifficultySelector, floating_shapes::FloatingShapes, game_ui::GameUi,
    main_menu::MainMenu, puzzle_game::PuzzleGame, results_screen::ResultsScreen,
};
use crate::config::HIGH_SCORE_KEY;
use crate::countdown::IntervalCountdown;
use crate::model::{GameAction, GameState, Phase};
use crate::persistence::{BrowserStorage, HighScoreStore};
use crate::store::GameStore;

pub type BrowserStore = GameStore<IntervalCountdown, BrowserStorage>;

/// Snapshot of the store plus the way back into it, shared with every screen.
#[derive(Clone, PartialEq)]
pub struct GameContext {
    pub state: GameState,
    pub dispatch: Callback<GameAction>,
}

/// Builds the store with a countdown that reaches back into it through a weak handle.
pub fn browser_store() -> Rc<RefCell<BrowserStore>> {
    Rc::new_cyclic(|weak: &Weak<RefCell<BrowserStore>>| {
        let weak = weak.clone();
        let countdown = IntervalCountdown::new(move |event| {
            let Some(store) = weak.upgrade() else {
                return;
            };
            match store.try_borrow_mut() {
                Ok(mut s) => s.on_countdown(event),
                Err(_) => log::warn!("countdown {:?} dropped: store busy", event),
            };
        });
        let scores = HighScoreStore::new(BrowserStorage, HIGH_SCORE_KEY);
        RefCell::new(GameStore::new(
            countdown,
            scores,
            Box::new(SmallRng::from_entropy()),
        ))
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| browser_store());
    let snapshot = use_state(|| store.borrow().state().clone());

    // Mirror every store change into the snapshot the screens render from.
    {
        let store = store.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let id = store
                .borrow_mut()
                .subscribe(move |st: &GameState| snapshot.set(st.clone()));
            move || store.borrow_mut().unsubscribe(id)
        });
    }

    let dispatch = {
        let store = store.clone();
        use_callback((), move |action: GameAction, _| match store.try_borrow_mut() {
            Ok(mut s) => s.dispatch(action),
            Err(_) => log::warn!("{:?} dropped: store busy", action),
        })
    };

    let ctx = GameContext {
        state: (*snapshot).clone(),
        dispatch,
    };

    let content = match ctx.state.phase {
        Phase::Menu => html! { <MainMenu /> },
        Phase::DifficultySelect => html! { <DifficultySelector /> },
        Phase::Playing => html! { <>
            <GameUi />
            <PuzzleGame />
        </> },
        Phase::Results => html! { <ResultsScreen /> },
    };

    html! {
        <ContextProvider<GameContext> context={ctx}>
            <div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#1a1a2e; color:#e6edf3; font-family:Inter, sans-serif;">
                <FloatingShapes />
                <div style="position:absolute; inset:0; z-index:2; overflow-y:auto;">{ content }</div>
            </div>
        </ContextProvider<GameContext>>
    }
}
