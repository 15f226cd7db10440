pub mod app;
pub mod difficulty_selector;
pub mod floating_shapes;
pub mod game_ui;
pub mod main_menu;
pub mod puzzle_game;
pub mod puzzles;
pub mod results_screen;

pub use app::{App, GameContext};
