pub mod audio;
pub mod components;
pub mod config;
pub mod countdown;
pub mod model;
pub mod persistence;
pub mod puzzles;
pub mod state;
pub mod store;
pub mod util;
