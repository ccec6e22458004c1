//! Search-as-you-type texture picker for the terminal

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod suggest;
pub mod texture;
pub mod widgets;
