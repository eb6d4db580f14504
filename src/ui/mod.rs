pub mod app;
pub mod confetti;
pub mod counter_view;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod redraw;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
