//! Terminal UI: rendering, key routing, and the MVI state layer.

pub mod app;
pub mod dialog;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod shell;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
