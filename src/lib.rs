//! tarefas: a to-do list for the terminal.
//!
//! The task collection is owned by a single reducer-driven store
//! ([`tasks`]); the [`ui`] layer renders from state snapshots and turns key
//! events into intents. No persistence: a task never outlives its session.

pub mod cli;
pub mod config;
pub mod logging;
pub mod tasks;
pub mod ui;
