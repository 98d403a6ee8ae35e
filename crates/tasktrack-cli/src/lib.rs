// NOTE: tasktrack layout
//
// - app: UI-independent state machine. Key events become `Action`s, `App`
//   applies them to the store, the navigator and transient UI state.
// - presentation: view models built from `App`, ratatui widgets and a
//   console renderer. Widgets never touch the store.
// - handlers: composition roots. Each handler creates the `TaskStore` and
//   moves it into an `App`; nothing is global.
//
// Tasks live only in memory; the data directory holds config and logs.

pub mod app;
mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use app::{Action, App, Focus, Outcome, map_key};
pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
