//! Presentation layer.
//!
//! - view_models: serializable, render-ready data
//! - presenters: build view models from `App` state and config
//! - views: ratatui widgets and console `Display` views over view models
//! - renderers: the terminal event loop and the console printer

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, TuiRenderer};
