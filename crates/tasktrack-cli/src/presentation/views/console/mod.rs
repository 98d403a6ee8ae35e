//! `Display` views for non-interactive commands.

mod config;
mod demo;

pub use config::ConfigView;
pub use demo::{DemoTranscriptView, StoreSnapshotView};
