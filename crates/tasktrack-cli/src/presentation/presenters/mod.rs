pub mod demo;
pub mod screen;

pub use demo::{describe_outcome, present_demo_step, present_store_snapshot};
pub use screen::build_screen_view_model;
