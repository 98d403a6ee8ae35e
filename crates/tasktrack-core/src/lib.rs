//! In-memory task store and screen navigation.
//!
//! Both types are plain owned values. The binary creates one `TaskStore`
//! and one `Navigator` at start-up and hands them to the UI explicitly;
//! nothing in this crate is global.

pub mod navigation;
pub mod store;

pub use navigation::Navigator;
pub use store::{TaskStore, validate_task_text};
pub use tasktrack_types::{Error, Result, Screen, Task, TaskId};
