pub mod error;
pub mod screen;
pub mod task;

pub use error::{Error, Result};
pub use screen::Screen;
pub use task::{Task, TaskId};
