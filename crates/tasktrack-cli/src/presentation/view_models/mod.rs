pub mod config;
pub mod demo;
pub mod screen;

pub use config::ConfigViewModel;
pub use demo::{DemoStepViewModel, DemoTranscriptViewModel, StoreSnapshotViewModel};
pub use screen::{
    ActionButtonViewModel, AlertViewModel, CompletedListViewModel, HeaderViewModel,
    InputViewModel, KeyHint, ScreenBody, ScreenViewModel, StatusBarViewModel, TaskItemViewModel,
    TaskListViewModel,
};
