use serde::Serialize;
use tasktrack_types::Screen;

#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshotViewModel {
    pub pending: Vec<String>,
    pub completed: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoStepViewModel {
    pub index: usize,
    pub label: String,
    pub outcome: String,
    pub screen: Screen,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    pub state: StoreSnapshotViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoTranscriptViewModel {
    pub steps: Vec<DemoStepViewModel>,
    pub final_state: StoreSnapshotViewModel,
}
