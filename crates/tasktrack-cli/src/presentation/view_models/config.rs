use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub config: Config,
}
