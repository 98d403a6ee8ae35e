use anyhow::Result;
use tasktrack_core::TaskStore;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::presentation::TuiRenderer;

/// Composition root for the interactive session.
///
/// The store is created here and moved into `App`; it is dropped when the
/// session ends.
pub fn handle(config: &Config) -> Result<()> {
    let app = App::new(TaskStore::new());
    let app = TuiRenderer::new(app, config.ui.clone()).run()?;

    let store = app.store();
    info!(
        pending = store.pending_len(),
        completed = store.completed_len(),
        "session ended"
    );
    Ok(())
}
