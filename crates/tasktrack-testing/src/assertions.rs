//! Custom assertions for tasktrack-specific validation.

use anyhow::{Context, Result};
use serde_json::Value;
use tasktrack_core::TaskStore;

fn texts(tasks: &[tasktrack_types::Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.text.as_str()).collect()
}

/// Assert the pending sequence holds exactly `expected`, in order.
pub fn assert_pending(store: &TaskStore, expected: &[&str]) {
    assert_eq!(texts(store.pending()), expected, "pending tasks differ");
}

/// Assert the completed sequence holds exactly `expected`, in order.
pub fn assert_completed(store: &TaskStore, expected: &[&str]) {
    assert_eq!(texts(store.completed()), expected, "completed tasks differ");
}

/// Assert that a JSON array at `pointer` contains exactly the given strings.
pub fn assert_json_texts(json: &Value, pointer: &str, expected: &[&str]) -> Result<()> {
    let items = json
        .pointer(pointer)
        .and_then(Value::as_array)
        .with_context(|| format!("Expected array at '{}'", pointer))?;

    let actual: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
    if actual != expected {
        anyhow::bail!("Expected {:?} at '{}', got {:?}", expected, pointer, actual);
    }

    Ok(())
}
