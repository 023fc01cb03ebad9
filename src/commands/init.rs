use std::path::Path;

use crate::error::Result;
use crate::output::Format;
use crate::store::tasks::TaskStore;

/// Ensure the backing file exists; a fresh empty collection is created when
/// it does not. Safe to run repeatedly.
pub fn run(store_path: &Path, format: Format) -> Result<()> {
    let store = TaskStore::load(store_path)?;
    match format {
        Format::Json => println!(
            "{}",
            serde_json::json!({
                "path": store.path().display().to_string(),
                "tasks": store.len(),
            })
        ),
        _ => println!(
            "task store ready at {} ({} tasks)",
            store.path().display(),
            store.len()
        ),
    }
    Ok(())
}
