use std::path::Path;

use crate::error::Result;
use crate::output::Format;
use crate::store::tasks::TaskStore;
use crate::task_id::TaskId;

pub fn run(store_path: &Path, id: &TaskId, format: Format) -> Result<()> {
    let mut store = TaskStore::load(store_path)?;
    store.delete(id)?;
    match format {
        Format::Json => println!("{}", serde_json::json!({ "deleted": id.as_str() })),
        _ => println!("deleted task {id}"),
    }
    Ok(())
}
