use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::tasks::TaskStore;
use crate::task_id::TaskId;

pub fn run(store_path: &Path, id: &TaskId, format: Format) -> Result<()> {
    let mut store = TaskStore::load(store_path)?;
    let task = store.complete(id)?;
    output::print_task(&task, format)?;
    Ok(())
}
