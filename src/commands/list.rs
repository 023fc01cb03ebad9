use std::path::Path;

use crate::error::Result;
use crate::model::{Filter, Task};
use crate::output::{self, Format};
use crate::store::tasks::TaskStore;

pub fn run(store_path: &Path, status: Filter, format: Format) -> Result<()> {
    let store = TaskStore::load(store_path)?;
    let tasks: Vec<Task> = store.list(status).cloned().collect();
    output::print_tasks(&tasks, format)?;
    Ok(())
}
