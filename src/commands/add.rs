use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::tasks::TaskStore;

pub fn run(store_path: &Path, description: String, format: Format) -> Result<()> {
    let mut store = TaskStore::load(store_path)?;
    let task = store.add(&description)?;
    output::print_task(&task, format)?;
    Ok(())
}
