use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::codec;
use crate::error::{Result, TickError};
use crate::model::{Filter, Task};
use crate::store::{atomic, recover};
use crate::task_id::TaskId;

/// In-memory task collection bound to its backing file.
///
/// Loaded fresh for each invocation; every mutation rewrites the whole
/// collection through the atomic writer before returning. The backing path
/// is explicit constructor state, never a process-wide default.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the collection from `path`.
    ///
    /// A missing file becomes a fresh empty collection, created on disk
    /// immediately. An undecodable file is backed up and replaced via
    /// [`recover`]; decoding failure never surfaces from here.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            let tasks = Vec::new();
            atomic::write(&path, codec::encode(&tasks)?.as_bytes())?;
            return Ok(Self { path, tasks });
        }
        let raw = fs::read(&path)?;
        let tasks = match codec::decode(&raw) {
            Ok(tasks) => tasks,
            Err(TickError::Format(_)) => recover::recover(&path)?,
            Err(e) => return Err(e),
        };
        Ok(Self { path, tasks })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Append a new pending task and persist.
    ///
    /// The description is trimmed; a description that is empty after
    /// trimming fails validation before anything touches the disk.
    pub fn add(&mut self, description: &str) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TickError::EmptyDescription);
        }
        let task = Task {
            id: self.fresh_id()?,
            description: description.to_string(),
            created_date: Utc::now(),
            is_completed: false,
        };
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Tasks in insertion order, filtered by completion status.
    pub fn list(&self, filter: Filter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Mark a task completed and persist. Completing an already-completed
    /// task succeeds and leaves state unchanged.
    pub fn complete(&mut self, id: &TaskId) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TickError::TaskNotFound(id.clone()))?;
        task.is_completed = true;
        let task = task.clone();
        self.persist()?;
        Ok(task)
    }

    /// Remove a task, preserving the order of the rest, and persist.
    pub fn delete(&mut self, id: &TaskId) -> Result<()> {
        let idx = self
            .tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| TickError::TaskNotFound(id.clone()))?;
        self.tasks.remove(idx);
        self.persist()?;
        Ok(())
    }

    /// The generator is collision-resistant, but uniqueness against the
    /// current collection is this store's invariant, so it is checked here.
    fn fresh_id(&self) -> Result<TaskId> {
        loop {
            let id = TaskId::generate()?;
            if self.get(&id).is_none() {
                return Ok(id);
            }
        }
    }

    fn persist(&self) -> Result<()> {
        atomic::write(&self.path, codec::encode(&self.tasks)?.as_bytes())
    }
}
