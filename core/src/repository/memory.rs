use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::model::task::{Task, TaskEntry, TaskId, TaskStatus};
use crate::repository::traits::TaskRepository;

const FIRST_ID: TaskId = 1;

/// Session-scoped task store.
///
/// Entries keep insertion order. Ids come from a counter that only moves
/// forward, so an id freed by a delete is never handed out again.
#[derive(Debug, Clone)]
pub struct MemoryTaskRepository {
    tasks: IndexMap<TaskId, Task>,
    next_id: TaskId,
}

impl Default for MemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: IndexMap::new(),
            next_id: FIRST_ID,
        }
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn add(&mut self, task: Task) -> Result<TaskId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        debug!(id, title = task.title(), "task added");
        self.tasks.insert(id, task);
        Ok(id)
    }

    fn list(&self) -> Vec<TaskEntry> {
        self.tasks
            .iter()
            .map(|(id, task)| TaskEntry::new(*id, task.clone()))
            .collect()
    }

    fn get(&self, id: TaskId) -> Result<&Task> {
        self.tasks.get(&id).ok_or(StoreError::NotFound(id))
    }

    fn delete(&mut self, id: TaskId) -> Result<Task> {
        if self.tasks.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        // shift_remove keeps the remaining entries in insertion order
        let removed = self
            .tasks
            .shift_remove(&id)
            .ok_or(StoreError::NotFound(id))?;
        debug!(id, title = removed.title(), "task deleted");
        Ok(removed)
    }

    fn update_status(&mut self, id: TaskId, status: TaskStatus) -> Result<()> {
        let task = self.tasks.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        debug!(id, from = %task.status(), to = %status, "task status updated");
        task.update_status(status);
        Ok(())
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
