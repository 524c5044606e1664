use crate::error::Result;
use crate::model::task::{Task, TaskEntry, TaskId, TaskStatus};

pub trait TaskRepository {
    /// Stores the task and returns the id it was assigned.
    fn add(&mut self, task: Task) -> Result<TaskId>;
    fn list(&self) -> Vec<TaskEntry>;
    fn get(&self, id: TaskId) -> Result<&Task>;
    fn delete(&mut self, id: TaskId) -> Result<Task>;
    fn update_status(&mut self, id: TaskId, status: TaskStatus) -> Result<()>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
