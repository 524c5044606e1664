use crate::error::{Result, StoreError};
use crate::model::task::{Category, Task, TaskEntry, TaskId, TaskStatus};
use crate::repository::TaskRepository;
use chrono::{Local, NaiveDate};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskFilter {
    Category(Category),
    Status(TaskStatus),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::Category(category) => task.category() == *category,
            TaskFilter::Status(status) => task.status() == *status,
        }
    }
}

/// Source of "today" for due dates.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct TaskService<R: TaskRepository> {
    repo: R,
    today: Clock,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, local_today)
    }

    pub fn with_clock(repo: R, today: Clock) -> Self {
        Self { repo, today }
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    /// Adds a task due today.
    pub fn add_task(&mut self, title: &str, category: Category, status: TaskStatus) -> Result<TaskId> {
        let today = self.today();
        self.add_task_due(title, category, status, today)
    }

    pub fn add_task_due(
        &mut self,
        title: &str,
        category: Category,
        status: TaskStatus,
        due_date: NaiveDate,
    ) -> Result<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = Task::new(title.to_string(), category, status, due_date);
        self.repo.add(task)
    }

    pub fn list_tasks(&self) -> Vec<TaskEntry> {
        self.repo.list()
    }

    pub fn get_task(&self, id: TaskId) -> Result<&Task> {
        self.repo.get(id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        self.repo.delete(id)
    }

    pub fn update_status(&mut self, id: TaskId, status: TaskStatus) -> Result<()> {
        self.repo.update_status(id, status)
    }

    pub fn filter_by_category(&self, category: Category) -> Vec<TaskEntry> {
        self.filter(TaskFilter::Category(category))
    }

    pub fn filter_by_status(&self, status: TaskStatus) -> Vec<TaskEntry> {
        self.filter(TaskFilter::Status(status))
    }

    pub fn filter(&self, filter: TaskFilter) -> Vec<TaskEntry> {
        let matched = filter_tasks(self.repo.list(), filter);
        debug!(?filter, count = matched.len(), "tasks filtered");
        matched
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }
}

// Standalone functions for pure logic

pub fn filter_tasks(entries: Vec<TaskEntry>, filter: TaskFilter) -> Vec<TaskEntry> {
    entries
        .into_iter()
        .filter(|entry| filter.matches(&entry.task))
        .collect()
}
