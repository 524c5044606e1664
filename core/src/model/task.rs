use std::fmt;

use chrono::NaiveDate;

pub type TaskId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Coding,
    Yoga,
    Gym,
    Sleep,
}

impl Category {
    /// Menu order.
    pub const ALL: [Category; 4] = [
        Category::Coding,
        Category::Yoga,
        Category::Gym,
        Category::Sleep,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Coding => "Coding",
            Category::Yoga => "Yoga",
            Category::Gym => "Gym",
            Category::Sleep => "Sleep",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    Completed,
    Forecasted,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::Completed,
        TaskStatus::Forecasted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
            TaskStatus::Forecasted => "Forecasted",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single tracked task.
///
/// Only the status can change after construction; everything else is
/// read through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    title: String,
    category: Category,
    status: TaskStatus,
    due_date: NaiveDate,
}

impl Task {
    pub fn new(title: String, category: Category, status: TaskStatus, due_date: NaiveDate) -> Self {
        Self {
            title,
            category,
            status,
            due_date,
        }
    }

    /// Any status may move to any other status.
    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Category: {}, Due Date: {}, Status: {}",
            self.title,
            self.category,
            self.due_date.format("%Y-%m-%d"),
            self.status
        )
    }
}

/// A task together with the id the store assigned it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskEntry {
    pub id: TaskId,
    pub task: Task,
}

impl TaskEntry {
    pub fn new(id: TaskId, task: Task) -> Self {
        Self { id, task }
    }
}
