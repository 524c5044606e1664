pub mod error;
pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod service;

pub use error::StoreError;
pub use model::task::{Task, TaskEntry, TaskId, Category, TaskStatus};
pub use repository::{TaskRepository, MemoryTaskRepository};
pub use input::{parse_selection, parse_task_id, parse_category, parse_status, expand_choice};
pub use time::parse_due_date;
pub use service::task_service::{TaskService, TaskFilter, filter_tasks};
