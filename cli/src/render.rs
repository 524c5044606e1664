use smarttask_core::TaskEntry;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Due Date")]
    due: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&TaskEntry> for TaskRow {
    fn from(entry: &TaskEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.task.title().to_string(),
            category: entry.task.category().to_string(),
            due: entry.task.due_date().format("%Y-%m-%d").to_string(),
            status: entry.task.status().to_string(),
        }
    }
}

/// One `<id>: <task>` line per entry.
pub fn render_lines(entries: &[TaskEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {}\n", e.id, e.task))
        .collect()
}

pub fn render_table(entries: &[TaskEntry]) -> String {
    let rows: Vec<TaskRow> = entries.iter().map(TaskRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n", table)
}

pub fn render_entries(entries: &[TaskEntry], as_table: bool) -> String {
    if as_table {
        render_table(entries)
    } else {
        render_lines(entries)
    }
}
