use std::io::{BufRead, Write};

use anyhow::Result;
use smarttask_core::{
    parse_category, parse_due_date, parse_selection, parse_status, parse_task_id, Category,
    StoreError, TaskEntry, TaskRepository, TaskService, TaskStatus,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::render::render_entries;

const SEPARATOR: &str = "______________________";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Choice {
    AddTask,
    ViewTasks,
    DeleteTask,
    FilterTasks,
    UpdateStatus,
    Exit,
}

impl Choice {
    pub const ALL: [Choice; 6] = [
        Choice::AddTask,
        Choice::ViewTasks,
        Choice::DeleteTask,
        Choice::FilterTasks,
        Choice::UpdateStatus,
        Choice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Choice::AddTask => "Add Task",
            Choice::ViewTasks => "View Tasks",
            Choice::DeleteTask => "Delete Task",
            Choice::FilterTasks => "Filter Tasks",
            Choice::UpdateStatus => "Update Task Status",
            Choice::Exit => "Exit",
        }
    }
}

/// The interactive console loop.
///
/// Reads one answer per line from `input` and writes every prompt and
/// result to `output`, so a session can be scripted in tests.
pub struct Menu<R: TaskRepository, I: BufRead, O: Write> {
    service: TaskService<R>,
    input: I,
    output: O,
    config: Config,
}

impl<R: TaskRepository, I: BufRead, O: Write> Menu<R, I, O> {
    pub fn new(service: TaskService<R>, input: I, output: O, config: Config) -> Self {
        Self {
            service,
            input,
            output,
            config,
        }
    }

    #[cfg(test)]
    pub fn service(&self) -> &TaskService<R> {
        &self.service
    }

    #[cfg(test)]
    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Smart Task Manager")?;
        writeln!(self.output, "{}", SEPARATOR)?;

        loop {
            self.show_options()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    debug!("input closed");
                    self.exit_message()?;
                    break;
                }
            };

            match parse_selection(&line, Choice::ALL.len()) {
                Ok(index) => match Choice::ALL[index] {
                    Choice::AddTask => self.add_task()?,
                    Choice::ViewTasks => self.show_tasks()?,
                    Choice::DeleteTask => self.delete_task()?,
                    Choice::FilterTasks => self.filter_tasks()?,
                    Choice::UpdateStatus => self.update_status()?,
                    Choice::Exit => {
                        self.exit_message()?;
                        break;
                    }
                },
                Err(_) => writeln!(self.output, "Invalid choice is selected")?,
            }
            writeln!(self.output, "{}", SEPARATOR)?;
        }

        self.output.flush()?;
        Ok(())
    }

    fn show_options(&mut self) -> Result<()> {
        for (i, choice) in Choice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        writeln!(self.output, "Enter choice")?;
        self.output.flush()?;
        Ok(())
    }

    fn exit_message(&mut self) -> Result<()> {
        info!(tasks = self.service.len(), "session ended");
        writeln!(self.output, "SmartTaskManager is exited by User.")?;
        Ok(())
    }

    fn add_task(&mut self) -> Result<()> {
        let title = self.prompt("Enter the title")?;

        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        let answer = self.prompt_list("Select the Category", &labels)?;
        let category = match parse_category(&answer) {
            Ok(c) => c,
            Err(e) => return self.invalid_choice(&e),
        };

        let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
        let answer = self.prompt_list("Select the Status", &labels)?;
        let status = match parse_status(&answer) {
            Ok(s) => s,
            Err(e) => return self.invalid_choice(&e),
        };

        let today = self.service.today();
        let answer = self.prompt("Enter the due date (blank for today)")?;
        let due = match parse_due_date(&answer, today) {
            Ok(d) => d,
            Err(e) => {
                writeln!(self.output, "Warning: Invalid due date '{}': {}", answer, e)?;
                today
            }
        };

        match self.service.add_task_due(&title, category, status, due) {
            Ok(id) => writeln!(
                self.output,
                "Task added successfully (ID: {}), Total tasks: {}",
                id,
                self.service.len()
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn show_tasks(&mut self) -> Result<()> {
        let tasks = self.service.list_tasks();
        if tasks.is_empty() {
            writeln!(self.output, "No tasks found.")?;
            return Ok(());
        }
        writeln!(self.output, "All tasks are listed below")?;
        self.write_entries(&tasks)
    }

    fn delete_task(&mut self) -> Result<()> {
        if self.service.is_empty() {
            writeln!(self.output, "No tasks are added yet, delete operation is invalid")?;
            return Ok(());
        }

        self.show_tasks()?;
        let answer = self.prompt("Select the task to delete")?;
        let result = parse_task_id(&answer).and_then(|id| self.service.delete_task(id));
        match result {
            Ok(task) => writeln!(self.output, "Task {} is removed successfully", task.title())?,
            Err(e) => writeln!(self.output, "{}. No task was deleted", e)?,
        }
        Ok(())
    }

    fn filter_tasks(&mut self) -> Result<()> {
        let answer = self.prompt_list("Filter by", &["By Category", "By Status"])?;
        let matched = match parse_selection(&answer, 2) {
            Ok(0) => {
                let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
                let answer = self.prompt_list("Select the Category", &labels)?;
                match parse_category(&answer) {
                    Ok(category) => self.service.filter_by_category(category),
                    Err(e) => return self.invalid_choice(&e),
                }
            }
            Ok(_) => {
                let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
                let answer = self.prompt_list("Select the Status", &labels)?;
                match parse_status(&answer) {
                    Ok(status) => self.service.filter_by_status(status),
                    Err(e) => return self.invalid_choice(&e),
                }
            }
            Err(e) => return self.invalid_choice(&e),
        };

        if matched.is_empty() {
            writeln!(self.output, "No matching tasks.")?;
            return Ok(());
        }
        self.write_entries(&matched)
    }

    fn update_status(&mut self) -> Result<()> {
        if self.service.is_empty() {
            writeln!(self.output, "No tasks are added yet, update operation is invalid")?;
            return Ok(());
        }

        self.show_tasks()?;
        let answer = self.prompt("Select the task to update")?;
        let id = match parse_task_id(&answer) {
            Ok(id) => id,
            Err(e) => {
                writeln!(self.output, "{}. No task was updated", e)?;
                return Ok(());
            }
        };

        let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
        let answer = self.prompt_list("Select the Status", &labels)?;
        let status = match parse_status(&answer) {
            Ok(s) => s,
            Err(e) => return self.invalid_choice(&e),
        };

        match self.service.update_status(id, status) {
            Ok(()) => writeln!(self.output, "Task {} status updated to {}", id, status)?,
            Err(e) => writeln!(self.output, "{}. No task was updated", e)?,
        }
        Ok(())
    }

    fn write_entries(&mut self, entries: &[TaskEntry]) -> Result<()> {
        write!(self.output, "{}", render_entries(entries, self.config.table))?;
        Ok(())
    }

    fn invalid_choice(&mut self, error: &StoreError) -> Result<()> {
        writeln!(self.output, "Invalid choice is selected ({})", error)?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn prompt_list(&mut self, message: &str, options: &[&str]) -> Result<String> {
        writeln!(self.output, "{}", message)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // undecodable bytes turn into U+FFFD and fail whichever parse follows
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use smarttask_core::MemoryTaskRepository;
    use std::io::Cursor;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    fn run_session(script: &str) -> (String, Vec<TaskEntry>) {
        run_raw_session(script.as_bytes())
    }

    fn run_raw_session(script: &[u8]) -> (String, Vec<TaskEntry>) {
        let service = TaskService::with_clock(MemoryTaskRepository::new(), fixed_day);
        let mut menu = Menu::new(service, Cursor::new(script.to_vec()), Vec::new(), Config::default());
        menu.run().unwrap();
        let tasks = menu.service().list_tasks();
        let output = String::from_utf8(menu.into_output()).unwrap();
        (output, tasks)
    }

    fn titles(tasks: &[TaskEntry]) -> Vec<(u32, String)> {
        tasks
            .iter()
            .map(|e| (e.id, e.task.title().to_string()))
            .collect()
    }

    #[test]
    fn test_exit_immediately() {
        let (output, tasks) = run_session("6\n");
        assert!(output.starts_with("Smart Task Manager\n"));
        assert!(output.contains("1. Add Task\n"));
        assert!(output.contains("SmartTaskManager is exited by User."));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (output, _) = run_session("");
        assert!(output.contains("SmartTaskManager is exited by User."));
    }

    #[test]
    fn test_invalid_choice_keeps_looping() {
        let (output, _) = run_session("9\nabc\n6\n");
        assert_eq!(output.matches("Invalid choice is selected").count(), 2);
        assert!(output.contains("exited by User"));
    }

    #[test]
    fn test_add_and_view() {
        let (output, tasks) = run_session("1\nWrite report\n1\n1\n\n2\n6\n");
        assert!(output.contains("Task added successfully (ID: 1), Total tasks: 1"));
        assert!(output.contains(
            "1: Title: Write report, Category: Coding, Due Date: 2025-06-04, Status: Pending\n"
        ));
        assert_eq!(titles(&tasks), vec![(1, "Write report".to_string())]);
    }

    #[test]
    fn test_add_with_named_choices_and_due_date() {
        let (_, tasks) = run_session("1\nStretch\nyoga\ncomp\ntomorrow\n6\n");
        let task = &tasks[0].task;
        assert_eq!(task.category(), Category::Yoga);
        assert_eq!(task.status(), TaskStatus::Completed);
        assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
    }

    #[test]
    fn test_add_with_bad_due_date_falls_back_to_today() {
        let (output, tasks) = run_session("1\nNap\n4\n3\nsomeday\n6\n");
        assert!(output.contains("Warning: Invalid due date 'someday'"));
        assert_eq!(tasks[0].task.due_date(), fixed_day());
    }

    #[test]
    fn test_add_with_bad_category_adds_nothing() {
        let (output, tasks) = run_session("1\nNap\n9\n6\n");
        assert!(output.contains("Invalid choice is selected"));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_add_with_blank_title_adds_nothing() {
        let (output, tasks) = run_session("1\n   \n1\n1\n\n6\n");
        assert!(output.contains("Task title must not be empty"));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_delete_on_empty_store_does_not_prompt() {
        let (output, _) = run_session("3\n6\n");
        assert!(output.contains("No tasks are added yet, delete operation is invalid"));
        assert!(!output.contains("Select the task to delete"));
    }

    #[test]
    fn test_delete_absent_id() {
        let (output, tasks) = run_session("1\nA\n1\n1\n\n1\nB\n1\n1\n\n3\n5\n6\n");
        assert!(output.contains("Task 5 not found. No task was deleted"));
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_delete_non_numeric_id() {
        let (output, tasks) = run_session("1\nA\n1\n1\n\n3\nfirst\n6\n");
        assert!(output.contains("Invalid selection: 'first'. No task was deleted"));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_filter_by_status() {
        let script = "1\nWrite report\n1\n1\n\n\
                      1\nStretch\n2\n2\n\n\
                      4\n2\n2\n\
                      6\n";
        let (output, _) = run_session(script);
        assert!(output.contains("2: Title: Stretch, Category: Yoga, Due Date: 2025-06-04, Status: Completed\n"));
        assert!(!output.contains("1: Title: Write report"));
    }

    #[test]
    fn test_filter_without_matches() {
        let (output, _) = run_session("1\nA\n1\n1\n\n4\n1\ngym\n6\n");
        assert!(output.contains("No matching tasks."));
    }

    #[test]
    fn test_update_status() {
        let (output, tasks) = run_session("1\nA\n1\n1\n\n5\n1\nforecasted\n6\n");
        assert!(output.contains("Task 1 status updated to Forecasted"));
        assert_eq!(tasks[0].task.status(), TaskStatus::Forecasted);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let script = "1\nWrite report\n1\n1\n\n\
                      1\nStretch\n2\n2\n\n\
                      3\n1\n\
                      1\nSleep early\n4\n1\n\n\
                      6\n";
        let (output, tasks) = run_session(script);
        assert!(output.contains("Task Write report is removed successfully"));
        // id 3 is new even though only one task remained before the add
        assert_eq!(
            titles(&tasks),
            vec![(2, "Stretch".to_string()), (3, "Sleep early".to_string())]
        );
    }

    #[test]
    fn test_out_of_range_due_date_falls_back_to_today() {
        let (output, tasks) = run_session("1\nA\n1\n1\n+99999999d\n1\nB\n1\n1\n+3é\n6\n");
        assert!(output.contains("Warning: Invalid due date '+99999999d'"));
        assert!(output.contains("Warning: Invalid due date '+3é'"));
        assert!(output.contains("Task added successfully (ID: 2), Total tasks: 2"));
        assert!(output.contains("exited by User"));
        assert!(tasks.iter().all(|e| e.task.due_date() == fixed_day()));
    }

    #[test]
    fn test_unknown_status_reports_the_input() {
        let (output, tasks) = run_session("1\nA\n1\n1\n\n5\n1\nx\n6\n");
        assert!(output.contains("Invalid choice is selected (Invalid selection: 'x')"));
        assert_eq!(tasks[0].task.status(), TaskStatus::Pending);
    }

    #[test]
    fn test_invalid_utf8_line_is_an_invalid_choice() {
        let (output, tasks) = run_raw_session(b"\xff\xfe\n1\nA\n1\n1\n\n6\n");
        assert_eq!(output.matches("Invalid choice is selected").count(), 1);
        assert_eq!(tasks.len(), 1);
        assert!(output.contains("exited by User"));
    }
}
