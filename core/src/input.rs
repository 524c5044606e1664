use crate::error::{Result, StoreError};
use crate::model::task::{Category, TaskId, TaskStatus};

/// Parses a 1-based menu choice into a 0-based index below `len`.
pub fn parse_selection(input: &str, len: usize) -> Result<usize> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(StoreError::InvalidSelection(input.to_string())),
    }
}

pub fn parse_task_id(input: &str) -> Result<TaskId> {
    let input = input.trim();
    match input.parse::<TaskId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(StoreError::InvalidSelection(input.to_string())),
    }
}

pub fn parse_category(input: &str) -> Result<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let index = parse_choice(input, &labels)?;
    Ok(Category::ALL[index])
}

pub fn parse_status(input: &str) -> Result<TaskStatus> {
    let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
    let index = parse_choice(input, &labels)?;
    Ok(TaskStatus::ALL[index])
}

/// Accepts either a 1-based index into `candidates` or a name prefix.
fn parse_choice(input: &str, candidates: &[&str]) -> Result<usize> {
    let input = input.trim();
    if input.chars().all(|c| c.is_ascii_digit()) && !input.is_empty() {
        return parse_selection(input, candidates.len());
    }
    let name = expand_choice(input, candidates)?;
    candidates
        .iter()
        .position(|c| *c == name)
        .ok_or_else(|| StoreError::InvalidSelection(input.to_string()))
}

/// Expands a case-insensitive prefix to the single candidate it names.
pub fn expand_choice<'a>(key: &str, candidates: &[&'a str]) -> Result<&'a str> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err(StoreError::InvalidSelection(key));
    }

    // 1. Exact match
    if let Some(exact) = candidates.iter().find(|c| c.to_lowercase() == key) {
        return Ok(*exact);
    }

    // 2. Prefix match
    let matches: Vec<&'a str> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&key))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(StoreError::InvalidSelection(key)),
        _ => Err(StoreError::AmbiguousSelection(
            key,
            matches.iter().map(|m| m.to_string()).collect(),
        )),
    }
}
