//! The task collection and its three mutations.

use chrono::NaiveDate;

use crate::error::{TaskError, ValidationError};
use crate::models::{CreateTaskInput, Priority, Task};
use crate::render::{self, TaskRow};

/// Wire format of a deadline as typed into the date field.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Owns the task list and keeps it in display order.
///
/// Positions handed to [`toggle_done`](Self::toggle_done) and
/// [`delete`](Self::delete) index into the current [`ordered_view`](Self::ordered_view).
/// They are only valid until the next mutation.
#[derive(Debug, Default)]
pub struct TaskListManager {
    tasks: Vec<Task>,
}

impl TaskListManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task and re-sort.
    ///
    /// The deadline check runs against the raw input first, so an empty field
    /// is reported as missing rather than malformed. On error the list is
    /// unchanged.
    pub fn add(
        &mut self,
        description: &str,
        priority: u8,
        deadline_value: &str,
    ) -> Result<(), TaskError> {
        let description = description.trim();
        if description.is_empty() {
            tracing::warn!("Rejected task: empty description");
            return Err(ValidationError::EmptyDescription.into());
        }
        if deadline_value.is_empty() {
            tracing::warn!("Rejected task {:?}: empty deadline", description);
            return Err(ValidationError::EmptyDeadline.into());
        }
        let priority = Priority::from_level(priority)?;
        let deadline = parse_deadline(deadline_value)?;

        self.tasks
            .push(Task::new(description.to_string(), priority, deadline));
        self.tasks.sort_by(Task::display_order);

        tracing::debug!(
            "Added task {:?} ({}, due {}); {} total",
            description,
            priority.as_str(),
            deadline,
            self.tasks.len()
        );
        Ok(())
    }

    pub fn add_input(&mut self, input: &CreateTaskInput) -> Result<(), TaskError> {
        self.add(&input.description, input.priority, &input.deadline)
    }

    /// Flip the `done` flag of the task at `index`. Order is not affected.
    pub fn toggle_done(&mut self, index: usize) -> Result<(), TaskError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })?;
        task.done = !task.done;
        tracing::debug!("Task {} marked done={}", index, task.done);
        Ok(())
    }

    /// Remove the task at `index`. Later tasks move up one position.
    pub fn delete(&mut self, index: usize) -> Result<Task, TaskError> {
        if index >= self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        let removed = self.tasks.remove(index);
        tracing::debug!("Deleted task {} ({:?})", index, removed.description);
        Ok(removed)
    }

    /// The tasks in display order.
    pub fn ordered_view(&self) -> &[Task] {
        &self.tasks
    }

    /// Rendering-ready rows for the current view.
    pub fn rows(&self, date_format: &str) -> Vec<TaskRow> {
        render::rows(&self.tasks, date_format)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn parse_deadline(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT)
        .map_err(|_| ValidationError::InvalidDeadline(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deadline() {
        assert_eq!(
            parse_deadline("2025-01-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
        assert_eq!(
            parse_deadline("tomorrow"),
            Err(ValidationError::InvalidDeadline("tomorrow".to_string()))
        );
        assert!(parse_deadline("2025-02-30").is_err());
    }

    #[test]
    fn test_whitespace_deadline_is_present_but_invalid() {
        let mut manager = TaskListManager::new();
        let err = manager.add("Task", 2, "   ").unwrap_err();
        assert_eq!(
            err,
            TaskError::Validation(ValidationError::InvalidDeadline("   ".to_string()))
        );
        assert!(manager.is_empty());
    }

    #[test]
    fn test_add_input() {
        let mut manager = TaskListManager::new();
        manager
            .add_input(&CreateTaskInput {
                description: "Pay rent".to_string(),
                priority: 3,
                deadline: "2025-02-01".to_string(),
            })
            .unwrap();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(0).unwrap().priority, Priority::High);
    }
}
