use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Priority;

/// One entry in the task list.
///
/// Tasks are only created through [`crate::TaskListManager::add`], always with
/// `done == false`. After that the only field that changes is `done`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub priority: Priority,
    pub deadline: NaiveDate,
    pub done: bool,
}

impl Task {
    pub(crate) fn new(description: String, priority: Priority, deadline: NaiveDate) -> Self {
        Self {
            description,
            priority,
            deadline,
            done: false,
        }
    }

    /// Display order: priority descending, then deadline ascending.
    /// `done` is not a sort key.
    pub fn display_order(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.deadline.cmp(&other.deadline))
    }
}

/// Raw input for creating a task, as a form or command line hands it over.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskInput {
    pub description: String,
    /// Raw priority level, expected to be 1, 2 or 3.
    pub priority: u8,
    /// Unparsed deadline, `YYYY-MM-DD`.
    pub deadline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(priority: Priority, deadline: &str) -> Task {
        Task::new(
            "t".to_string(),
            priority,
            NaiveDate::parse_from_str(deadline, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_higher_priority_first() {
        let high = task(Priority::High, "2025-03-01");
        let low = task(Priority::Low, "2025-01-01");
        assert_eq!(high.display_order(&low), Ordering::Less);
        assert_eq!(low.display_order(&high), Ordering::Greater);
    }

    #[test]
    fn test_earlier_deadline_first_within_priority() {
        let early = task(Priority::Medium, "2025-01-05");
        let late = task(Priority::Medium, "2025-01-10");
        assert_eq!(early.display_order(&late), Ordering::Less);
    }

    #[test]
    fn test_done_is_not_a_sort_key() {
        let open = task(Priority::Medium, "2025-01-05");
        let mut closed = open.clone();
        closed.done = true;
        assert_eq!(open.display_order(&closed), Ordering::Equal);
    }
}
