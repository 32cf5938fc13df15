//! Table rendering for the ordered task view.

use serde::Serialize;

use crate::models::Task;

const DONE_MARK: &str = "✓";
const HEADERS: [&str; 5] = ["#", "Task", "Priority", "Deadline", "Done"];

/// One rendering-ready row of the task table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskRow {
    /// Position in the ordered view at the time of rendering.
    pub index: usize,
    pub description: String,
    pub priority_label: &'static str,
    pub priority_class: &'static str,
    pub deadline: String,
    pub done: bool,
    /// The toggle this row offers: `check` while open, `undo` once done.
    pub action: &'static str,
}

impl TaskRow {
    pub fn from_task(index: usize, task: &Task, date_format: &str) -> Self {
        let style = task.priority.style();
        Self {
            index,
            description: task.description.clone(),
            priority_label: style.label,
            priority_class: style.class,
            deadline: task.deadline.format(date_format).to_string(),
            done: task.done,
            action: if task.done { "undo" } else { "check" },
        }
    }
}

/// Rows for every task, in view order.
pub fn rows(tasks: &[Task], date_format: &str) -> Vec<TaskRow> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskRow::from_task(i, task, date_format))
        .collect()
}

/// Render rows as a plain-text table.
///
/// Example output:
/// ```text
/// #  Task          Priority  Deadline   Done
/// 0  Call bank     High      1/8/2025
/// 1  Write report  High      1/10/2025  ✓
/// ```
pub fn render_table(rows: &[TaskRow]) -> String {
    if rows.is_empty() {
        return "No tasks.\n".to_string();
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.index.to_string(),
                row.description.clone(),
                row.priority_label.to_string(),
                row.deadline.clone(),
                if row.done { DONE_MARK } else { "" }.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_line(&mut output, &HEADERS.map(String::from), &widths);
    for line in &cells {
        push_line(&mut output, line, &widths);
    }
    output
}

fn push_line(output: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    output.push_str(line.trim_end());
    output.push('\n');
}
