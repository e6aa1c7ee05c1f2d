//! Kanban board projection over task statuses.

use crate::{status::TaskStatus, task::domain::Task};
use serde::Serialize;

/// Tasks sharing one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    /// Status every task in the column is in.
    pub status: TaskStatus,
    /// Display label taken from the status definition.
    pub label: &'static str,
    /// Tasks in creation order.
    pub tasks: Vec<Task>,
}

/// Kanban board with one column per status, in [`TaskStatus::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskBoard {
    columns: Vec<BoardColumn>,
}

impl TaskBoard {
    /// Groups `tasks` into status columns, preserving their relative order.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut columns: Vec<BoardColumn> = TaskStatus::ALL
            .into_iter()
            .map(|status| BoardColumn {
                status,
                label: status.definition().label(),
                tasks: Vec::new(),
            })
            .collect();
        for task in tasks {
            if let Some(column) = columns.iter_mut().find(|c| c.status == task.status()) {
                column.tasks.push(task);
            }
        }
        Self { columns }
    }

    /// Returns all columns.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}
