use super::{Criteria, DateRange, optional_text_matches, text_matches};
use crate::model::{TaskItem, TaskStatus};
use serde::Serialize;

/// Query form of the provider's task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskFilter {
    /// Matched against the start day.
    pub date_range: Option<DateRange>,
    /// Tasks nobody has checked in to never match a named operator.
    pub operator_name: Option<String>,
    pub project_package: Option<String>,
    pub status: Option<TaskStatus>,
}

impl Criteria<TaskItem> for TaskFilter {
    fn matches(&self, task: &TaskItem) -> bool {
        if let Some(range) = self.date_range.as_ref()
            && !range.contains(task.start_time)
        {
            return false;
        }

        if let Some(status) = self.status
            && status != task.status
        {
            return false;
        }

        optional_text_matches(self.operator_name.as_deref(), task.operator_name.as_deref())
            && text_matches(self.project_package.as_deref(), &task.project_package)
    }
}
