use super::{Criteria, DateRange, text_matches};
use crate::model::{HistoryRecord, HistoryStatus};
use serde::Serialize;

/// Query form of the regulator's work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryFilter {
    /// Matched against the checkin day.
    pub date_range: Option<DateRange>,
    pub operator_name: Option<String>,
    pub project_package: Option<String>,
    pub status: Option<HistoryStatus>,
}

impl Criteria<HistoryRecord> for HistoryFilter {
    fn matches(&self, record: &HistoryRecord) -> bool {
        if let Some(range) = self.date_range.as_ref()
            && !range.contains(record.checkin_time)
        {
            return false;
        }

        if let Some(status) = self.status
            && status != record.status
        {
            return false;
        }

        text_matches(self.operator_name.as_deref(), &record.operator_name)
            && text_matches(self.project_package.as_deref(), &record.project_package)
    }
}
