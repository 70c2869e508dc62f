use super::Location;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A finished field session. Terminal: nothing transitions out of a history record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub operator_id: String,
    pub operator_name: String,
    pub company: String,
    pub project_package: String,
    pub route: String,
    pub segment: String,
    #[serde(with = "time::serde::rfc3339")]
    pub checkin_time: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub checkout_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub duration: Option<u32>,
    pub status: HistoryStatus,
    pub video_recorded: bool,
    pub trajectory_recorded: bool,
    pub alerts: u32,
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    Completed,
    Abnormal,
    Interrupted,
}

impl HistoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Abnormal => "abnormal",
            Self::Interrupted => "interrupted",
        }
    }
}
