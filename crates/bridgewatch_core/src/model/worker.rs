use super::Location;
use super::history::HistoryStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An assignment offered to the field worker on the mobile flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerTask {
    pub id: String,
    pub project_package: String,
    pub route: String,
    pub segment: String,
    pub status: WorkerTaskStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub scheduled_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkerTaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl WorkerTaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

/// The session the worker is currently checked in to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWork {
    pub task_id: String,
    pub project_package: String,
    pub route: String,
    pub segment: String,
    #[serde(with = "time::serde::rfc3339")]
    pub checkin_time: OffsetDateTime,
    pub video_status: RecordingStatus,
    #[serde(default)]
    pub location: Option<Location>,
    /// Minutes since checkin, advanced by the work clock.
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingStatus {
    On,
    Off,
    Connecting,
}

impl RecordingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Connecting => "connecting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerHistoryTask {
    pub id: String,
    pub project_package: String,
    pub route: String,
    pub segment: String,
    #[serde(with = "time::serde::rfc3339")]
    pub checkin_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub checkout_time: OffsetDateTime,
    pub duration: u32,
    pub status: HistoryStatus,
    pub video_recorded: bool,
    pub trajectory_recorded: bool,
    #[serde(default)]
    pub description: Option<String>,
}
