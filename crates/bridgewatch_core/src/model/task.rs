use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub project_package: String,
    pub route: String,
    pub segment: String,
    pub status: TaskStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    pub alerts: u32,
    #[serde(default)]
    pub operator_name: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub checkin_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub checkout_time: Option<OffsetDateTime>,
    /// Minutes on site.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub video_records: Vec<VideoRecord>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub trajectory: Option<Trajectory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    /// Interrupt state entered from `InProgress` when the supervisor raises an alert.
    Alert,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Alert => "alert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    pub duration: u32,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub recorded: bool,
    #[serde(default)]
    pub points: Option<u32>,
    /// Kilometres travelled.
    #[serde(default)]
    pub distance: Option<f64>,
}
