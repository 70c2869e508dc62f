use super::Location;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A field worker as seen on the supervisor's live map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub id: String,
    pub name: String,
    pub project_package: String,
    pub route: String,
    pub segment: String,
    pub status: OperatorStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub last_checkin_time: OffsetDateTime,
    pub device_id: String,
    pub video_status: VideoStatus,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorStatus {
    Working,
    Paused,
    Alert,
}

impl OperatorStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Paused => "paused",
            Self::Alert => "alert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    Online,
    Offline,
    Connecting,
}

impl VideoStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Connecting => "connecting",
        }
    }
}
