use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertItem {
    pub id: String,
    pub kind: AlertKind,
    pub level: AlertLevel,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "视频中断")]
    VideoInterrupted,
    #[serde(rename = "长时间静止")]
    Stationary,
    #[serde(rename = "轨迹偏离")]
    RouteDeviation,
    #[serde(rename = "设备离线")]
    DeviceOffline,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::VideoInterrupted => "视频中断",
            Self::Stationary => "长时间静止",
            Self::RouteDeviation => "轨迹偏离",
            Self::DeviceOffline => "设备离线",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}
