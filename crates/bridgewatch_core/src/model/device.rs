use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub sn: String,
    pub brand: String,
    pub model: String,
    pub status: DeviceStatus,
    /// Percent, 0-100.
    pub battery: u8,
    /// Bars, 0-5.
    pub signal: u8,
    /// Operator name. Not checked against the personnel list.
    #[serde(default)]
    pub bound_operator: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_active: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Online,
    Offline,
    Maintenance,
}

impl DeviceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Maintenance => "maintenance",
        }
    }
}
