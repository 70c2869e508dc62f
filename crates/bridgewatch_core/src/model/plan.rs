use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::Date;
use time::macros::format_description;

/// Separator between the two dates of a stored inspection cycle.
pub const CYCLE_SEPARATOR: &str = " 至 ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    pub id: String,
    pub project_package: String,
    pub route: String,
    pub segments: Vec<String>,
    pub status: PlanStatus,
    /// `YYYY-MM-DD 至 YYYY-MM-DD`, parsed on demand with [`ProjectPlan::cycle`].
    pub inspection_cycle: String,
    #[serde(default)]
    pub description: Option<String>,
    pub district: String,
    pub road_type: String,
    pub inspection_unit: String,
}

impl ProjectPlan {
    pub fn cycle(&self) -> Result<InspectionCycle, AppError> {
        self.inspection_cycle.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Active,
    Draft,
    Adjusting,
}

impl PlanStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Adjusting => "adjusting",
        }
    }
}

/// Inclusive span of days a plan is scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectionCycle {
    pub start: Date,
    pub end: Date,
}

impl std::str::FromStr for InspectionCycle {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (start, end) = raw.split_once(CYCLE_SEPARATOR).ok_or_else(|| {
            AppError::invalid_data(format!("inspection cycle '{raw}' is missing '至'"))
        })?;
        Ok(Self {
            start: parse_day(start)?,
            end: parse_day(end)?,
        })
    }
}

impl fmt::Display for InspectionCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = format_description!("[year]-[month]-[day]");
        let start = self.start.format(&format).map_err(|_| fmt::Error)?;
        let end = self.end.format(&format).map_err(|_| fmt::Error)?;
        write!(f, "{start}{CYCLE_SEPARATOR}{end}")
    }
}

/// Parses a `YYYY-MM-DD` calendar day.
pub(crate) fn parse_day(raw: &str) -> Result<Date, AppError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format)
        .map_err(|_| AppError::invalid_data(format!("'{}' is not a YYYY-MM-DD date", raw.trim())))
}
