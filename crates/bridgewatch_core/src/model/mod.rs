mod alert;
mod device;
mod history;
mod operator;
mod personnel;
mod plan;
mod project;
mod task;
mod worker;

pub use alert::{AlertItem, AlertKind, AlertLevel};
pub use device::{Device, DeviceStatus};
pub use history::{HistoryRecord, HistoryStatus};
pub use operator::{Operator, OperatorStatus, VideoStatus};
pub use personnel::{Personnel, PersonnelStatus};
pub(crate) use plan::parse_day;
pub use plan::{CYCLE_SEPARATOR, InspectionCycle, PlanStatus, ProjectPlan};
pub use project::ProjectNode;
pub use task::{Photo, TaskItem, TaskStatus, Trajectory, VideoRecord};
pub use worker::{CurrentWork, RecordingStatus, WorkerHistoryTask, WorkerTask, WorkerTaskStatus};

use serde::{Deserialize, Serialize};

/// WGS-84 coordinates reported by a field device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}
