use crate::model::{
    AlertItem, CurrentWork, Device, HistoryRecord, Operator, Personnel, ProjectNode, ProjectPlan,
    TaskItem, WorkerHistoryTask, WorkerTask,
};
use serde::{Deserialize, Serialize};

/// Every collection the three role views read from.
///
/// Collections are independent: names and serial numbers that link records
/// across them are plain strings and are never cross-checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub personnel: Vec<Personnel>,
    #[serde(default)]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub plans: Vec<ProjectPlan>,
    #[serde(default)]
    pub alerts: Vec<AlertItem>,
    #[serde(default)]
    pub project_tree: Vec<ProjectNode>,
    #[serde(default)]
    pub worker_tasks: Vec<WorkerTask>,
    #[serde(default)]
    pub current_work: Option<CurrentWork>,
    #[serde(default)]
    pub worker_history: Vec<WorkerHistoryTask>,
}
