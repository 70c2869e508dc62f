use crate::dataset::Dataset;
use crate::model::{DeviceStatus, OperatorStatus, TaskStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeviceStats {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub maintenance: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OperatorStats {
    pub total: usize,
    pub working: usize,
    pub paused: usize,
    pub alert: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub alert: usize,
}

/// Headline counts shown on both dashboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub devices: DeviceStats,
    pub operators: OperatorStats,
    pub tasks: TaskStats,
}

pub fn dashboard(dataset: &Dataset) -> DashboardStats {
    let mut stats = DashboardStats::default();

    for device in &dataset.devices {
        stats.devices.total += 1;
        match device.status {
            DeviceStatus::Online => stats.devices.online += 1,
            DeviceStatus::Offline => stats.devices.offline += 1,
            DeviceStatus::Maintenance => stats.devices.maintenance += 1,
        }
    }

    for operator in &dataset.operators {
        stats.operators.total += 1;
        match operator.status {
            OperatorStatus::Working => stats.operators.working += 1,
            OperatorStatus::Paused => stats.operators.paused += 1,
            OperatorStatus::Alert => stats.operators.alert += 1,
        }
    }

    for task in &dataset.tasks {
        stats.tasks.total += 1;
        match task.status {
            TaskStatus::Pending => stats.tasks.pending += 1,
            TaskStatus::InProgress => stats.tasks.in_progress += 1,
            TaskStatus::Completed => stats.tasks.completed += 1,
            TaskStatus::Alert => stats.tasks.alert += 1,
        }
    }

    stats
}
