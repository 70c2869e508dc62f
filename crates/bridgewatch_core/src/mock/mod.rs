//! Built-in demonstration data.
//!
//! Timestamps are expressed relative to a caller supplied `now` so that a fixed
//! instant always produces the same data set.

mod fleet;
mod records;
mod worker;

pub use fleet::{devices, operators, personnel};
pub use records::{alerts, history, plans, project_tree, tasks};
pub use worker::{current_work, pending_tasks, worker_history};

use crate::dataset::Dataset;
use time::OffsetDateTime;

pub fn dataset(now: OffsetDateTime) -> Dataset {
    Dataset {
        tasks: tasks(now),
        history: history(now),
        devices: devices(now),
        personnel: personnel(now),
        operators: operators(now),
        plans: plans(),
        alerts: alerts(now),
        project_tree: project_tree(),
        worker_tasks: pending_tasks(now),
        current_work: Some(current_work(now)),
        worker_history: worker_history(now),
    }
}

#[cfg(test)]
mod tests {
    use super::dataset;
    use crate::model::ProjectNode;
    use time::macros::datetime;

    #[test]
    fn dataset_is_reproducible_for_fixed_now() {
        let now = datetime!(2025-06-01 10:00 UTC);
        assert_eq!(dataset(now), dataset(now));
    }

    #[test]
    fn task_segments_resolve_in_project_tree() {
        let data = dataset(datetime!(2025-06-01 10:00 UTC));
        let tree = &data.project_tree;
        let pudong = &tree[0];
        let path = vec![
            pudong.value.clone(),
            pudong.children[0].value.clone(),
            pudong.children[0].children[0].value.clone(),
        ];
        let labels = ProjectNode::resolve_path(tree, &path).unwrap();
        assert_eq!(labels[0], data.tasks[0].project_package);
        assert_eq!(labels[2], data.tasks[0].segment);
    }

    #[test]
    fn bound_devices_point_at_known_serials() {
        let data = dataset(datetime!(2025-06-01 10:00 UTC));
        for person in &data.personnel {
            if let Some(sn) = person.bound_device_sn.as_deref() {
                assert!(data.devices.iter().any(|device| device.sn == sn), "{sn}");
            }
        }
    }
}
