use crate::error::AppError;
use crate::model::{
    CurrentWork, HistoryStatus, Location, RecordingStatus, WorkerHistoryTask, WorkerTask,
};
use time::OffsetDateTime;

impl CurrentWork {
    /// Opens a session for `task`. Video starts out connecting.
    pub fn begin(task: &WorkerTask, checkin_time: OffsetDateTime, location: Option<Location>) -> Self {
        Self {
            task_id: task.id.clone(),
            project_package: task.project_package.clone(),
            route: task.route.clone(),
            segment: task.segment.clone(),
            checkin_time,
            video_status: RecordingStatus::Connecting,
            location,
            duration: 0,
        }
    }

    /// One minute of clock time.
    pub fn tick(&mut self) -> u32 {
        self.duration = self.duration.saturating_add(1);
        self.duration
    }

    pub fn video_connected(&mut self) {
        if self.video_status == RecordingStatus::Connecting {
            self.video_status = RecordingStatus::On;
        }
    }

    /// Closes the session. Duration is whole minutes between checkin and checkout.
    pub fn checkout(
        self,
        checkout_time: OffsetDateTime,
        trajectory_recorded: bool,
        description: Option<String>,
    ) -> Result<WorkerHistoryTask, AppError> {
        if checkout_time < self.checkin_time {
            return Err(AppError::invalid_input("checkout precedes checkin"));
        }

        let minutes = (checkout_time - self.checkin_time).whole_minutes();
        Ok(WorkerHistoryTask {
            id: format!("hist-{}", self.task_id),
            project_package: self.project_package,
            route: self.route,
            segment: self.segment,
            checkin_time: self.checkin_time,
            checkout_time,
            duration: u32::try_from(minutes).unwrap_or(u32::MAX),
            status: HistoryStatus::Completed,
            video_recorded: self.video_status != RecordingStatus::Connecting,
            trajectory_recorded,
            description,
        })
    }
}
