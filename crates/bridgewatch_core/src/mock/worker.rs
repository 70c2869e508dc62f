use crate::model::{
    CurrentWork, HistoryStatus, Location, RecordingStatus, WorkerHistoryTask, WorkerTask,
    WorkerTaskStatus,
};
use time::{Duration, OffsetDateTime};

pub fn pending_tasks(now: OffsetDateTime) -> Vec<WorkerTask> {
    let task = |id: &str, place: (&str, &str, &str), due: Duration, description: &str| WorkerTask {
        id: id.to_string(),
        project_package: place.0.to_string(),
        route: place.1.to_string(),
        segment: place.2.to_string(),
        status: WorkerTaskStatus::Pending,
        scheduled_time: Some(now + due),
        description: Some(description.to_string()),
    };

    vec![
        task(
            "wt-001",
            ("浦东新区主干桥梁定检", "外环高架东段", "沪南路-周浦立交"),
            Duration::hours(1),
            "检查桥梁外观、伸缩缝、支座状况",
        ),
        task(
            "wt-002",
            ("黄浦区重点桥梁夜检", "中山南路沿线", "南浦大桥-打浦路隧道"),
            Duration::hours(2),
            "夜间检查照明、疏导设施及桥面附属设施",
        ),
        task(
            "wt-003",
            ("嘉定区城区定检", "嘉罗公路北段", "南翔立交-老嘉罗公路"),
            Duration::days(3),
            "日常定检，重点关注桥面平整度",
        ),
        task(
            "wt-004",
            ("静安区桥梁专项检查", "南北高架", "共和新路-天目西路"),
            Duration::days(5),
            "专项检查，重点关注结构安全",
        ),
    ]
}

pub fn current_work(now: OffsetDateTime) -> CurrentWork {
    CurrentWork {
        task_id: "wt-001".into(),
        project_package: "浦东新区主干桥梁定检".into(),
        route: "外环高架东段".into(),
        segment: "沪南路-周浦立交".into(),
        checkin_time: now - Duration::minutes(45),
        video_status: RecordingStatus::On,
        location: Some(Location {
            lat: 31.2304 + 0.01,
            lng: 121.4737 + 0.02,
        }),
        duration: 45,
    }
}

pub fn worker_history(now: OffsetDateTime) -> Vec<WorkerHistoryTask> {
    let entry = |id: &str,
                 place: (&str, &str, &str),
                 checkin: OffsetDateTime,
                 minutes: u32,
                 status,
                 trajectory_recorded,
                 description: &str| WorkerHistoryTask {
        id: id.to_string(),
        project_package: place.0.to_string(),
        route: place.1.to_string(),
        segment: place.2.to_string(),
        checkin_time: checkin,
        checkout_time: checkin + Duration::minutes(i64::from(minutes)),
        duration: minutes,
        status,
        video_recorded: true,
        trajectory_recorded,
        description: Some(description.to_string()),
    };

    vec![
        entry(
            "hist-001",
            ("黄浦区重点桥梁夜检", "中山南路沿线", "南浦大桥-打浦路隧道"),
            now - Duration::days(2) - Duration::hours(8),
            120,
            HistoryStatus::Completed,
            true,
            "夜间检查照明、疏导设施及桥面附属设施",
        ),
        entry(
            "hist-002",
            ("嘉定区城区定检", "嘉罗公路北段", "南翔立交-老嘉罗公路"),
            now - Duration::days(5) - Duration::hours(9),
            90,
            HistoryStatus::Completed,
            true,
            "日常定检，重点关注桥面平整度",
        ),
        entry(
            "hist-003",
            ("静安区桥梁专项检查", "南北高架", "共和新路-天目西路"),
            now - Duration::days(7) - Duration::hours(10),
            120,
            HistoryStatus::Abnormal,
            false,
            "专项检查，发现异常情况",
        ),
    ]
}
