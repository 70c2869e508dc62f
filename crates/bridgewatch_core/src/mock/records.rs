use crate::model::{
    AlertItem, AlertKind, AlertLevel, HistoryRecord, HistoryStatus, Location, Photo, PlanStatus,
    ProjectNode, ProjectPlan, TaskItem, TaskStatus, Trajectory, VideoRecord,
};
use time::{Duration, OffsetDateTime};

const PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/300x200?text=";

fn photo(id: &str, at: OffsetDateTime, caption: &str, index: u32) -> Photo {
    Photo {
        id: id.to_string(),
        url: format!("{PHOTO_PLACEHOLDER}现场照片{index}"),
        time: at,
        description: Some(caption.to_string()),
    }
}

fn video(id: &str, start: OffsetDateTime, end: OffsetDateTime) -> VideoRecord {
    let minutes = (end - start).whole_minutes().max(0);
    VideoRecord {
        id: id.to_string(),
        start_time: start,
        end_time: end,
        duration: u32::try_from(minutes).unwrap_or(u32::MAX),
        url: None,
    }
}

pub fn tasks(now: OffsetDateTime) -> Vec<TaskItem> {
    let yesterday = now - Duration::days(1);

    vec![
        TaskItem {
            id: "task-01".into(),
            project_package: "浦东新区主干桥梁定检".into(),
            route: "外环高架东段".into(),
            segment: "沪南路-周浦立交".into(),
            status: TaskStatus::InProgress,
            start_time: now - Duration::minutes(45),
            alerts: 0,
            operator_name: Some("刘强".into()),
            checkin_time: Some(now - Duration::minutes(45)),
            checkout_time: None,
            duration: Some(45),
            video_records: vec![video("video-01", now - Duration::minutes(45), now)],
            photos: vec![
                photo("photo-01", now - Duration::minutes(30), "桥梁外观检查", 1),
                photo("photo-02", now - Duration::minutes(15), "桥面状况", 2),
            ],
            trajectory: Some(Trajectory {
                recorded: true,
                points: Some(270),
                distance: Some(2.3),
            }),
        },
        TaskItem {
            id: "task-02".into(),
            project_package: "黄浦区重点桥梁夜检".into(),
            route: "中山南路沿线".into(),
            segment: "南浦大桥-打浦路隧道".into(),
            status: TaskStatus::Alert,
            start_time: now - Duration::minutes(25),
            alerts: 2,
            operator_name: Some("王敏".into()),
            checkin_time: Some(now - Duration::minutes(25)),
            checkout_time: None,
            duration: Some(25),
            video_records: vec![video("video-02", now - Duration::minutes(25), now)],
            photos: vec![photo("photo-03", now - Duration::minutes(20), "夜间检查", 3)],
            trajectory: Some(Trajectory {
                recorded: true,
                points: Some(150),
                distance: Some(1.5),
            }),
        },
        TaskItem {
            id: "task-03".into(),
            project_package: "嘉定区城区定检".into(),
            route: "嘉罗公路北段".into(),
            segment: "南翔立交-老嘉罗公路".into(),
            status: TaskStatus::Pending,
            start_time: now + Duration::hours(2),
            alerts: 0,
            operator_name: None,
            checkin_time: None,
            checkout_time: None,
            duration: None,
            video_records: Vec::new(),
            photos: Vec::new(),
            trajectory: None,
        },
        TaskItem {
            id: "task-04".into(),
            project_package: "徐汇区日常定检".into(),
            route: "龙华中路".into(),
            segment: "宛平南路-老沪闵路".into(),
            status: TaskStatus::Completed,
            start_time: yesterday + Duration::hours(2),
            alerts: 1,
            operator_name: Some("陈明".into()),
            checkin_time: Some(yesterday + Duration::hours(2)),
            checkout_time: Some(yesterday + Duration::hours(4)),
            duration: Some(120),
            video_records: vec![
                video(
                    "video-04-1",
                    yesterday + Duration::hours(2),
                    yesterday + Duration::hours(3),
                ),
                video(
                    "video-04-2",
                    yesterday + Duration::hours(3),
                    yesterday + Duration::hours(4),
                ),
            ],
            photos: vec![
                photo(
                    "photo-04",
                    yesterday + Duration::minutes(150),
                    "桥梁结构检查",
                    4,
                ),
                photo("photo-05", yesterday + Duration::hours(3), "桥墩检查", 5),
                photo(
                    "photo-06",
                    yesterday + Duration::minutes(210),
                    "护栏检查",
                    6,
                ),
            ],
            trajectory: Some(Trajectory {
                recorded: true,
                points: Some(720),
                distance: Some(5.8),
            }),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn history_record(
    id: &str,
    operator: (&str, &str),
    company: &str,
    place: (&str, &str, &str),
    checkin: OffsetDateTime,
    minutes: u32,
    status: HistoryStatus,
    trajectory_recorded: bool,
    alerts: u32,
) -> HistoryRecord {
    HistoryRecord {
        id: id.to_string(),
        operator_id: operator.0.to_string(),
        operator_name: operator.1.to_string(),
        company: company.to_string(),
        project_package: place.0.to_string(),
        route: place.1.to_string(),
        segment: place.2.to_string(),
        checkin_time: checkin,
        checkout_time: Some(checkin + Duration::minutes(i64::from(minutes))),
        duration: Some(minutes),
        status,
        video_recorded: true,
        trajectory_recorded,
        alerts,
        location: Some(Location {
            lat: 31.2304,
            lng: 121.4737,
        }),
    }
}

pub fn history(now: OffsetDateTime) -> Vec<HistoryRecord> {
    const COMPANY_A: &str = "上海城建检测有限公司";
    const COMPANY_B: &str = "申通桥隧养护有限公司";
    let pudong = ("浦东新区主干桥梁定检", "外环高架东段", "沪南路-周浦立交");
    let huangpu = ("黄浦区重点桥梁夜检", "中山南路沿线", "南浦大桥-打浦路隧道");
    let jiading = ("嘉定区城区定检", "嘉罗公路北段", "南翔立交-老嘉罗公路");

    vec![
        history_record(
            "his-001",
            ("op-001", "刘强"),
            COMPANY_A,
            pudong,
            now - Duration::days(1) - Duration::hours(5),
            120,
            HistoryStatus::Completed,
            true,
            0,
        ),
        history_record(
            "his-002",
            ("op-002", "王敏"),
            COMPANY_A,
            huangpu,
            now - Duration::days(2) - Duration::hours(8),
            95,
            HistoryStatus::Abnormal,
            true,
            2,
        ),
        history_record(
            "his-003",
            ("op-003", "赵磊"),
            COMPANY_B,
            jiading,
            now - Duration::days(3) - Duration::hours(3),
            40,
            HistoryStatus::Interrupted,
            false,
            1,
        ),
        history_record(
            "his-004",
            ("op-001", "刘强"),
            COMPANY_A,
            huangpu,
            now - Duration::days(6) - Duration::hours(2),
            150,
            HistoryStatus::Completed,
            true,
            0,
        ),
        history_record(
            "his-005",
            ("op-004", "陈明"),
            COMPANY_B,
            pudong,
            now - Duration::days(9),
            110,
            HistoryStatus::Completed,
            true,
            0,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn plan(
    id: &str,
    place: (&str, &str),
    segments: &[&str],
    status: PlanStatus,
    cycle: &str,
    district: &str,
    road_type: &str,
    unit: &str,
) -> ProjectPlan {
    ProjectPlan {
        id: id.to_string(),
        project_package: place.0.to_string(),
        route: place.1.to_string(),
        segments: segments.iter().map(|segment| segment.to_string()).collect(),
        status,
        inspection_cycle: cycle.to_string(),
        description: None,
        district: district.to_string(),
        road_type: road_type.to_string(),
        inspection_unit: unit.to_string(),
    }
}

pub fn plans() -> Vec<ProjectPlan> {
    vec![
        plan(
            "plan-001",
            ("浦东新区主干桥梁定检", "外环高架东段"),
            &["沪南路-周浦立交", "周浦立交-申江路"],
            PlanStatus::Active,
            "2025-01-01 至 2025-03-31",
            "浦东",
            "快速路",
            "上海城建检测有限公司",
        ),
        plan(
            "plan-002",
            ("黄浦区重点桥梁夜检", "中山南路沿线"),
            &["南浦大桥-打浦路隧道", "打浦路隧道-西藏南路"],
            PlanStatus::Active,
            "2025-02-15 至 2025-05-15",
            "黄浦",
            "主干路",
            "上海城建检测有限公司",
        ),
        plan(
            "plan-003",
            ("浦东新区主干桥梁定检", "金桥及周边"),
            &["金桥路-锦绣路"],
            PlanStatus::Draft,
            "2025-04-01 至 2025-06-30",
            "浦东",
            "主干路",
            "申通桥隧养护有限公司",
        ),
        plan(
            "plan-004",
            ("嘉定区城区定检", "嘉罗公路北段"),
            &["南翔立交-老嘉罗公路"],
            PlanStatus::Adjusting,
            "2025-03-01 至 2025-08-31",
            "嘉定",
            "公路",
            "申通桥隧养护有限公司",
        ),
    ]
}

pub fn alerts(now: OffsetDateTime) -> Vec<AlertItem> {
    let alert = |id: &str, kind, level, message: &str, minutes_ago| AlertItem {
        id: id.to_string(),
        kind,
        level,
        message: message.to_string(),
        time: now - Duration::minutes(minutes_ago),
    };

    vec![
        alert(
            "alert-001",
            AlertKind::VideoInterrupted,
            AlertLevel::Critical,
            "王敏-中山南路沿线：视频信号异常，已尝试自动重连。",
            1,
        ),
        alert(
            "alert-002",
            AlertKind::RouteDeviation,
            AlertLevel::Warning,
            "刘强-外环高架东段：定位偏离计划路线 80 米。",
            6,
        ),
        alert(
            "alert-003",
            AlertKind::DeviceOffline,
            AlertLevel::Critical,
            "设备 JXP2-231021 已离线 3 小时，请及时排查。",
            12,
        ),
        alert(
            "alert-004",
            AlertKind::Stationary,
            AlertLevel::Info,
            "赵磊-嘉罗公路北段：静止超过 15 分钟，请确认是否正常。",
            18,
        ),
    ]
}

pub fn project_tree() -> Vec<ProjectNode> {
    vec![
        ProjectNode::branch(
            "浦东新区主干桥梁定检",
            "pkg-pudong",
            vec![
                ProjectNode::branch(
                    "外环高架东段",
                    "route-waiguang-east",
                    vec![
                        ProjectNode::leaf("沪南路-周浦立交", "segment-hunan-zhoupu"),
                        ProjectNode::leaf("周浦立交-申江路", "segment-zhoupu-shenjiang"),
                    ],
                ),
                ProjectNode::branch(
                    "金桥及周边",
                    "route-jinqiao",
                    vec![ProjectNode::leaf("金桥路-锦绣路", "segment-jinqiao-jinxiu")],
                ),
            ],
        ),
        ProjectNode::branch(
            "黄浦区重点桥梁夜检",
            "pkg-huangpu",
            vec![ProjectNode::branch(
                "中山南路沿线",
                "route-zhongshan-south",
                vec![
                    ProjectNode::leaf("南浦大桥-打浦路隧道", "segment-nanpu-dapulu"),
                    ProjectNode::leaf("打浦路隧道-西藏南路", "segment-dapulu-xizang"),
                ],
            )],
        ),
        ProjectNode::branch(
            "嘉定区城区定检",
            "pkg-jiading",
            vec![ProjectNode::branch(
                "嘉罗公路北段",
                "route-jialuo-north",
                vec![ProjectNode::leaf(
                    "南翔立交-老嘉罗公路",
                    "segment-nanxiang-oldjialuo",
                )],
            )],
        ),
    ]
}
