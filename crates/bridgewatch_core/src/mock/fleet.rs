use crate::model::{
    Device, DeviceStatus, Location, Operator, OperatorStatus, Personnel, PersonnelStatus,
    VideoStatus,
};
use time::{Duration, OffsetDateTime};

const BRAND: &str = "建勖信息";
const MODEL: &str = "JX-P2";

fn device(
    id: &str,
    sn: &str,
    status: DeviceStatus,
    battery: u8,
    signal: u8,
    bound_operator: Option<&str>,
    last_active: OffsetDateTime,
) -> Device {
    Device {
        id: id.to_string(),
        sn: sn.to_string(),
        brand: BRAND.to_string(),
        model: MODEL.to_string(),
        status,
        battery,
        signal,
        bound_operator: bound_operator.map(str::to_string),
        last_active,
    }
}

pub fn devices(now: OffsetDateTime) -> Vec<Device> {
    vec![
        device(
            "dev-001",
            "JXP2-230501",
            DeviceStatus::Online,
            82,
            4,
            Some("刘强"),
            now - Duration::minutes(2),
        ),
        device(
            "dev-004",
            "JXP2-230612",
            DeviceStatus::Online,
            56,
            2,
            Some("王敏"),
            now - Duration::minutes(4),
        ),
        device(
            "dev-006",
            "JXP2-230845",
            DeviceStatus::Maintenance,
            0,
            0,
            Some("赵磊"),
            now - Duration::days(1),
        ),
        device(
            "dev-009",
            "JXP2-231021",
            DeviceStatus::Offline,
            34,
            0,
            None,
            now - Duration::hours(3),
        ),
    ]
}

pub fn personnel(now: OffsetDateTime) -> Vec<Personnel> {
    let person = |id: &str, name: &str, phone: &str, device: Option<(&str, &str)>, status, days_ago| {
        Personnel {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            id_card: None,
            certificate: Some(format!("QC-{}", &phone[phone.len() - 4..])),
            bound_device_id: device.map(|(device_id, _)| device_id.to_string()),
            bound_device_sn: device.map(|(_, sn)| sn.to_string()),
            status,
            created_at: now - Duration::days(days_ago),
        }
    };

    vec![
        person(
            "per-001",
            "刘强",
            "13800001111",
            Some(("dev-001", "JXP2-230501")),
            PersonnelStatus::Active,
            120,
        ),
        person(
            "per-002",
            "王敏",
            "13800002222",
            Some(("dev-004", "JXP2-230612")),
            PersonnelStatus::Active,
            90,
        ),
        person(
            "per-003",
            "赵磊",
            "13800003333",
            Some(("dev-006", "JXP2-230845")),
            PersonnelStatus::Active,
            60,
        ),
        person(
            "per-004",
            "陈明",
            "13800004444",
            None,
            PersonnelStatus::Inactive,
            30,
        ),
    ]
}

pub fn operators(now: OffsetDateTime) -> Vec<Operator> {
    let base = Location {
        lat: 31.2304,
        lng: 121.4737,
    };
    let operator = |id: &str,
                    name: &str,
                    place: (&str, &str, &str),
                    status,
                    minutes_ago,
                    device_id: &str,
                    video_status,
                    offset: f64| Operator {
        id: id.to_string(),
        name: name.to_string(),
        project_package: place.0.to_string(),
        route: place.1.to_string(),
        segment: place.2.to_string(),
        status,
        last_checkin_time: now - Duration::minutes(minutes_ago),
        device_id: device_id.to_string(),
        video_status,
        company: Some("上海城建检测有限公司".to_string()),
        location: Some(Location {
            lat: base.lat + offset,
            lng: base.lng + offset * 2.0,
        }),
    };

    vec![
        operator(
            "op-001",
            "刘强",
            ("浦东新区主干桥梁定检", "外环高架东段", "沪南路-周浦立交"),
            OperatorStatus::Working,
            45,
            "dev-001",
            VideoStatus::Online,
            0.01,
        ),
        operator(
            "op-002",
            "王敏",
            ("黄浦区重点桥梁夜检", "中山南路沿线", "南浦大桥-打浦路隧道"),
            OperatorStatus::Alert,
            25,
            "dev-004",
            VideoStatus::Connecting,
            -0.01,
        ),
        operator(
            "op-003",
            "赵磊",
            ("嘉定区城区定检", "嘉罗公路北段", "南翔立交-老嘉罗公路"),
            OperatorStatus::Paused,
            70,
            "dev-006",
            VideoStatus::Offline,
            0.05,
        ),
    ]
}
