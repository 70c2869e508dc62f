use bridgewatch_core::config::Palette;
use bridgewatch_core::model::{
    AlertItem, AlertLevel, CurrentWork, Device, HistoryRecord, Personnel, ProjectPlan, TaskItem,
    WorkerHistoryTask, WorkerTask,
};
use bridgewatch_core::page::Page;
use bridgewatch_core::stats::DashboardStats;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub fn format_time(at: OffsetDateTime, offset: UtcOffset) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    at.to_offset(offset)
        .format(&format)
        .unwrap_or_else(|_| at.to_string())
}

fn format_optional_time(at: Option<OffsetDateTime>, offset: UtcOffset) -> String {
    at.map(|at| format_time(at, offset))
        .unwrap_or_else(|| "-".to_string())
}

fn dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn table<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows).with(Style::modern()).to_string()
}

pub fn page_footer<T>(page: &Page<T>) -> String {
    format!(
        "page {}/{} · {} total",
        page.page,
        page.total_pages.max(1),
        page.total
    )
}

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "package")]
    package: String,
    #[tabled(rename = "route")]
    route: String,
    #[tabled(rename = "segments")]
    segments: String,
    #[tabled(rename = "district")]
    district: String,
    #[tabled(rename = "unit")]
    unit: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "cycle")]
    cycle: String,
}

pub fn plans(plans: &[&ProjectPlan]) -> String {
    let rows = plans
        .iter()
        .map(|plan| PlanRow {
            id: plan.id.clone(),
            package: plan.project_package.clone(),
            route: plan.route.clone(),
            segments: plan.segments.join(", "),
            district: plan.district.clone(),
            unit: plan.inspection_unit.clone(),
            status: plan.status.as_str().to_string(),
            cycle: plan.inspection_cycle.clone(),
        })
        .collect();
    table::<PlanRow>(rows)
}

#[derive(Tabled)]
struct HistoryRow {
    id: String,
    operator: String,
    company: String,
    package: String,
    segment: String,
    checkin: String,
    minutes: String,
    status: String,
    video: String,
    track: String,
    alerts: u32,
}

pub fn history(records: &[&HistoryRecord], offset: UtcOffset) -> String {
    let rows = records
        .iter()
        .map(|record| HistoryRow {
            id: record.id.clone(),
            operator: record.operator_name.clone(),
            company: record.company.clone(),
            package: record.project_package.clone(),
            segment: record.segment.clone(),
            checkin: format_time(record.checkin_time, offset),
            minutes: record
                .duration
                .map(|minutes| minutes.to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: record.status.as_str().to_string(),
            video: yes_no(record.video_recorded).to_string(),
            track: yes_no(record.trajectory_recorded).to_string(),
            alerts: record.alerts,
        })
        .collect();
    table::<HistoryRow>(rows)
}

#[derive(Tabled)]
struct TaskRow {
    id: String,
    package: String,
    route: String,
    segment: String,
    status: String,
    start: String,
    operator: String,
    alerts: u32,
}

pub fn tasks(tasks: &[&TaskItem], offset: UtcOffset, palette: &Palette) -> String {
    let rows = tasks
        .iter()
        .map(|task| {
            let status = task.status.as_str();
            TaskRow {
                id: task.id.clone(),
                package: task.project_package.clone(),
                route: task.route.clone(),
                segment: task.segment.clone(),
                status: if task.alerts > 0 {
                    palette.alarmize(status)
                } else {
                    status.to_string()
                },
                start: format_time(task.start_time, offset),
                operator: dash(task.operator_name.as_deref()),
                alerts: task.alerts,
            }
        })
        .collect();
    table::<TaskRow>(rows)
}

pub fn task_detail(task: &TaskItem, offset: UtcOffset) -> String {
    let mut lines = vec![
        format!("{} | {} / {} / {}", task.id, task.project_package, task.route, task.segment),
        format!("status: {}", task.status.as_str()),
        format!("operator: {}", dash(task.operator_name.as_deref())),
        format!("start: {}", format_time(task.start_time, offset)),
        format!("checkin: {}", format_optional_time(task.checkin_time, offset)),
        format!("checkout: {}", format_optional_time(task.checkout_time, offset)),
        format!(
            "duration: {}",
            task.duration
                .map(|minutes| format!("{minutes} min"))
                .unwrap_or_else(|| "-".to_string())
        ),
        format!("alerts: {}", task.alerts),
    ];

    lines.push(format!("videos: {}", task.video_records.len()));
    for video in &task.video_records {
        lines.push(format!(
            "  {} {} → {} ({} min)",
            video.id,
            format_time(video.start_time, offset),
            format_time(video.end_time, offset),
            video.duration
        ));
    }

    lines.push(format!("photos: {}", task.photos.len()));
    for photo in &task.photos {
        lines.push(format!(
            "  {} {} {}",
            photo.id,
            format_time(photo.time, offset),
            dash(photo.description.as_deref())
        ));
    }

    match task.trajectory.as_ref() {
        Some(track) if track.recorded => lines.push(format!(
            "trajectory: {} points, {} km",
            track
                .points
                .map(|points| points.to_string())
                .unwrap_or_else(|| "-".to_string()),
            track
                .distance
                .map(|km| format!("{km:.1}"))
                .unwrap_or_else(|| "-".to_string())
        )),
        _ => lines.push("trajectory: none".to_string()),
    }

    lines.join("\n")
}

#[derive(Tabled)]
struct DeviceRow {
    id: String,
    sn: String,
    model: String,
    status: String,
    battery: String,
    signal: u8,
    operator: String,
    last_active: String,
}

pub fn devices(devices: &[Device], offset: UtcOffset) -> String {
    let rows = devices
        .iter()
        .map(|device| DeviceRow {
            id: device.id.clone(),
            sn: device.sn.clone(),
            model: format!("{} {}", device.brand, device.model),
            status: device.status.as_str().to_string(),
            battery: format!("{}%", device.battery),
            signal: device.signal,
            operator: dash(device.bound_operator.as_deref()),
            last_active: format_time(device.last_active, offset),
        })
        .collect();
    table::<DeviceRow>(rows)
}

#[derive(Tabled)]
struct PersonnelRow {
    id: String,
    name: String,
    phone: String,
    certificate: String,
    device: String,
    status: String,
    created: String,
}

pub fn personnel(personnel: &[Personnel], offset: UtcOffset) -> String {
    let rows = personnel
        .iter()
        .map(|person| PersonnelRow {
            id: person.id.clone(),
            name: person.name.clone(),
            phone: person.phone.clone(),
            certificate: dash(person.certificate.as_deref()),
            device: dash(person.bound_device_sn.as_deref()),
            status: person.status.as_str().to_string(),
            created: format_time(person.created_at, offset),
        })
        .collect();
    table::<PersonnelRow>(rows)
}

pub fn stats(stats: &DashboardStats) -> String {
    [
        format!(
            "devices: {} total, {} online, {} offline, {} maintenance",
            stats.devices.total, stats.devices.online, stats.devices.offline, stats.devices.maintenance
        ),
        format!(
            "operators: {} total, {} working, {} paused, {} alert",
            stats.operators.total, stats.operators.working, stats.operators.paused, stats.operators.alert
        ),
        format!(
            "tasks: {} total, {} pending, {} in-progress, {} completed, {} alert",
            stats.tasks.total,
            stats.tasks.pending,
            stats.tasks.in_progress,
            stats.tasks.completed,
            stats.tasks.alert
        ),
    ]
    .join("\n")
}

pub fn alert_line(alert: &AlertItem, offset: UtcOffset, palette: &Palette) -> String {
    let level = match alert.level {
        AlertLevel::Critical => palette.alarmize(alert.level.as_str()),
        AlertLevel::Warning => palette.accentize(alert.level.as_str()),
        AlertLevel::Info => palette.mutedize(alert.level.as_str()),
    };
    format!(
        "[{}] {} {} ({})",
        level,
        alert.kind.label(),
        alert.message,
        format_time(alert.time, offset)
    )
}

#[derive(Tabled)]
struct WorkerTaskRow {
    id: String,
    package: String,
    route: String,
    segment: String,
    scheduled: String,
    note: String,
}

pub fn worker_tasks(tasks: &[WorkerTask], offset: UtcOffset) -> String {
    let rows = tasks
        .iter()
        .map(|task| WorkerTaskRow {
            id: task.id.clone(),
            package: task.project_package.clone(),
            route: task.route.clone(),
            segment: task.segment.clone(),
            scheduled: format_optional_time(task.scheduled_time, offset),
            note: dash(task.description.as_deref()),
        })
        .collect();
    table::<WorkerTaskRow>(rows)
}

pub fn current_work(work: &CurrentWork, offset: UtcOffset) -> String {
    format!(
        "{} | {} / {} / {}\ncheckin: {}\nvideo: {}\nduration: {} min",
        work.task_id,
        work.project_package,
        work.route,
        work.segment,
        format_time(work.checkin_time, offset),
        work.video_status.as_str(),
        work.duration
    )
}

#[derive(Tabled)]
struct WorkerHistoryRow {
    id: String,
    package: String,
    segment: String,
    checkin: String,
    checkout: String,
    minutes: u32,
    status: String,
}

pub fn worker_history(history: &[WorkerHistoryTask], offset: UtcOffset) -> String {
    let rows = history
        .iter()
        .map(|entry| WorkerHistoryRow {
            id: entry.id.clone(),
            package: entry.project_package.clone(),
            segment: entry.segment.clone(),
            checkin: format_time(entry.checkin_time, offset),
            checkout: format_time(entry.checkout_time, offset),
            minutes: entry.duration,
            status: entry.status.as_str().to_string(),
        })
        .collect();
    table::<WorkerHistoryRow>(rows)
}

/// One line per filter field: `field: a, b, c`.
pub fn options(fields: &[(&str, Vec<&str>)]) -> String {
    fields
        .iter()
        .map(|(field, values)| {
            if values.is_empty() {
                format!("{field}: -")
            } else {
                format!("{field}: {}", values.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
