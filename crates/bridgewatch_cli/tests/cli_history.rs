use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("bridgewatch-{nanos}-{file_name}"))
}

fn record(id: &str, operator: &str, package: &str, checkin: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "operator_id": format!("op-{operator}"),
        "operator_name": operator,
        "company": "上海城建检测有限公司",
        "project_package": package,
        "route": "外环高架东段",
        "segment": "沪南路-周浦立交",
        "checkin_time": checkin,
        "duration": 60,
        "status": status,
        "video_recorded": true,
        "trajectory_recorded": true,
        "alerts": 0
    })
}

fn write_history(path: &Path) {
    let content = serde_json::json!({
        "schema_version": 1,
        "history": [
            record("his-a", "刘强", "浦东新区主干桥梁定检", "2025-03-10T20:00:00Z", "completed"),
            record("his-b", "王敏", "黄浦区重点桥梁夜检", "2025-03-11T09:30:00Z", "abnormal"),
            record("his-c", "刘强", "黄浦区重点桥梁夜检", "2025-03-12T02:00:00Z", "interrupted"),
            record("his-d", "赵磊", "浦东新区主干桥梁定检", "2025-03-15T08:00:00Z", "completed")
        ]
    });
    std::fs::write(path, serde_json::to_string_pretty(&content).unwrap()).unwrap();
}

fn run(dataset: &Path, args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_bridgewatch");
    Command::new(exe)
        .args(args)
        .env("BRIDGEWATCH_CONFIG_PATH", temp_path("missing-config.json"))
        .env("BRIDGEWATCH_DATASET_PATH", dataset)
        .output()
        .expect("failed to run bridgewatch")
}

fn ids(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn history_filters_by_operator_and_status() {
    let dataset = temp_path("cli-history-operator.json");
    write_history(&dataset);

    let by_operator = run(&dataset, &["history", "--operator", "刘强", "--json"]);
    let by_both = run(
        &dataset,
        &["history", "--operator", "刘强", "--status", "interrupted", "--json"],
    );
    let by_package = run(&dataset, &["history", "--package", "黄浦区重点桥梁夜检", "--json"]);
    std::fs::remove_file(&dataset).ok();

    assert_eq!(ids(&by_operator), vec!["his-a", "his-c"]);
    assert_eq!(ids(&by_both), vec!["his-c"]);
    assert_eq!(ids(&by_package), vec!["his-b", "his-c"]);
}

#[test]
fn history_range_compares_days_at_configured_offset() {
    let dataset = temp_path("cli-history-offset.json");
    write_history(&dataset);

    let utc = run(
        &dataset,
        &[
            "history",
            "--from",
            "2025-03-11",
            "--to",
            "2025-03-11",
            "--config-override",
            "utc_offset_hours=0",
            "--json",
        ],
    );
    let shanghai = run(
        &dataset,
        &[
            "history",
            "--from",
            "2025-03-11",
            "--to",
            "2025-03-11",
            "--config-override",
            "utc_offset_hours=8",
            "--json",
        ],
    );
    std::fs::remove_file(&dataset).ok();

    assert_eq!(ids(&utc), vec!["his-b"]);
    assert_eq!(ids(&shanghai), vec!["his-a", "his-b"]);
}

#[test]
fn history_range_bounds_are_inclusive() {
    let dataset = temp_path("cli-history-bounds.json");
    write_history(&dataset);

    let output = run(
        &dataset,
        &[
            "history",
            "--from",
            "2025-03-12",
            "--to",
            "2025-03-15",
            "--config-override",
            "utc_offset_hours=0",
            "--json",
        ],
    );
    std::fs::remove_file(&dataset).ok();

    assert_eq!(ids(&output), vec!["his-c", "his-d"]);
}

#[test]
fn history_uses_configured_page_size() {
    let dataset = temp_path("cli-history-page.json");
    let config = temp_path("cli-history-config.json");
    write_history(&dataset);
    std::fs::write(&config, r#"{ "page_size": 3 }"#).unwrap();

    let exe = env!("CARGO_BIN_EXE_bridgewatch");
    let output = Command::new(exe)
        .args(["history", "--page", "2", "--json"])
        .env("BRIDGEWATCH_CONFIG_PATH", &config)
        .env("BRIDGEWATCH_DATASET_PATH", &dataset)
        .output()
        .expect("failed to run history");
    std::fs::remove_file(&dataset).ok();
    std::fs::remove_file(&config).ok();

    assert_eq!(ids(&output), vec!["his-d"]);
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["page_size"], 3);
    assert_eq!(page["total_pages"], 2);
}

#[test]
fn history_table_shows_operator_and_status() {
    let dataset = temp_path("cli-history-table.json");
    write_history(&dataset);

    let output = run(&dataset, &["history", "--status", "abnormal"]);
    std::fs::remove_file(&dataset).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("王敏"));
    assert!(stdout.contains("abnormal"));
    assert!(!stdout.contains("his-a"));
}
