use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("bridgewatch-{nanos}-{file_name}"))
}

fn run(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_bridgewatch");
    Command::new(exe)
        .args(args)
        .env("BRIDGEWATCH_CONFIG_PATH", temp_path("missing-config.json"))
        .env_remove("BRIDGEWATCH_DATASET_PATH")
        .output()
        .expect("failed to run bridgewatch")
}

fn page_ids(output: &Output) -> (Vec<String>, u64) {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect();
    (ids, page["total"].as_u64().unwrap())
}

#[test]
fn plans_filter_by_district_keeps_source_order() {
    let output = run(&["plans", "--district", "浦东", "--json"]);
    let (ids, total) = page_ids(&output);
    assert_eq!(ids, vec!["plan-001", "plan-003"]);
    assert_eq!(total, 2);
}

#[test]
fn plans_without_criteria_return_everything() {
    let output = run(&["plans", "--json"]);
    let (ids, total) = page_ids(&output);
    assert_eq!(ids, vec!["plan-001", "plan-002", "plan-003", "plan-004"]);
    assert_eq!(total, 4);
}

#[test]
fn plans_date_range_matches_overlapping_cycles() {
    let output = run(&["plans", "--from", "2025-06-01", "--to", "2025-06-30", "--json"]);
    let (ids, _) = page_ids(&output);
    assert_eq!(ids, vec!["plan-003", "plan-004"]);

    let output = run(&["plans", "--from", "2025-03-31", "--to", "2025-03-31", "--json"]);
    let (ids, _) = page_ids(&output);
    assert_eq!(ids, vec!["plan-001", "plan-002", "plan-004"]);
}

#[test]
fn plans_combine_criteria_with_and() {
    let output = run(&[
        "plans",
        "--district",
        "浦东",
        "--unit",
        "申通桥隧养护有限公司",
        "--json",
    ]);
    let (ids, _) = page_ids(&output);
    assert_eq!(ids, vec!["plan-003"]);
}

#[test]
fn plans_unknown_value_gives_empty_page() {
    let output = run(&["plans", "--district", "徐汇"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No matching records"));
    assert!(stdout.contains("page 1/1 · 0 total"));
}

#[test]
fn plans_paginate_matches() {
    let output = run(&["plans", "--page-size", "3", "--page", "2", "--json"]);
    let (ids, total) = page_ids(&output);
    assert_eq!(ids, vec!["plan-004"]);
    assert_eq!(total, 4);

    let output = run(&["plans", "--page-size", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}

#[test]
fn plans_table_lists_matching_rows() {
    let output = run(&["plans", "--package", "嘉定区城区定检"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plan-004"));
    assert!(stdout.contains("嘉罗公路北段"));
    assert!(!stdout.contains("plan-001"));
}

#[test]
fn plans_with_unreadable_cycle_only_fail_date_criteria() {
    let dataset_path = temp_path("cli-plans-cycle.json");
    let content = serde_json::json!({
        "schema_version": 1,
        "plans": [
            {
                "id": "plan-x",
                "project_package": "徐汇区桥梁巡查",
                "route": "龙华中路",
                "segments": ["龙华中路-天钥桥路"],
                "status": "draft",
                "inspection_cycle": "待定",
                "district": "徐汇",
                "road_type": "主干路",
                "inspection_unit": "上海城建检测有限公司"
            },
            {
                "id": "plan-y",
                "project_package": "徐汇区桥梁巡查",
                "route": "漕溪北路",
                "segments": [],
                "status": "active",
                "inspection_cycle": "2025-05-01 至 2025-05-31",
                "district": "徐汇",
                "road_type": "主干路",
                "inspection_unit": "上海城建检测有限公司"
            }
        ]
    });
    std::fs::write(&dataset_path, serde_json::to_string_pretty(&content).unwrap()).unwrap();
    let dataset = dataset_path.to_string_lossy().to_string();

    let by_district = run(&["plans", "--dataset", &dataset, "--district", "徐汇", "--json"]);
    let by_range = run(&[
        "plans",
        "--dataset",
        &dataset,
        "--from",
        "2025-05-10",
        "--to",
        "2025-05-12",
        "--json",
    ]);
    std::fs::remove_file(&dataset_path).ok();

    let (ids, _) = page_ids(&by_district);
    assert_eq!(ids, vec!["plan-x", "plan-y"]);
    let (ids, _) = page_ids(&by_range);
    assert_eq!(ids, vec!["plan-y"]);
}

#[test]
fn plans_inverted_range_keeps_only_spanning_cycles() {
    let output = run(&["plans", "--from", "2025-06-30", "--to", "2025-06-01", "--json"]);
    let (ids, total) = page_ids(&output);
    assert_eq!(ids, vec!["plan-004"]);
    assert_eq!(total, 1);

    let output = run(&["plans", "--from", "2025-09-30", "--to", "2025-09-01", "--json"]);
    let (ids, total) = page_ids(&output);
    assert!(ids.is_empty());
    assert_eq!(total, 0);
}

#[test]
fn plans_reject_malformed_day() {
    let output = run(&["plans", "--from", "2025/06/01", "--to", "2025-06-30"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}
