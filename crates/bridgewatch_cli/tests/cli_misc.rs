use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("bridgewatch-{nanos}-{file_name}"))
}

fn bridgewatch() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bridgewatch"));
    command
        .env("BRIDGEWATCH_CONFIG_PATH", temp_path("missing-config.json"))
        .env_remove("BRIDGEWATCH_DATASET_PATH");
    command
}

fn run(args: &[&str]) -> Output {
    bridgewatch()
        .args(args)
        .output()
        .expect("failed to run bridgewatch")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn route_redirects_index_paths() {
    let output = run(&["route", "/provider"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("provider /provider/dashboard (redirected)"));

    let unknown = stdout_json(&run(&["route", "/nowhere", "--json"]));
    assert_eq!(unknown["redirected"], true);

    let exact = run(&["route", "/worker/checkout"]);
    let stdout = String::from_utf8_lossy(&exact.stdout);
    assert_eq!(stdout.trim(), "worker /worker/checkout");
}

#[test]
fn route_matches_mixed_case_paths() {
    let resolved = stdout_json(&run(&["route", "/History", "--json"]));
    assert_eq!(resolved["redirected"], false);

    let output = run(&["route", "/Provider/Personnel"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "provider /provider/personnel");
}

#[test]
fn options_list_distinct_values_in_first_seen_order() {
    let plans = stdout_json(&run(&["options", "plans", "--json"]));
    assert_eq!(plans["district"], serde_json::json!(["浦东", "黄浦", "嘉定"]));

    let history = stdout_json(&run(&["options", "history", "--json"]));
    assert_eq!(
        history["operator_name"],
        serde_json::json!(["刘强", "王敏", "赵磊", "陈明"])
    );

    let tasks = stdout_json(&run(&["options", "tasks", "--json"]));
    assert_eq!(tasks["operator_name"], serde_json::json!(["刘强", "王敏", "陈明"]));

    let plain = run(&["options", "plans"]);
    assert!(String::from_utf8_lossy(&plain.stdout).contains("district: 浦东, 黄浦, 嘉定"));
}

#[test]
fn personnel_check_validates_phone_and_binding() {
    let ok = run(&["personnel-check", "陈明", "13800001111", "--sn", "JXP2-231021"]);
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).contains("陈明"));

    let bad_phone = run(&["personnel-check", "陈明", "12800001111"]);
    assert!(!bad_phone.status.success());
    assert!(String::from_utf8_lossy(&bad_phone.stderr).contains("invalid phone number"));

    let taken = run(&[
        "personnel-check",
        "陈明",
        "13800001111",
        "--sn",
        "JXP2-230501",
        "--personnel",
        "per-004",
    ]);
    assert!(!taken.status.success());
    assert!(String::from_utf8_lossy(&taken.stderr).contains("already bound"));
}

#[test]
fn worker_checkin_runs_the_work_clock() {
    let fresh = stdout_json(&run(&["worker", "checkin", "wt-002", "--json"]));
    assert_eq!(fresh["task_id"], "wt-002");
    assert_eq!(fresh["duration"], 0);
    assert_eq!(fresh["video_status"], "connecting");

    let running = stdout_json(&run(&["worker", "checkin", "wt-002", "--minutes", "30", "--json"]));
    assert_eq!(running["duration"], 30);
    assert_eq!(running["video_status"], "on");

    let missing = run(&["worker", "checkin", "wt-999"]);
    assert!(!missing.status.success());
    assert!(String::from_utf8_lossy(&missing.stderr).contains("worker task not found"));
}

#[test]
fn worker_checkout_closes_current_session() {
    let finished = stdout_json(&run(&[
        "worker",
        "checkout",
        "--no-trajectory",
        "--note",
        "支座复查完成",
        "--json",
    ]));
    assert_eq!(finished["id"], "hist-wt-001");
    assert_eq!(finished["duration"], 45);
    assert_eq!(finished["status"], "completed");
    assert_eq!(finished["trajectory_recorded"], false);
    assert_eq!(finished["video_recorded"], true);
    assert_eq!(finished["description"], "支座复查完成");

    let dataset = temp_path("cli-checkout-idle.json");
    std::fs::write(&dataset, r#"{ "schema_version": 1 }"#).unwrap();
    let idle = bridgewatch()
        .args(["worker", "checkout"])
        .env("BRIDGEWATCH_DATASET_PATH", &dataset)
        .output()
        .expect("failed to run checkout");
    std::fs::remove_file(&dataset).ok();
    assert!(!idle.status.success());
    assert!(String::from_utf8_lossy(&idle.stderr).contains("no active session"));
}

#[test]
fn bind_check_reports_conflicts() {
    let free = run(&["bind-check", "JXP2-231021"]);
    assert!(free.status.success());
    assert!(String::from_utf8_lossy(&free.stdout).contains("JXP2-231021 can be bound"));

    let taken = run(&["bind-check", "JXP2-230501"]);
    assert!(!taken.status.success());
    assert!(String::from_utf8_lossy(&taken.stderr).contains("already bound"));

    let own = run(&["bind-check", "JXP2-230501", "--personnel", "per-001"]);
    assert!(own.status.success());

    let unknown = run(&["bind-check", "NOPE-000"]);
    assert!(!unknown.status.success());
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("not found"));
}

#[test]
fn checkin_with_seed_is_repeatable() {
    let args = [
        "checkin",
        "pkg-pudong",
        "route-jinqiao",
        "segment-jinqiao-jinxiu",
        "--seed",
        "7",
        "--json",
    ];
    let first = stdout_json(&run(&args));
    let second = stdout_json(&run(&args));
    assert_eq!(first, second);
    assert_eq!(
        first["labels"],
        serde_json::json!(["浦东新区主干桥梁定检", "金桥及周边", "金桥路-锦绣路"])
    );
    let expected_status = if first["success"] == true { "online" } else { "connecting" };
    assert_eq!(first["video_status"], expected_status);
}

#[test]
fn checkin_rejects_selection_outside_tree() {
    let output = run(&["checkin", "pkg-pudong", "route-zhongshan-south", "segment-nanpu-dapulu"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}

#[test]
fn stats_count_demo_records() {
    let stats = stdout_json(&run(&["stats", "--json"]));
    assert_eq!(stats["devices"]["total"], 4);
    assert_eq!(stats["devices"]["online"], 2);
    assert_eq!(stats["devices"]["offline"], 1);
    assert_eq!(stats["devices"]["maintenance"], 1);
    assert_eq!(stats["tasks"]["total"], 4);
    assert_eq!(stats["tasks"]["alert"], 1);
}

#[test]
fn alerts_rotate_newest_first() {
    let shown = stdout_json(&run(&[
        "alerts",
        "--ticks",
        "5",
        "--config-override",
        "ticker_interval_ms=1",
        "--json",
    ]));
    let ids: Vec<&str> = shown
        .as_array()
        .unwrap()
        .iter()
        .map(|alert| alert["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["alert-001", "alert-002", "alert-003", "alert-004", "alert-001", "alert-002"]
    );
}

#[test]
fn alerts_with_empty_dataset_say_so() {
    let dataset = temp_path("cli-alerts-empty.json");
    std::fs::write(&dataset, r#"{ "schema_version": 1 }"#).unwrap();

    let output = bridgewatch()
        .args(["alerts", "--ticks", "3"])
        .env("BRIDGEWATCH_DATASET_PATH", &dataset)
        .output()
        .expect("failed to run alerts");
    std::fs::remove_file(&dataset).ok();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No alerts"));
}

#[test]
fn worker_views_render_demo_data() {
    let current = stdout_json(&run(&["worker", "current", "--json"]));
    assert_eq!(current["task_id"], "wt-001");
    assert_eq!(current["duration"], 45);

    let pending = run(&["worker", "pending"]);
    assert!(pending.status.success());
    assert!(String::from_utf8_lossy(&pending.stdout).contains("wt-001"));

    let history = stdout_json(&run(&["worker", "history", "--json"]));
    assert_eq!(history.as_array().unwrap().len(), 3);
}

#[test]
fn export_writes_loadable_dataset() {
    let path = temp_path("cli-export.json");
    let path_arg = path.to_string_lossy().to_string();

    let export = run(&["export", &path_arg]);
    assert!(export.status.success());

    let again = run(&["export", &path_arg]);
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("already exists"));

    let plans = stdout_json(&run(&["plans", "--dataset", &path_arg, "--json"]));
    std::fs::remove_file(&path).ok();
    assert_eq!(plans["total"], 4);
}

#[test]
fn dataset_with_wrong_schema_is_rejected() {
    let dataset = temp_path("cli-schema.json");
    std::fs::write(&dataset, r#"{ "schema_version": 99, "plans": [] }"#).unwrap();
    let dataset_arg = dataset.to_string_lossy().to_string();

    let output = run(&["plans", "--dataset", &dataset_arg]);
    std::fs::remove_file(&dataset).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_data - schema_version mismatch"));
}

#[test]
fn bad_config_override_is_an_input_error() {
    let output = run(&["stats", "--config-override", "colour=blue"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input - unknown config field 'colour'"));
}

#[test]
fn broken_config_file_falls_back_with_warning() {
    let config = temp_path("cli-broken-config.json");
    std::fs::write(&config, "{ not json").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bridgewatch"))
        .args(["route", "/", "--json"])
        .env("BRIDGEWATCH_CONFIG_PATH", &config)
        .output()
        .expect("failed to run route");
    let stats = Command::new(env!("CARGO_BIN_EXE_bridgewatch"))
        .args(["stats"])
        .env("BRIDGEWATCH_CONFIG_PATH", &config)
        .env_remove("BRIDGEWATCH_DATASET_PATH")
        .output()
        .expect("failed to run stats");
    std::fs::remove_file(&config).ok();

    assert!(output.status.success());
    assert!(stats.status.success());
    assert!(String::from_utf8_lossy(&stats.stderr).contains("WARNING: config ignored"));
}

#[test]
fn interactive_mode_runs_commands_until_exit() {
    let mut child = bridgewatch()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start interactive mode");

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin
            .write_all("route /provider\nplans --district \"嘉定\" --json\nbogus\nexit\nroute /worker\n".as_bytes())
            .unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("provider /provider/dashboard"));
    assert!(stdout.contains("plan-004"));
    assert!(!stdout.contains("worker /worker/home"));
    assert!(stderr.contains("ERROR: invalid_input"));
}
