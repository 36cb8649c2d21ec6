//! Drives the built binary through scripted stdin sessions.
use std::fs;
use std::path::Path;

use assert_cmd::Command;

fn simulator(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cloud_sim").expect("binary built");
    cmd.env("DATA_FILE", data_file)
        .env("MESSAGE_PAUSE_MS", "0")
        .env("CRASH_PROBABILITY", "0")
        .env_remove("RUST_LOG");
    cmd
}

fn saved(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).expect("data file written")).expect("valid json")
}

#[test]
fn deploy_and_exit_writes_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.json");

    let output = simulator(&path)
        .write_stdin("1\nsrv-1\nweb-01\nJakarta\n7\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Server deployed successfully!"), "{stdout}");
    assert!(stdout.contains("Shutting down system..."), "{stdout}");

    let data = saved(&path);
    let servers = data.as_array().expect("array");
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0]["id"], "srv-1");
    assert_eq!(servers[0]["nama"], "web-01");
    assert_eq!(servers[0]["lokasi"], "Jakarta");
    assert_eq!(servers[0]["status"], "Active");
    assert_eq!(servers[0]["uptime"], 1);
}

#[test]
fn existing_fleet_survives_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.json");
    fs::write(
        &path,
        r#"[
    {"id": "a", "nama": "alpha", "lokasi": "Bandung", "status": "Maintenance", "uptime": 10, "penggunaan_cpu": 40.0, "penggunaan_memori": 20.0},
    {"id": "b", "nama": "beta", "lokasi": "Medan", "status": "Active", "uptime": 3, "penggunaan_cpu": 30.0, "penggunaan_memori": 20.0}
]"#,
    )
    .unwrap();

    simulator(&path).write_stdin("\n7\n").assert().success();

    let data = saved(&path);
    let servers = data.as_array().unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0]["uptime"], 10);
    assert_eq!(servers[0]["penggunaan_cpu"], 40.0);
    assert_eq!(servers[1]["uptime"], 5);
}

#[test]
fn corrupt_file_starts_empty_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.json");
    fs::write(&path, "this is not json").unwrap();

    let output = simulator(&path).write_stdin("7\n").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No servers running yet"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn saved_file_uses_four_space_indent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.json");

    simulator(&path)
        .write_stdin("1\nx\ny\nz\n7\n")
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n    {\n        \"id\": \"x\""), "{text}");
}

#[test]
fn closed_stdin_still_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fleet.json");

    simulator(&path).write_stdin("1\nq\nr\ns\n").assert().success();
    assert_eq!(saved(&path).as_array().unwrap().len(), 1);
}
