mod common;

use common::{LIMPED_HEADS_UP, MISSING_BIG_BLIND, RAISED_POT, ROSTER, run_cli, write_log, write_roster};
use serde_json::Value;
use serial_test::serial;

fn stats_json(stdout: &str) -> Value {
    serde_json::from_str(stdout).expect("stats output should be JSON")
}

#[test]
#[serial]
fn stats_without_roster_counts_everyone_seen() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[RAISED_POT, LIMPED_HEADS_UP]);

    let (code, out, err) = run_cli(&["stats", "--input", log.to_str().unwrap()]);
    assert_eq!(code, 0, "stderr: {}", err);

    let v = stats_json(&out);
    assert_eq!(v["files"], 1);
    assert_eq!(v["hands"], 2);
    assert_eq!(v["failures"], 0);
    assert_eq!(v["vpip"]["George"], 0.0);
    assert_eq!(v["vpip"]["Mo"], 1.0);
    assert_eq!(v["vpip"]["Connor"], 0.5);
    assert_eq!(v["pfr"]["Mo"], 0.5);
    assert_eq!(v["pfr"]["Connor"], 0.0);
    assert_eq!(v["counts"]["Mo"]["hands"], 2);
    assert_eq!(v["counts"]["Mo"]["pfr"], 1);
}

#[test]
#[serial]
fn stats_with_roster_uses_canonical_names() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[RAISED_POT, LIMPED_HEADS_UP]);
    let roster = write_roster(dir.path(), ROSTER);

    let (code, out, _) = run_cli(&[
        "stats",
        "--input",
        log.to_str().unwrap(),
        "--roster",
        roster.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let v = stats_json(&out);
    assert_eq!(v["vpip"]["George Smith"], 0.0);
    assert!(v["vpip"].get("George").is_none());
    assert_eq!(v["counts"]["George Smith"]["hands"], 1);
}

#[test]
#[serial]
fn stats_reports_null_for_roster_players_without_hands() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[LIMPED_HEADS_UP]);
    let roster = write_roster(dir.path(), ROSTER);

    let (code, out, _) = run_cli(&[
        "stats",
        "--input",
        log.to_str().unwrap(),
        "--roster",
        roster.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let v = stats_json(&out);
    assert!(v["vpip"]["George Smith"].is_null());
    assert!(v["pfr"]["George Smith"].is_null());
    assert_eq!(v["vpip"]["Mo"], 1.0);
}

#[test]
#[serial]
fn stats_player_count_filter() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[RAISED_POT, LIMPED_HEADS_UP]);

    let (code, out, _) = run_cli(&[
        "stats",
        "--input",
        log.to_str().unwrap(),
        "--min-players",
        "3",
    ]);
    assert_eq!(code, 0);
    let v = stats_json(&out);
    assert_eq!(v["counts"]["Connor"]["hands"], 1);
    assert_eq!(v["vpip"]["Connor"], 1.0);

    let (code, out, _) = run_cli(&[
        "stats",
        "--input",
        log.to_str().unwrap(),
        "--max-players",
        "2",
    ]);
    assert_eq!(code, 0);
    let v = stats_json(&out);
    assert_eq!(v["counts"]["Connor"]["hands"], 1);
    assert_eq!(v["vpip"]["Connor"], 0.0);
}

#[test]
#[serial]
fn stats_rejects_inverted_player_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[RAISED_POT]);

    let (code, out, err) = run_cli(&[
        "stats",
        "--input",
        log.to_str().unwrap(),
        "--min-players",
        "6",
        "--max-players",
        "3",
    ]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert_eq!(err.matches("--min-players must not exceed").count(), 1, "stderr: {}", err);
}

#[test]
#[serial]
fn stats_time_window() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[RAISED_POT, LIMPED_HEADS_UP]);

    let (code, out, _) = run_cli(&[
        "stats",
        "--input",
        log.to_str().unwrap(),
        "--since",
        "2024-01-02T00:00:00Z",
    ]);
    assert_eq!(code, 0);
    let v = stats_json(&out);
    assert_eq!(v["hands"], 1);
    assert!(v["vpip"].get("George").is_none());

    let (code, _, err) = run_cli(&["stats", "--input", log.to_str().unwrap(), "--until", "soon"]);
    assert_eq!(code, 2);
    assert!(err.contains("--until"));
}

#[test]
#[serial]
fn stats_merges_a_directory_of_logs() {
    let dir = tempfile::tempdir().unwrap();
    write_log(dir.path(), "a.csv", &[RAISED_POT]);
    write_log(dir.path(), "nested/b.csv", &[LIMPED_HEADS_UP, RAISED_POT]);
    std::fs::write(dir.path().join("notes.txt"), "not a log").unwrap();

    let (code, out, _) = run_cli(&["stats", "--input", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    let v = stats_json(&out);
    assert_eq!(v["files"], 2);
    assert_eq!(v["hands"], 3);
    assert_eq!(v["counts"]["Mo"]["hands"], 3);
    assert_eq!(v["counts"]["Mo"]["pfr"], 2);
}

#[test]
#[serial]
fn stats_reads_zstd_logs() {
    let dir = tempfile::tempdir().unwrap();
    let plain = common::export_csv(&[RAISED_POT]);
    let path = dir.path().join("table.csv.zst");
    std::fs::write(&path, zstd::bulk::compress(plain.as_bytes(), 3).unwrap()).unwrap();

    let (code, out, _) = run_cli(&["stats", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stats_json(&out)["hands"], 1);
}

#[test]
#[serial]
fn stats_reports_failed_hands_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[MISSING_BIG_BLIND, RAISED_POT]);

    let (code, out, err) = run_cli(&["stats", "--input", log.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(err.matches("hand #1 (h1)").count(), 1, "stderr: {}", err);
    let v = stats_json(&out);
    assert_eq!(v["hands"], 1);
    assert_eq!(v["failures"], 1);
}

#[test]
#[serial]
fn stats_unknown_alias_fails_only_that_hand() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[RAISED_POT, LIMPED_HEADS_UP]);
    let roster = write_roster(dir.path(), r#"{"Mo": [], "Connor": []}"#);

    let (code, out, err) = run_cli(&[
        "stats",
        "--input",
        log.to_str().unwrap(),
        "--roster",
        roster.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(err.contains("George"));
    let v = stats_json(&out);
    assert_eq!(v["hands"], 1);
    assert_eq!(v["failures"], 1);
    assert_eq!(v["vpip"]["Mo"], 1.0);
}

#[test]
#[serial]
fn stats_fails_when_nothing_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv.zst");
    std::fs::write(&path, b"definitely not zstd").unwrap();

    let (code, out, err) = run_cli(&["stats", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert_eq!(err.matches("broken.csv.zst").count(), 1, "stderr: {}", err);
}

#[test]
#[serial]
fn stats_fails_on_an_empty_directory() {
    let dir = tempfile::tempdir().unwrap();

    let (code, out, err) = run_cli(&["stats", "--input", dir.path().to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("No log files found"), "stderr: {}", err);
}

#[test]
#[serial]
fn stats_fails_when_a_directory_has_no_logs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a log").unwrap();
    std::fs::write(dir.path().join("hands.jsonl"), "{}").unwrap();

    let (code, out, _) = run_cli(&["stats", "--input", dir.path().to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
}

#[test]
#[serial]
fn stats_reads_zstd_logs_larger_than_eight_mib() {
    let dir = tempfile::tempdir().unwrap();
    let hands = vec![RAISED_POT; 12_000];
    let plain = common::export_csv(&hands);
    assert!(plain.len() > 8 * 1024 * 1024, "fixture is only {} bytes", plain.len());

    let packed = dir.path().join("big.csv.zst");
    std::fs::write(&packed, zstd::bulk::compress(plain.as_bytes(), 3).unwrap()).unwrap();

    let (code, out, err) = run_cli(&["stats", "--input", packed.to_str().unwrap()]);
    assert_eq!(code, 0, "stderr: {}", err);
    let v = stats_json(&out);
    assert_eq!(v["hands"], 12_000);
    assert_eq!(v["counts"]["Mo"]["pfr"], 12_000);
}

#[test]
#[serial]
fn stats_missing_roster_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "table.csv", &[RAISED_POT]);

    let (code, _, err) = run_cli(&[
        "stats",
        "--input",
        log.to_str().unwrap(),
        "--roster",
        dir.path().join("missing.json").to_str().unwrap(),
    ]);
    assert_eq!(code, 2);
    assert_eq!(err.matches("Failed to load roster").count(), 1, "stderr: {}", err);
}
