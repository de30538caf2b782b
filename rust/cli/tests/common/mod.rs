#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Three-handed: George on the button folds, Mo raises from the small
/// blind, Connor calls from the big blind.
pub const RAISED_POT: &[&str] = &[
    r#"Player stacks: #1 "George @ ZuSk" (114.14) | #4 "Mo @ C2SG" (172.60) | #8 "Connor @ UZnS" (221.00)"#,
    r#""Mo @ C2SG" posts a small blind of 0.50"#,
    r#""Connor @ UZnS" posts a big blind of 1.00"#,
    r#""George @ ZuSk" folds"#,
    r#""Mo @ C2SG" raises to 2.50"#,
    r#""Connor @ UZnS" calls 2.50"#,
    "Flop:  [K♦, 10♠, 10♦]",
    r#""Mo @ C2SG" checks"#,
    r#""Connor @ UZnS" checks"#,
];

/// Heads-up limp: Mo completes from the small blind, Connor checks.
pub const LIMPED_HEADS_UP: &[&str] = &[
    r#"Player stacks: #4 "Mo @ C2SG" (170.10) | #8 "Connor @ UZnS" (218.50)"#,
    r#""Mo @ C2SG" posts a small blind of 0.50"#,
    r#""Connor @ UZnS" posts a big blind of 1.00"#,
    r#""Mo @ C2SG" calls 1.00"#,
    r#""Connor @ UZnS" checks"#,
];

/// Stack row without a big blind post.
pub const MISSING_BIG_BLIND: &[&str] = &[
    r#"Player stacks: #4 "Mo @ C2SG" (170.10) | #8 "Connor @ UZnS" (218.50)"#,
    r#""Mo @ C2SG" posts a small blind of 0.50"#,
];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Renders hands as a platform export: header row, then newest event first.
/// Hand `n` (1-based) starts at noon on 2024-01-0n.
pub fn export_csv(hands: &[&[&str]]) -> String {
    let mut rows: Vec<(String, String, u64)> = Vec::new();
    let mut seq = 170_000_000_000_000u64;
    for (i, hand) in hands.iter().enumerate() {
        let n = i + 1;
        let ts = format!("2024-01-{:02}T12:00:00.000Z", n);
        let mut push = |d: String| {
            seq += 1;
            rows.push((d, ts.clone(), seq));
        };
        push(format!(
            "-- starting hand #{n} (id: h{n}) (No Limit Texas Hold'em) (dealer: \"George @ ZuSk\") --"
        ));
        for d in hand.iter() {
            push(d.to_string());
        }
        push(format!("-- ending hand #{n} --"));
    }

    let mut s = String::from("entry,at,order\n");
    for (d, ts, seq) in rows.iter().rev() {
        s.push_str(&format!("{},{},{}\n", quote(d), ts, seq));
    }
    s
}

pub fn write_log(dir: &Path, name: &str, hands: &[&[&str]]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, export_csv(hands)).unwrap();
    path
}

pub fn write_roster(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("roster.json");
    fs::write(&path, json).unwrap();
    path
}

pub const ROSTER: &str = r#"{"George Smith": ["George"], "Mo": [], "Connor": ["Con"]}"#;

/// Runs the CLI in-process, returning (exit code, stdout, stderr).
pub fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["handlog"];
    argv.extend_from_slice(args);
    let code = handlog_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

/// Sets environment variables for the lifetime of the guard.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            unsafe { std::env::set_var(key, value) };
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
