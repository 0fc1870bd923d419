use std::{
    env, fs,
    path::PathBuf,
    process::{Command, Output},
};

fn norm_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "")
}

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("demos")
        .join(name)
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("openpath_cli_{tag}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_path_cli"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

#[test]
fn layout_writes_node_json() {
    let dir = scratch_dir("layout");
    let output_path = dir.join("out.path.json");
    let _ = fs::remove_file(&output_path);

    let catalog = demo("catalog.json");
    let stats = demo("stats.json");
    let out = run(&[
        "layout",
        catalog.to_str().unwrap(),
        "--stats",
        stats.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(out.status.success());
    let json = fs::read_to_string(&output_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    let nodes = v.as_array().unwrap();

    // 11 lessons, 2 unit headers, 2 rewards
    assert_eq!(nodes.len(), 15);
    assert_eq!(nodes[0]["type"], "unit_header");
    assert_eq!(nodes[1]["opening"], "Italian Game");
    assert_eq!(nodes[1]["status"], "completed");
    assert_eq!(nodes[1]["masteryLevel"], 3);
    assert_eq!(nodes[4]["opening"], "Caro-Kann Defense");
    assert_eq!(nodes[4]["status"], "current");
    assert_eq!(nodes[5]["type"], "reward");
    assert_eq!(nodes[5]["status"], "completed");
}

#[test]
fn layout_missing_catalog_is_reported() {
    let missing = scratch_dir("missing").join("nope.json");
    let _ = fs::remove_file(&missing);

    let out = run(&["layout", missing.to_str().unwrap()]);

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    let stderr = norm_newlines(&String::from_utf8_lossy(&out.stderr));
    assert!(stderr.contains("Error: failed to read catalog:"));
    assert!(stderr.contains("nope.json"));
    assert!(stderr.contains("Caused by:"));
}

#[test]
fn layout_duplicate_opening_is_e2001() {
    let dir = scratch_dir("duplicate");
    let catalog = dir.join("catalog.json");
    fs::write(
        &catalog,
        r#"[{ "name": "Dutch Defense" }, { "name": "Dutch Defense" }]"#,
    )
    .unwrap();

    let out = run(&["layout", catalog.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = norm_newlines(&String::from_utf8_lossy(&out.stderr));
    assert!(stderr.contains("Error: invalid catalog:"));
    assert!(stderr.contains("E2001: duplicate opening name: Dutch Defense (entry 1)"));
}

#[test]
fn layout_rejects_invalid_options_file() {
    let dir = scratch_dir("options");
    let options = dir.join("options.json");
    fs::write(&options, r#"{ "rewardInterval": 0 }"#).unwrap();

    let catalog = demo("catalog.json");
    let out = run(&[
        "layout",
        catalog.to_str().unwrap(),
        "--options",
        options.to_str().unwrap(),
        "-o",
        dir.join("unused.json").to_str().unwrap(),
    ]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = norm_newlines(&String::from_utf8_lossy(&out.stderr));
    assert!(stderr.contains("E1002: rewardInterval must be >= 1"));
}

#[test]
fn preview_prints_units_and_lessons() {
    let catalog = demo("catalog.json");
    let out = run(&["preview", catalog.to_str().unwrap()]);

    assert!(out.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&out.stdout));
    assert_eq!(stdout.lines().count(), 15);
    assert!(stdout.contains("== Unit 1: Foundations =="));
    assert!(stdout.contains("== Unit 2: Center Control =="));
    assert!(stdout.contains("@ Italian Game [W] m0"));
    assert!(stdout.contains(". Grob Attack [W] m0"));
}

#[test]
fn summary_reports_progress() {
    let catalog = demo("catalog.json");
    let stats = demo("stats.json");
    let out = run(&[
        "summary",
        catalog.to_str().unwrap(),
        "--stats",
        stats.to_str().unwrap(),
    ]);

    assert!(out.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&out.stdout));
    assert!(stdout.contains("lessons=11\n"));
    assert!(stdout.contains("completed=3\n"));
    assert!(stdout.contains("rewards=1/2\n"));
    assert!(stdout.contains("mastery=7/33\n"));
    assert!(stdout.contains("current=Caro-Kann Defense\n"));
    assert!(stdout.contains("next=Queen's Gambit\n"));
}

#[test]
fn summary_honors_options_file() {
    let dir = scratch_dir("summary_options");
    let options = dir.join("options.json");
    fs::write(&options, r#"{ "unitSize": 3, "rewardInterval": 2 }"#).unwrap();

    let catalog = demo("catalog.json");
    let stats = demo("stats.json");
    let out = run(&[
        "summary",
        catalog.to_str().unwrap(),
        "--stats",
        stats.to_str().unwrap(),
        "--options",
        options.to_str().unwrap(),
    ]);

    assert!(out.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&out.stdout));
    // 11 lessons: units at 0, 3, 6, 9 and rewards after 1, 3, 5, 7, 9
    assert!(stdout.contains("units=4\n"));
    assert!(stdout.contains("rewards=2/5\n"));
}

#[test]
fn mode_set_then_get_uses_fallbacks() {
    let prefs = scratch_dir("mode").join("nested").join("prefs.json");
    let _ = fs::remove_file(&prefs);
    let prefs = prefs.to_str().unwrap();

    let out = run(&["mode", "get", "Ruy Lopez", "--prefs", prefs]);
    assert!(out.status.success());
    assert_eq!(norm_newlines(&String::from_utf8_lossy(&out.stdout)), "learn\n");

    assert!(run(&["mode", "set-default", "practice", "--prefs", prefs]).status.success());
    assert!(run(&["mode", "set", "Ruy Lopez", "drill", "--prefs", prefs]).status.success());

    let out = run(&["mode", "get", "Ruy Lopez", "--prefs", prefs]);
    assert_eq!(norm_newlines(&String::from_utf8_lossy(&out.stdout)), "drill\n");
    let out = run(&["mode", "get", "Pirc Defense", "--prefs", prefs]);
    assert_eq!(norm_newlines(&String::from_utf8_lossy(&out.stdout)), "practice\n");
}

#[test]
fn mode_set_rejects_unknown_mode() {
    let prefs = scratch_dir("bad_mode").join("prefs.json");
    let out = run(&["mode", "set", "Ruy Lopez", "bullet", "--prefs", prefs.to_str().unwrap()]);

    assert!(!out.status.success());
    let stderr = norm_newlines(&String::from_utf8_lossy(&out.stderr));
    assert!(stderr.contains("unknown training mode: bullet"));
}

#[test]
fn help_mentions_subcommands() {
    let out = run(&["--help"]);

    assert!(out.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&out.stdout));
    for sub in ["layout", "preview", "summary", "mode"] {
        assert!(stdout.contains(sub));
    }
}

#[test]
fn default_log_filter_reports_cli_info() {
    let prefs = scratch_dir("log_filter").join("prefs.json");
    let out = Command::new(env!("CARGO_BIN_EXE_path_cli"))
        .args(["mode", "set-default", "drill", "--prefs", prefs.to_str().unwrap()])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stderr = norm_newlines(&String::from_utf8_lossy(&out.stderr));
    assert!(stderr.contains("default training mode saved"));
    assert!(out.stdout.is_empty());
}
