#![allow(dead_code)]
use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command with an isolated HOME so the real user's config is never read.
pub fn pt(home: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("projtrack").unwrap();
    cmd.env("HOME", home);
    cmd.env_remove("PROJTRACK_USER");
    cmd.env_remove("PROJTRACK_PASSWORD");
    cmd.env_remove("PROJTRACK_GITHUB_TOKEN");
    cmd
}

/// Fresh per-test HOME directory inside the system temp dir.
pub fn setup_home(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{name}_projtrack_home"));
    let _ = fs::remove_dir_all(&path);
    fs::create_dir_all(&path).unwrap();
    path
}

/// Unique workbook path inside the given HOME.
pub fn store_path(home: &PathBuf) -> String {
    home.join("projects.xlsx").to_string_lossy().to_string()
}

/// Output file path inside the given HOME.
pub fn out_path(home: &PathBuf, name: &str, ext: &str) -> String {
    home.join(format!("{name}.{ext}"))
        .to_string_lossy()
        .to_string()
}

/// Add one project as admin (fallback test account).
pub fn add_project(home: &PathBuf, store: &str, code: &str, year: &str, team: &str) {
    let name = format!("Project {code}");
    pt(home)
        .args([
            "--store", store, "--user", "admin", "--password", "admin", "add", "--year", year,
            "--code", code, "--name", name.as_str(), "--location", "NYC", "--start",
            "2024-01-10", "--end", "2024-01-12", "--team", team,
        ])
        .assert()
        .success();
}
