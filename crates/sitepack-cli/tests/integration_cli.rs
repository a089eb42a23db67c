//! End-to-end tests for the sitepack binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sitepack(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sitepack"));
    cmd.current_dir(dir)
        .env_remove("NODE_ENV")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn site_with_pages(pages: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let pages_dir = temp.path().join("src/pages");
    fs::create_dir_all(&pages_dir).unwrap();
    for page in pages {
        fs::write(pages_dir.join(page), "<main></main>").unwrap();
    }
    temp
}

#[test]
fn test_plan_prints_json_for_production_by_default() {
    let temp = site_with_pages(&["index.html"]);

    let output = sitepack(temp.path()).arg("plan").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(plan["mode"], "production");
    assert_eq!(plan["pages"][0]["filename"], "index.html");
    assert_eq!(plan["pages"][0]["filename_strategy"], "content-hash");
    assert_eq!(plan["output"]["script_filename"], "js/[contenthash].js");
}

#[test]
fn test_plan_reads_node_env() {
    let temp = site_with_pages(&["index.html", "about.html"]);

    let output = sitepack(temp.path())
        .env("NODE_ENV", "development")
        .arg("plan")
        .assert()
        .success();
    let plan: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(plan["mode"], "development");
    assert_eq!(plan["source_maps"], "inline-source-map");
    assert_eq!(plan["pages"].as_array().unwrap().len(), 2);
    assert_eq!(plan["optimization"]["minimize"], false);
}

#[test]
fn test_mode_flag_overrides_node_env() {
    let temp = site_with_pages(&["index.html"]);

    sitepack(temp.path())
        .env("NODE_ENV", "development")
        .args(["plan", "--mode", "production", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode = \"production\""))
        .stdout(predicate::str::contains("js/[contenthash].js"));
}

#[test]
fn test_plan_with_root_argument() {
    let temp = site_with_pages(&["index.html"]);
    let elsewhere = TempDir::new().unwrap();

    sitepack(elsewhere.path())
        .arg("plan")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"index.html\""));
}

#[test]
fn test_missing_pages_dir_fails_without_output() {
    let temp = TempDir::new().unwrap();

    sitepack(temp.path())
        .arg("plan")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("pages directory does not exist"));
}

#[test]
fn test_invalid_project_file_fails() {
    let temp = site_with_pages(&["index.html"]);
    fs::write(temp.path().join("sitepack.toml"), "[paths]\ntemplate_extension = \".html\"\n")
        .unwrap();

    sitepack(temp.path())
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid template extension"));
}

#[test]
fn test_init_then_check() {
    let temp = TempDir::new().unwrap();

    sitepack(temp.path())
        .args(["init", "site", "--title", "Field Notes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created src/pages/index.html"));

    let site = temp.path().join("site");
    assert!(site.join("sitepack.toml").is_file());
    assert!(site.join("src/js/main.js").is_file());
    assert!(site.join("src/styles/main.scss").is_file());
    assert!(site.join("src/assets/icons/favicon.svg").is_file());
    let index = fs::read_to_string(site.join("src/pages/index.html")).unwrap();
    assert!(index.contains("<title>Field Notes</title>"));

    sitepack(&site)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("1 page(s)"))
        .stderr(predicate::str::contains("All checks passed!"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();

    sitepack(temp.path()).arg("init").assert().success();
    sitepack(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already"));
    sitepack(temp.path())
        .args(["init", "--force", "--title", "Renamed"])
        .assert()
        .success();

    let toml = fs::read_to_string(temp.path().join("sitepack.toml")).unwrap();
    assert!(toml.contains("Renamed"));
}

#[test]
fn test_check_warns_on_empty_pages() {
    let temp = TempDir::new().unwrap();
    sitepack(temp.path()).arg("init").assert().success();
    fs::remove_file(temp.path().join("src/pages/index.html")).unwrap();

    sitepack(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("No .html templates"))
        .stderr(predicate::str::contains("Checks passed with warnings"));
}

#[test]
fn test_check_reports_missing_entry() {
    let temp = TempDir::new().unwrap();
    sitepack(temp.path()).arg("init").assert().success();
    fs::remove_file(temp.path().join("src/js/main.js")).unwrap();

    sitepack(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry script not found"));
}
