use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn make_template(root: &Path) -> PathBuf {
    let template = root.join("template");
    write(
        &template.join("build-config.json"),
        r#"{"appName": "My PWA App", "appId": "com.example.myapp", "appDescription": "A Progressive Web App", "webDir": "www"}"#,
    );
    write(
        &template.join("package.json"),
        r#"{"name": "pwa-template", "version": "1.0.0", "scripts": {"build": "pwa-build"}}"#,
    );
    write(
        &template.join("manifest.json"),
        r#"{"name": "My PWA App", "short_name": "PWA", "start_url": "/", "display": "standalone"}"#,
    );
    write(
        &template.join("index.html"),
        "<!DOCTYPE html>\n<html>\n<head><title>My PWA App</title></head>\n<body><h1>Welcome to Your PWA</h1></body>\n</html>\n",
    );
    write(&template.join("js/app.js"), "console.log('ready');\n");
    write(&template.join("node_modules/left-pad/index.js"), "");
    template
}

fn create(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("create-pwa-app").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("PWA_TEMPLATE_DIR")
        .arg("--template")
        .arg(dir.path().join("template"))
        .arg("--no-color");
    cmd
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn creates_project_from_flags() {
    let dir = TempDir::new().unwrap();
    make_template(dir.path());

    create(&dir)
        .args(["--yes", "--name", "demo", "--app-name", "Demo", "--app-id", "com.example.app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project created"))
        .stdout(predicate::str::contains("npm install"));

    let project = dir.path().join("demo");
    let html = std::fs::read_to_string(project.join("index.html")).unwrap();
    assert!(html.contains("<title>Demo</title>"));
    assert!(html.contains("<h1>Welcome to Demo</h1>"));

    let config = read_json(&project.join("build-config.json"));
    assert_eq!(config["appId"], "com.example.app");
    assert_eq!(config["appDescription"], "A Progressive Web App");

    assert!(project.join("js/app.js").is_file());
    assert!(!project.join("node_modules").exists());
}

#[test]
fn answers_prompts_from_stdin() {
    let dir = TempDir::new().unwrap();
    make_template(dir.path());

    create(&dir)
        .write_stdin("My Demo\nDemo\ncom.example.app\nA demo\n")
        .assert()
        .success();

    let project = dir.path().join("My Demo");
    let package = read_json(&project.join("package.json"));
    assert_eq!(package["name"], "my-demo");
    assert_eq!(package["description"], "A demo");

    let manifest = read_json(&project.join("manifest.json"));
    assert_eq!(manifest["short_name"], "Demo");
}

#[test]
fn empty_answers_use_defaults() {
    let dir = TempDir::new().unwrap();
    make_template(dir.path());

    create(&dir).write_stdin("\n\n\n\n").assert().success();

    let config = read_json(&dir.path().join("my-pwa-app/build-config.json"));
    assert_eq!(config["appName"], "My PWA App");
    assert_eq!(config["appId"], "com.example.myapp");
}

#[test]
fn invalid_app_id_fails_without_creating_anything() {
    let dir = TempDir::new().unwrap();
    make_template(dir.path());

    create(&dir)
        .args(["--yes", "--name", "demo", "--app-id", "invalid id"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("com.yourname.appname"));

    assert!(!dir.path().join("demo").exists());
}

#[test]
fn second_run_fails_when_directory_exists() {
    let dir = TempDir::new().unwrap();
    make_template(dir.path());

    create(&dir).args(["--yes", "--name", "demo"]).assert().success();
    create(&dir)
        .args(["--yes", "--name", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_template_fails() {
    let dir = TempDir::new().unwrap();

    create(&dir)
        .args(["--yes", "--name", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template directory not found"));

    assert!(!dir.path().join("demo").exists());
}

#[test]
fn dir_flag_sets_parent_directory() {
    let dir = TempDir::new().unwrap();
    make_template(dir.path());
    std::fs::create_dir(dir.path().join("projects")).unwrap();

    create(&dir)
        .args(["--yes", "--name", "demo", "--dir"])
        .arg(dir.path().join("projects"))
        .assert()
        .success();

    assert!(dir.path().join("projects/demo/index.html").is_file());
}
