use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pwa_build(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pwa-build").unwrap();
    cmd.current_dir(dir.path()).arg("--no-color");
    cmd
}

#[test]
fn missing_config_is_a_config_error() {
    let dir = TempDir::new().unwrap();

    pwa_build(&dir)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("build-config.json"));

    assert!(!dir.path().join("www").exists());
}

#[test]
fn malformed_config_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("build-config.json"), "{ not json").unwrap();

    pwa_build(&dir).assert().failure().code(3);
}

#[test]
fn config_flag_is_relative_to_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("app")).unwrap();

    pwa_build(&dir)
        .args(["--dir", "app", "--config", "custom.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("custom.json"));
}

#[test]
fn web_dir_at_project_root_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("build-config.json"),
        r#"{"appId": "com.example.app", "webDir": "."}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

    pwa_build(&dir)
        .arg("--skip-gradle")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("webDir"));

    assert!(dir.path().join("build-config.json").is_file());
    assert!(dir.path().join("index.html").is_file());
}

#[cfg(unix)]
mod with_stub_npx {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// `npx` stand-in: `cap sync android` creates a bare Android project
    const STUB_NPX: &str = "#!/bin/sh
if [ \"$2\" = \"sync\" ]; then
  mkdir -p android
  echo 'org.gradle.jvmargs=-Xmx1536m' > android/gradle.properties
fi
exit 0
";

    /// PATH with the stub `npx` in front
    fn stub_path(dir: &Path) -> String {
        let bin = dir.join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let npx = bin.join("npx");
        std::fs::write(&npx, STUB_NPX).unwrap();
        std::fs::set_permissions(&npx, std::fs::Permissions::from_mode(0o755)).unwrap();
        format!("{}:{}", bin.display(), std::env::var("PATH").unwrap_or_default())
    }

    fn write_project(root: &Path, config: &str) {
        std::fs::write(root.join("build-config.json"), config).unwrap();
        std::fs::write(root.join("index.html"), "<html></html>").unwrap();
        std::fs::write(root.join("manifest.json"), "{}").unwrap();
        std::fs::write(root.join("sw.js"), "").unwrap();
        std::fs::create_dir_all(root.join("js")).unwrap();
        std::fs::write(root.join("js/app.js"), "console.log('hi');").unwrap();
    }

    #[test]
    fn skip_gradle_build_stages_project() {
        let tools = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        write_project(
            dir.path(),
            r#"{"appName": "Bob's App", "appId": "com.example.app", "foldersToCopy": ["js"]}"#,
        );

        pwa_build(&dir)
            .arg("--skip-gradle")
            .env("PATH", stub_path(tools.path()))
            .assert()
            .success()
            .stdout(predicate::str::contains("Gradle skipped"))
            .stdout(predicate::str::contains("assembleDebug"));

        let root = dir.path();
        assert!(root.join("www/index.html").is_file());
        assert!(root.join("www/manifest.json").is_file());
        assert!(root.join("www/sw.js").is_file());
        assert!(root.join("www/js/app.js").is_file());
        assert!(root.join("android/app/src/main/java/com/example/app/MainActivity.java").is_file());

        let capacitor = std::fs::read_to_string(root.join("capacitor.config.ts")).unwrap();
        assert!(capacitor.contains("appId: 'com.example.app',"));
        assert!(capacitor.contains(r"appName: 'Bob\'s App',"));
        assert!(capacitor.contains("webDir: 'www',"));
    }

    #[test]
    fn empty_web_dir_stages_into_www() {
        let tools = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        write_project(dir.path(), r#"{"appId": "com.example.app", "webDir": "", "foldersToCopy": null}"#);

        pwa_build(&dir)
            .arg("--skip-gradle")
            .env("PATH", stub_path(tools.path()))
            .assert()
            .success();

        assert!(dir.path().join("build-config.json").is_file());
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("www/index.html").is_file());
        assert!(dir.path().join("www/js/app.js").is_file());
    }
}
