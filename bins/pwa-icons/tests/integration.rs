use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use tempfile::TempDir;

fn pwa_icons(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pwa-icons").unwrap();
    cmd.current_dir(dir.path()).arg("--no-color");
    cmd
}

fn write_config(dir: &TempDir) {
    std::fs::write(
        dir.path().join("build-config.json"),
        r##"{"appName": "Demo", "appDescription": "Demo app", "themeColor": "#123456"}"##,
    )
    .unwrap();
}

#[test]
fn generates_icons_and_manifest() {
    let dir = TempDir::new().unwrap();
    write_config(&dir);
    RgbaImage::from_pixel(256, 256, Rgba([200, 40, 40, 255]))
        .save(dir.path().join("source-icon.png"))
        .unwrap();

    pwa_icons(&dir).assert().success();

    assert_eq!(
        image::image_dimensions(dir.path().join("icons/icon-384x384.png")).unwrap(),
        (384, 384)
    );
    assert_eq!(
        image::image_dimensions(dir.path().join("android-icons/mipmap-xxhdpi/ic_launcher_foreground.png"))
            .unwrap(),
        (172, 172)
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "Demo");
    assert_eq!(manifest["theme_color"], "#123456");
    assert_eq!(manifest["icons"].as_array().unwrap().len(), 8);
}

#[test]
fn missing_source_icon_fails() {
    let dir = TempDir::new().unwrap();
    write_config(&dir);

    pwa_icons(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("source-icon.png"));

    assert!(!dir.path().join("icons").exists());
}

#[test]
fn missing_config_fails() {
    let dir = TempDir::new().unwrap();
    pwa_icons(&dir).assert().failure().code(3);
}
