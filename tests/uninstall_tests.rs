//! Uninstall integration tests using the REAL appinstall binary
#![cfg(unix)]

mod common;

use std::fs;

use common::{FakeBundle, TestHome};
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn test_install_then_uninstall_removes_everything() {
    let home = TestHome::new();
    let source = FakeBundle::with_descriptor("[Desktop Entry]\nName=Krita\nIcon=krita\n")
        .file("krita.png")
        .write(&home.downloads, "Krita.AppImage");
    home.cmd().arg("--install").arg(&source).assert().success();

    home.cmd()
        .args(["--uninstall", "krita"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalling krita..."))
        .stdout(predicate::str::contains("AppImage removed"))
        .stdout(predicate::str::contains("Desktop entry removed"))
        .stdout(predicate::str::contains("Icon removed"))
        .stdout(predicate::str::contains("Registry entry removed: krita 1.0"))
        .stdout(predicate::str::contains("Uninstall complete."));

    assert!(!home.bin_dir().join("Krita.AppImage").exists());
    assert!(!home.applications_dir().join("krita.desktop").exists());
    assert!(!home.icons_dir().join("krita.png").exists());
    assert!(home.registry().as_object().unwrap().is_empty());
    assert!(home.leaked_scratch_dirs().is_empty());
}

#[test]
#[serial]
fn test_uninstall_by_display_name() {
    let home = TestHome::new();
    let source = FakeBundle::named("Visual Studio Code").write(&home.downloads, "Code.AppImage");
    home.cmd().arg("--install").arg(&source).assert().success();

    home.cmd()
        .args(["--uninstall", "Visual Studio Code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstall complete."));

    assert!(!home.bin_dir().join("Code.AppImage").exists());
    assert!(
        !home
            .applications_dir()
            .join("visual_studio_code.desktop")
            .exists()
    );
    assert!(home.registry().get("visual_studio_code").is_none());
}

#[test]
#[serial]
fn test_uninstall_never_installed_is_noop() {
    let home = TestHome::new();

    home.cmd()
        .args(["--uninstall", "Ghost App"])
        .assert()
        .success()
        .stderr(predicate::str::contains("AppImage not found"))
        .stderr(predicate::str::contains("ghost_app.AppImage"));

    assert!(!home.registry_path().exists());
}

#[test]
#[serial]
fn test_uninstall_rejects_name_outside_bin_dir() {
    let home = TestHome::new();
    fs::create_dir_all(home.bin_dir()).unwrap();
    let outside = FakeBundle::named("Victim")
        .executable()
        .write(&home.home, "victim.AppImage");
    let marker = home.home.join("squashfs-root");

    home.cmd()
        .args(["--uninstall", "../../victim"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid application name"))
        .stdout(predicate::str::contains("Uninstall complete.").not());

    assert!(outside.is_file());
    assert!(!marker.exists());
    assert!(home.leaked_scratch_dirs().is_empty());
}

#[test]
#[serial]
fn test_uninstall_unregistered_bundle_at_conventional_path() {
    let home = TestHome::new();
    FakeBundle::named("Manual")
        .executable()
        .write(&home.bin_dir(), "manual.AppImage");

    home.cmd()
        .args(["--uninstall", "manual"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AppImage removed"))
        .stdout(predicate::str::contains("Desktop entry not found"))
        .stdout(predicate::str::contains("Icon not found"));

    assert!(!home.bin_dir().join("manual.AppImage").exists());
}

#[test]
#[serial]
fn test_uninstall_uses_identifier_declared_by_bundle() {
    let home = TestHome::new();
    // File name says "old", the descriptor says "New App"
    FakeBundle::named("New App")
        .executable()
        .write(&home.bin_dir(), "old.AppImage");
    fs::create_dir_all(home.applications_dir()).unwrap();
    let launcher = home.applications_dir().join("new_app.desktop");
    fs::write(&launcher, "[Desktop Entry]\n").unwrap();

    home.cmd().args(["--uninstall", "old"]).assert().success();

    assert!(!launcher.exists());
    assert!(!home.bin_dir().join("old.AppImage").exists());
}

#[test]
#[serial]
fn test_uninstall_bundle_that_no_longer_extracts() {
    let home = TestHome::new();
    FakeBundle::named("Rot")
        .failing()
        .executable()
        .write(&home.bin_dir(), "rot.AppImage");

    home.cmd()
        .args(["--uninstall", "rot"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to extract bundle"));

    // Nothing is removed when the identifier cannot be confirmed
    assert!(home.bin_dir().join("rot.AppImage").exists());
}

#[test]
#[serial]
fn test_uninstall_turkish() {
    let home = TestHome::new();

    home.cmd()
        .args(["--lang", "tr", "--uninstall", "yok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yok kaldırılıyor..."))
        .stderr(predicate::str::contains("AppImage bulunamadı"));
}
