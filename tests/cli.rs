//! Exit codes and file output of the `skyppm` binary.

#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn skyppm(args: &[&str], output_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skyppm"))
        .args(args)
        .arg("--output-dir")
        .arg(output_dir)
        .output()
        .unwrap()
}

#[test]
fn writes_default_file_per_layout() {
    let dir = tempfile::tempdir().unwrap();
    for (token, name) in [
        ("24", "image_24bit.ppm"),
        ("32", "image_32bit.ppm"),
        ("24ptr", "image_24bit_ptr.ppm"),
    ] {
        let out = skyppm(&[token, "3", "2"], dir.path());
        assert_eq!(out.status.code(), Some(0), "{token}");
        let text = fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(text.starts_with("P3\n2 3\n255\n0 0 255 \n"), "{token}");
    }
}

#[test]
fn invalid_token_exits_1_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("image");
    let out = skyppm(&["48", "3", "2"], &out_dir);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unrecognized pixel layout"));
    assert!(!out_dir.exists());
}

#[test]
fn missing_arguments_exit_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let out = skyppm(&["32", "3"], dir.path());
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn zero_height_exits_1_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = skyppm(&["24", "3", "0"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("image_24bit.ppm").exists());
}

#[test]
fn width_first_and_clear_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.ppm");
    let out = Command::new(env!("CARGO_BIN_EXE_skyppm"))
        .args(["32", "2", "1", "--width-first", "--clear", "10,20,30", "--output"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "P3\n2 1\n255\n10 20 30 \n10 20 30 \n"
    );
}
