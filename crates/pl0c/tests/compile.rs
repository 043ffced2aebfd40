use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn pl0c() -> Command {
    Command::cargo_bin("pl0c").unwrap()
}

#[test]
fn minimal_program_emits_expected_bytecode() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("min.pl0");
    fs::write(&src, "! 5 .").unwrap();

    pl0c().arg(&src).current_dir(dir.path()).assert().success();

    let bytecode = fs::read(dir.path().join("min.cl0")).unwrap();
    let expected: Vec<u8> = vec![
        0x01, 0x00, // procedure count = 1
        26, 0x09, 0x00, // ENTRY_PROC, length = 9
        0x00, 0x00, // procedure index 0
        0x00, 0x00, // frame size 0
        6, 0x00, 0x00, // PUSH_CONST 0
        8, // PUSH_VAL
        23, // RET_PROC
        0x05, 0x00, 0x00, 0x00, // constant pool: [5]
    ];
    assert_eq!(bytecode, expected);
}

#[test]
fn default_output_path_is_input_stem_with_cl0_extension() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("prog.pl0");
    fs::write(&src, "VAR I; BEGIN I := 0 END .").unwrap();

    pl0c().arg(&src).current_dir(dir.path()).assert().success();

    assert!(dir.path().join("prog.cl0").exists());
}

#[test]
fn custom_output_path_is_honored() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("prog.pl0");
    let out = dir.path().join("out.bin");
    fs::write(&src, "! 1 .").unwrap();

    pl0c()
        .arg(&src)
        .arg("--out")
        .arg(&out)
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(out.exists());
    assert!(!dir.path().join("prog.cl0").exists());
}

#[test]
fn ast_flag_writes_xml_dump_alongside_bytecode() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("prog.pl0");
    fs::write(&src, "! 5 .").unwrap();

    pl0c()
        .arg(&src)
        .arg("--ast")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("prog.cl0").exists());
    assert!(dir.path().join("prog.xml").exists());
}

#[test]
fn syntax_error_exits_nonzero_with_message() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("bad.pl0");
    fs::write(&src, "VAR ; BEGIN END .").unwrap();

    pl0c()
        .arg(&src)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_input_file_exits_nonzero() {
    pl0c()
        .arg("does-not-exist.pl0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
