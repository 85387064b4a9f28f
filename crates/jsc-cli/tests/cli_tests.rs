//! End-to-end runs of the command line through `jsc_cli::run`.

use clap::Parser;
use jsc_cli::{run, Cli};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("jscompiler").chain(args.iter().copied()))
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_compile_inputs_to_file() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.js");
    let b = dir.path().join("b.js");
    let out = dir.path().join("out.js");
    fs::write(&a, "var x = 1;  // comment\n\nvar y = \"a//b\";\n").unwrap();
    fs::write(&b, "function f (a) {\n  return a;\n}\n").unwrap();

    let inputs = format!("{},{}", path_str(&a), path_str(&b));
    run(&cli(&["-i", &inputs, "-o", &path_str(&out)])).unwrap();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "var x=1;var y=\"a//b\";\nfunction f(a){return a}\n"
    );
}

#[test]
fn test_merge_only_inputs() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.js");
    let b = dir.path().join("b.js");
    let out = dir.path().join("out.js");
    fs::write(&a, "var a = 1; // keep\n").unwrap();
    fs::write(&b, "var  b = 2;").unwrap();

    let inputs = format!("{},{}", path_str(&a), path_str(&b));
    run(&cli(&["-m", "-i", &inputs, "-o", &path_str(&out)])).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "var a = 1; // keep\nvar  b = 2;");
}

#[test]
fn test_missing_input_is_skipped() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.js");
    let out = dir.path().join("out.js");
    fs::write(&a, "var a = 1;\n").unwrap();

    let inputs = format!("{},{}", path_str(&dir.path().join("nope.js")), path_str(&a));
    run(&cli(&["-i", &inputs, "-o", &path_str(&out)])).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "var a=1;\n");
}

#[test]
fn test_directory_scan() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("nested")).unwrap();
    fs::write(src.join("b.js"), "var b = 2;\n").unwrap();
    fs::write(src.join("a.JS"), "var a = 1;\n").unwrap();
    fs::write(src.join("readme.md"), "# not js\n").unwrap();
    fs::write(src.join("nested/c.js"), "var c = 3;\n").unwrap();
    let out = dir.path().join("out.js");

    run(&cli(&["-d", &path_str(&src), "-o", &path_str(&out)])).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "var a=1;\nvar b=2;\n");

    run(&cli(&["-d", &path_str(&src), "-r", "-o", &path_str(&out)])).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "var a=1;\nvar b=2;\nvar c=3;\n");
}

#[test]
fn test_missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.js");
    let missing = dir.path().join("missing");

    assert!(run(&cli(&["-d", &path_str(&missing), "-o", &path_str(&out)])).is_err());
    assert!(!out.exists());
}

#[test]
fn test_batch_file() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.js");
    fs::write(&a, "var a = 1;\n").unwrap();
    let dist = dir.path().join("dist");
    let batch = dir.path().join("jobs.json");
    fs::write(
        &batch,
        format!(
            r#"{{"app": {{"files": [{a:?}], "action": "compile", "outputDirectory": {dist:?}}}}}"#,
            a = path_str(&a),
            dist = path_str(&dist)
        ),
    )
    .unwrap();

    run(&cli(&["-f", &path_str(&batch)])).unwrap();
    assert_eq!(fs::read_to_string(dist.join("app.js")).unwrap(), "var a=1;\n");
}

#[test]
fn test_batch_unknown_action_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.js");
    fs::write(&a, "var a = 1;\n").unwrap();
    let dist = dir.path().join("dist");
    let batch = dir.path().join("jobs.json");
    fs::write(
        &batch,
        format!(
            r#"{{"ok": {{"files": [{a:?}], "outputDirectory": {dist:?}}}, "bad": {{"files": [{a:?}], "action": "obfuscate", "outputDirectory": {dist:?}}}}}"#,
            a = path_str(&a),
            dist = path_str(&dist)
        ),
    )
    .unwrap();

    let err = run(&cli(&["-f", &path_str(&batch)])).unwrap_err();
    assert!(format!("{err:#}").contains("obfuscate"));
    assert!(!dist.exists());
}
