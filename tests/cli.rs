//! Integration tests for the `tabulate` command-line tool.
//!
//! Covers reading standard input and files, style selection, wrapping,
//! autosizing with an explicit width, and error reporting.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::{TempDir, tempdir};

#[macro_use]
mod prelude;
use prelude::*;

fn tabulate_cmd() -> Command {
    Command::cargo_bin("tabulate").expect("Failed to create cargo command for tabulate")
}

fn write_file(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).expect("failed to create temporary file");
    for line in lines {
        writeln!(f, "{line}").expect("failed to write line");
    }
    f.flush().expect("failed to flush file");
    path
}

#[fixture]
fn csv_dir() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = write_file(
        dir.path(),
        "people.csv",
        &lines_vec!["Name,City", "Jon Snow,Winterfell"],
    );
    (dir, path)
}

#[test]
fn test_cli_version_flag() {
    tabulate_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("tabulate {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_reads_tab_separated_stdin() {
    tabulate_cmd()
        .write_stdin("Name\tCity\nJon Snow\tWinterfell\n")
        .assert()
        .success()
        .stdout(concat!(
            "+----------+------------+\n",
            "|     Name |       City |\n",
            "+==========+============+\n",
            "| Jon Snow | Winterfell |\n",
            "+----------+------------+\n",
        ));
}

#[rstest]
fn test_cli_file_with_style_and_delimiter(csv_dir: (TempDir, PathBuf)) {
    let (_dir, path) = csv_dir;
    tabulate_cmd()
        .args(["-d", ",", "-s", "border", "-a", "left"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Jon Snow │ Winterfell │"))
        .stdout(predicate::str::starts_with("┏"));
}

#[rstest]
fn test_cli_hide_lines(csv_dir: (TempDir, PathBuf)) {
    let (_dir, path) = csv_dir;
    tabulate_cmd()
        .args(["-d", ",", "--hide", "top", "--hide", "bottom"])
        .arg(&path)
        .assert()
        .success()
        .stdout("|     Name |       City |\n+==========+============+\n| Jon Snow | Winterfell |\n");
}

#[test]
fn test_cli_wrap_option() {
    tabulate_cmd()
        .args(["--wrap", "--max-cell", "6", "-a", "left", "--no-header"])
        .write_stdin("alpha beta\n")
        .assert()
        .success()
        .stdout(concat!(
            "+-------+\n",
            "|       |\n",
            "+=======+\n",
            "| alpha |\n",
            "| beta  |\n",
            "+-------+\n",
        ));
}

#[test]
fn test_cli_autosize_with_explicit_width() {
    let output = tabulate_cmd()
        .args(["--autosize", "--width", "31", "-d", ","])
        .write_stdin("k,v\na,b\n")
        .output()
        .expect("failed to run tabulate");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().all(|l| tabulate::display_width(l) == 31));
}

#[test]
fn test_cli_empty_placeholder() {
    tabulate_cmd()
        .args(["-d", ",", "-e", "n/a", "-s", "plain"])
        .write_stdin("a,b\n1,\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("n/a"));
}

#[test]
fn test_cli_multiple_files_keep_order() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut files = Vec::new();
    let mut expected = Vec::new();
    for i in 0..4 {
        let lines = vec![format!("H{i}"), format!("{i}")];
        files.push(write_file(dir.path(), &format!("t{i}.tsv"), &lines));
        expected.push(format!("+----+\n| H{i} |\n+====+\n|  {i} |\n+----+\n"));
    }
    tabulate_cmd()
        .args(&files)
        .assert()
        .success()
        .stdout(expected.join("\n"));
}

#[test]
fn test_cli_list_styles() {
    tabulate_cmd()
        .arg("--list-styles")
        .assert()
        .success()
        .stdout("border\ngrid\nplain\nsimple\n");
}

#[test]
fn test_cli_unknown_style_fails() {
    tabulate_cmd()
        .args(["-s", "fancy"])
        .write_stdin("a\n1\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unknown table style: fancy"));
}

#[test]
fn test_cli_header_only_fails() {
    tabulate_cmd()
        .write_stdin("just\ta\theader\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no data rows"));
}

#[test]
fn test_cli_missing_file_fails() {
    tabulate_cmd()
        .arg("/nonexistent/table.tsv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
