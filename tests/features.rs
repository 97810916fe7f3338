use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};

fn main_binary() -> Command {
    Command::cargo_bin("groupset").unwrap()
}

fn path_with(temp: &TempDir, name: &str, contents: &str) -> String {
    let f = temp.child(name);
    f.write_str(contents).unwrap();
    f.path().to_str().unwrap().to_string()
}

fn stdout_of(args: &[&str]) -> String {
    let output = main_binary().args(args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

const XX: &str = "x\nX\nEx\nEks\nx\nx\nX\n";
const YY: &str = "Ex\nx\ny\nY\nEy\nEks\ny\ny\nY\n";
const ZZ: &str = "Eks\nx\nx\nz\nZ\nEz\nEks\nz\nz\nZ\n";

#[test]
fn requires_an_operation() {
    main_binary().assert().failure();
}

#[test]
fn union_allows_empty_arg_list() {
    main_binary().arg("union").assert().success().stdout("");
}

#[test]
fn intersect_needs_at_least_one_file() {
    let output = main_binary().arg("intersect").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("set intersection needs at least one group"), "{stderr}");
}

#[test]
fn fail_on_missing_file() {
    main_binary().args(["union", "no-such-file"]).assert().failure();
}

#[test]
fn single_argument_just_prints_the_unique_lines() {
    let temp = TempDir::new().unwrap();
    let x_path = path_with(&temp, "x.txt", &(XX.to_owned() + XX));
    assert_eq!(stdout_of(&["intersect", &x_path]), "x\nX\nEx\nEks\n");
}

#[test]
fn intersect_prints_lines_in_the_order_they_appear_in_the_first_file() {
    let temp = TempDir::new().unwrap();
    let x_path = path_with(&temp, "x.txt", XX);
    let y_path = path_with(&temp, "y.txt", YY);
    let z_path = path_with(&temp, "z.txt", ZZ);

    assert_eq!(stdout_of(&["intersect", &x_path, &y_path, &z_path]), "x\nEks\n");
    assert_eq!(stdout_of(&["intersect", &z_path, &y_path, &x_path]), "Eks\nx\n");
}

#[test]
fn multiset_intersect_keeps_the_smallest_count() {
    let temp = TempDir::new().unwrap();
    let x_path = path_with(&temp, "x.txt", XX);
    let z_path = path_with(&temp, "z.txt", ZZ);

    assert_eq!(stdout_of(&["intersect", "--multiset", "--count", &x_path, &z_path]), "2 x\n1 Eks\n");
    assert_eq!(stdout_of(&["intersect", "-m", &x_path, &z_path]), "x\nx\nEks\n");
}

#[test]
fn diff_and_multiset_diff_differ_on_repeated_lines() {
    let temp = TempDir::new().unwrap();
    let x_path = path_with(&temp, "x.txt", XX);
    let z_path = path_with(&temp, "z.txt", ZZ);

    assert_eq!(stdout_of(&["diff", &x_path, &z_path]), "X\nEx\n");
    assert_eq!(stdout_of(&["diff", "-m", "-c", &x_path, &z_path]), "1 x\n2 X\n1 Ex\n");
}

#[test]
fn sym_diff_keeps_lines_with_an_odd_number_of_occurrences() {
    let temp = TempDir::new().unwrap();
    let a_path = path_with(&temp, "a.txt", "a\nb\n");
    let b_path = path_with(&temp, "b.txt", "b\nc\n");
    let aa_path = path_with(&temp, "aa.txt", "a\na\n");

    assert_eq!(stdout_of(&["sym-diff", &a_path, &b_path]), "a\nc\n");
    assert_eq!(stdout_of(&["sym-diff", &aa_path, &a_path]), "a\nb\n");
}

#[test]
fn concat_counts_every_line_of_every_file() {
    let temp = TempDir::new().unwrap();
    let a_path = path_with(&temp, "a.txt", "a\na\nb\n");
    let b_path = path_with(&temp, "b.txt", "b\nc\n");

    assert_eq!(stdout_of(&["concat", "--count", &a_path, &b_path]), "2 a\n2 b\n1 c\n");
    assert_eq!(stdout_of(&["concat", &a_path, &b_path]), "a\na\nb\nb\nc\n");
}

#[test]
fn count_is_rejected_for_set_results() {
    main_binary().args(["union", "--count"]).assert().failure();
    main_binary().args(["sym-diff", "--multiset"]).assert().failure();
}

#[test]
fn output_follows_the_first_files_line_terminator() {
    let temp = TempDir::new().unwrap();
    let crlf_path = path_with(&temp, "crlf.txt", "a\r\nb\r\n");
    let lf_path = path_with(&temp, "lf.txt", "c\n");

    assert_eq!(stdout_of(&["union", &crlf_path, &lf_path]), "a\r\nb\r\nc\r\n");
    assert_eq!(stdout_of(&["union", &lf_path, &crlf_path]), "c\na\nb\n");
}
