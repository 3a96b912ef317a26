use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn grepcat(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("grepcat"));
    cmd.current_dir(dir)
        .env_remove("GREPCAT_DIR")
        .env_remove("GREPCAT_EXT")
        .env_remove("GREPCAT_FORMAT")
        .env_remove("GREPCAT_ACTION")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn write_many(dir: &Path, count: usize) {
    for i in 0..count {
        write_file(&dir.join(format!("f{:02}.txt", i)), "x");
    }
}

#[test]
fn no_arguments_prints_help() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "hi");

    Command::new(assert_cmd::cargo::cargo_bin!("grepcat"))
        .current_dir(temp.path())
        .env_remove("GREPCAT_DIR")
        .env_remove("GREPCAT_FORMAT")
        .env_remove("GREPCAT_ACTION")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: grepcat"))
        .stdout(predicate::str::contains("--substring"))
        .stdout(predicate::str::contains("contents: \"# <path>\" header"))
        .stdout(predicate::str::contains("# a.txt").not())
        .stderr(predicate::str::contains("clipboard").not());
}

#[test]
fn list_filters_by_substring_and_sorts() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("lib/storeUtils.js"), "");
    write_file(&temp.path().join("app/store.js"), "");
    write_file(&temp.path().join("app/index.js"), "");

    grepcat(temp.path())
        .args(["--substring", "store", "--format", "list", "--action", "print"])
        .assert()
        .success()
        .stdout("app/store.js\nlib/storeUtils.js\n");
}

#[test]
fn max_depth_prunes_deeper_files() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a/b/c.txt"), "");
    write_file(&temp.path().join("a/one.txt"), "");

    grepcat(temp.path())
        .args(["--max-depth", "1", "--format", "list", "--action", "print"])
        .assert()
        .success()
        .stdout("a/one.txt\n");
}

#[test]
fn tree_groups_by_root() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("foo/x.ts"), "");
    write_file(&temp.path().join("bar/y.tsx"), "");
    write_file(&temp.path().join("bar/z.js"), "");

    grepcat(temp.path())
        .args(["--dir", "foo,bar", "--ext", ".ts,.tsx", "--format", "tree", "--action", "print"])
        .assert()
        .success()
        .stdout("foo/\n  x.ts\n\nbar/\n  y.tsx\n");
}

#[test]
fn contents_with_prefixed_root() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("app/main.js"), "console.log('hi');\n");

    grepcat(temp.path())
        .args(["--dir", "./app/", "--action", "print"])
        .assert()
        .success()
        .stdout("# app/main.js\nconsole.log('hi');\n");
}

#[test]
fn missing_directory_fails() {
    let temp = tempdir().unwrap();

    grepcat(temp.path())
        .args(["--dir", "nope", "--action", "print"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("directory does not exist: nope"));
}

#[test]
fn invalid_extension_fails() {
    let temp = tempdir().unwrap();

    grepcat(temp.path())
        .args(["--ext", "a/b", "--action", "print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid extension"));
}

#[test]
fn invalid_depth_fails() {
    let temp = tempdir().unwrap();

    grepcat(temp.path())
        .args(["--max-depth", "-3", "--action", "print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid max depth -3"));
}

#[test]
fn unknown_format_fails() {
    let temp = tempdir().unwrap();

    grepcat(temp.path())
        .args(["--format", "yaml"])
        .assert()
        .failure();
}

#[test]
fn no_matches_is_a_clean_success() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "alpha");

    grepcat(temp.path())
        .args(["--substring", "zzz", "--action", "print"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No matching files found."));
}

#[test]
fn large_batch_declined() {
    let temp = tempdir().unwrap();
    write_many(temp.path(), 51);

    grepcat(temp.path())
        .args(["--format", "list", "--action", "print"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Processing 51 files. Proceed? [y/N]"))
        .stderr(predicate::str::contains("Operation cancelled."));
}

#[test]
fn large_batch_confirmed() {
    let temp = tempdir().unwrap();
    write_many(temp.path(), 51);

    let assert = grepcat(temp.path())
        .args(["--format", "list", "--action", "print"])
        .write_stdin("y\n")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_eq!(stdout.lines().count(), 51);
}

#[test]
fn yes_flag_skips_prompt() {
    let temp = tempdir().unwrap();
    write_many(temp.path(), 60);

    grepcat(temp.path())
        .args(["--format", "list", "--action", "print", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Proceed?").not());
}

#[test]
fn clipboard_failure_still_prints() {
    let temp = tempdir().unwrap();
    let empty_path = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "alpha");

    grepcat(temp.path())
        .env("PATH", empty_path.path())
        .args(["--format", "list", "--action", "copy,print"])
        .assert()
        .success()
        .stdout("a.txt\n")
        .stderr(predicate::str::contains("failed to copy to clipboard"));
}

#[test]
fn env_var_sets_default_format() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("docs/a.md"), "x");

    grepcat(temp.path())
        .env("GREPCAT_FORMAT", "tree")
        .args(["--action", "print"])
        .assert()
        .success()
        .stdout("./\n  docs/\n    a.md\n");
}

#[cfg(unix)]
#[test]
fn unreadable_directory_fails_without_output() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    write_file(&temp.path().join("ok.txt"), "fine");
    write_file(&temp.path().join("locked/secret.txt"), "hidden");
    let locked = temp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits are not enforced for root
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = grepcat(temp.path()).args(["--action", "print"]).assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to walk"));
}
