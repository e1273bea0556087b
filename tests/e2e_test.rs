/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BEFORE: &str = "tests/fixtures/before.txt";
const AFTER: &str = "tests/fixtures/after.txt";
const SAME: &str = "tests/fixtures/same.txt";

// Exit code tests for CLI
mod exit_code_tests {
    use super::{AFTER, BEFORE, SAME};
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("dpkg-diff")
            .args(["--comparator", "true", BEFORE, AFTER])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("dpkg-diff")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("OLD"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("dpkg-diff").arg("--version").assert().code(0);
    }

    /// Exit code 2: no listings at all
    #[test]
    fn test_exit_code_no_arguments() {
        cargo_bin_cmd!("dpkg-diff")
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Usage"));
    }

    /// Exit code 2: only one listing
    #[test]
    fn test_exit_code_one_argument() {
        cargo_bin_cmd!("dpkg-diff")
            .arg(BEFORE)
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty());
    }

    /// Exit code 2: three listings
    #[test]
    fn test_exit_code_three_arguments() {
        cargo_bin_cmd!("dpkg-diff")
            .args([BEFORE, AFTER, SAME])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty());
    }

    /// Exit code 2: unknown option
    #[test]
    fn test_exit_code_invalid_option() {
        cargo_bin_cmd!("dpkg-diff")
            .args(["--invalid-option", BEFORE, AFTER])
            .assert()
            .code(2);
    }

    /// Exit code 1: missing listing
    #[test]
    fn test_exit_code_missing_listing() {
        cargo_bin_cmd!("dpkg-diff")
            .args([BEFORE, "/nonexistent/listing.txt"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Package listing not found"));
    }

    /// Exit code 1: listing is a directory
    #[test]
    fn test_exit_code_listing_is_directory() {
        cargo_bin_cmd!("dpkg-diff")
            .args(["tests", AFTER])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("is a directory"));
    }
}

#[cfg(unix)]
#[test]
fn test_report_with_upgrading_comparator() {
    // `true` exits 0 for every comparison
    cargo_bin_cmd!("dpkg-diff")
        .args(["--quiet", "--comparator", "true", BEFORE, AFTER])
        .assert()
        .success()
        .stdout(
            "D nano 7.2-1\n\
             A htop 3.2.2-2\n\
             M^ bash 5.2.15-2+b2 -> 5.2.21-2\n\
             M^ curl 7.88.1-10+deb12u5 -> 7.88.1-10\n\
             M^ libc6 2.36-9+deb12u4 -> 2.37-15\n",
        )
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_report_with_downgrading_comparator() {
    // `false` exits 1 for every comparison
    cargo_bin_cmd!("dpkg-diff")
        .args(["-q", "--comparator", "false", BEFORE, AFTER])
        .assert()
        .success()
        .stdout(
            "D nano 7.2-1\n\
             A htop 3.2.2-2\n\
             Mv bash 5.2.15-2+b2 -> 5.2.21-2\n\
             Mv curl 7.88.1-10+deb12u5 -> 7.88.1-10\n\
             Mv libc6 2.36-9+deb12u4 -> 2.37-15\n",
        );
}

#[test]
fn test_missing_comparator_warns_and_reports_not_upgrade() {
    cargo_bin_cmd!("dpkg-diff")
        .args([
            "--quiet",
            "--comparator",
            "dpkg-diff-no-such-comparator",
            BEFORE,
            AFTER,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mv bash 5.2.15-2+b2 -> 5.2.21-2\n",
        ))
        .stderr(predicate::str::contains("Could not compare versions of bash"))
        .stderr(predicate::str::contains("dpkg-diff-no-such-comparator"));
}

#[test]
fn test_identical_listings_print_nothing() {
    cargo_bin_cmd!("dpkg-diff")
        .args(["--comparator", "dpkg-diff-no-such-comparator", BEFORE, SAME])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not compare").not());
}

#[test]
fn test_progress_goes_to_stderr() {
    cargo_bin_cmd!("dpkg-diff")
        .args(["--comparator", "true", BEFORE, AFTER])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loading").not())
        .stderr(predicate::str::contains("Loading package listing"))
        .stderr(predicate::str::contains("1 removed, 1 added, 3 changed"));
}

#[test]
fn test_symlinked_listing_is_followed() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("2024-06-01.txt");
    fs::write(&target, "ii foo 1.0 amd64 foo\n").unwrap();
    let new_listing = temp_dir.path().join("new.txt");
    fs::write(&new_listing, "ii foo 1.0 amd64 foo\nii bar 2.0 all bar\n").unwrap();

    #[cfg(unix)]
    let old_listing = {
        let link = temp_dir.path().join("latest.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        link
    };
    #[cfg(not(unix))]
    let old_listing = target;

    cargo_bin_cmd!("dpkg-diff")
        .arg("-q")
        .arg(&old_listing)
        .arg(&new_listing)
        .assert()
        .success()
        .stdout("A bar 2.0\n");
}

#[cfg(unix)]
#[test]
fn test_listing_from_stdin_pipe() {
    let temp_dir = TempDir::new().unwrap();
    let new_listing = temp_dir.path().join("new.txt");
    fs::write(&new_listing, "ii foo 2.0 amd64 foo\n").unwrap();

    cargo_bin_cmd!("dpkg-diff")
        .args(["-q", "--comparator", "true", "/dev/stdin"])
        .arg(&new_listing)
        .write_stdin("ii foo 1.0 amd64 foo\n")
        .assert()
        .success()
        .stdout("M^ foo 1.0 -> 2.0\n");
}

#[cfg(unix)]
#[test]
fn test_listing_from_fifo() {
    let temp_dir = TempDir::new().unwrap();
    let fifo = temp_dir.path().join("old.fifo");
    let new_listing = temp_dir.path().join("new.txt");
    fs::write(&new_listing, "ii foo 2.0 amd64 foo\n").unwrap();

    let created = std::process::Command::new("mkfifo")
        .arg(&fifo)
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    if !created {
        eprintln!("mkfifo not available, skipping");
        return;
    }

    // Opening the write end blocks until dpkg-diff opens the read end
    let writer = {
        let fifo = fifo.clone();
        std::thread::spawn(move || fs::write(fifo, "ii foo 1.0 amd64 foo\n"))
    };

    cargo_bin_cmd!("dpkg-diff")
        .args(["-q", "--comparator", "true"])
        .arg(&fifo)
        .arg(&new_listing)
        .assert()
        .success()
        .stdout("M^ foo 1.0 -> 2.0\n");

    writer.join().unwrap().unwrap();
}

#[test]
fn test_invalid_utf8_in_description_is_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    let old_listing = temp_dir.path().join("old.txt");
    let new_listing = temp_dir.path().join("new.txt");
    fs::write(
        &old_listing,
        b"ii foo 1.0 amd64 foo\nii bar 1.0 all caf\xe9\n".as_slice(),
    )
    .unwrap();
    fs::write(&new_listing, "ii foo 1.0 amd64 foo\n").unwrap();

    cargo_bin_cmd!("dpkg-diff")
        .arg("-q")
        .arg(&old_listing)
        .arg(&new_listing)
        .assert()
        .success()
        .stdout("D bar 1.0\n");
}

/// Runs against the real comparator when the host has dpkg
#[test]
fn test_real_dpkg_comparator() {
    let dpkg_available = std::process::Command::new("dpkg")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !dpkg_available {
        eprintln!("dpkg not installed, skipping");
        return;
    }

    cargo_bin_cmd!("dpkg-diff")
        .args(["-q", BEFORE, AFTER])
        .assert()
        .success()
        .stdout(
            "D nano 7.2-1\n\
             A htop 3.2.2-2\n\
             M^ bash 5.2.15-2+b2 -> 5.2.21-2\n\
             Mv curl 7.88.1-10+deb12u5 -> 7.88.1-10\n\
             M^ libc6 2.36-9+deb12u4 -> 2.37-15\n",
        );
}
