use assert_cmd::Command;
use predicates::prelude::*;

fn openwide(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("openwide").unwrap();
    cmd.arg("--no-color")
        .arg("--config")
        .arg(config_dir.path().join("config.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_conflict_and_view() {
    let temp_dir = tempfile::tempdir().unwrap();

    let script = "1\nSam\n30\nP1\n2099-01-01\n10:00 AM\n\
                  1\nAlex\n41\nP2\n2099-01-01\n10:00 AM\n\
                  3\n6\n";

    openwide(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("WELCOME TO OPEN WIDE, BOOK EASY DENTAL CLINIC"))
        .stdout(predicate::str::contains("Appointment added successfully!"))
        .stdout(predicate::str::contains(
            "Conflict: Another appointment is scheduled at 2099-01-01 10:00 AM.",
        ))
        .stdout(predicate::str::contains("2099-01-01  10:00 AM  Sam"))
        .stdout(predicate::str::contains("Alex").not())
        .stdout(predicate::str::contains("Exiting the system. Goodbye!"));
}

#[test]
fn test_past_appointment_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    openwide(&temp_dir)
        .write_stdin("1\nSam\n30\nP1\n2000-01-01\n10:00 AM\n3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cannot schedule an appointment in the past.",
        ))
        .stdout(predicate::str::contains("No appointments available."));
}

#[test]
fn test_cancel_and_search() {
    let temp_dir = tempfile::tempdir().unwrap();

    let script = "1\nSam\n30\nP1\n2099-01-01\n10:00 AM\n\
                  1\nAlex\n41\nP2\n2099-01-02\n9:00 AM\n\
                  2\nP1\n\
                  5\n2099-01-01\n\
                  5\n2099-01-02\n\
                  6\n";

    openwide(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment canceled successfully!"))
        .stdout(predicate::str::contains("No appointments found for the given date."))
        .stdout(predicate::str::contains("2099-01-02  09:00 AM  Alex"));
}

#[test]
fn test_eof_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();

    openwide(&temp_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting the system. Goodbye!"));
}

#[test]
fn test_config_hides_banner() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "show_banner": false }"#,
    )
    .unwrap();

    openwide(&temp_dir)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("WELCOME").not());
}

#[test]
fn test_malformed_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ nope").unwrap();

    openwide(&temp_dir)
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Serialization error"));
}
