use predicates::str::contains;

mod common;
use common::rti;

#[test]
fn test_shell_requires_login() {
    rti()
        .arg("shell")
        .write_stdin("in\npay 40 20 10\nquit\n")
        .assert()
        .success()
        .stdout(contains("Not logged in"))
        .stdout(contains("Bye."));
}

#[test]
fn test_shell_full_session() {
    rti()
        .arg("shell")
        .write_stdin("login ann secret\nin\nout\nrecords\npay 40 20 10\npay abc 20 10\nlogout\nquit\n")
        .assert()
        .success()
        .stdout(contains("Welcome, ann"))
        .stdout(contains("Punched in at"))
        .stdout(contains("Punched out at"))
        .stdout(contains("Total Time"))
        .stdout(contains("Gross Pay: 800.00"))
        .stdout(contains("Net Pay: 720.00"))
        .stdout(contains("Invalid input for hours"))
        .stdout(contains("Signed out."));
}

#[test]
fn test_shell_state_is_not_persisted() {
    let db = common::setup_test_db("shell_not_persisted");
    common::init_db(&db);

    rti()
        .args(["--db", &db, "shell"])
        .write_stdin("login ann secret\nin\nquit\n")
        .assert()
        .success();

    rti()
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No punch records yet."));
}
