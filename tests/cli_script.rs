use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hemolink_cli").unwrap();
    cmd.env("HEMOLINK_CLI_SCRIPT", "1")
        .env("HEMOLINK_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("HEMOLINK_DIRECTORY")
        .env_remove("HEMOLINK_ASSISTANT_CMD");
    cmd
}

#[test]
fn script_mode_books_an_appointment() {
    let home = TempDir::new().unwrap();
    let input = "book\n\
                 location Downtown\n\
                 next\n\
                 center 1\n\
                 date 2024-05-01\n\
                 time 10:30\n\
                 next\n\
                 name \"Jane Doe\"\n\
                 email jane@x.com\n\
                 phone 555-1234\n\
                 next\n\
                 done\n\
                 profile\n\
                 exit\n";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Appointment Confirmed!"))
        .stdout(contains("Thank you, Jane Doe. Your contribution saves lives."))
        .stdout(contains("Date & Time: 2024-05-01 at 10:30"))
        .stdout(contains("2024-05-01 10:30  Metro Blood Center  Upcoming"));
}

#[test]
fn script_mode_rejects_foreign_slot() {
    let home = TempDir::new().unwrap();
    let input = "book\nlocation Downtown\nnext\ncenter 1\ndate 2024-05-01\ntime 11:00\nnext\nstatus\n";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Metro Blood Center has no `11:00` slot"))
        .stdout(contains("Choose a date and one of the listed time slots first."))
        .stdout(contains("Appointment Confirmed!").not());
}

#[test]
fn script_mode_cancels_from_first_step() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .write_stdin("book\nnext\nback\nnext\n")
        .assert()
        .success()
        .stdout(contains("Enter a city or zip code first."))
        .stdout(contains("Booking cancelled."))
        .stdout(contains("No booking in progress."));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .write_stdin("dashbord\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `dashbord`"))
        .stdout(contains("Suggestion: `dashboard`?"));
}

#[test]
fn dashboard_flags_low_stock() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .write_stdin("dashboard\n")
        .assert()
        .success()
        .stdout(contains("HEMOLINK | Alex Sterling | 1250 Credits"))
        .stdout(contains("Low stock: A-, O-"));
}

#[test]
fn assistant_without_backend_reports_unavailable() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .write_stdin("ask \"Can I donate after a tattoo?\"\n")
        .assert()
        .success()
        .stdout(contains("HemoBot: AI Service Unavailable: Missing API Key."));
}

#[cfg(unix)]
#[test]
fn assistant_command_receives_the_prompt() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .env("HEMOLINK_ASSISTANT_CMD", "cat")
        .write_stdin("ask hello there\n")
        .assert()
        .success()
        .stdout(contains("HemoBot: hello there"));
}

#[test]
fn custom_directory_is_loaded() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("centers.json");
    std::fs::write(
        &path,
        r#"[{"id":"p1","name":"Pop-up Van","address":"Market Sq","distance":"0.2 miles","hours":"10:00 - 14:00","availableSlots":["12:15"]}]"#,
    )
    .unwrap();

    cli(&home)
        .env("HEMOLINK_DIRECTORY", &path)
        .write_stdin("centers\n")
        .assert()
        .success()
        .stdout(contains("[1] Pop-up Van (id p1)"));
}

#[test]
fn empty_directory_fails_startup() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("centers.json");
    std::fs::write(&path, "[]").unwrap();

    cli(&home)
        .env("HEMOLINK_DIRECTORY", &path)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("Invalid center directory"));
}
