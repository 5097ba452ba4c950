use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn clientele_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clientele").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn create_list_statistics_exit() {
    let dir = TempDir::new().unwrap();

    // 1 = new customer form, then list, statistics, exit.
    let input = "1\nAna\nana@x.com\n600111222\n\n1\n2\n6\n0\n";

    clientele_cmd(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("created with id 1"))
        .stdout(predicate::str::contains("ana@x.com"))
        .stdout(predicate::str::contains("Total customers"))
        .stdout(predicate::str::contains("Last assigned id: 1"));

    let on_disk = fs::read_to_string(dir.path().join("datos/clientes.csv")).unwrap();
    assert_eq!(on_disk, "1;Ana;ana@x.com;600111222;-;particular\n");
}

#[test]
fn second_run_reloads_the_backing_store() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("datos")).unwrap();
    fs::write(
        dir.path().join("datos/clientes.csv"),
        "1;Ana;ana@x.com;600111222;-;particular\n4;Bob;bob@x.com;611222333;Acme;vip\n",
    )
    .unwrap();

    clientele_cmd(&dir)
        .write_stdin("2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 customer(s)"))
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("bob@x.com"));
}

#[test]
fn invalid_inputs_reprompt_instead_of_failing() {
    let dir = TempDir::new().unwrap();

    // Bad menu option, then a create form with one invalid email attempt
    // and one short phone attempt before valid values.
    let input = "9\n1\nAna\nnot-an-email\nana@x.com\n123\n600111222\n\n2\n0\n";

    clientele_cmd(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option"))
        .stdout(predicate::str::contains("must contain '@'"))
        .stdout(predicate::str::contains("at least 9 characters"))
        .stdout(predicate::str::contains("created with id 1"));
}

#[test]
fn delete_asks_for_confirmation_and_reports_unknown_ids() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("datos")).unwrap();
    fs::write(
        dir.path().join("datos/clientes.csv"),
        "1;Ana;ana@x.com;600111222;-;particular\n",
    )
    .unwrap();

    // Unknown id, then delete id 1 but answer "n", then delete and confirm.
    let input = "5\n99\n5\n1\nn\n5\n1\ny\n0\n";

    clientele_cmd(&dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No customer with id 99"))
        .stdout(predicate::str::contains("Deletion cancelled"))
        .stdout(predicate::str::contains("Customer 'Ana' deleted"));

    let on_disk = fs::read_to_string(dir.path().join("datos/clientes.csv")).unwrap();
    assert_eq!(on_disk, "");
}

#[test]
fn statistics_after_deleting_everything_shows_empty_hint() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("datos")).unwrap();
    fs::write(
        dir.path().join("datos/clientes.csv"),
        "1;Ana;ana@x.com;600111222;-;particular\n",
    )
    .unwrap();

    // Delete the only record, then ask for statistics: the store is empty
    // again but the last assigned id must stay at 1.
    clientele_cmd(&dir)
        .write_stdin("5\n1\ny\n6\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total customers:  0"))
        .stdout(predicate::str::contains("Last assigned id: 1"))
        .stdout(predicate::str::contains("The store is empty"));
}

#[test]
fn missing_data_file_starts_empty() {
    let dir = TempDir::new().unwrap();

    clientele_cmd(&dir)
        .write_stdin("2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data file found"))
        .stdout(predicate::str::contains("No customers registered"));
}
