use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn patas(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("patas").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn register_list_and_report_across_invocations() {
    let dir = TempDir::new().unwrap();

    patas(&dir)
        .args([
            "register",
            "--customer",
            "Ana Silva;ana@example.com;11999990000;12345678901;01310100;female",
            "--animal",
            "Rex;dog;male",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered 1 customer(s) and 1 animal(s)"));

    // A fresh invocation sees the saved records.
    patas(&dir)
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Silva"))
        .stdout(predicate::str::contains("ana@example.com"));

    patas(&dir)
        .args(["animals", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex"))
        .stdout(predicate::str::contains("Ana Silva (ID: 12345678901)"));

    patas(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total customers: 1"))
        .stdout(predicate::str::contains("Total animals: 1"))
        .stdout(predicate::str::contains("Animals up for adoption: 0"))
        .stdout(predicate::str::contains("Total employees: 0"));
}

#[test]
fn ownerless_registration_shows_up_in_the_adoption_filter() {
    let dir = TempDir::new().unwrap();

    patas(&dir)
        .args(["register", "--animal", "Mimi;cat;female", "--ownerless"])
        .assert()
        .success();

    patas(&dir)
        .args(["animals", "list", "--adoption"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mimi"))
        .stdout(predicate::str::contains("No owner (Up for adoption)"));
}

#[test]
fn invalid_customer_name_fails_with_a_field_message() {
    let dir = TempDir::new().unwrap();

    patas(&dir)
        .args(["register", "--customer", "A1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name must have at least 3 letters"));

    // Nothing was written.
    patas(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total customers: 0"));
}

#[test]
fn duplicate_name_is_rejected_case_insensitively() {
    let dir = TempDir::new().unwrap();

    patas(&dir)
        .args(["register", "--customer", "Ana Silva"])
        .assert()
        .success();

    patas(&dir)
        .args(["register", "--customer", "ana silva"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name already registered"));
}

#[test]
fn deleting_a_customer_frees_its_animals_for_adoption() {
    let dir = TempDir::new().unwrap();

    patas(&dir)
        .args([
            "register",
            "--customer",
            "Ana Silva",
            "--animal",
            "Rex;dog;male",
        ])
        .assert()
        .success();

    patas(&dir)
        .args(["customers", "delete", "Ana Silva", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer deleted"));

    patas(&dir)
        .args(["animals", "list", "--adoption"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex"));
}

#[test]
fn appointments_are_booked_against_list_positions() {
    let dir = TempDir::new().unwrap();

    patas(&dir)
        .args(["register", "--animal", "Rex;dog;male", "--ownerless"])
        .assert()
        .success();

    patas(&dir)
        .args([
            "appointments",
            "add",
            "1",
            "--date",
            "14/03/2026",
            "--time",
            "09:30",
            "--details",
            "Vaccination",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("14/03/2026 09:30"));

    patas(&dir)
        .args(["appointments", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vaccination"));
}

#[test]
fn product_log_does_not_survive_the_process() {
    let dir = TempDir::new().unwrap();

    patas(&dir)
        .args(["products", "add", "Dog shampoo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dog shampoo"));

    // A new invocation starts with an empty log.
    patas(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total products: 0"));
}

#[test]
fn employee_totals_are_part_of_the_report() {
    let dir = TempDir::new().unwrap();

    patas(&dir)
        .args(["employees", "add", "Carla Mendes;;;12345678901"])
        .assert()
        .success();

    patas(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total employees: 1"));
}
