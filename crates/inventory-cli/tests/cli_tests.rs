use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary data directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with plain output, a fixed locale and
/// the given data directory
fn inv_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inv").expect("Failed to find inv binary");
    cmd.env("LC_ALL", "en_US.UTF-8")
        .env_remove("INVENTORY_DATA_DIR")
        .arg("--no-color")
        .arg("--data-dir")
        .arg(temp_dir.path());
    cmd
}

#[test]
fn test_cli_add_item() {
    let temp_dir = create_cli_test_environment();

    inv_cmd(&temp_dir)
        .args(["add", "Hammer", "19.99", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created item with ID: 1"))
        .stdout(predicate::str::contains("### 1. Hammer"))
        .stdout(predicate::str::contains("- Price: $19.99"))
        .stdout(predicate::str::contains("- Quantity: 3"));

    assert!(temp_dir.path().join("item_database").exists());
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();

    inv_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No items in inventory."));
}

#[test]
fn test_cli_list_sorted() {
    let temp_dir = create_cli_test_environment();
    inv_cmd(&temp_dir).args(["add", "Wrench", "9", "1"]).assert().success();
    inv_cmd(&temp_dir).args(["add", "Anvil", "99", "1"]).assert().success();

    let output = inv_cmd(&temp_dir).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let anvil = stdout.find("Anvil").expect("Anvil listed");
    let wrench = stdout.find("Wrench").expect("Wrench listed");
    assert!(anvil < wrench);
}

#[test]
fn test_cli_show_missing_item_fails() {
    let temp_dir = create_cli_test_environment();

    inv_cmd(&temp_dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item with ID 42 not found"));
}

#[test]
fn test_cli_update_item() {
    let temp_dir = create_cli_test_environment();
    inv_cmd(&temp_dir).args(["add", "Hammer", "10", "3"]).assert().success();

    inv_cmd(&temp_dir)
        .args(["update", "1", "--price", "12.5", "--name", "Claw Hammer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated item with ID: 1"))
        .stdout(predicate::str::contains("Price set to 12.5"))
        .stdout(predicate::str::contains("### 1. Claw Hammer"))
        .stdout(predicate::str::contains("$12.50"));
}

#[test]
fn test_cli_sell_until_out_of_stock() {
    let temp_dir = create_cli_test_environment();
    inv_cmd(&temp_dir).args(["add", "Hammer", "10", "1"]).assert().success();

    inv_cmd(&temp_dir)
        .args(["sell", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 left"))
        .stdout(predicate::str::contains("(out of stock)"));

    inv_cmd(&temp_dir)
        .args(["sell", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of stock"));
}

#[test]
fn test_cli_remove_item() {
    let temp_dir = create_cli_test_environment();
    inv_cmd(&temp_dir).args(["add", "Hammer", "10", "1"]).assert().success();

    inv_cmd(&temp_dir)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed item with ID: 1 (Hammer)"));

    inv_cmd(&temp_dir).args(["show", "1"]).assert().failure();
}

#[test]
fn test_cli_rejects_invalid_input() {
    let temp_dir = create_cli_test_environment();

    inv_cmd(&temp_dir)
        .args(["add", "Hammer", "10", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity"));
}

#[test]
fn test_cli_json_output() {
    let temp_dir = create_cli_test_environment();
    inv_cmd(&temp_dir).args(["add", "Hammer", "19.99", "3"]).assert().success();

    let output = inv_cmd(&temp_dir).args(["--json", "list"]).assert().success();
    let items: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(
        items,
        serde_json::json!([{ "id": 1, "name": "Hammer", "price": 19.99, "quantity": 3 }])
    );
}
