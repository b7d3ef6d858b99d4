//! End-to-end tests for the `contapro` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contapro(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contapro").unwrap();
    cmd.env("CONTAPRO_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn first_run_lists_seed_clients() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tech Solutions LTDA"))
        .stdout(predicate::str::contains("Padaria do João"));
}

#[test]
fn paying_a_receivable_credits_its_bank_once() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args(["receivable", "pay", "rec-00000002", "--date", "2023-11-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as paid on 08/11/2023"))
        .stdout(predicate::str::contains("Oteropay"));

    contapro(&dir)
        .args(["receivable", "pay", "rec-00000002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already paid on 08/11/2023"));

    contapro(&dir)
        .args(["bank", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 8.800,00"))
        .stdout(predicate::str::contains("Saldo total: R$ 23.800,00"));
}

#[test]
fn paying_a_payable_debits_its_bank() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args(["pay", "pay", "pay-00000003"])
        .assert()
        .success();

    contapro(&dir)
        .args(["bank", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 7.850,00"));
}

#[test]
fn unknown_receivable_fails() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args(["receivable", "pay", "rec-ffffffff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Receivable not found"));
}

#[test]
fn delete_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args(["client", "delete", "Padaria do João"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --yes"));

    contapro(&dir)
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Padaria do João"));

    contapro(&dir)
        .args(["client", "delete", "Padaria do João", "--yes"])
        .assert()
        .success();

    contapro(&dir)
        .args(["client", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Padaria do João").not());
}

#[test]
fn employee_salary_change_flows_into_open_payroll() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args(["employee", "edit", "Ana Silva", "--salary", "5500"])
        .assert()
        .success();

    contapro(&dir)
        .args(["payroll", "list", "--period", "2023-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 6.300,00"));

    contapro(&dir)
        .args(["payroll", "list", "--period", "2023-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 5.800,00"));
}

#[test]
fn ledger_report_covers_the_window() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args([
            "report", "ledger", "--from", "2023-10-01", "--to", "2023-10-31", "--filter", "income",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Receitas:"))
        .stdout(predicate::str::contains("R$ 4.800,00"));
}

#[test]
fn cnab_export_writes_file_and_bumps_sequence() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("folha.txt");

    contapro(&dir)
        .args(["payroll", "export-cnab", "2023-10", "--payment-date", "2023-11-05", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 credits"));

    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.split("\r\n").collect();
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|line| line.len() == 240));

    contapro(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next CNAB file:    2"));
}

#[test]
fn csv_export_has_bom_and_header() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("receivables.csv");

    contapro(&dir)
        .args(["export", "csv", "receivables"])
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with('\u{feff}'));
    assert_eq!(contents.split("\r\n").count(), 6);
}

#[test]
fn ephemeral_runs_leave_no_data() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args(["--ephemeral", "receivable", "pay", "rec-00000002"])
        .assert()
        .success();

    assert!(!dir.path().join("data").join("contapro_receivables.json").exists());
}

#[test]
fn ephemeral_cnab_export_keeps_settings_in_memory() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("folha.txt");

    contapro(&dir)
        .args(["--ephemeral", "payroll", "export-cnab", "2023-10", "--output"])
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
    assert!(!dir.path().join("config.json").exists());

    contapro(&dir)
        .args(["--ephemeral", "config", "set", "--next-sequence", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings not saved"));

    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn closed_payroll_entry_cannot_be_reopened() {
    let dir = TempDir::new().unwrap();

    contapro(&dir)
        .args(["payroll", "close", "--yes"])
        .assert()
        .success();

    contapro(&dir)
        .args(["payroll", "edit", "fol-00000003", "--status", "ABERTA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FECHADA"));
}
