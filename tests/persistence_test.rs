#![cfg(feature = "storage-rocksdb")]

mod common;

use assert_cmd::cargo_bin;
use common::{create_body, create_event, update_event, write_events};
use pagamentos::domain::ports::PaymentStore;
use pagamentos::infrastructure::rocksdb::RocksDBStore;
use std::process::Command;
use tempfile::tempdir;

#[tokio::test]
async fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    // 1. First run: create the payment
    let first = dir.path().join("first.jsonl");
    write_events(&first, &[create_event(&create_body(1))]).unwrap();

    let output1 = Command::new(cargo_bin!("pagamentos"))
        .arg(&first)
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output1.status.success());
    assert!(String::from_utf8_lossy(&output1.stdout).contains("Pagamento criado com sucesso"));

    // 2. Second run: update the payment created by the first run
    let second = dir.path().join("second.jsonl");
    write_events(&second, &[update_event("1", "pago")]).unwrap();

    let output2 = Command::new(cargo_bin!("pagamentos"))
        .arg(&second)
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output2.status.success());
    assert!(String::from_utf8_lossy(&output2.stdout).contains("Status atualizado com sucesso"));

    let store = RocksDBStore::open(&db_path, "tabela_pagamentos").unwrap();
    let order = store.get(1).await.unwrap().unwrap();
    assert_eq!(order.status, "pago");
    assert_eq!(order.method, "pix");
}

#[test]
fn test_custom_table_is_isolated() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");
    let events = dir.path().join("events.jsonl");
    write_events(&events, &[create_event(&create_body(1))]).unwrap();

    let created = Command::new(cargo_bin!("pagamentos"))
        .arg(&events)
        .arg("--db-path")
        .arg(&db_path)
        .arg("--table")
        .arg("outra_tabela")
        .output()
        .unwrap();
    assert!(created.status.success());

    write_events(&events, &[update_event("1", "pago")]).unwrap();
    let updated = Command::new(cargo_bin!("pagamentos"))
        .arg(&events)
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .unwrap();
    assert!(updated.status.success());
    assert!(String::from_utf8_lossy(&updated.stdout).contains("Pagamento não encontrado"));
}
