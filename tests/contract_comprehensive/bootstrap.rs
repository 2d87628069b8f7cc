//! Ledger Initialization Tests

use crate::*;

#[test]
fn test_init_writes_exactly_the_two_seed_records() {
    let (ledger, contract) = seeded();

    assert_eq!(ledger.len(), 2);
    assert_eq!(
        read(&ledger, &contract, "1").unwrap(),
        Student::new("1", "Juan", "Pérez", 21, "Ingeniería")
    );
    assert_eq!(
        read(&ledger, &contract, "2").unwrap(),
        Student::new("2", "Ana", "García", 22, "Medicina")
    );
}

#[test]
fn test_init_is_one_commit() {
    let (ledger, _) = seeded();

    assert_eq!(ledger.current_version(), 1);
    assert_eq!(ledger.committed("1").unwrap().version, 1);
    assert_eq!(ledger.committed("2").unwrap().version, 1);
}

#[test]
fn test_init_overwrites_modified_seeds() {
    let (ledger, contract) = seeded();
    create(&ledger, &contract, &Student::new("1", "X", "Y", 99, "Z")).unwrap();
    create(&ledger, &contract, &Student::new("3", "Luis", "Gómez", 23, "Derecho")).unwrap();

    ledger.submit(|ctx| contract.init_ledger(ctx)).unwrap();

    assert_eq!(read(&ledger, &contract, "1").unwrap().name, "Juan");
    assert_eq!(ledger.len(), 3);
}

#[test]
fn test_init_failure_commits_nothing() {
    let (ledger, contract) = setup();
    ledger.inject_fault(Fault::on_key(FaultOp::Put, "2", "write quota exceeded"));

    let err = ledger.submit(|ctx| contract.init_ledger(ctx)).unwrap_err();

    assert_eq!(err.error_code(), "Initialization");
    assert_eq!(
        err.to_string(),
        "failed to initialize ledger: write quota exceeded"
    );
    assert!(ledger.is_empty());
    assert_eq!(ledger.current_version(), 0);
}

#[test]
fn test_init_through_router() {
    let (ledger, contract) = setup();

    let txn = ledger.begin();
    let response = contract.invoke(&txn, &Invocation::new("InitLedger", Vec::<String>::new()));
    assert!(response.is_ok());
    txn.commit();

    assert_eq!(list(&ledger, &contract).unwrap().len(), 2);
}
