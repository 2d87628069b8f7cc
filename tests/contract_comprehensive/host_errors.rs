//! Host Error Propagation Tests
//!
//! Every host failure must reach the caller with the host's message intact.

use student_ledger::StateError;

use crate::*;

#[test]
fn test_read_fetch_error_is_state_access() {
    let (ledger, contract) = seeded();
    ledger.inject_fault(Fault::new(FaultOp::Get, "peer connection reset"));

    let err = read(&ledger, &contract, "1").unwrap_err();
    assert!(err.is_state_access());
    assert!(!err.is_not_found());
    assert_eq!(err.to_string(), "peer connection reset");
}

#[test]
fn test_create_write_error_is_verbatim() {
    let (ledger, contract) = setup();
    ledger.inject_fault(Fault::new(FaultOp::Put, "state database is read-only"));

    let err = create(&ledger, &contract, &sample_students()[0]).unwrap_err();
    assert_eq!(
        err,
        Error::StateAccess(StateError::new("state database is read-only"))
    );
}

#[test]
fn test_update_write_error() {
    let (ledger, contract) = seeded();
    ledger.inject_fault(Fault::on_key(FaultOp::Put, "2", "conflict"));

    let err = ledger
        .submit(|ctx| contract.update_student(ctx, "2", "A", "B", 1, "C"))
        .unwrap_err();
    assert_eq!(err.to_string(), "conflict");

    ledger.clear_faults();
    assert_eq!(read(&ledger, &contract, "2").unwrap().name, "Ana");
}

#[test]
fn test_delete_error() {
    let (ledger, contract) = seeded();
    ledger.inject_fault(Fault::new(FaultOp::Delete, "delete not permitted"));

    let err = ledger
        .submit(|ctx| contract.delete_student(ctx, "1"))
        .unwrap_err();
    assert_eq!(err.error_code(), "StateAccess");
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_query_error() {
    let (ledger, contract) = seeded();
    ledger.inject_fault(Fault::new(FaultOp::Query, "rich queries unsupported on LevelDB"));

    let err = list(&ledger, &contract).unwrap_err();
    assert_eq!(err.to_string(), "rich queries unsupported on LevelDB");
}

#[test]
fn test_iterator_error_mid_stream() {
    let (ledger, contract) = seeded();
    ledger.inject_fault(Fault::on_key(FaultOp::QueryNext, "2", "iterator expired"));

    let err = list(&ledger, &contract).unwrap_err();
    assert_eq!(err, Error::StateAccess(StateError::new("iterator expired")));
}

#[test]
fn test_host_error_in_response_envelope() {
    let (ledger, contract) = seeded();
    ledger.inject_fault(Fault::new(FaultOp::Get, "endorser offline"));

    let txn = ledger.begin();
    let response = contract.invoke(&txn, &Invocation::new("ReadStudent", ["1"]));
    assert_eq!(response.status, Response::ERROR);
    assert_eq!(response.message, "endorser offline");

    let wire: student_ledger::WireError = response.payload_json().unwrap();
    assert_eq!(wire.code, "StateAccess");
    assert_eq!(wire.details.unwrap()["host"], "endorser offline");
}
