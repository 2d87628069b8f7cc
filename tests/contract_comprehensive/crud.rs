//! Create / Read / Update / Delete Tests

use crate::*;

// =============================================================================
// CREATE / READ
// =============================================================================

#[test]
fn test_create_then_read_returns_same_fields() {
    let (ledger, contract) = setup();

    for student in sample_students() {
        create(&ledger, &contract, &student).unwrap();
        assert_eq!(read(&ledger, &contract, &student.id).unwrap(), student);
    }
}

#[test]
fn test_create_at_existing_key_overwrites_silently() {
    let (ledger, contract) = seeded();

    let replacement = Student::new("1", "Pedro", "Sánchez", 40, "Historia");
    create(&ledger, &contract, &replacement).unwrap();

    assert_eq!(read(&ledger, &contract, "1").unwrap(), replacement);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_read_missing_is_not_found() {
    let (ledger, contract) = setup();

    let err = read(&ledger, &contract, "nobody").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err, Error::NotFound { id: "nobody".into() });
}

#[test]
fn test_read_does_not_see_uncommitted_create() {
    let (ledger, contract) = setup();

    let txn = ledger.begin();
    contract
        .create_student(&txn, "3", "Luis", "Gómez", 23, "Derecho")
        .unwrap();
    assert!(contract.read_student(&txn, "3").unwrap_err().is_not_found());
    txn.commit();

    assert_eq!(read(&ledger, &contract, "3").unwrap().name, "Luis");
}

// =============================================================================
// UPDATE
// =============================================================================

#[test]
fn test_update_replaces_all_fields_and_keeps_key() {
    let (ledger, contract) = seeded();

    ledger
        .submit(|ctx| contract.update_student(ctx, "2", "Ana María", "García Ruiz", 23, "Enfermería"))
        .unwrap();

    let updated = read(&ledger, &contract, "2").unwrap();
    assert_eq!(
        updated,
        Student::new("2", "Ana María", "García Ruiz", 23, "Enfermería")
    );
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_update_missing_key_creates_it() {
    let (ledger, contract) = setup();

    ledger
        .submit(|ctx| contract.update_student(ctx, "7", "Eva", "Ruiz", 30, "Física"))
        .unwrap();

    assert_eq!(read(&ledger, &contract, "7").unwrap().surname, "Ruiz");
}

#[test]
fn test_update_does_not_merge_empty_fields() {
    let (ledger, contract) = seeded();

    ledger
        .submit(|ctx| contract.update_student(ctx, "1", "", "", 0, ""))
        .unwrap();

    assert_eq!(
        read(&ledger, &contract, "1").unwrap(),
        Student::new("1", "", "", 0, "")
    );
}

// =============================================================================
// DELETE
// =============================================================================

#[test]
fn test_delete_then_read_is_not_found() {
    let (ledger, contract) = seeded();

    ledger.submit(|ctx| contract.delete_student(ctx, "1")).unwrap();

    assert!(read(&ledger, &contract, "1").unwrap_err().is_not_found());
    assert!(read(&ledger, &contract, "2").is_ok());
}

#[test]
fn test_delete_missing_key_succeeds() {
    let (ledger, contract) = setup();

    ledger
        .submit(|ctx| contract.delete_student(ctx, "ghost"))
        .unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn test_delete_then_create_again() {
    let (ledger, contract) = seeded();

    ledger.submit(|ctx| contract.delete_student(ctx, "2")).unwrap();
    let back = Student::new("2", "Ana", "García", 25, "Odontología");
    create(&ledger, &contract, &back).unwrap();

    assert_eq!(read(&ledger, &contract, "2").unwrap(), back);
}
