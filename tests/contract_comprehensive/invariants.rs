//! Property Tests
//!
//! Random operation sequences against a model map of live records.

use std::collections::BTreeMap;

use proptest::prelude::*;
use student_ledger::Student;

use crate::{create, list, read, setup};

#[derive(Debug, Clone)]
enum Op {
    Create(Student),
    Update(Student),
    Delete(String),
    Init,
}

fn key() -> impl Strategy<Value = String> {
    prop_oneof![Just("1".to_string()), Just("2".to_string()), "[a-c]{1,2}"]
}

fn student() -> impl Strategy<Value = Student> {
    (key(), "\\PC{0,10}", "[A-Za-z ]{0,10}", -5i64..120, "[A-Za-z]{0,8}")
        .prop_map(|(id, name, surname, age, program)| Student::new(id, name, surname, age, program))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => student().prop_map(Op::Create),
        2 => student().prop_map(Op::Update),
        2 => key().prop_map(Op::Delete),
        1 => Just(Op::Init),
    ]
}

proptest! {
    #[test]
    fn operations_match_model(ops in prop::collection::vec(op(), 0..24)) {
        let (ledger, contract) = setup();
        let mut model: BTreeMap<String, Student> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Create(s) => {
                    create(&ledger, &contract, &s).unwrap();
                    model.insert(s.id.clone(), s);
                }
                Op::Update(s) => {
                    ledger
                        .submit(|ctx| contract.update_student(ctx, &s.id, &s.name, &s.surname, s.age, &s.program))
                        .unwrap();
                    model.insert(s.id.clone(), s);
                }
                Op::Delete(id) => {
                    ledger.submit(|ctx| contract.delete_student(ctx, &id)).unwrap();
                    model.remove(&id);
                }
                Op::Init => {
                    ledger.submit(|ctx| contract.init_ledger(ctx)).unwrap();
                    for seed in Student::seed_records() {
                        model.insert(seed.id.clone(), seed);
                    }
                }
            }
        }

        let mut listed = list(&ledger, &contract).unwrap();
        listed.sort_by(|a, b| a.id.cmp(&b.id));
        let expected: Vec<Student> = model.values().cloned().collect();
        prop_assert_eq!(listed, expected);

        for (id, student) in &model {
            prop_assert_eq!(&read(&ledger, &contract, id).unwrap(), student);
        }
    }
}
