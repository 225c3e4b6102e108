use super::{make_student, TestResult};
use crate::{StatusCode, StudentService};

pub(super) fn run_delete_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: StudentService,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "delete",
            "delete_removes_record",
            delete_removes_record(factory),
        ),
        TestResult::from_result(
            "delete",
            "delete_twice_returns_not_found",
            delete_twice_returns_not_found(factory),
        ),
        TestResult::from_result(
            "delete",
            "delete_leaves_other_records",
            delete_leaves_other_records(factory),
        ),
    ]
}

fn delete_removes_record<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(6, "Temp", "CSE"));
    match s.delete(6) {
        StatusCode::Success => {}
        other => return Err(format!("expected Success, got {:?}", other)),
    }
    match s.find_by_id(6) {
        Ok(None) => Ok(()),
        other => Err(format!("expected Ok(None) after delete, got {:?}", other)),
    }
}

/// Removing the same id twice yields Success then NotFound.
fn delete_twice_returns_not_found<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(7, "Twice", "CSE"));
    let first = s.delete(7);
    let second = s.delete(7);
    if (first, second) != (StatusCode::Success, StatusCode::NotFound) {
        return Err(format!(
            "expected (Success, NotFound), got ({:?}, {:?})",
            first, second
        ));
    }
    Ok(())
}

fn delete_leaves_other_records<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(8, "Gone", "CSE"));
    s.create(make_student(9, "Stays", "CSE"));
    s.delete(8);
    match s.find_by_id(9) {
        Ok(Some(_)) => Ok(()),
        other => Err(format!("expected id 9 to remain, got {:?}", other)),
    }
}
