use super::{make_student, TestResult};
use crate::{StatusCode, StudentService};

pub(super) fn run_create_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: StudentService,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "create",
            "create_returns_success",
            create_returns_success(factory),
        ),
        TestResult::from_result(
            "create",
            "create_then_find_by_id",
            create_then_find_by_id(factory),
        ),
        TestResult::from_result(
            "create",
            "duplicate_create_returns_already_exists",
            duplicate_create_returns_already_exists(factory),
        ),
        TestResult::from_result(
            "create",
            "duplicate_create_keeps_original",
            duplicate_create_keeps_original(factory),
        ),
    ]
}

fn create_returns_success<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    match s.create(make_student(1, "Asha", "CSE")) {
        StatusCode::Success => Ok(()),
        other => Err(format!("expected Success, got {:?}", other)),
    }
}

/// A created student is readable with every field intact.
fn create_then_find_by_id<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    let student = make_student(11, "Ravi", "ECE");
    s.create(student.clone());
    let found = s
        .find_by_id(11)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "created student not found".to_string())?;
    if found != student {
        return Err(format!("expected {:?}, got {:?}", student, found));
    }
    Ok(())
}

fn duplicate_create_returns_already_exists<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(2, "Meera", "CSE"));
    match s.create(make_student(2, "Someone Else", "MECH")) {
        StatusCode::AlreadyExists => Ok(()),
        other => Err(format!("expected AlreadyExists, got {:?}", other)),
    }
}

fn duplicate_create_keeps_original<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(3, "Original", "CSE"));
    s.create(make_student(3, "Intruder", "MECH"));
    let found = s.find_by_id(3).map_err(|e| e.to_string())?;
    match found {
        Some(st) if st.name == "Original" => Ok(()),
        other => Err(format!("expected original record, got {:?}", other)),
    }
}
