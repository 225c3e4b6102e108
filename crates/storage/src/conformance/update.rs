use super::{make_student, TestResult};
use crate::{StatusCode, StudentService};

pub(super) fn run_update_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: StudentService,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "update",
            "update_replaces_fields",
            update_replaces_fields(factory),
        ),
        TestResult::from_result(
            "update",
            "update_missing_returns_not_found",
            update_missing_returns_not_found(factory),
        ),
        TestResult::from_result(
            "update",
            "update_missing_does_not_insert",
            update_missing_does_not_insert(factory),
        ),
    ]
}

fn update_replaces_fields<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(5, "Old Name", "CSE"));
    let mut changed = make_student(5, "New Name", "EEE");
    changed.score = 9.25;
    match s.update(changed.clone()) {
        StatusCode::Success => {}
        other => return Err(format!("expected Success, got {:?}", other)),
    }
    let found = s.find_by_id(5).map_err(|e| e.to_string())?;
    if found.as_ref() != Some(&changed) {
        return Err(format!("expected {:?}, got {:?}", changed, found));
    }
    Ok(())
}

fn update_missing_returns_not_found<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    match s.update(make_student(42, "Ghost", "CSE")) {
        StatusCode::NotFound => Ok(()),
        other => Err(format!("expected NotFound, got {:?}", other)),
    }
}

fn update_missing_does_not_insert<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.update(make_student(42, "Ghost", "CSE"));
    match s.find_by_id(42) {
        Ok(None) => Ok(()),
        other => Err(format!("expected Ok(None) after failed update, got {:?}", other)),
    }
}
