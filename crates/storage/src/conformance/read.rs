use super::{ids, make_student, TestResult};
use crate::StudentService;

pub(super) fn run_read_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: StudentService,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "read",
            "find_by_id_missing_is_none",
            find_by_id_missing_is_none(factory),
        ),
        TestResult::from_result(
            "read",
            "find_by_name_returns_all_matches",
            find_by_name_returns_all_matches(factory),
        ),
        TestResult::from_result(
            "read",
            "find_by_name_unmatched_is_empty",
            find_by_name_unmatched_is_empty(factory),
        ),
        TestResult::from_result(
            "read",
            "find_by_dept_returns_all_matches",
            find_by_dept_returns_all_matches(factory),
        ),
        TestResult::from_result(
            "read",
            "find_by_dept_on_empty_store_is_empty",
            find_by_dept_on_empty_store_is_empty(factory),
        ),
    ]
}

fn find_by_id_missing_is_none<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let s = factory();
    match s.find_by_id(999) {
        Ok(None) => Ok(()),
        other => Err(format!("expected Ok(None), got {:?}", other)),
    }
}

fn find_by_name_returns_all_matches<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(4, "Kiran", "CSE"));
    s.create(make_student(2, "Kiran", "ECE"));
    s.create(make_student(3, "Latha", "CSE"));
    let mut found = ids(&s.find_by_name("Kiran").map_err(|e| e.to_string())?);
    found.sort_unstable();
    if found != vec![2, 4] {
        return Err(format!("expected ids [2, 4], got {:?}", found));
    }
    Ok(())
}

fn find_by_name_unmatched_is_empty<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(1, "Kiran", "CSE"));
    let found = s.find_by_name("Nobody").map_err(|e| e.to_string())?;
    if !found.is_empty() {
        return Err(format!("expected no matches, got {:?}", ids(&found)));
    }
    Ok(())
}

fn find_by_dept_returns_all_matches<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut s = factory();
    s.create(make_student(1, "A", "CSE"));
    s.create(make_student(2, "B", "MECH"));
    s.create(make_student(3, "C", "CSE"));
    let mut found = ids(&s.find_by_dept("CSE").map_err(|e| e.to_string())?);
    found.sort_unstable();
    if found != vec![1, 3] {
        return Err(format!("expected ids [1, 3], got {:?}", found));
    }
    Ok(())
}

fn find_by_dept_on_empty_store_is_empty<S, F>(factory: &F) -> Result<(), String>
where
    S: StudentService,
    F: Fn() -> S,
{
    let s = factory();
    let found = s.find_by_dept("CSE").map_err(|e| e.to_string())?;
    if !found.is_empty() {
        return Err(format!("expected no matches, got {:?}", ids(&found)));
    }
    Ok(())
}
