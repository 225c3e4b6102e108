use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::record::{StatusCode, Student};
use crate::traits::StudentService;

/// A `StudentService` backed by a `BTreeMap` keyed on student id.
///
/// Name and department lookups are exact but case-insensitive, and results
/// come back in id order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStudentService {
    students: BTreeMap<i32, Student>,
}

/// What happened while loading seed data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub loaded: usize,
    /// Ids that were already present and therefore not loaded.
    pub skipped: Vec<i32>,
    /// Ids of records the caller's check rejected.
    pub invalid: Vec<i32>,
}

impl InMemoryStudentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Load a JSON array of students.
    ///
    /// Duplicate ids (against the store or earlier in the same array) are
    /// skipped and reported, never overwritten.
    pub fn load_json(&mut self, json: &str) -> Result<SeedReport, StorageError> {
        self.load_json_with(json, |_| true)
    }

    /// Like [`load_json`](Self::load_json), but only records for which
    /// `admit` returns true are inserted. The rest land in
    /// [`SeedReport::invalid`].
    pub fn load_json_with<F>(
        &mut self,
        json: &str,
        mut admit: F,
    ) -> Result<SeedReport, StorageError>
    where
        F: FnMut(&Student) -> bool,
    {
        let students: Vec<Student> = serde_json::from_str(json)?;
        let mut report = SeedReport::default();
        for student in students {
            let id = student.id;
            if !admit(&student) {
                report.invalid.push(id);
                continue;
            }
            match self.create(student) {
                StatusCode::Success => report.loaded += 1,
                _ => report.skipped.push(id),
            }
        }
        Ok(report)
    }

    fn matching<P>(&self, pred: P) -> Vec<Student>
    where
        P: Fn(&Student) -> bool,
    {
        self.students.values().filter(|s| pred(s)).cloned().collect()
    }
}

impl StudentService for InMemoryStudentService {
    fn create(&mut self, student: Student) -> StatusCode {
        if self.students.contains_key(&student.id) {
            tracing::debug!(id = student.id, "create rejected: id already present");
            return StatusCode::AlreadyExists;
        }
        self.students.insert(student.id, student);
        StatusCode::Success
    }

    fn update(&mut self, student: Student) -> StatusCode {
        match self.students.get_mut(&student.id) {
            Some(slot) => {
                *slot = student;
                StatusCode::Success
            }
            None => StatusCode::NotFound,
        }
    }

    fn delete(&mut self, id: i32) -> StatusCode {
        match self.students.remove(&id) {
            Some(_) => StatusCode::Success,
            None => StatusCode::NotFound,
        }
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Student>, StorageError> {
        Ok(self.students.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<Student>, StorageError> {
        Ok(self.matching(|s| s.name.eq_ignore_ascii_case(name)))
    }

    fn find_by_dept(&self, dept: &str) -> Result<Vec<Student>, StorageError> {
        Ok(self.matching(|s| s.dept.eq_ignore_ascii_case(dept)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i32, name: &str, dept: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            dept: dept.to_string(),
            score: 8.5,
            email: format!("s{}@college.edu", id),
            mobile: "9876543210".to_string(),
        }
    }

    #[test]
    fn name_lookup_ignores_case_and_orders_by_id() {
        let mut svc = InMemoryStudentService::new();
        svc.create(student(7, "Asha Rao", "CSE"));
        svc.create(student(3, "asha rao", "ECE"));
        svc.create(student(5, "Vikram", "CSE"));

        let hits = svc.find_by_name("ASHA RAO").unwrap();
        let ids: Vec<i32> = hits.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn load_json_skips_duplicates() {
        let mut svc = InMemoryStudentService::new();
        svc.create(student(1, "Existing", "CSE"));

        let seed = serde_json::to_string(&vec![
            student(1, "Dup", "CSE"),
            student(2, "Fresh", "MECH"),
            student(2, "Dup Again", "MECH"),
        ])
        .unwrap();
        let report = svc.load_json(&seed).unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, vec![1, 2]);
        assert_eq!(svc.find_by_id(1).unwrap().unwrap().name, "Existing");
        assert_eq!(svc.len(), 2);
    }

    #[test]
    fn load_json_with_keeps_rejected_records_out() {
        let mut svc = InMemoryStudentService::new();
        let seed = serde_json::to_string(&vec![
            student(1, "Asha", "CSE"),
            student(-3, "Negative", "CSE"),
            student(4, "Vikram", "MECH"),
        ])
        .unwrap();

        let report = svc.load_json_with(&seed, |s| s.id > 0 && s.dept != "MECH").unwrap();

        assert_eq!(report.loaded, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(report.invalid, vec![-3, 4]);
        assert_eq!(svc.len(), 1);
        assert!(svc.find_by_id(-3).unwrap().is_none());
    }

    #[test]
    fn load_json_rejects_malformed_input() {
        let mut svc = InMemoryStudentService::new();
        let err = svc.load_json("{\"id\": 1}").unwrap_err();
        assert!(matches!(err, StorageError::Seed(_)));
        assert!(svc.is_empty());
    }
}
