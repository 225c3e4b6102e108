//! Conformance test suite for `StudentService` implementations.
//!
//! This module provides a backend-agnostic test suite that any
//! `StudentService` implementation can run to verify it honours the status
//! contract the roster console relies on. The suite covers:
//!
//! - **Create**: insertion, duplicate detection
//! - **Read**: lookups by id, name and department, empty results
//! - **Update**: replacement, missing ids
//! - **Delete**: removal, repeated removal
//!
//! # Usage
//!
//! Backend crates call [`run_conformance_suite`] with a factory function that
//! creates a fresh, empty service for each test:
//!
//! ```ignore
//! use roster_storage::conformance::run_conformance_suite;
//! use roster_storage::InMemoryStudentService;
//!
//! #[test]
//! fn in_memory_conformance() {
//!     let report = run_conformance_suite(InMemoryStudentService::new);
//!     assert!(report.failed == 0, "{report}");
//! }
//! ```

mod create;
mod delete;
mod read;
mod update;

use std::fmt;

use crate::record::Student;
use crate::StudentService;

/// Result of a single conformance test.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test category (e.g. "create", "read", "delete").
    pub category: String,
    /// Test name (e.g. "create_then_find_by_id").
    pub name: String,
    /// Whether the test passed.
    pub passed: bool,
    /// Error message if the test failed.
    pub message: Option<String>,
}

impl TestResult {
    fn pass(category: &str, name: &str) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            passed: true,
            message: None,
        }
    }

    fn fail(category: &str, name: &str, msg: String) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            passed: false,
            message: Some(msg),
        }
    }

    fn from_result(category: &str, name: &str, result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::pass(category, name),
            Err(msg) => Self::fail(category, name, msg),
        }
    }
}

/// Aggregated report from a full conformance suite run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Conformance: {}/{} passed ({} failed)",
            self.passed, self.total, self.failed
        )?;
        for r in &self.results {
            if !r.passed {
                writeln!(
                    f,
                    "  FAIL [{}/{}]: {}",
                    r.category,
                    r.name,
                    r.message.as_deref().unwrap_or("(no message)")
                )?;
            }
        }
        Ok(())
    }
}

/// Run the full conformance suite against a service implementation.
///
/// The `factory` function is called once per test to create a fresh, empty
/// service, ensuring test isolation.
pub fn run_conformance_suite<S, F>(factory: F) -> ConformanceReport
where
    S: StudentService,
    F: Fn() -> S,
{
    let mut results = Vec::new();

    results.extend(create::run_create_tests(&factory));
    results.extend(read::run_read_tests(&factory));
    results.extend(update::run_update_tests(&factory));
    results.extend(delete::run_delete_tests(&factory));

    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    ConformanceReport {
        results,
        passed,
        failed: total - passed,
        total,
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn make_student(id: i32, name: &str, dept: &str) -> Student {
    Student {
        id,
        name: name.to_string(),
        dept: dept.to_string(),
        score: 7.5,
        email: format!("student{}@example.edu", id),
        mobile: "9000000000".to_string(),
    }
}

fn ids(students: &[Student]) -> Vec<i32> {
    students.iter().map(|s| s.id).collect()
}
