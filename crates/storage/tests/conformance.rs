//! Runs the `StudentService` conformance suite against the in-memory backend.

use roster_storage::conformance::run_conformance_suite;
use roster_storage::InMemoryStudentService;

#[test]
fn in_memory_service_passes_conformance() {
    let report = run_conformance_suite(InMemoryStudentService::new);
    assert_eq!(report.failed, 0, "{report}");
    assert!(report.total > 0);
}
