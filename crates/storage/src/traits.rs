use crate::error::StorageError;
use crate::record::{StatusCode, Student};

/// The record service behind the roster console.
///
/// ## Status contract
///
/// | Call     | Possible codes                          |
/// |----------|-----------------------------------------|
/// | `create` | `Success`, `AlreadyExists`, `Failed`    |
/// | `update` | `Success`, `NotFound`, `Failed`         |
/// | `delete` | `Success`, `NotFound`, `Failed`         |
///
/// Reads never report "not found" as an error: a missing id is `Ok(None)`
/// and an unmatched name or department is an empty `Vec`. `Err` is kept for
/// genuine faults in the backend.
///
/// ## Ownership
///
/// The service owns stored records. Callers hand over a `Student` by value on
/// `create`/`update` and receive clones from reads.
pub trait StudentService {
    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Store a new student under `student.id`.
    ///
    /// Returns `AlreadyExists` if the id is taken.
    fn create(&mut self, student: Student) -> StatusCode;

    /// Replace the stored student with the same id.
    fn update(&mut self, student: Student) -> StatusCode;

    /// Remove the student with `id`.
    fn delete(&mut self, id: i32) -> StatusCode;

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Exact lookup by identifier.
    fn find_by_id(&self, id: i32) -> Result<Option<Student>, StorageError>;

    /// All students whose name matches `name`, ordered by id.
    fn find_by_name(&self, name: &str) -> Result<Vec<Student>, StorageError>;

    /// All students in department `dept`, ordered by id.
    fn find_by_dept(&self, dept: &str) -> Result<Vec<Student>, StorageError>;
}
