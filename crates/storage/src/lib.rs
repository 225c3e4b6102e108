pub mod conformance;
mod error;
mod memory;
mod record;
mod traits;

pub use error::StorageError;
pub use memory::{InMemoryStudentService, SeedReport};
pub use record::{StatusCode, Student};
pub use traits::StudentService;
