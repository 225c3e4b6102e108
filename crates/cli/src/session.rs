//! Startup wiring for the session's record service.

use std::io;
use std::path::{Path, PathBuf};

use roster_core::Validator;
use roster_storage::{InMemoryStudentService, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("error reading seed file '{}': {source}", path.display())]
    ReadSeed { path: PathBuf, source: io::Error },

    #[error("error loading seed file '{}': {source}", path.display())]
    LoadSeed {
        path: PathBuf,
        source: StorageError,
    },
}

/// Build the in-memory service, loading `seed` first if given.
///
/// Seed records go through `validator` like console input does; rejected
/// ones are logged and left out.
pub fn load_service<V: Validator>(
    seed: Option<&Path>,
    validator: &V,
) -> Result<InMemoryStudentService, SessionError> {
    let mut service = InMemoryStudentService::new();
    let Some(path) = seed else {
        return Ok(service);
    };

    let json = std::fs::read_to_string(path).map_err(|source| SessionError::ReadSeed {
        path: path.to_path_buf(),
        source,
    })?;
    let report = service
        .load_json_with(&json, |student| {
            let validation = validator.validate(student);
            for v in validation.violations() {
                tracing::warn!(
                    id = student.id,
                    field = %v.field,
                    seed = %path.display(),
                    "{}",
                    v.message
                );
            }
            validation.is_valid()
        })
        .map_err(|source| SessionError::LoadSeed {
            path: path.to_path_buf(),
            source,
        })?;

    for &id in &report.skipped {
        tracing::warn!(id, seed = %path.display(), "duplicate student id in seed, skipped");
    }
    for &id in &report.invalid {
        tracing::warn!(id, seed = %path.display(), "invalid student in seed, skipped");
    }
    tracing::info!(loaded = report.loaded, seed = %path.display(), "seed loaded");
    Ok(service)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use roster_core::{StudentValidator, ValidatorConfig};
    use roster_storage::StudentService;

    use super::*;

    fn seed_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn no_seed_starts_empty() {
        let service = load_service(None, &StudentValidator::default()).unwrap();
        assert!(service.is_empty());
    }

    #[test]
    fn seed_file_is_loaded() {
        let file = seed_file(
            r#"[{"id":1,"name":"Asha Rao","dept":"CSE","score":8.5,"email":"asha@college.edu","mobile":"9876543210"}]"#,
        );

        let service = load_service(Some(file.path()), &StudentValidator::default()).unwrap();
        assert_eq!(service.find_by_id(1).unwrap().unwrap().name, "Asha Rao");
    }

    #[test]
    fn missing_seed_file_is_a_read_error() {
        let err = load_service(
            Some(Path::new("/definitely/not/here.json")),
            &StudentValidator::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SessionError::ReadSeed { .. }));
    }

    #[test]
    fn invalid_seed_records_are_skipped() {
        let file = seed_file(
            r#"[
                {"id":1,"name":"Asha Rao","dept":"CSE","score":8.5,"email":"asha@college.edu","mobile":"9876543210"},
                {"id":2,"name":"Ravi","dept":"ECE","score":99,"email":"ravi@college.edu","mobile":"9123456780"},
                {"id":-3,"name":"Neg","dept":"ECE","score":5,"email":"neg@college.edu","mobile":"9123456780"},
                {"id":4,"name":"Meera","dept":"ECE","score":6,"email":"meera@college.edu","mobile":"x"}
            ]"#,
        );

        let service = load_service(Some(file.path()), &StudentValidator::default()).unwrap();

        assert_eq!(service.len(), 1);
        assert!(service.find_by_id(1).unwrap().is_some());
        for id in [2, -3, 4] {
            assert!(service.find_by_id(id).unwrap().is_none(), "id {id} loaded");
        }
    }

    #[test]
    fn seed_validation_uses_configured_score_range() {
        let file = seed_file(
            r#"[{"id":1,"name":"Asha Rao","dept":"CSE","score":3.5,"email":"asha@college.edu","mobile":"9876543210"}]"#,
        );
        let strict = StudentValidator::new(ValidatorConfig::new(5.0, 10.0).unwrap());

        let service = load_service(Some(file.path()), &strict).unwrap();

        assert!(service.is_empty());
    }
}
