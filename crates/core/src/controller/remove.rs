use std::io::{BufRead, Write};

use roster_storage::{StatusCode, StudentService};

use super::StudentController;
use crate::error::ControllerError;
use crate::outcome::OperationKind;
use crate::validator::Validator;

impl<S, V, R, W> StudentController<S, V, R, W>
where
    S: StudentService,
    V: Validator,
    R: BufRead,
    W: Write,
{
    /// Delete by identifier. No validation step.
    pub fn remove_student(&mut self) -> Option<StatusCode> {
        let kind = OperationKind::Delete;
        match self.try_remove_student() {
            Ok(status) => Some(self.finish(kind, status)),
            Err(err) => {
                self.abort(kind, err);
                None
            }
        }
    }

    fn try_remove_student(&mut self) -> Result<StatusCode, ControllerError> {
        self.console.line("***REMOVE STUDENT***")?;
        let id: i32 = self.console.prompt_parse("Enter Student ID : ", "id")?;
        Ok(self.service.delete(id))
    }
}
