use std::io::{BufRead, Write};

use roster_storage::{StatusCode, Student, StudentService};

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
    /// Prompt for a new student, validate it, and hand it to `create`.
    pub fn add_student(&mut self) -> Option<StatusCode> {
        let kind = OperationKind::Create;
        match self.try_add_student() {
            Ok(status) => Some(self.finish(kind, status)),
            Err(err) => {
                self.abort(kind, err);
                None
            }
        }
    }

    fn try_add_student(&mut self) -> Result<StatusCode, ControllerError> {
        self.console.line("***ADD STUDENT***")?;
        let student = self.read_student()?;
        tracing::debug!(id = student.id, "read new student");

        if !self.check(&student)? {
            return Ok(StatusCode::Failed);
        }
        Ok(self.service.create(student))
    }

    fn read_student(&mut self) -> Result<Student, ControllerError> {
        self.console.line("Enter Student Details:")?;
        let name = self.console.prompt("Student Name    : ")?;
        let id = self.console.prompt_parse("Student ID      : ", "id")?;
        let dept = self.console.prompt("Student Dept    : ")?;
        let score = self.console.prompt_parse("Student CGPA    : ", "score")?;
        let email = self.console.prompt("Student Email   : ")?;
        let mobile = self.console.prompt("Student Mobile  : ")?;

        Ok(Student {
            id,
            name,
            dept,
            score,
            email,
            mobile,
        })
    }
}
