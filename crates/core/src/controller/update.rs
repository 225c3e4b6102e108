use std::fmt::Display;
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
    /// Re-fetch a student and prompt for every mutable field.
    ///
    /// Each field must be typed again; there is no keep-current shortcut.
    /// An unknown id ends the flow before any field prompt.
    pub fn update_student(&mut self) -> Option<StatusCode> {
        let kind = OperationKind::Update;
        match self.try_update_student() {
            Ok(status) => Some(self.finish(kind, status)),
            Err(err) => {
                self.abort(kind, err);
                None
            }
        }
    }

    fn try_update_student(&mut self) -> Result<StatusCode, ControllerError> {
        self.console.line("***UPDATE STUDENT***")?;
        let id: i32 = self.console.prompt_parse("Enter Student ID : ", "id")?;

        let Some(mut student) = self.service.find_by_id(id)? else {
            return Ok(StatusCode::NotFound);
        };

        student.name = self
            .console
            .prompt(&with_current("Student Name", &student.name))?;
        student.dept = self
            .console
            .prompt(&with_current("Student Dept", &student.dept))?;
        student.score = self
            .console
            .prompt_parse(&with_current("Student CGPA", student.score), "score")?;
        student.email = self
            .console
            .prompt(&with_current("Student Email", &student.email))?;
        student.mobile = self
            .console
            .prompt(&with_current("Student Mobile", &student.mobile))?;

        if !self.check(&student)? {
            return Ok(StatusCode::Failed);
        }
        Ok(self.service.update(student))
    }
}

fn with_current(label: &str, current: impl Display) -> String {
    format!("{:<50} : ", format!("{} [ {} ]", label, current))
}
