//! The workflow controller.
//!
//! Each flow collects input, optionally validates, calls the
//! [`StudentService`], and ends in exactly one of two ways:
//!
//! - a terminal outcome: one console summary followed by one publish on the
//!   operation's publisher, or
//! - an abort ([`ControllerError`]): a diagnostic on the console, a log
//!   event, and no publish.
//!
//! Flows return the final [`StatusCode`] (or, for searches, the row count)
//! and `None` when they aborted.

mod add;
mod menu;
mod remove;
mod search;
mod update;


use std::io::{BufRead, Write};

use roster_storage::{StatusCode, Student, StudentService};

use crate::console::Console;
use crate::error::ControllerError;
use crate::events::Publishers;
use crate::outcome::OperationKind;
use crate::validator::Validator;

pub use search::SearchBy;

pub struct StudentController<S, V, R, W> {
    service: S,
    validator: V,
    publishers: Publishers,
    console: Console<R, W>,
}

impl<S, V, R, W> StudentController<S, V, R, W>
where
    S: StudentService,
    V: Validator,
    R: BufRead,
    W: Write,
{
    pub fn new(service: S, validator: V, publishers: Publishers, console: Console<R, W>) -> Self {
        StudentController {
            service,
            validator,
            publishers,
            console,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_parts(self) -> (S, Console<R, W>) {
        (self.service, self.console)
    }

    /// Run the validator and print every violation, in order.
    fn check(&mut self, student: &Student) -> Result<bool, ControllerError> {
        let validation = self.validator.validate(student);
        for violation in validation.violations() {
            self.console.line(&violation.message)?;
        }
        if !validation.is_valid() {
            tracing::debug!(
                id = student.id,
                violations = validation.violations().len(),
                "student failed validation"
            );
        }
        Ok(validation.is_valid())
    }

    /// Print the summary for `status`, then publish its event.
    fn finish(&mut self, kind: OperationKind, status: StatusCode) -> StatusCode {
        if !kind.accepts(status) {
            tracing::warn!(operation = %kind, %status, "service returned a status outside its contract");
        }
        let outcome = kind.outcome(status);
        if let Err(err) = self.console.line(outcome.summary) {
            tracing::error!(operation = %kind, error = %err, "failed to write outcome");
        }
        tracing::info!(operation = %kind, %status, "operation completed");
        self.publishers.for_kind(kind).publish(outcome.event);
        status
    }

    fn abort(&mut self, kind: OperationKind, err: ControllerError) {
        if err.is_input() {
            tracing::warn!(operation = %kind, error = %err, "operation aborted");
        } else {
            tracing::error!(operation = %kind, error = ?err, "operation failed unexpectedly");
        }
        if let Err(write_err) = self.console.line(format!("***Operation aborted: {}***", err)) {
            tracing::error!(operation = %kind, error = %write_err, "failed to write diagnostic");
        }
    }
}
