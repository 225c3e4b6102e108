//! roster-core: the command-to-outcome workflow behind the roster console.
//!
//! Turns user-entered commands into service calls and maps each resulting
//! [`StatusCode`] onto a console message and exactly one published event.
//!
//! # Public API
//!
//! - [`StudentController`] -- the Add / Search / Update / Remove flows and
//!   the menus that drive them
//! - [`Console`] -- line-oriented prompt/read abstraction over any
//!   `BufRead` + `Write` pair
//! - [`Validator`], [`StudentValidator`] -- field rules checked before
//!   every create and update
//! - [`EventPublisher`], [`Publishers`] -- outcome sinks, one per
//!   operation family
//! - [`OperationKind`], [`Outcome`] -- the status-to-message table

pub mod console;
pub mod controller;
pub mod error;
pub mod events;
pub mod outcome;
pub mod render;
pub mod validator;

// ── Convenience re-exports ───────────────────────────────────────────

pub use console::Console;
pub use controller::{SearchBy, StudentController};
pub use error::{ConfigError, ControllerError};
pub use events::{EventPublisher, LogPublisher, Publishers, RecordingPublisher};
pub use outcome::{OperationKind, Outcome};
pub use validator::{Field, StudentValidator, Validation, Validator, ValidatorConfig, Violation};

pub use roster_storage::{StatusCode, Student, StudentService};
