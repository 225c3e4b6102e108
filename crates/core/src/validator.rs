//! Field rules checked before a student is created or updated.
//!
//! Every rule runs; violations are collected in field order so the console
//! can print all of them at once.

use std::fmt;

use roster_storage::Student;

use crate::error::ConfigError;

/// A student field, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Dept,
    Score,
    Email,
    Mobile,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Dept => "dept",
            Field::Score => "score",
            Field::Email => "email",
            Field::Mobile => "mobile",
        };
        f.write_str(s)
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

impl Violation {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Violation {
            field,
            message: message.into(),
        }
    }
}

/// Result of validating one student.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    violations: Vec<Violation>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in field order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.violations.push(Violation::new(field, message));
    }
}

/// Pass/fail check run before any create or update.
pub trait Validator {
    fn validate(&self, student: &Student) -> Validation;
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, student: &Student) -> Validation {
        (**self).validate(student)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, student: &Student) -> Validation {
        (**self).validate(student)
    }
}

/// Tunable bounds for [`StudentValidator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConfig {
    min_score: f32,
    max_score: f32,
}

impl ValidatorConfig {
    pub const DEFAULT_MIN_SCORE: f32 = 0.0;
    pub const DEFAULT_MAX_SCORE: f32 = 10.0;

    /// Build a config with an inclusive score range.
    pub fn new(min_score: f32, max_score: f32) -> Result<Self, ConfigError> {
        if !min_score.is_finite() || !max_score.is_finite() {
            return Err(ConfigError::NonFiniteScore {
                min: min_score,
                max: max_score,
            });
        }
        if min_score > max_score {
            return Err(ConfigError::EmptyScoreRange {
                min: min_score,
                max: max_score,
            });
        }
        Ok(ValidatorConfig {
            min_score,
            max_score,
        })
    }

    pub fn min_score(&self) -> f32 {
        self.min_score
    }

    pub fn max_score(&self) -> f32 {
        self.max_score
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            min_score: Self::DEFAULT_MIN_SCORE,
            max_score: Self::DEFAULT_MAX_SCORE,
        }
    }
}

/// The stock rule set for student records.
#[derive(Debug, Clone, Default)]
pub struct StudentValidator {
    config: ValidatorConfig,
}

impl StudentValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        StudentValidator { config }
    }
}

impl Validator for StudentValidator {
    fn validate(&self, student: &Student) -> Validation {
        let mut v = Validation::default();

        if student.id <= 0 {
            v.push(Field::Id, "Student ID must be a positive number");
        }

        if student.name.is_empty() {
            v.push(Field::Name, "Student Name is required");
        } else if !student.name.chars().all(is_name_char) {
            v.push(
                Field::Name,
                "Student Name may contain only letters, spaces, periods, apostrophes and hyphens",
            );
        }

        if student.dept.is_empty() {
            v.push(Field::Dept, "Student Dept is required");
        }

        let (min, max) = (self.config.min_score, self.config.max_score);
        if !student.score.is_finite() || student.score < min || student.score > max {
            v.push(
                Field::Score,
                format!("Student CGPA must be between {} and {}", min, max),
            );
        }

        if student.email.is_empty() {
            v.push(Field::Email, "Student Email is required");
        } else if !is_email(&student.email) {
            v.push(Field::Email, "Student Email is not a valid address");
        }

        if student.mobile.len() != 10 || !student.mobile.bytes().all(|b| b.is_ascii_digit()) {
            v.push(Field::Mobile, "Student Mobile must be exactly 10 digits");
        }

        v
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || matches!(c, ' ' | '.' | '\'' | '-')
}

fn is_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
