use std::fmt;

use serde::{Deserialize, Serialize};

/// One student as held by a `StudentService`.
///
/// `id` is chosen by the caller at creation and never reassigned; every
/// other field may change on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub dept: String,
    /// Grade point score, bounded by the validator (0.0 to 10.0 by default).
    pub score: f32,
    pub email: String,
    pub mobile: String,
}

/// Outcome of a mutating `StudentService` call.
///
/// Not every code is meaningful for every call: `AlreadyExists` only comes
/// back from `create`, `NotFound` only from `update` and `delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    Success,
    AlreadyExists,
    NotFound,
    Failed,
}

impl StatusCode {
    pub fn is_success(self) -> bool {
        self == StatusCode::Success
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusCode::Success => "success",
            StatusCode::AlreadyExists => "exists",
            StatusCode::NotFound => "notexists",
            StatusCode::Failed => "failed",
        };
        f.write_str(s)
    }
}
