//! The status-to-message table.
//!
//! Console and event text for an operation is a pure function of the
//! operation kind and the status it ended with.

use std::fmt;

use roster_storage::StatusCode;

/// Which CRUD or search variant is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    SearchById,
    SearchByName,
    SearchByDept,
    Update,
    Delete,
}

/// Console summary plus the event message for one terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub summary: &'static str,
    pub event: &'static str,
}

const fn outcome(summary: &'static str, event: &'static str) -> Outcome {
    Outcome { summary, event }
}

pub const SEARCH_FOUND: Outcome = outcome("Search Succeeded", "Search Succeeded");
pub const SEARCH_EMPTY: Outcome = outcome("NO DATA FOUND", "Search Failed: no record found");

impl OperationKind {
    pub fn is_search(self) -> bool {
        matches!(
            self,
            OperationKind::SearchById | OperationKind::SearchByName | OperationKind::SearchByDept
        )
    }

    /// Whether the service contract allows `status` for this operation.
    pub fn accepts(self, status: StatusCode) -> bool {
        use OperationKind::*;
        use StatusCode::*;
        match (self, status) {
            (_, Success | Failed) => true,
            (Create, AlreadyExists) => true,
            (Update | Delete, NotFound) => true,
            (SearchById | SearchByName | SearchByDept, NotFound) => true,
            (Create, NotFound) => false,
            (Update | Delete | SearchById | SearchByName | SearchByDept, AlreadyExists) => false,
        }
    }

    /// Map a status onto console and event text.
    ///
    /// A status the operation cannot produce is reported with that
    /// operation's `Failed` row. Search kinds treat `Success` as "at least
    /// one record" and anything else as an empty result.
    pub fn outcome(self, status: StatusCode) -> Outcome {
        use OperationKind::*;
        use StatusCode::*;
        match (self, status) {
            (Create, Success) => outcome("Inserted", "Insertion Succeeded"),
            (Create, AlreadyExists) => outcome("Already exists", "Insertion Failed: exists"),
            (Create, NotFound | Failed) => outcome("Insertion failed", "Insertion Failed: other"),

            (Update, Success) => outcome("Updated", "Update Succeeded"),
            (Update, NotFound) => outcome("Not exists", "Update Failed: notexists"),
            (Update, AlreadyExists | Failed) => outcome("Update failed", "Update Failed: other"),

            (Delete, Success) => outcome("Removed", "Delete Succeeded"),
            (Delete, NotFound) => outcome("No record found", "Delete Failed: notexists"),
            (Delete, AlreadyExists | Failed) => outcome("Removal failed", "Delete Failed: other"),

            (SearchById | SearchByName | SearchByDept, Success) => SEARCH_FOUND,
            (SearchById | SearchByName | SearchByDept, AlreadyExists | NotFound | Failed) => {
                SEARCH_EMPTY
            }
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperationKind::Create => "create",
            OperationKind::SearchById => "search_by_id",
            OperationKind::SearchByName => "search_by_name",
            OperationKind::SearchByDept => "search_by_dept",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
        };
        f.write_str(s)
    }
}
