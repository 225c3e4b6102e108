use std::io::{BufRead, Write};

use roster_storage::{StatusCode, Student, StudentService};

use super::menu::{not_a_number, MenuInput, WRONG_CHOICE};
use super::StudentController;
use crate::error::ControllerError;
use crate::outcome::OperationKind;
use crate::render;
use crate::validator::Validator;

const SEARCH_PROMPT: &str = "Enter choice from above [Options are 1,2,3,4] : ";

/// The key a search sub-operation looks students up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBy {
    Id,
    Name,
    Dept,
}

impl SearchBy {
    pub fn kind(self) -> OperationKind {
        match self {
            SearchBy::Id => OperationKind::SearchById,
            SearchBy::Name => OperationKind::SearchByName,
            SearchBy::Dept => OperationKind::SearchByDept,
        }
    }
}

enum SearchChoice {
    Search(SearchBy),
    Exit,
}

impl SearchChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(SearchChoice::Search(SearchBy::Id)),
            2 => Some(SearchChoice::Search(SearchBy::Name)),
            3 => Some(SearchChoice::Search(SearchBy::Dept)),
            4 => Some(SearchChoice::Exit),
            _ => None,
        }
    }
}

impl<S, V, R, W> StudentController<S, V, R, W>
where
    S: StudentService,
    V: Validator,
    R: BufRead,
    W: Write,
{
    /// The search menu. Re-prompts on bad input and only returns on the
    /// Exit choice or end of input.
    pub fn search_students(&mut self) {
        loop {
            let input = self
                .print_search_menu()
                .and_then(|()| self.read_choice(SEARCH_PROMPT));
            let number = match input {
                Ok(MenuInput::Number(n)) => n,
                Ok(MenuInput::NotANumber(raw)) => {
                    self.say_or_log(&not_a_number(&raw));
                    continue;
                }
                Err(ControllerError::EndOfInput) => {
                    tracing::debug!("input closed at search menu");
                    return;
                }
                Err(err) => {
                    tracing::error!(error = %err, "search menu stopped");
                    return;
                }
            };

            match SearchChoice::from_number(number) {
                Some(SearchChoice::Search(by)) => {
                    self.search(by);
                }
                Some(SearchChoice::Exit) => {
                    self.say_or_log("***THANKS FOR USING SEARCH MENU***");
                    return;
                }
                None => self.say_or_log(WRONG_CHOICE),
            }
        }
    }

    /// Prompt for a key, run one lookup, render the results and publish.
    ///
    /// Returns the number of students shown.
    pub fn search(&mut self, by: SearchBy) -> Option<usize> {
        let kind = by.kind();
        match self.try_search(by) {
            Ok(students) => Some(self.finish_search(kind, &students)),
            Err(err) => {
                self.abort(kind, err);
                None
            }
        }
    }

    fn print_search_menu(&mut self) -> Result<(), ControllerError> {
        self.console.line("***SEARCH STUDENT***")?;
        self.console.line("1.Search by ID")?;
        self.console.line("2.Search by Name")?;
        self.console.line("3.Search by Department")?;
        self.console.line("4.Exit")
    }

    fn try_search(&mut self, by: SearchBy) -> Result<Vec<Student>, ControllerError> {
        let students = match by {
            SearchBy::Id => {
                let id: i32 = self.console.prompt_parse("Enter Student ID : ", "id")?;
                self.service.find_by_id(id)?.into_iter().collect()
            }
            SearchBy::Name => {
                let name = self.console.prompt("Enter Student Name : ")?;
                self.service.find_by_name(&name)?
            }
            SearchBy::Dept => {
                let dept = self.console.prompt("Enter Student Department : ")?;
                self.service.find_by_dept(&dept)?
            }
        };
        Ok(students)
    }

    fn finish_search(&mut self, kind: OperationKind, students: &[Student]) -> usize {
        let status = if students.is_empty() {
            StatusCode::NotFound
        } else {
            StatusCode::Success
        };
        let outcome = kind.outcome(status);

        let mut written = Ok(());
        for line in render::student_table(students, outcome.summary) {
            written = written.and_then(|()| self.console.line(line));
        }
        if let Err(err) = written.and_then(|()| self.console.blank()) {
            tracing::error!(operation = %kind, error = %err, "failed to write search results");
        }

        tracing::info!(operation = %kind, rows = students.len(), "search completed");
        self.publishers.for_kind(kind).publish(outcome.event);
        students.len()
    }
}
