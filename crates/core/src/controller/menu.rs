use std::io::{BufRead, Write};

use roster_storage::StudentService;

use super::StudentController;
use crate::error::ControllerError;
use crate::validator::Validator;

pub(super) const WRONG_CHOICE: &str = "Wrong Choice! Enter Again!!";

const MAIN_PROMPT: &str = "Enter choice from above [Options are 1,2,3,4,5] : ";

/// One line typed at a menu prompt.
pub(super) enum MenuInput {
    Number(u32),
    NotANumber(String),
}

impl<S, V, R, W> StudentController<S, V, R, W>
where
    S: StudentService,
    V: Validator,
    R: BufRead,
    W: Write,
{
    /// The top-level menu: dispatch to the four flows until Exit or end of
    /// input.
    pub fn run(&mut self) {
        loop {
            let input = self
                .print_main_menu()
                .and_then(|()| self.read_choice(MAIN_PROMPT));
            match input {
                Ok(MenuInput::Number(1)) => {
                    self.add_student();
                }
                Ok(MenuInput::Number(2)) => self.search_students(),
                Ok(MenuInput::Number(3)) => {
                    self.update_student();
                }
                Ok(MenuInput::Number(4)) => {
                    self.remove_student();
                }
                Ok(MenuInput::Number(5)) => {
                    if let Err(err) = self.console.line("***THANK YOU***") {
                        tracing::error!(error = %err, "failed to write farewell");
                    }
                    return;
                }
                Ok(MenuInput::Number(_)) => self.say_or_log(WRONG_CHOICE),
                Ok(MenuInput::NotANumber(raw)) => self.say_or_log(&not_a_number(&raw)),
                Err(ControllerError::EndOfInput) => {
                    tracing::debug!("input closed at main menu");
                    return;
                }
                Err(err) => {
                    tracing::error!(error = %err, "main menu stopped");
                    return;
                }
            }
        }
    }

    fn print_main_menu(&mut self) -> Result<(), ControllerError> {
        self.console.line("***STUDENT MANAGEMENT***")?;
        self.console.line("1.Add Student")?;
        self.console.line("2.Search Student")?;
        self.console.line("3.Update Student")?;
        self.console.line("4.Remove Student")?;
        self.console.line("5.Exit")
    }

    pub(super) fn read_choice(&mut self, prompt: &str) -> Result<MenuInput, ControllerError> {
        let raw = self.console.prompt(prompt)?;
        Ok(match raw.parse::<u32>() {
            Ok(n) => MenuInput::Number(n),
            Err(_) => MenuInput::NotANumber(raw),
        })
    }

    pub(super) fn say_or_log(&mut self, text: &str) {
        let written = self.console.line(text).and_then(|()| self.console.blank());
        if let Err(err) = written {
            tracing::error!(error = %err, "failed to write to console");
        }
    }
}

pub(super) fn not_a_number(raw: &str) -> String {
    format!("Invalid choice '{}'! Enter a number.", raw)
}
