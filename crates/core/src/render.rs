//! Fixed-width student table.

use roster_storage::Student;

const ID_W: usize = 6;
const NAME_W: usize = 32;
const DEPT_W: usize = 14;
const SCORE_W: usize = 7;
const EMAIL_W: usize = 42;
const MOBILE_W: usize = 12;

const TABLE_W: usize = ID_W + NAME_W + DEPT_W + SCORE_W + EMAIL_W + MOBILE_W;

pub fn title_rule() -> String {
    centered("STUDENT DETAILS", '*')
}

pub fn end_rule() -> String {
    centered("THE END", '*')
}

pub fn header() -> String {
    row("ID", "Name", "Department", "Score", "Email", "Mobile")
}

pub fn student_row(s: &Student) -> String {
    row(
        &s.id.to_string(),
        &s.name,
        &s.dept,
        &s.score.to_string(),
        &s.email,
        &s.mobile,
    )
}

/// Shown in place of rows when a search matched nothing.
pub fn banner(text: &str) -> String {
    centered(&format!("*****{}*****", text), ' ')
        .trim_end()
        .to_string()
}

/// Every line of the table for `students`, rules included.
pub fn student_table(students: &[Student], empty_text: &str) -> Vec<String> {
    let mut lines = vec![title_rule(), header()];
    if students.is_empty() {
        lines.push(banner(empty_text));
    } else {
        lines.extend(students.iter().map(student_row));
    }
    lines.push(end_rule());
    lines
}

fn row(id: &str, name: &str, dept: &str, score: &str, email: &str, mobile: &str) -> String {
    format!(
        "{:<ID_W$}{:<NAME_W$}{:<DEPT_W$}{:<SCORE_W$}{:<EMAIL_W$}{:<MOBILE_W$}",
        id, name, dept, score, email, mobile
    )
    .trim_end()
    .to_string()
}

fn centered(text: &str, fill: char) -> String {
    let pad = TABLE_W.saturating_sub(text.chars().count());
    let left = pad / 2;
    let right = pad - left;
    let fill = fill.to_string();
    format!("{}{}{}", fill.repeat(left), text, fill.repeat(right))
}
