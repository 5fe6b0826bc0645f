//! Plain-text rendering for the console.
//!
//! Every function returns a `String`; printing is left to the caller.

use std::fmt::Write;
use studentdesk_core::PageItem;
use studentdesk_models::{Student, StudentField};

use crate::modules::students::{ListView, ValidationResult};
use crate::utils::notifications::{Notification, NotificationLevel};

const MAX_CELL_WIDTH: usize = 32;

const COLUMNS: [(&str, Option<StudentField>); 6] = [
    ("#", None),
    ("Name", Some(StudentField::Name)),
    ("Email", Some(StudentField::Email)),
    ("Phone", Some(StudentField::PhoneNum)),
    ("Enrollment", Some(StudentField::EnrollNum)),
    ("Admitted", Some(StudentField::DateAdmission)),
];

/// The student table, page bar and per-page choices.
pub fn render_list(view: &ListView<'_>, per_page_options: &[usize]) -> String {
    let mut out = String::new();

    if view.is_empty() {
        out.push_str(&empty_state(view));
        out.push('\n');
        return out;
    }

    let first = (view.current_page - 1) * view.items_per_page;
    let rows: Vec<Vec<String>> = view
        .items
        .iter()
        .enumerate()
        .map(|(idx, student)| {
            COLUMNS
                .iter()
                .map(|(_, field)| match field {
                    Some(field) => truncate(student.field(*field)),
                    None => (first + idx + 1).to_string(),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(col, (label, _))| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = COLUMNS.iter().map(|(label, _)| label.to_string()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    if let Some((from, to)) = view.range() {
        let _ = write!(
            out,
            "\nShowing {}-{} of {} | sorted by {}",
            from, to, view.total_items, view.sort
        );
    }
    if !view.query.trim().is_empty() {
        let _ = write!(out, " | search: \"{}\"", view.query);
    }
    out.push('\n');

    let _ = writeln!(out, "Page: {}", render_window(&view.window, view.current_page));
    let _ = writeln!(
        out,
        "Per page: {}",
        render_per_page(per_page_options, view.items_per_page)
    );
    out
}

fn empty_state(view: &ListView<'_>) -> String {
    if !view.loaded {
        "Students have not been loaded yet. Use `reload` to try again.".to_string()
    } else if !view.query.trim().is_empty() {
        format!("No students match \"{}\".", view.query)
    } else {
        "No students yet. Use `add` to create one.".to_string()
    }
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_WIDTH {
        return value.to_string();
    }
    let cut: String = value.chars().take(MAX_CELL_WIDTH - 1).collect();
    format!("{}…", cut)
}

/// Page buttons with the current page in brackets, e.g. `1 … 4 [5] 6 … 10`.
pub fn render_window(window: &[PageItem], current_page: usize) -> String {
    window
        .iter()
        .map(|item| match item {
            PageItem::Page(page) if *page == current_page => format!("[{}]", page),
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_per_page(options: &[usize], current: usize) -> String {
    options
        .iter()
        .map(|n| {
            if *n == current {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// All fields of one record.
pub fn render_student(student: &Student) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {}", "Id", student.id);
    for field in StudentField::ALL {
        let _ = writeln!(out, "{:<18} {}", field.label(), student.field(field));
    }
    let _ = writeln!(
        out,
        "{:<18} {}",
        "Avatar",
        student.avatar.as_deref().unwrap_or("-")
    );
    out
}

pub fn render_errors(result: &ValidationResult) -> String {
    let mut out = String::new();
    for (field, message) in &result.errors {
        let _ = writeln!(out, "  {}: {}", field.label(), message);
    }
    out
}

pub fn render_notification(notification: &Notification) -> String {
    let icon = match notification.level {
        NotificationLevel::Success => "✅",
        NotificationLevel::Info => "ℹ️ ",
        NotificationLevel::Warning => "⚠️ ",
        NotificationLevel::Error => "❌",
    };
    format!("{} {}", icon, notification.message)
}
