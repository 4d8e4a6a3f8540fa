//! # Rendering
//!
//! Turns command outcomes into text for stdout.
//!
//! ## Table Output
//! ```text
//! Customers (filter: VIP Customers)
//!   ID  NAME   CATEGORY       NOTES
//! * C1  Alice  VIP Customers  met at the fair
//!   C3  Carol  VIP Customers
//! 2 customer(s)
//! ```
//!
//! With `--json` each reply, and each confirmation question, is one compact
//! JSON document on one line.

use clientele_core::CustomerRow;
use serde_json::{json, Value};

use crate::commands::Outcome;
use crate::error::ApiError;
use crate::state::{DetailMode, OutputFormat, SessionState};

/// Notes longer than this are cut in the list view (not in the detail view).
const NOTES_PREVIEW_CHARS: usize = 40;

/// Renders a successful outcome, or `None` when there is nothing to print.
pub fn outcome(outcome: &Outcome, session: &SessionState, format: OutputFormat) -> Option<String> {
    match (outcome, format) {
        (Outcome::Customers { message }, OutputFormat::Json) => {
            Some(with_message(customers_json(session), message.as_deref()).to_string())
        }
        (Outcome::Categories { message }, OutputFormat::Json) => {
            Some(with_message(categories_json(session), message.as_deref()).to_string())
        }
        (Outcome::Customers { message }, OutputFormat::Table) => {
            Some(prefixed(message.as_deref(), customers(session, format)))
        }
        (Outcome::Categories { message }, OutputFormat::Table) => {
            Some(prefixed(message.as_deref(), categories(session, format)))
        }
        (Outcome::Details, _) => details(session, format),
        (Outcome::Message(text), _) => Some(message(text, format)),
        (Outcome::Nothing | Outcome::Quit, _) => None,
    }
}

pub fn error(err: &ApiError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format!("error: {}", err),
        OutputFormat::Json => json!({ "error": err }).to_string(),
    }
}

pub fn message(text: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => text.to_string(),
        OutputFormat::Json => json!({ "message": text }).to_string(),
    }
}

/// A yes/no question. The table form stays on the line the answer is typed on.
pub fn confirm(question: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format!("{} [y/N] ", question),
        OutputFormat::Json => json!({ "confirm": question }).to_string(),
    }
}

fn prefixed(message: Option<&str>, body: String) -> String {
    match message {
        Some(text) => format!("{}\n{}", text, body),
        None => body,
    }
}

fn with_message(mut value: Value, message: Option<&str>) -> Value {
    if let (Some(text), Some(object)) = (message, value.as_object_mut()) {
        object.insert("message".to_string(), json!(text));
    }
    value
}

fn customers_json(session: &SessionState) -> Value {
    json!({
        "filter": session.filter,
        "selected": session.selected,
        "customers": session.customers,
    })
}

fn categories_json(session: &SessionState) -> Value {
    json!({ "categories": session.categories })
}

/// The customer list view.
pub fn customers(session: &SessionState, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return customers_json(session).to_string();
    }

    let title = match &session.filter {
        Some(filter) => format!("Customers (filter: {})", filter.category_name),
        None => "Customers".to_string(),
    };

    if session.customers.is_empty() {
        return format!("{}\n(no customers)", title);
    }

    let rows: Vec<[String; 4]> = session
        .customers
        .iter()
        .map(|row| {
            [
                row.id.clone(),
                row.name.clone(),
                row.category_label().to_string(),
                notes_preview(row),
            ]
        })
        .collect();

    let header = ["ID", "NAME", "CATEGORY", "NOTES"].map(String::from);
    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![title, table_line("  ", &header, &widths)];
    for (row, customer) in rows.iter().zip(&session.customers) {
        let marker = if session.selected.as_deref() == Some(customer.id.as_str()) {
            "* "
        } else {
            "  "
        };
        lines.push(table_line(marker, row, &widths));
    }
    lines.push(format!("{} customer(s)", rows.len()));
    lines.join("\n")
}

/// The category list.
pub fn categories(session: &SessionState, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return categories_json(session).to_string();
    }

    if session.categories.is_empty() {
        return "Categories\n(no categories)".to_string();
    }

    let width = session
        .categories
        .iter()
        .map(|c| c.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut lines = vec!["Categories".to_string()];
    for category in &session.categories {
        lines.push(format!("  {:>width$}  {}", category.id, category.name, width = width));
    }
    lines.join("\n")
}

/// The open detail view, if any.
pub fn details(session: &SessionState, format: OutputFormat) -> Option<String> {
    let view = session.details.as_ref()?;

    if format == OutputFormat::Json {
        return Some(json!({ "details": view }).to_string());
    }

    let customer = &view.customer;
    let category = match (&customer.category_name, customer.category_id) {
        (Some(name), _) => name.clone(),
        (None, Some(id)) => format!("(deleted category #{})", id),
        (None, None) => String::new(),
    };

    let mut lines = vec![
        format!("Customer details ({})", mode_label(view.mode)),
        format!("  ID:       {}", customer.id),
        format!("  Name:     {}", customer.name),
        format!("  Category: {}", category),
        "  Notes:".to_string(),
    ];
    lines.extend(customer.notes.lines().map(|line| format!("    {}", line)));

    if view.mode == DetailMode::Edit {
        lines.push(
            "Use `save [--name N] [--category C] [--notes T]` or `close`".to_string(),
        );
    }
    Some(lines.join("\n"))
}

fn mode_label(mode: DetailMode) -> &'static str {
    match mode {
        DetailMode::View => "read-only",
        DetailMode::Edit => "editing",
    }
}

fn notes_preview(row: &CustomerRow) -> String {
    let first_line = row.notes.lines().next().unwrap_or("");
    let truncated = first_line.chars().count() > NOTES_PREVIEW_CHARS || row.notes.lines().count() > 1;

    let mut preview: String = first_line.chars().take(NOTES_PREVIEW_CHARS).collect();
    if truncated {
        preview.push_str("...");
    }
    preview
}

fn table_line(marker: &str, cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = marker.to_string();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        if i + 1 < cells.len() {
            let pad = width - cell.chars().count();
            line.push_str(&" ".repeat(pad));
        }
    }
    line.trim_end().to_string()
}
