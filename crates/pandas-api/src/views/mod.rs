//! # HTML Views
//!
//! Server-rendered pages. Templates are compiled into the binary and filled
//! by `{{NAME}}` placeholder substitution. Every piece of record text goes
//! through [`escape_html`] before it is spliced in.

use std::fmt::Write;

use pandas_core::CargoRecord;

use crate::routes::{PLATFORM, TAGLINE};

const CARGO_DASHBOARD: &str = include_str!("../../templates/cargo_dashboard.html");

const EMPTY_ROW: &str =
    "          <tr class=\"empty\"><td colspan=\"5\">No cargo registered yet</td></tr>\n";

/// Render the cargo dashboard for `records`, in the order given.
#[must_use]
pub fn cargo_dashboard(records: &[CargoRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        push_row(&mut rows, record);
    }
    if rows.is_empty() {
        rows.push_str(EMPTY_ROW);
    }

    // Rows last: record text must not be re-scanned for placeholders.
    CARGO_DASHBOARD
        .replace("{{PLATFORM}}", PLATFORM)
        .replace("{{TAGLINE}}", TAGLINE)
        .replace("{{CARGO_COUNT}}", &records.len().to_string())
        .replace("{{CARGO_ROWS}}", &rows)
}

fn push_row(out: &mut String, record: &CargoRecord) {
    let sender = escape_html(&record.sender_name);
    let destination = escape_html(&record.destination);
    let _ = writeln!(
        out,
        "          <tr data-sender=\"{sender}\" data-destination=\"{destination}\">\
         <td>{id}</td><td>{sender}</td><td>{details}</td><td>{destination}</td><td>{created}</td></tr>",
        id = record.id,
        details = escape_html(&record.cargo_details),
        created = record.created_at.format("%Y-%m-%d %H:%M"),
    );
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
