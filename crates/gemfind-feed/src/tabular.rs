//! Delimited-text parser for published-spreadsheet exports.
//!
//! A deliberately small state machine over one complete in-memory string.
//! Handles the quoting rules spreadsheet exports actually produce: fields
//! wrapped in double quotes may contain commas and newlines, a doubled
//! quote inside a quoted field decodes to one literal quote, and records
//! end on either CRLF or bare LF.

use std::collections::HashMap;

/// One parsed data row: header cell → field value, both trimmed.
pub type RawRow = HashMap<String, String>;

/// Parse a complete delimited-text blob into ordered rows.
///
/// The first record is the header; its trimmed cells become the keys of
/// every following row. Rows that are entirely empty (including trailing
/// blank lines) are dropped. Cells missing from a short row map to the
/// empty string.
#[must_use]
pub fn parse(text: &str) -> Vec<RawRow> {
    let records = split_records(text);
    let mut records = records.into_iter();

    let Some(header) = records.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header.iter().map(|cell| cell.trim().to_string()).collect();

    records
        .filter(|cells| cells.iter().any(|cell| !cell.trim().is_empty()))
        .map(|cells| {
            header
                .iter()
                .enumerate()
                .map(|(idx, key)| {
                    let value = cells.get(idx).map_or("", |cell| cell.trim());
                    (key.clone(), value.to_string())
                })
                .collect()
        })
        .collect()
}

/// Split raw text into records of raw (untrimmed) cells.
fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = vec![String::new()];
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                // A doubled quote inside a quoted field is one literal quote.
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    push_char(&mut record, '"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => record.push(String::new()),
            '\r' | '\n' if !in_quotes => {
                // Swallow the LF of a CRLF pair.
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                records.push(std::mem::replace(&mut record, vec![String::new()]));
            }
            other => push_char(&mut record, other),
        }
    }

    // Final record only counts if the text did not end with a terminator.
    if record.iter().any(|cell| !cell.is_empty()) {
        records.push(record);
    }

    records
}

fn push_char(record: &mut [String], ch: char) {
    if let Some(cell) = record.last_mut() {
        cell.push(ch);
    }
}

#[cfg(test)]
#[path = "tabular_test.rs"]
mod tests;
