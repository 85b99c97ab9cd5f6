//! Strict CSV reader for the bootstrap dataset.
//!
//! Hand-rolled on purpose: the loader accepts exactly the shape the source
//! dataset has (quoted fields, embedded commas, doubled quotes) and nothing
//! looser. The first row is a header and is discarded; every data row must
//! carry exactly [`FIELDS_PER_ROW`] columns.

use std::fs;
use std::mem;
use std::path::Path;

use crate::store::{Record, RecordBook, FIELDS_PER_ROW};

use super::errors::{IngestError, IngestResult};

/// Split raw CSV text into rows of fields.
///
/// Quoting rules: a field starting with `"` runs until the closing quote,
/// `""` inside it is a literal quote, and commas or newlines inside it are
/// data. Carriage returns outside quotes are dropped so CRLF input parses
/// the same as LF. Completely blank lines produce no row.
pub fn parse_rows(input: &str) -> IngestResult<Vec<Vec<String>>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                line += 1;
                if fields.is_empty() && field.is_empty() {
                    continue;
                }
                fields.push(mem::take(&mut field));
                rows.push(mem::take(&mut fields));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(IngestError::UnterminatedQuote { line });
    }

    // Final row without a trailing newline
    if !fields.is_empty() || !field.is_empty() {
        fields.push(field);
        rows.push(fields);
    }

    Ok(rows)
}

/// Load the bootstrap CSV at `path` into a fresh record book.
///
/// The header row is skipped; each data row becomes one append, so record
/// identifiers follow file order starting at 0. The first malformed row
/// aborts the load.
pub fn load_book(path: &Path) -> IngestResult<RecordBook> {
    let input = fs::read_to_string(path)?;
    let rows = parse_rows(&input)?;

    let (_header, data) = rows.split_first().ok_or(IngestError::MissingHeader)?;

    let mut book = RecordBook::new();
    for (index, row) in data.iter().enumerate() {
        if row.len() != FIELDS_PER_ROW {
            return Err(IngestError::FieldCount {
                // 1-based file line; the header is line 1
                line: index + 2,
                expected: FIELDS_PER_ROW,
                got: row.len(),
            });
        }
        book.append(Record::from_fields(row));
    }

    Ok(book)
}
