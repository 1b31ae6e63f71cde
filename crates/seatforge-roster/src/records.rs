//! RFC 4180 record splitting.

use std::mem;

use crate::error::{Result, RosterError};

/// Splits `text` into rows of fields.
///
/// Quoted fields may contain delimiters, line breaks and doubled quotes.
/// A quote inside an unquoted field is kept literally. Rows whose fields are
/// all blank are skipped. A leading UTF-8 byte-order mark is ignored.
///
/// # Errors
///
/// [`RosterError::Malformed`] for an unterminated quoted field or text after
/// a closing quote.
pub fn parse_records(text: &str, delimiter: char) -> Result<Vec<Vec<String>>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut line = 1;
    // Line on which the open quoted field started.
    let mut open_quote: Option<usize> = None;
    let mut was_quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if open_quote.is_some() {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    open_quote = None;
                    match chars.peek() {
                        None | Some('\n') | Some('\r') => {}
                        Some(&next) if next == delimiter => {}
                        Some(&next) => {
                            return Err(RosterError::Malformed {
                                line,
                                message: format!("unexpected {next:?} after closing quote"),
                            });
                        }
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
            '"' if field.is_empty() && !was_quoted => {
                open_quote = Some(line);
                was_quoted = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(mem::take(&mut field));
                push_row(&mut rows, mem::take(&mut row));
                was_quoted = false;
                line += 1;
            }
            c if c == delimiter => {
                row.push(mem::take(&mut field));
                was_quoted = false;
            }
            _ => field.push(c),
        }
    }

    if let Some(start) = open_quote {
        return Err(RosterError::Malformed {
            line: start,
            message: "unterminated quoted field".to_string(),
        });
    }
    if was_quoted || !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, row);
    }
    Ok(rows)
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if row.iter().any(|field| !field.trim().is_empty()) {
        rows.push(row);
    }
}
