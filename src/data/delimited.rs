// ============================================================
// Layer 4 — Delimited Text Format
// ============================================================
// Reads and writes the small subset of CSV that datasets use:
//
//   - one record per line, fields separated by a delimiter
//   - a field may be wrapped in double quotes, in which case it
//     can contain the delimiter, newlines, and "" for a quote
//   - \r\n and \n line endings are both accepted
//   - blank lines are skipped
//
// On write, a field is quoted only when it has to be:
// when it contains the delimiter, a quote, or a line break.
//
// Reference: RFC 4180 (Common Format for CSV Files)
//            Rust Book §8 (Strings), §13 (Iterators)

/// One parsed record and the line it started on (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line:   usize,
    pub fields: Vec<String>,
}

/// Where and why parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line:   usize,
    pub reason: String,
}

/// Parse the full text of a delimited file into records.
pub fn parse_records(text: &str, delimiter: char) -> Result<Vec<Record>, SyntaxError> {
    let mut records = Vec::new();

    let mut fields: Vec<String> = Vec::new();
    let mut field   = String::new();
    let mut line    = 1usize;
    let mut start   = 1usize;

    // Field state: was the current field opened with a quote,
    // are we inside it, and has it already been closed?
    let mut quoted    = false;
    let mut in_quotes = false;

    // Anything at all on the current record? A lone "" counts,
    // a line with nothing on it does not.
    let mut touched = false;

    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                c => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !quoted => {
                quoted    = true;
                in_quotes = true;
                touched   = true;
            }
            c if c == delimiter => {
                fields.push(std::mem::take(&mut field));
                quoted  = false;
                touched = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                fields.push(std::mem::take(&mut field));
                quoted = false;

                if touched {
                    records.push(Record { line: start, fields: std::mem::take(&mut fields) });
                } else {
                    fields.clear();
                }
                touched = false;
                line += 1;
                start = line;
            }
            c if quoted => {
                return Err(SyntaxError {
                    line,
                    reason: format!("unexpected character '{c}' after closing quote"),
                });
            }
            c => {
                field.push(c);
                touched = true;
            }
        }
    }

    if in_quotes {
        return Err(SyntaxError {
            line:   start,
            reason: "unterminated quoted field".to_string(),
        });
    }

    // Last record without a trailing newline
    if touched {
        fields.push(field);
        records.push(Record { line: start, fields });
    }

    Ok(records)
}

/// Format one record as a line, without the trailing newline.
/// A record made of one empty field is written as `""` so it is
/// not mistaken for a blank line on the way back in.
pub fn format_record<S: AsRef<str>>(fields: &[S], delimiter: char) -> String {
    if let [only] = fields {
        if only.as_ref().is_empty() {
            return "\"\"".to_string();
        }
    }

    fields
        .iter()
        .map(|f| quote_field(f.as_ref(), delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

fn quote_field(field: &str, delimiter: char) -> String {
    let needs_quotes = field.contains(delimiter)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');

    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
