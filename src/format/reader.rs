//! Reads CSV edge-list text into records.

use std::io::Read;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord};

use crate::types::error::{GraphError, GraphResult};

/// Reader for comma-separated, quote-escaped edge lists (RFC 4180 style).
///
/// Field splitting is done by the `csv` crate. Quoted fields may hold
/// commas, doubled quotes (`""`) and line breaks. Records end at `\n`,
/// `\r\n` or a bare `\r`; a trailing terminator at end of input does not
/// start another record. A blank line yields a record with no fields, so
/// graph construction can reject it by position.
pub struct RecordReader;

impl RecordReader {
    /// Read a UTF-8 CSV file into records.
    pub fn read_from_file(path: &Path) -> GraphResult<Vec<Vec<String>>> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Read UTF-8 CSV text from any reader into records.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Vec<Vec<String>>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Split CSV text into records of fields.
    pub fn parse(text: &str) -> GraphResult<Vec<Vec<String>>> {
        let bytes = text.as_bytes();
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut records: Vec<Vec<String>> = Vec::new();
        let mut record = StringRecord::new();
        // end of the previous record's content, before its terminator
        let mut content_end: Option<usize> = None;

        loop {
            let start = reader.position().byte() as usize;
            let more = reader
                .read_record(&mut record)
                .map_err(|e| csv_error(records.len() + 1, e))?;
            if !more {
                break;
            }
            let end = (reader.position().byte() as usize).min(bytes.len());

            // the csv reader skips blank lines; recover them from the raw text
            let content_start = start + terminator_run(&bytes[start..end]);
            let gap = &bytes[content_end.unwrap_or(0)..content_start];
            let expected = usize::from(content_end.is_some());
            for _ in expected..line_breaks(gap) {
                records.push(Vec::new());
            }

            let raw = &bytes[content_start..end];
            if let Err(reason) = check_quotes(raw) {
                return Err(GraphError::malformed(records.len() + 1, reason));
            }

            records.push(record.iter().map(String::from).collect());
            content_end = Some(end - trailing_terminator_run(raw));
        }

        let tail = &bytes[content_end.unwrap_or(0)..];
        let expected = usize::from(content_end.is_some());
        for _ in expected..line_breaks(tail) {
            records.push(Vec::new());
        }
        Ok(records)
    }
}

fn csv_error(record: usize, err: csv::Error) -> GraphError {
    match err.into_kind() {
        ErrorKind::Io(e) => GraphError::Io(e),
        kind => GraphError::malformed(record, format!("{:?}", kind)),
    }
}

fn is_terminator(b: u8) -> bool {
    b == b'\r' || b == b'\n'
}

fn terminator_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| is_terminator(b)).count()
}

fn trailing_terminator_run(bytes: &[u8]) -> usize {
    bytes.iter().rev().take_while(|&&b| is_terminator(b)).count()
}

/// Count line endings, with `\r\n` counted once.
fn line_breaks(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            i += 1;
        }
        if is_terminator(bytes[i]) {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Reject quoting the csv reader accepts leniently: a quoted field left
/// open at end of input, or text between a closing quote and the next
/// separator.
fn check_quotes(raw: &[u8]) -> Result<(), &'static str> {
    let mut quoted = false;
    let mut field_start = true;
    let mut i = 0;
    while i < raw.len() {
        let c = raw[i];
        if quoted {
            if c == b'"' {
                if raw.get(i + 1) == Some(&b'"') {
                    i += 2;
                    continue;
                }
                quoted = false;
                match raw.get(i + 1) {
                    None | Some(b',') | Some(b'\r') | Some(b'\n') => {}
                    Some(_) => return Err("unexpected text after closing quote"),
                }
            }
        } else if c == b'"' && field_start {
            quoted = true;
        }
        field_start = !quoted && c == b',';
        i += 1;
    }
    if quoted {
        Err("unterminated quoted field")
    } else {
        Ok(())
    }
}
