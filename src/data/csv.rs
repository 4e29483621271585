//! Comma-separated reader for the observation file.
//!
//! Commas always separate fields; there is no quoting. Parsing never fails,
//! malformed cells surface later as absent or NaN values.

use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Terminator};

use super::record::Record;

const BOM: char = '\u{feff}';

/// Parsed CSV contents: the header row and one record per non-empty line
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub header: Arc<[String]>,
    pub records: Vec<Record>,
}

/// Parse raw CSV text.
///
/// `\r\n` line endings are normalized to `\n`, which is then the only record
/// terminator; a lone `\r` stays part of its field. The first line names the
/// fields and every later non-empty line is zipped positionally against them.
pub fn parse_csv(text: &str) -> ParsedCsv {
    profiling::scope!("parse_csv");

    let text = text.strip_prefix(BOM).unwrap_or(text);
    let normalized = text.replace("\r\n", "\n");
    // The reader skips blank lines, but a blank first line still means no header
    if normalized.is_empty() || normalized.starts_with('\n') {
        return ParsedCsv::default();
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(normalized.as_bytes());

    let mut rows = reader.records().filter_map(|row| match row {
        Ok(row) => Some(row),
        Err(e) => {
            tracing::warn!(error = %e, "skipping unreadable CSV line");
            None
        }
    });

    let header: Arc<[String]> = match rows.next() {
        Some(first) => fields(&first).collect(),
        None => return ParsedCsv::default(),
    };

    let records = rows
        .map(|row| Record::new(Arc::clone(&header), fields(&row).collect()))
        .collect();

    ParsedCsv { header, records }
}

fn fields(row: &StringRecord) -> impl Iterator<Item = String> + '_ {
    row.iter().map(str::to_string)
}
