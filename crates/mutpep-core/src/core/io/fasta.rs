use super::traits::SequenceDatabase;
use crate::core::models::reference::{ReferenceStore, strip_version};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, trace};

/// Pipe-delimited header field that carries the protein identifier.
pub const IDENTIFIER_FIELD: usize = 3;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Extracts the version-stripped identifier from a header line (`>` already removed
/// or not), or `None` if the header has no identifier field.
pub fn header_identifier(header: &str) -> Option<&str> {
    header
        .split('|')
        .nth(IDENTIFIER_FIELD)
        .map(strip_version)
}

impl SequenceDatabase for ReferenceStore {
    type Error = ReferenceError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut store = ReferenceStore::new();
        let mut current_id: Option<String> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line = line.trim();

            if line.starts_with('>') {
                match header_identifier(line) {
                    Some(id) => {
                        store.open_entry(id.to_string());
                        current_id = Some(id.to_string());
                    }
                    None => {
                        trace!(line = line_num + 1, "Header without identifier field skipped.");
                        store.note_skipped_header();
                        current_id = None;
                    }
                }
                continue;
            }

            if let Some(id) = &current_id {
                store.append_to(id, line);
            }
        }

        debug!(
            proteins = store.len(),
            skipped_headers = store.skipped_headers(),
            "Reference database parsed."
        );
        Ok(store)
    }
}

/// Writes a two-line sequence record: `>header` followed by `body`.
pub fn write_record(writer: &mut impl Write, header: &str, body: &str) -> io::Result<()> {
    writeln!(writer, ">{}", header)?;
    writeln!(writer, "{}", body)
}
