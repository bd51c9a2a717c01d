use super::reader::open_reader;
use std::error::Error;
use std::io::{self, BufRead};
use std::path::Path;

/// Defines the interface for loading an in-memory sequence database.
///
/// Implementors handle format-specific parsing; the path-based helper takes care of
/// opening the file and decompressing it when needed.
pub trait SequenceDatabase: Sized {
    /// The error type for parsing and I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a database from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the content cannot be parsed.
    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error>;

    /// Reads a database from a file path. Paths ending in `.gz` are decompressed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error> {
        let mut reader = open_reader(path.as_ref())?;
        Self::read_from(&mut reader)
    }
}
