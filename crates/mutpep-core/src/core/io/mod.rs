//! Provides input/output functionality for the sequence and mutation formats.
//!
//! The reference database is a FASTA-like stream with pipe-delimited headers; mutation
//! calls are one record per line. Both readers accept any [`std::io::BufRead`], and the
//! path-based helpers decompress gzip input on the fly.

pub mod fasta;
pub mod mutations;
pub mod reader;
pub mod traits;
