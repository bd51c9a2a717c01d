//! # Core Module
//!
//! Data models and text readers shared by the engine.
//!
//! - **Residue codes and records** ([`models`]) - The amino acid code table, the reference
//!   sequence store, mutation records, peptide fragments and relation records
//! - **File I/O** ([`io`]) - FASTA-like reference parsing, mutation line reading, and
//!   transparent decompression of `.gz` inputs

pub mod io;
pub mod models;
