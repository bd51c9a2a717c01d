//! # Workflows Module
//!
//! High-level entry points that run the complete peptide generation pipeline.
//!
//! ## Overview
//!
//! A run loads the reference database once, then streams the mutation records through
//! the applicator, the digestion engine and the output assembler, one record at a time.
//! Records that fail validation are counted and skipped; only stream failures abort the
//! run.
//!
//! - **Processing Workflow** ([`process`]) - Reference loading, mutation streaming and
//!   artifact writing behind a single call.

pub mod process;
