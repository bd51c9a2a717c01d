//! # mutpep Core Library
//!
//! Generates mutant tryptic peptides from a reference protein database and a stream of
//! point-mutation calls.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (the amino acid code table, the
//!   reference sequence store, mutation records, peptide and relation records) and the
//!   readers that build them from text streams.
//!
//! - **[`engine`]: The Logic Core.** Applies a mutation to its target sequence, scans the
//!   edited sequence for tryptic fragments, post-processes qualifying fragments, and writes
//!   the three output artifacts while tracking protein boundaries across records.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together behind a single
//!   entry point that takes the input streams and the output sinks.

pub mod core;
pub mod engine;
pub mod workflows;
