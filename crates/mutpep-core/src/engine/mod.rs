//! # Engine Module
//!
//! Turns mutation records into mutant peptides and writes the output artifacts.
//!
//! - **Configuration** ([`config`]) - Length windows and cleavage residues for digestion
//! - **Mutation Application** ([`applicator`]) - Bounds and alphabet checks, single-site editing
//! - **Cleavage Scanning** ([`cleavage`]) - The tryptic fragment scanner
//! - **Digestion** ([`digestion`]) - Fragment selection, re-digestion, stop truncation and
//!   relation expansion
//! - **Output** ([`assembler`]) - The three artifacts and the per-protein accumulator
//! - **Diagnostics** ([`diagnostics`]) - Counts of processed and rejected records
//! - **Progress Monitoring** ([`progress`]) - Progress callbacks for front ends
//! - **Error Handling** ([`error`]) - Fatal, run-aborting failures

pub mod applicator;
pub mod assembler;
pub mod cleavage;
pub mod config;
pub mod diagnostics;
pub mod digestion;
pub mod error;
pub mod progress;
