use super::digestion::EmittedFragment;
use super::error::{Artifact, EngineError};
use crate::core::io::fasta::write_record;
use crate::core::models::peptide::RelationRecord;
use std::io::{self, Write};
use tracing::trace;

/// A finished concatenated-sequence entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatenatedEntry {
    pub protein_id: String,
    pub sequence: String,
}

/// The fragment texts of the protein currently being written.
///
/// Records for one protein are only joined while they arrive consecutively; a
/// different protein id closes the held entry.
#[derive(Debug, Default)]
pub struct ProteinAccumulator {
    current: Option<ConcatenatedEntry>,
}

impl ProteinAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` to the entry for `protein_id`, returning the previous entry if
    /// this fragment belongs to a different protein.
    pub fn push(&mut self, protein_id: &str, text: &str) -> Option<ConcatenatedEntry> {
        let changed = self
            .current
            .as_ref()
            .is_some_and(|entry| entry.protein_id != protein_id);
        let flushed = if changed { self.current.take() } else { None };

        let entry = self.current.get_or_insert_with(|| ConcatenatedEntry {
            protein_id: protein_id.to_string(),
            sequence: String::new(),
        });
        entry.sequence.push_str(text);

        flushed
    }

    pub fn current_protein(&self) -> Option<&str> {
        self.current.as_ref().map(|entry| entry.protein_id.as_str())
    }

    /// Releases the held entry. Called once at the end of the stream.
    pub fn finish(self) -> Option<ConcatenatedEntry> {
        self.current
    }
}

/// Writes emitted fragments and relation rows to the three artifact sinks.
pub struct OutputAssembler<R: Write, P: Write, C: Write> {
    relations: csv::Writer<R>,
    mutant_peptides: P,
    concatenated: C,
    accumulator: ProteinAccumulator,
}

impl<R: Write, P: Write, C: Write> OutputAssembler<R, P, C> {
    pub fn new(relations: R, mutant_peptides: P, concatenated: C) -> Self {
        let relations = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(relations);

        Self {
            relations,
            mutant_peptides,
            concatenated,
            accumulator: ProteinAccumulator::new(),
        }
    }

    /// Writes one emitted fragment and its relation rows.
    pub fn write(&mut self, emitted: &EmittedFragment) -> Result<(), EngineError> {
        self.write_fragment(&emitted.peptide.protein_id, &emitted.peptide.sequence)?;
        for relation in &emitted.relations {
            self.write_relation(relation)?;
        }
        Ok(())
    }

    pub fn write_fragment(&mut self, protein_id: &str, text: &str) -> Result<(), EngineError> {
        write_record(&mut self.mutant_peptides, protein_id, text)
            .map_err(EngineError::output(Artifact::MutantPeptides))?;

        if let Some(entry) = self.accumulator.push(protein_id, text) {
            trace!(protein = %entry.protein_id, "Protein changed, flushing concatenated entry.");
            write_concatenated(&mut self.concatenated, &entry)?;
        }
        Ok(())
    }

    pub fn write_relation(&mut self, relation: &RelationRecord) -> Result<(), EngineError> {
        self.relations
            .write_record(relation.fields())
            .map_err(|e| EngineError::output(Artifact::Relations)(io::Error::from(e)))
    }

    /// Flushes the pending concatenated entry and every sink, returning the sinks.
    pub fn finish(self) -> Result<(R, P, C), EngineError> {
        let Self {
            mut relations,
            mut mutant_peptides,
            mut concatenated,
            accumulator,
        } = self;

        if let Some(entry) = accumulator.finish() {
            write_concatenated(&mut concatenated, &entry)?;
        }

        relations
            .flush()
            .map_err(EngineError::output(Artifact::Relations))?;
        let relations = relations.into_inner().map_err(|e| {
            let source = io::Error::new(e.error().kind(), e.error().to_string());
            EngineError::output(Artifact::Relations)(source)
        })?;
        mutant_peptides
            .flush()
            .map_err(EngineError::output(Artifact::MutantPeptides))?;
        concatenated
            .flush()
            .map_err(EngineError::output(Artifact::ConcatenatedSequences))?;

        Ok((relations, mutant_peptides, concatenated))
    }
}

fn write_concatenated(writer: &mut impl Write, entry: &ConcatenatedEntry) -> Result<(), EngineError> {
    write_record(writer, &entry.protein_id, &entry.sequence)
        .map_err(EngineError::output(Artifact::ConcatenatedSequences))
}
