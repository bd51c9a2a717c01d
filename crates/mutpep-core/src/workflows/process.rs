use crate::core::io::mutations::MutationReader;
use crate::core::io::traits::SequenceDatabase;
use crate::core::models::reference::ReferenceStore;
use crate::engine::applicator::{self, Rejection};
use crate::engine::assembler::OutputAssembler;
use crate::engine::config::DigestionConfig;
use crate::engine::diagnostics::Diagnostics;
use crate::engine::digestion::digest;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, trace};

/// The three artifact sinks of a run.
#[derive(Debug)]
pub struct OutputSinks<R, P, C> {
    pub relations: R,
    pub mutant_peptides: P,
    pub concatenated: C,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub proteins_loaded: usize,
    pub skipped_headers: usize,
    pub diagnostics: Diagnostics,
}

/// Loads the reference database from `reference` and processes every record of
/// `mutations` against it.
///
/// The sinks are flushed before returning. On error, whatever was written so far stays
/// in the sinks.
#[instrument(skip_all, name = "process_workflow")]
pub fn run<R: Write, P: Write, C: Write>(
    mut reference: impl BufRead,
    mutations: impl BufRead,
    sinks: OutputSinks<R, P, C>,
    config: &DigestionConfig,
    reporter: &ProgressReporter,
) -> Result<(ProcessSummary, OutputSinks<R, P, C>), EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading Reference",
    });
    let store = ReferenceStore::read_from(&mut reference)?;
    info!(
        "Loaded {} reference protein(s); {} header(s) without an identifier skipped.",
        store.len(),
        store.skipped_headers()
    );
    reporter.report(Progress::PhaseFinish);

    let (diagnostics, sinks) = process_mutations(&store, mutations, sinks, config, reporter)?;

    let summary = ProcessSummary {
        proteins_loaded: store.len(),
        skipped_headers: store.skipped_headers(),
        diagnostics,
    };
    Ok((summary, sinks))
}

/// Streams `mutations` against an already loaded store.
#[instrument(skip_all, name = "mutation_stream")]
pub fn process_mutations<R: Write, P: Write, C: Write>(
    store: &ReferenceStore,
    mutations: impl BufRead,
    sinks: OutputSinks<R, P, C>,
    config: &DigestionConfig,
    reporter: &ProgressReporter,
) -> Result<(Diagnostics, OutputSinks<R, P, C>), EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Digesting Mutations",
    });

    let mut assembler =
        OutputAssembler::new(sinks.relations, sinks.mutant_peptides, sinks.concatenated);
    let mut diagnostics = Diagnostics::default();
    let mut reader = MutationReader::new(mutations);

    while let Some(parsed) = reader.next() {
        let parsed = parsed.map_err(|source| EngineError::MutationInput {
            line: reader.line_num(),
            source,
        })?;
        diagnostics.records_read += 1;

        let applied = match parsed
            .outcome
            .map_err(Rejection::from)
            .and_then(|record| applicator::apply(record, store))
        {
            Ok(applied) => applied,
            Err(rejection) => {
                debug!(line = parsed.line_num, reason = %rejection, "Mutation record skipped.");
                diagnostics.record_rejection(&rejection);
                reporter.report(Progress::RecordProcessed { emitted: 0 });
                continue;
            }
        };
        diagnostics.records_applied += 1;

        let digestion = digest(&applied, config);
        trace!(
            line = parsed.line_num,
            emitted = digestion.emitted.len(),
            discarded = digestion.discarded,
            "Record digested."
        );
        diagnostics.fragments_discarded += digestion.discarded;
        if digestion.emitted.is_empty() {
            diagnostics.records_without_output += 1;
        }

        for emitted in &digestion.emitted {
            assembler.write(emitted)?;
            diagnostics.fragments_emitted += 1;
            diagnostics.relations_written += emitted.relations.len();
        }
        reporter.report(Progress::RecordProcessed {
            emitted: digestion.emitted.len(),
        });
    }

    let (relations, mutant_peptides, concatenated) = assembler.finish()?;
    reporter.report(Progress::PhaseFinish);

    info!(
        "Processed {} record(s): {} applied, {} rejected, {} fragment(s) emitted.",
        diagnostics.records_read,
        diagnostics.records_applied,
        diagnostics.rejections.total(),
        diagnostics.fragments_emitted
    );

    Ok((
        diagnostics,
        OutputSinks {
            relations,
            mutant_peptides,
            concatenated,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};
    use std::sync::Mutex;

    fn sinks() -> OutputSinks<Vec<u8>, Vec<u8>, Vec<u8>> {
        OutputSinks {
            relations: Vec::new(),
            mutant_peptides: Vec::new(),
            concatenated: Vec::new(),
        }
    }

    const REFERENCE: &str = ">gi|1|ref|NP_1.1| test\nAAAAAAAKBBBBBBBR\n";

    #[test]
    fn run_counts_rejections_by_reason() {
        let mutations = "NP_1 rs1 K 8 Q\nNP_1 rs2 K\nNP_1 rs3 K x Q\nNP_9 rs4 K 8 Q\n\
                         NP_1 rs5 K 99 Q\nNP_1 rs6 K 8 Xyz\n";
        let (summary, _) = run(
            Cursor::new(REFERENCE),
            Cursor::new(mutations),
            sinks(),
            &DigestionConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(summary.proteins_loaded, 1);
        let diagnostics = summary.diagnostics;
        assert_eq!(diagnostics.records_read, 6);
        assert_eq!(diagnostics.records_applied, 1);
        assert_eq!(diagnostics.rejections.too_few_fields, 1);
        assert_eq!(diagnostics.rejections.invalid_position, 1);
        assert_eq!(diagnostics.rejections.unknown_protein, 1);
        assert_eq!(diagnostics.rejections.position_out_of_range, 1);
        assert_eq!(diagnostics.rejections.unrecognized_residue, 1);
        assert_eq!(diagnostics.fragments_emitted, 1);
    }

    #[test]
    fn run_reports_phases_and_records() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        run(
            Cursor::new(REFERENCE),
            Cursor::new("NP_1 rs1 K 8 Q\nNP_9 rs2 K 8 Q\n"),
            sinks(),
            &DigestionConfig::default(),
            &reporter,
        )
        .unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        let phases: Vec<&str> = events
            .iter()
            .filter_map(|e| match e {
                Progress::PhaseStart { name } => Some(*name),
                _ => None,
            })
            .collect();
        assert_eq!(phases, vec!["Loading Reference", "Digesting Mutations"]);
        let emitted: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                Progress::RecordProcessed { emitted } => Some(*emitted),
                _ => None,
            })
            .collect();
        assert_eq!(emitted, vec![1, 0]);
    }

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn unreadable_mutation_stream_aborts_the_run() {
        let result = run(
            Cursor::new(REFERENCE),
            io::BufReader::new(BrokenInput),
            sinks(),
            &DigestionConfig::default(),
            &ProgressReporter::new(),
        );
        assert!(matches!(
            result,
            Err(EngineError::MutationInput { line: 0, .. })
        ));
    }

    #[test]
    fn unreadable_reference_stream_aborts_the_run() {
        let result = run(
            io::BufReader::new(BrokenInput),
            Cursor::new("NP_1 rs1 K 8 Q\n"),
            sinks(),
            &DigestionConfig::default(),
            &ProgressReporter::new(),
        );
        assert!(matches!(result, Err(EngineError::Reference(_))));
    }
}
