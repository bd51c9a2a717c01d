use crate::cli::ProcessArgs;
use crate::config::{AppConfig, OutputConfig, PartialProcessConfig};
use crate::error::{CliError, Result};
use crate::utils::input::MutationInput;
use crate::utils::preview::head_lines;
use crate::utils::progress::CliProgressHandler;
use mutpep::{
    core::io::reader::open_reader,
    engine::{error::Artifact, progress::ProgressReporter},
    workflows::process::{self, OutputSinks, ProcessSummary},
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: ProcessArgs) -> Result<()> {
    let partial_config = PartialProcessConfig::load(&args)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let mutations = MutationInput::from_source(&args.mutations)?;
    info!("Reading mutations from {}", mutations.describe());
    let mutations = mutations.open()?;

    info!("Loading reference database from {:?}", &args.reference);
    let reference = open_reader(&args.reference).map_err(CliError::file_access(&args.reference))?;

    let sinks = create_sinks(&config.output)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Generating mutant peptides...");
    info!("Invoking the core processing workflow...");
    let (summary, sinks) = process::run(reference, mutations, sinks, &config.digestion, &reporter)?;
    drop(sinks);

    report_summary(&summary, &config);
    print_previews(&config.output);

    Ok(())
}

fn create_sinks(
    output: &OutputConfig,
) -> Result<OutputSinks<BufWriter<File>, BufWriter<File>, BufWriter<File>>> {
    std::fs::create_dir_all(&output.directory)
        .map_err(CliError::file_access(&output.directory))?;

    let create = |artifact: Artifact| -> Result<BufWriter<File>> {
        let path = output.path_for(artifact);
        info!("Writing {} to {:?}", artifact, &path);
        let file = File::create(&path).map_err(CliError::file_access(&path))?;
        Ok(BufWriter::new(file))
    };

    Ok(OutputSinks {
        relations: create(Artifact::Relations)?,
        mutant_peptides: create(Artifact::MutantPeptides)?,
        concatenated: create(Artifact::ConcatenatedSequences)?,
    })
}

fn report_summary(summary: &ProcessSummary, config: &AppConfig) {
    let diagnostics = &summary.diagnostics;
    let rejections = &diagnostics.rejections;

    if summary.proteins_loaded == 0 {
        warn!("The reference database contained no usable protein entries.");
    }
    if summary.skipped_headers > 0 {
        warn!(
            "{} reference header(s) had no identifier field; their sequences were ignored.",
            summary.skipped_headers
        );
    }

    println!(
        "✓ {} record(s) read, {} applied, {} rejected.",
        diagnostics.records_read,
        diagnostics.records_applied,
        rejections.total()
    );
    if rejections.total() > 0 {
        println!(
            "  Rejected: {} malformed, {} bad position, {} unknown protein, {} out of range, {} unrecognized residue.",
            rejections.too_few_fields,
            rejections.invalid_position,
            rejections.unknown_protein,
            rejections.position_out_of_range,
            rejections.unrecognized_residue
        );
    }
    println!(
        "  {} peptide(s) and {} relation row(s) written ({} fragment(s) discarded during post-processing).",
        diagnostics.fragments_emitted, diagnostics.relations_written, diagnostics.fragments_discarded
    );
    for artifact in Artifact::ALL {
        println!(
            "  {:<24} {}",
            format!("{}:", artifact),
            config.output.path_for(artifact).display()
        );
    }
}

fn print_previews(output: &OutputConfig) {
    if output.preview_lines == 0 {
        return;
    }
    for artifact in Artifact::ALL {
        let path = output.path_for(artifact);
        print_preview(artifact, &path, output.preview_lines);
    }
}

fn print_preview(artifact: Artifact, path: &Path, limit: usize) {
    match head_lines(path, limit) {
        Ok(lines) => {
            println!("\n--- {} (first {} line(s)) ---", artifact, limit);
            if lines.is_empty() {
                println!("  (empty)");
            }
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => warn!("Could not read {:?} for preview: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;

    fn process_args(args: &[&str]) -> ProcessArgs {
        let mut argv = vec!["mutpep", "process"];
        argv.extend_from_slice(args);
        match Cli::parse_from(argv).command {
            Commands::Process(args) => args,
            _ => panic!("Expected 'process' subcommand"),
        }
    }

    #[test]
    fn run_writes_artifacts_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("refseq.fasta");
        fs::write(&reference, ">gi|1|ref|NP_1.1| test\nAAAAAAAKBBBBBBBR\n").unwrap();
        let out_dir = dir.path().join("results");

        let args = process_args(&[
            "-r",
            reference.to_str().unwrap(),
            "--mutation-text",
            "NP_1 rs1 K 8 Q",
            "-o",
            out_dir.to_str().unwrap(),
            "--preview",
            "0",
        ]);
        run(args).unwrap();

        let peptides = fs::read_to_string(out_dir.join("dbsaida.txt")).unwrap();
        assert_eq!(peptides, ">NP_1\nAAAAAAAqBBBBBBBRAAAAAAqBBBBBBBR\n");
        let concatenated = fs::read_to_string(out_dir.join("dbfinal.txt")).unwrap();
        assert_eq!(concatenated, peptides);
        let relations = fs::read_to_string(out_dir.join("dbpepmutref.txt")).unwrap();
        assert!(relations.starts_with(">NP_1\trs1\t0\tp.K8Q\tAAAAAAAkBBBBBBBR\t"));
    }

    #[test]
    fn missing_reference_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("absent.fasta");
        let args = process_args(&[
            "-r",
            reference.to_str().unwrap(),
            "--mutation-text",
            "NP_1 rs1 K 8 Q",
            "-o",
            dir.path().to_str().unwrap(),
        ]);

        let result = run(args);
        assert!(matches!(result, Err(CliError::FileAccess { path, .. }) if path == reference));
    }
}
