mod defaults;

use crate::cli::ProcessArgs;
use crate::error::{CliError, Result};
use defaults::OutputDefaults;
use mutpep::engine::config::{DigestionConfig, DigestionConfigBuilder};
use mutpep::engine::error::Artifact;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialDigestionConfig {
    min_length: Option<usize>,
    max_length: Option<usize>,
    sub_fragment_min_length: Option<usize>,
    stop_min_length: Option<usize>,
    cleavage_residues: Option<Vec<char>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialOutputConfig {
    directory: Option<PathBuf>,
    relations_file: Option<String>,
    mutant_peptides_file: Option<String>,
    concatenated_file: Option<String>,
    preview_lines: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialProcessConfig {
    digestion: Option<PartialDigestionConfig>,
    output: Option<PartialOutputConfig>,
}

/// Where and how the artifacts of a run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub relations_file: String,
    pub mutant_peptides_file: String,
    pub concatenated_file: String,
    pub preview_lines: usize,
}

impl OutputConfig {
    pub fn path_for(&self, artifact: Artifact) -> PathBuf {
        let file_name = match artifact {
            Artifact::Relations => &self.relations_file,
            Artifact::MutantPeptides => &self.mutant_peptides_file,
            Artifact::ConcatenatedSequences => &self.concatenated_file,
        };
        self.directory.join(file_name)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub digestion: DigestionConfig,
    pub output: OutputConfig,
}

impl PartialProcessConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(CliError::file_access(path))?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `args.config` if given, otherwise starts from an empty configuration.
    pub fn load(args: &ProcessArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final configuration: CLI flags over `-S` values over the file over
    /// the built-in defaults.
    pub fn merge_with_cli(mut self, args: &ProcessArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let digestion_file = self.digestion.take().unwrap_or_default();
        let output_file = self.output.take().unwrap_or_default();
        let defaults = OutputDefaults::default();

        let mut builder = DigestionConfigBuilder::new();
        if let Some(length) = args.min_length.or(digestion_file.min_length) {
            builder = builder.min_length(length);
        }
        if let Some(length) = args.max_length.or(digestion_file.max_length) {
            builder = builder.max_length(length);
        }
        if let Some(length) = digestion_file.sub_fragment_min_length {
            builder = builder.sub_fragment_min_length(length);
        }
        if let Some(length) = digestion_file.stop_min_length {
            builder = builder.stop_min_length(length);
        }
        if let Some(residues) = digestion_file.cleavage_residues {
            builder = builder.cleavage_residues(residues);
        }
        let digestion = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let output = OutputConfig {
            directory: args
                .output_dir
                .clone()
                .or(output_file.directory)
                .unwrap_or(defaults.directory),
            relations_file: output_file
                .relations_file
                .unwrap_or(defaults.relations_file),
            mutant_peptides_file: output_file
                .mutant_peptides_file
                .unwrap_or(defaults.mutant_peptides_file),
            concatenated_file: output_file
                .concatenated_file
                .unwrap_or(defaults.concatenated_file),
            preview_lines: args
                .preview
                .or(output_file.preview_lines)
                .unwrap_or(defaults.preview_lines),
        };

        Ok(AppConfig { digestion, output })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "digestion.min-length" => {
                    self.digestion_mut().min_length = Some(parse_value(key, value_str)?);
                }
                "digestion.max-length" => {
                    self.digestion_mut().max_length = Some(parse_value(key, value_str)?);
                }
                "digestion.sub-fragment-min-length" => {
                    self.digestion_mut().sub_fragment_min_length =
                        Some(parse_value(key, value_str)?);
                }
                "digestion.stop-min-length" => {
                    self.digestion_mut().stop_min_length = Some(parse_value(key, value_str)?);
                }
                "digestion.cleavage-residues" => {
                    self.digestion_mut().cleavage_residues = Some(
                        value_str
                            .chars()
                            .filter(|c| !c.is_whitespace() && *c != ',')
                            .collect(),
                    );
                }
                "output.directory" => {
                    self.output_mut().directory = Some(PathBuf::from(value_str));
                }
                "output.relations-file" => {
                    self.output_mut().relations_file = Some(value_str.to_string());
                }
                "output.mutant-peptides-file" => {
                    self.output_mut().mutant_peptides_file = Some(value_str.to_string());
                }
                "output.concatenated-file" => {
                    self.output_mut().concatenated_file = Some(value_str.to_string());
                }
                "output.preview-lines" => {
                    self.output_mut().preview_lines = Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn digestion_mut(&mut self) -> &mut PartialDigestionConfig {
        self.digestion.get_or_insert_with(Default::default)
    }

    fn output_mut(&mut self) -> &mut PartialOutputConfig {
        self.output.get_or_insert_with(Default::default)
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid integer value for {}: {}",
            key, value_str
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("mutpep.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn process_args(extra: &[&str]) -> ProcessArgs {
        let mut args = vec!["mutpep", "process", "-r", "ref.fasta", "-m", "muts.txt"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Process(args) => args,
            _ => panic!("Expected 'process' subcommand"),
        }
    }

    #[test]
    fn no_config_file_resolves_to_defaults() {
        let config = PartialProcessConfig::default()
            .merge_with_cli(&process_args(&[]))
            .unwrap();

        assert_eq!(config.digestion, DigestionConfig::default());
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert_eq!(config.output.preview_lines, 10);
        assert_eq!(
            config.output.path_for(Artifact::MutantPeptides),
            PathBuf::from("./dbsaida.txt")
        );
    }

    #[test]
    fn file_values_replace_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [digestion]
            min-length = 6
            sub-fragment-min-length = 5
            cleavage-residues = ["K"]

            [output]
            directory = "results"
            relations-file = "relations.tsv"
            preview-lines = 3
            "#,
        );

        let config = PartialProcessConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&process_args(&[]))
            .unwrap();

        assert_eq!(config.digestion.min_length, 6);
        assert_eq!(config.digestion.max_length, 35);
        assert_eq!(config.digestion.sub_fragment_min_length, 5);
        assert_eq!(config.digestion.cleavage_residues, vec!['K']);
        assert_eq!(
            config.output.path_for(Artifact::Relations),
            PathBuf::from("results/relations.tsv")
        );
        assert_eq!(
            config.output.path_for(Artifact::ConcatenatedSequences),
            PathBuf::from("results/dbfinal.txt")
        );
        assert_eq!(config.output.preview_lines, 3);
    }

    #[test]
    fn cli_flags_override_set_values_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "[digestion]\nmax-length = 20\n[output]\ndirectory = \"from-file\"\n",
        );

        let args = process_args(&[
            "--max-length",
            "40",
            "-o",
            "from-cli",
            "-S",
            "digestion.max-length=30",
            "-S",
            "digestion.stop-min-length=9",
        ]);
        let config = PartialProcessConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.digestion.max_length, 40);
        assert_eq!(config.digestion.stop_min_length, 9);
        assert_eq!(config.output.directory, PathBuf::from("from-cli"));
    }

    #[test]
    fn set_value_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[output]\npreview-lines = 5\n");

        let args = process_args(&[
            "-S",
            "output.preview-lines=2",
            "-S",
            "digestion.cleavage-residues=R,K,H",
        ]);
        let config = PartialProcessConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.output.preview_lines, 2);
        assert_eq!(config.digestion.cleavage_residues, vec!['R', 'K', 'H']);
    }

    #[test]
    fn malformed_or_unknown_set_values_are_rejected() {
        for set in ["digestion.min-length", "digestion.unknown=1", "digestion.min-length=x"] {
            let result = PartialProcessConfig::default().merge_with_cli(&process_args(&["-S", set]));
            assert!(matches!(result, Err(CliError::Config(_))), "accepted '{}'", set);
        }
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[digestion]\nmissed-cleavages = 2\n");

        let result = PartialProcessConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn inverted_length_window_is_a_config_error() {
        let result = PartialProcessConfig::default().merge_with_cli(&process_args(&[
            "--min-length",
            "30",
            "--max-length",
            "10",
        ]));
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("min 30 > max 10")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }
}
