use crate::cli::MutationSource;
use crate::error::{CliError, Result};
use mutpep::core::io::reader::open_reader;
use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};

/// Accepted extensions for mutation files.
pub const MUTATION_EXTENSIONS: [&str; 4] = ["txt", "fasta", "csv", "tsv"];

/// Path value that selects standard input.
pub const STDIN_PATH: &str = "-";

/// A validated mutation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationInput {
    Stdin,
    File(PathBuf),
    Text(String),
}

impl MutationInput {
    pub fn from_source(source: &MutationSource) -> Result<Self> {
        match (&source.mutations, &source.mutation_text) {
            (_, Some(text)) => {
                if text.trim().is_empty() {
                    return Err(CliError::Argument(
                        "Mutation text cannot be empty.".to_string(),
                    ));
                }
                Ok(MutationInput::Text(text.clone()))
            }
            (Some(path), None) if path.as_os_str() == STDIN_PATH => Ok(MutationInput::Stdin),
            (Some(path), None) => {
                check_extension(path)?;
                Ok(MutationInput::File(path.clone()))
            }
            (None, None) => Err(CliError::Argument(
                "Either --mutations or --mutation-text is required.".to_string(),
            )),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MutationInput::Stdin => "standard input".to_string(),
            MutationInput::File(path) => path.display().to_string(),
            MutationInput::Text(_) => "inline text".to_string(),
        }
    }

    pub fn open(self) -> Result<Box<dyn BufRead>> {
        match self {
            MutationInput::Stdin => Ok(Box::new(io::stdin().lock())),
            MutationInput::File(path) => {
                open_reader(&path).map_err(CliError::file_access(path.as_path()))
            }
            MutationInput::Text(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
        }
    }
}

fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension {
        Some(ext) if MUTATION_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(CliError::Argument(format!(
            "Unsupported mutation file '{}': expected one of .{}",
            path.display(),
            MUTATION_EXTENSIONS.join(", .")
        ))),
    }
}
