use mutpep::engine::error::Artifact;
use std::path::PathBuf;

/// Output settings used when neither the config file nor the command line sets them.
pub struct OutputDefaults {
    pub directory: PathBuf,
    pub relations_file: String,
    pub mutant_peptides_file: String,
    pub concatenated_file: String,
    pub preview_lines: usize,
}

impl Default for OutputDefaults {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            relations_file: Artifact::Relations.default_file_name().to_string(),
            mutant_peptides_file: Artifact::MutantPeptides.default_file_name().to_string(),
            concatenated_file: Artifact::ConcatenatedSequences
                .default_file_name()
                .to_string(),
            preview_lines: 10,
        }
    }
}
