use crate::core::io::fasta::ReferenceError;
use std::fmt;
use thiserror::Error;

/// The output artifacts written by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Relations,
    MutantPeptides,
    ConcatenatedSequences,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [
        Artifact::Relations,
        Artifact::MutantPeptides,
        Artifact::ConcatenatedSequences,
    ];

    pub fn default_file_name(self) -> &'static str {
        match self {
            Artifact::Relations => "dbpepmutref.txt",
            Artifact::MutantPeptides => "dbsaida.txt",
            Artifact::ConcatenatedSequences => "dbfinal.txt",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Artifact::Relations => "relation table",
            Artifact::MutantPeptides => "mutant peptides",
            Artifact::ConcatenatedSequences => "concatenated sequences",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read reference database: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Failed to read mutation input after line {line}: {source}")]
    MutationInput {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {artifact}: {source}")]
    Output {
        artifact: Artifact,
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    pub(crate) fn output(artifact: Artifact) -> impl FnOnce(std::io::Error) -> Self {
        move |source| EngineError::Output { artifact, source }
    }
}
