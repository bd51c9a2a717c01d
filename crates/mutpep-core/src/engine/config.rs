use thiserror::Error;

pub const DEFAULT_MIN_LENGTH: usize = 7;
pub const DEFAULT_MAX_LENGTH: usize = 35;
pub const DEFAULT_SUB_FRAGMENT_MIN_LENGTH: usize = 7;
pub const DEFAULT_STOP_MIN_LENGTH: usize = 7;
pub const DEFAULT_CLEAVAGE_RESIDUES: [char; 2] = ['R', 'K'];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Fragment length window is empty: min {min} > max {max}")]
    EmptyLengthWindow { min: usize, max: usize },

    #[error("Length parameter '{0}' must be at least 1")]
    ZeroLength(&'static str),

    #[error("At least one cleavage residue is required")]
    NoCleavageResidues,

    #[error("Cleavage residue '{0}' must be an uppercase ASCII letter")]
    InvalidCleavageResidue(char),
}

/// Parameters of the tryptic digestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestionConfig {
    /// Shortest initial fragment that can carry the mutation.
    pub min_length: usize,
    /// Longest initial fragment that can carry the mutation.
    pub max_length: usize,
    /// Shortest sub-fragment kept when a fragment is re-digested.
    pub sub_fragment_min_length: usize,
    /// Shortest text kept in front of a stop sentinel.
    pub stop_min_length: usize,
    /// Uppercase residues after which the sequence is cleaved.
    pub cleavage_residues: Vec<char>,
}

impl Default for DigestionConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            sub_fragment_min_length: DEFAULT_SUB_FRAGMENT_MIN_LENGTH,
            stop_min_length: DEFAULT_STOP_MIN_LENGTH,
            cleavage_residues: DEFAULT_CLEAVAGE_RESIDUES.to_vec(),
        }
    }
}

/// Builds a [`DigestionConfig`], falling back to the defaults for unset parameters.
#[derive(Default)]
pub struct DigestionConfigBuilder {
    min_length: Option<usize>,
    max_length: Option<usize>,
    sub_fragment_min_length: Option<usize>,
    stop_min_length: Option<usize>,
    cleavage_residues: Option<Vec<char>>,
}

impl DigestionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }
    pub fn sub_fragment_min_length(mut self, length: usize) -> Self {
        self.sub_fragment_min_length = Some(length);
        self
    }
    pub fn stop_min_length(mut self, length: usize) -> Self {
        self.stop_min_length = Some(length);
        self
    }
    pub fn cleavage_residues(mut self, residues: Vec<char>) -> Self {
        self.cleavage_residues = Some(residues);
        self
    }

    pub fn build(self) -> Result<DigestionConfig, ConfigError> {
        let config = DigestionConfig {
            min_length: self.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
            max_length: self.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
            sub_fragment_min_length: self
                .sub_fragment_min_length
                .unwrap_or(DEFAULT_SUB_FRAGMENT_MIN_LENGTH),
            stop_min_length: self.stop_min_length.unwrap_or(DEFAULT_STOP_MIN_LENGTH),
            cleavage_residues: self
                .cleavage_residues
                .unwrap_or_else(|| DEFAULT_CLEAVAGE_RESIDUES.to_vec()),
        };

        for (name, value) in [
            ("min_length", config.min_length),
            ("max_length", config.max_length),
            ("sub_fragment_min_length", config.sub_fragment_min_length),
            ("stop_min_length", config.stop_min_length),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroLength(name));
            }
        }
        if config.min_length > config.max_length {
            return Err(ConfigError::EmptyLengthWindow {
                min: config.min_length,
                max: config.max_length,
            });
        }
        if config.cleavage_residues.is_empty() {
            return Err(ConfigError::NoCleavageResidues);
        }
        // Lowercase marks the mutated site, so cleavage residues must stay uppercase.
        if let Some(&bad) = config
            .cleavage_residues
            .iter()
            .find(|c| !c.is_ascii_uppercase())
        {
            return Err(ConfigError::InvalidCleavageResidue(bad));
        }

        Ok(config)
    }
}
