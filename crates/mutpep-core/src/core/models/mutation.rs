use super::reference::strip_version;
use thiserror::Error;

/// Minimum number of fields on a mutation line.
pub const MIN_FIELDS: usize = 5;

/// A point-mutation call as read from one input line.
///
/// Only the shape of the line is checked here; whether the protein exists, the
/// position is in range and the residue codes are known is decided when the
/// mutation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub protein_id: String,
    pub variant_id: String,
    pub ref_code: String,
    pub position: i64,
    pub alt_code: String,
}

/// Why a mutation line was not turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineRejection {
    #[error("expected at least {MIN_FIELDS} fields, found {found}")]
    TooFewFields { found: usize },
    #[error("position '{value}' is not an integer")]
    InvalidPosition { value: String },
}

impl MutationRecord {
    /// Parses one mutation line.
    ///
    /// The line is split on tabs if it contains one, otherwise on runs of whitespace.
    /// Fields beyond the fifth are ignored.
    pub fn parse_line(line: &str) -> Result<Self, LineRejection> {
        let line = line.trim();
        let fields: Vec<&str> = if line.contains('\t') {
            line.split('\t').collect()
        } else {
            line.split_whitespace().collect()
        };

        if fields.len() < MIN_FIELDS {
            return Err(LineRejection::TooFewFields {
                found: fields.len(),
            });
        }

        let position = fields[3]
            .trim()
            .parse::<i64>()
            .map_err(|_| LineRejection::InvalidPosition {
                value: fields[3].to_string(),
            })?;

        Ok(Self {
            protein_id: strip_version(fields[0]).to_string(),
            variant_id: fields[1].to_string(),
            ref_code: fields[2].to_string(),
            position,
            alt_code: fields[4].to_string(),
        })
    }

    /// The `p.<ref><pos><alt>` descriptor, using the codes as written.
    pub fn descriptor(&self) -> String {
        format!("p.{}{}{}", self.ref_code, self.position, self.alt_code)
    }
}
