use crate::core::models::amino_acid;
use crate::core::models::mutation::{LineRejection, MutationRecord};
use crate::core::models::reference::ReferenceStore;
use thiserror::Error;

/// A mutation applied to its target sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMutation {
    pub record: MutationRecord,
    /// The reference sequence with the mutated position replaced by `alternate_token`.
    pub sequence: String,
    pub reference_token: char,
    pub alternate_token: char,
}

/// Why a record contributed no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("malformed line: {0}")]
    Line(#[from] LineRejection),

    #[error("protein '{protein_id}' is not in the reference database")]
    UnknownProtein { protein_id: String },

    #[error("position {position} is outside 1..={length}")]
    PositionOutOfRange { position: i64, length: usize },

    #[error("residue code '{code}' is not recognized")]
    UnrecognizedResidue { code: String },
}

/// Applies `record` to its target sequence in `store`.
///
/// Character `position - 1` is replaced with the canonical alternate token; every
/// other character is kept, including its case.
pub fn apply(record: MutationRecord, store: &ReferenceStore) -> Result<AppliedMutation, Rejection> {
    let reference = store
        .get(&record.protein_id)
        .ok_or_else(|| Rejection::UnknownProtein {
            protein_id: record.protein_id.clone(),
        })?;

    let length = reference.chars().count();
    if record.position < 1 || record.position as u64 > length as u64 {
        return Err(Rejection::PositionOutOfRange {
            position: record.position,
            length,
        });
    }

    let reference_token = canonical_token(&record.ref_code)?;
    let alternate_token = canonical_token(&record.alt_code)?;

    let index = (record.position - 1) as usize;
    let sequence: String = reference
        .chars()
        .enumerate()
        .map(|(i, c)| if i == index { alternate_token } else { c })
        .collect();

    Ok(AppliedMutation {
        record,
        sequence,
        reference_token,
        alternate_token,
    })
}

fn canonical_token(code: &str) -> Result<char, Rejection> {
    amino_acid::canonical(code).ok_or_else(|| Rejection::UnrecognizedResidue {
        code: code.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, ref_code: &str, position: i64, alt_code: &str) -> MutationRecord {
        MutationRecord {
            protein_id: id.into(),
            variant_id: "rs1".into(),
            ref_code: ref_code.into(),
            position,
            alt_code: alt_code.into(),
        }
    }

    fn store() -> ReferenceStore {
        ReferenceStore::from_entries([("NP_1", "MKVLARGGSTPEK")])
    }

    #[test]
    fn apply_marks_mutated_site_with_lowercase_token() {
        let applied = apply(record("NP_1", "K", 2, "R"), &store()).unwrap();
        assert_eq!(applied.sequence, "MrVLARGGSTPEK");
        assert_eq!(applied.reference_token, 'k');
        assert_eq!(applied.alternate_token, 'r');
        let lowercase: Vec<usize> = applied
            .sequence
            .char_indices()
            .filter(|(_, c)| c.is_ascii_lowercase())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(lowercase, vec![1]);
    }

    #[test]
    fn apply_preserves_sequence_length() {
        let reference = store();
        let original = reference.get("NP_1").unwrap().len();
        for position in 1..=original as i64 {
            let applied = apply(record("NP_1", "Ala", position, "Ter"), &reference).unwrap();
            assert_eq!(applied.sequence.len(), original);
        }
    }

    #[test]
    fn apply_accepts_first_and_last_positions() {
        let applied = apply(record("NP_1", "Met", 1, "Val"), &store()).unwrap();
        assert!(applied.sequence.starts_with('v'));
        let applied = apply(record("NP_1", "Lys", 13, "Glu"), &store()).unwrap();
        assert!(applied.sequence.ends_with('e'));
    }

    #[test]
    fn apply_rejects_unknown_protein() {
        assert_eq!(
            apply(record("NP_9", "K", 2, "R"), &store()),
            Err(Rejection::UnknownProtein {
                protein_id: "NP_9".into()
            })
        );
    }

    #[test]
    fn apply_rejects_position_past_end_or_below_one() {
        for position in [0, -3, 14] {
            assert_eq!(
                apply(record("NP_1", "K", position, "R"), &store()),
                Err(Rejection::PositionOutOfRange {
                    position,
                    length: 13
                })
            );
        }
    }

    #[test]
    fn apply_rejects_unrecognized_codes() {
        assert_eq!(
            apply(record("NP_1", "Xaa", 2, "R"), &store()),
            Err(Rejection::UnrecognizedResidue { code: "Xaa".into() })
        );
        assert_eq!(
            apply(record("NP_1", "K", 2, "B"), &store()),
            Err(Rejection::UnrecognizedResidue { code: "B".into() })
        );
    }

    #[test]
    fn apply_does_not_check_reference_residue_against_sequence() {
        let applied = apply(record("NP_1", "Trp", 2, "Arg"), &store()).unwrap();
        assert_eq!(applied.reference_token, 'w');
        assert_eq!(applied.sequence, "MrVLARGGSTPEK");
    }
}
