use super::applicator::Rejection;
use crate::core::models::mutation::LineRejection;

/// Counts of rejected records, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub too_few_fields: usize,
    pub invalid_position: usize,
    pub unknown_protein: usize,
    pub position_out_of_range: usize,
    pub unrecognized_residue: usize,
}

impl RejectionCounts {
    pub fn total(&self) -> usize {
        self.too_few_fields
            + self.invalid_position
            + self.unknown_protein
            + self.position_out_of_range
            + self.unrecognized_residue
    }
}

/// Running totals for one pass over the mutation stream.
///
/// Rejected records never produce output or errors; these counters are the only trace
/// they leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub records_read: usize,
    pub records_applied: usize,
    /// Applied records whose digestion emitted nothing.
    pub records_without_output: usize,
    /// Qualifying fragments emptied by re-digestion or stop truncation.
    pub fragments_discarded: usize,
    pub fragments_emitted: usize,
    pub relations_written: usize,
    pub rejections: RejectionCounts,
}

impl Diagnostics {
    pub fn record_rejection(&mut self, rejection: &Rejection) {
        let counts = &mut self.rejections;
        match rejection {
            Rejection::Line(LineRejection::TooFewFields { .. }) => counts.too_few_fields += 1,
            Rejection::Line(LineRejection::InvalidPosition { .. }) => counts.invalid_position += 1,
            Rejection::UnknownProtein { .. } => counts.unknown_protein += 1,
            Rejection::PositionOutOfRange { .. } => counts.position_out_of_range += 1,
            Rejection::UnrecognizedResidue { .. } => counts.unrecognized_residue += 1,
        }
    }
}
