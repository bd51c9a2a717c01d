use super::applicator::AppliedMutation;
use super::cleavage::{CaseMode, CleavageScanner};
use super::config::DigestionConfig;
use crate::core::models::amino_acid::{self, STOP_TOKEN};
use crate::core::models::peptide::{PeptideFragment, RelationRecord};

/// A fragment that passed every digestion step, with its relation rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFragment {
    pub peptide: PeptideFragment,
    pub relations: Vec<RelationRecord>,
}

/// Everything one mutation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digestion {
    pub emitted: Vec<EmittedFragment>,
    /// Qualifying fragments whose text became empty during post-processing.
    pub discarded: usize,
}

/// Digests a mutated sequence around its mutation site.
///
/// Fragments are taken from a case-sensitive scan, so the lowercase mutation marker
/// never acts as a cleavage site. A fragment qualifies when its length lies in the
/// configured window and it carries the marker. Qualifying fragments are then
/// duplicated at the N-terminus, re-digested, and truncated at a stop sentinel before
/// they are emitted and expanded into relation rows.
pub fn digest(applied: &AppliedMutation, config: &DigestionConfig) -> Digestion {
    let sequence = applied.sequence.as_str();
    let residues = config.cleavage_residues.as_slice();
    let descriptor = applied.record.descriptor();
    let reference_token = applied.reference_token.to_string();

    let mut digestion = Digestion::default();

    for fragment in CleavageScanner::new(sequence, residues, CaseMode::Sensitive) {
        if !qualifies(fragment.text, config) {
            continue;
        }

        let reference_peptide = fragment
            .text
            .replace(applied.alternate_token, &reference_token);
        let site_offset = char_offset(sequence, fragment.text);

        let processed = post_process(fragment.text, site_offset, config);
        if processed.is_empty() {
            digestion.discarded += 1;
            continue;
        }

        let mut relations = Vec::new();
        let mut last_offset = site_offset;
        for sub in CleavageScanner::new(&processed, residues, CaseMode::Insensitive) {
            last_offset = char_offset(sequence, sub.text);
            relations.push(RelationRecord {
                protein_id: applied.record.protein_id.clone(),
                variant_id: applied.record.variant_id.clone(),
                site_offset: last_offset,
                descriptor: descriptor.clone(),
                reference_peptide: reference_peptide.clone(),
                mutant_peptide: sub.text.to_string(),
            });
        }

        if last_offset == Some(0) && amino_acid::is_stop(&applied.record.alt_code) {
            relations.push(RelationRecord {
                protein_id: applied.record.protein_id.clone(),
                variant_id: applied.record.variant_id.clone(),
                site_offset: Some(1),
                descriptor: descriptor.clone(),
                reference_peptide: reference_peptide.clone(),
                mutant_peptide: drop_first_char(&processed).to_string(),
            });
        }

        digestion.emitted.push(EmittedFragment {
            peptide: PeptideFragment {
                protein_id: applied.record.protein_id.clone(),
                variant_id: applied.record.variant_id.clone(),
                sequence: processed,
                start: fragment.start,
                site_offset,
            },
            relations,
        });
    }

    digestion
}

/// Whether an initial fragment has an acceptable length and carries the mutation marker.
pub fn qualifies(fragment: &str, config: &DigestionConfig) -> bool {
    let length = fragment.chars().count();
    (config.min_length..=config.max_length).contains(&length)
        && fragment.chars().any(|c| c.is_ascii_lowercase())
}

fn post_process(fragment: &str, site_offset: Option<usize>, config: &DigestionConfig) -> String {
    let mut peptide = if site_offset == Some(0) {
        duplicate_n_terminus(fragment)
    } else {
        fragment.to_string()
    };

    if has_lowercase_cleavage(&peptide, &config.cleavage_residues) {
        peptide = redigest(&peptide, config);
    }

    truncate_at_stop(peptide, config.stop_min_length)
}

/// `fragment + fragment[1..]`, applied to fragments that open the protein.
pub fn duplicate_n_terminus(fragment: &str) -> String {
    let mut duplicated = String::with_capacity(fragment.len() * 2);
    duplicated.push_str(fragment);
    duplicated.push_str(drop_first_char(fragment));
    duplicated
}

/// Whether the mutation introduced a lowercase cleavage residue.
pub fn has_lowercase_cleavage(fragment: &str, residues: &[char]) -> bool {
    fragment
        .chars()
        .any(|c| c.is_ascii_lowercase() && residues.contains(&c.to_ascii_uppercase()))
}

/// Rescans both cases and joins the sub-fragments long enough to keep.
pub fn redigest(fragment: &str, config: &DigestionConfig) -> String {
    CleavageScanner::new(fragment, &config.cleavage_residues, CaseMode::Insensitive)
        .filter(|sub| sub.text.chars().count() >= config.sub_fragment_min_length)
        .map(|sub| sub.text)
        .collect()
}

/// Cuts the text in front of the first stop sentinel; too short a remainder empties it.
pub fn truncate_at_stop(peptide: String, min_length: usize) -> String {
    match peptide.find(STOP_TOKEN) {
        Some(index) => {
            let prefix = &peptide[..index];
            if prefix.chars().count() >= min_length {
                prefix.to_string()
            } else {
                String::new()
            }
        }
        None => peptide,
    }
}

/// Character offset of the first occurrence of `needle` in `haystack`.
pub fn char_offset(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_offset| haystack[..byte_offset].chars().count())
}

fn drop_first_char(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.as_str()
}
