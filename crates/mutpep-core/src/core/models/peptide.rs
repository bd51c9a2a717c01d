/// A fragment of a mutated sequence that survived digestion and is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeptideFragment {
    pub protein_id: String,
    pub variant_id: String,
    /// Fragment text after duplication, re-digestion and stop truncation.
    pub sequence: String,
    /// Character offset at which the scan produced the fragment.
    pub start: usize,
    /// First occurrence of the untransformed fragment text in the mutated sequence.
    pub site_offset: Option<usize>,
}

/// One row of the peptide-to-mutation relation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationRecord {
    pub protein_id: String,
    pub variant_id: String,
    /// First occurrence of `mutant_peptide` in the mutated sequence.
    pub site_offset: Option<usize>,
    pub descriptor: String,
    pub reference_peptide: String,
    pub mutant_peptide: String,
}

impl RelationRecord {
    /// The offset column; a sub-fragment absent from the sequence is written as `-1`.
    pub fn offset_field(&self) -> String {
        match self.site_offset {
            Some(offset) => offset.to_string(),
            None => "-1".to_string(),
        }
    }

    /// The six columns in output order. The protein column carries a leading `>`.
    pub fn fields(&self) -> [String; 6] {
        [
            format!(">{}", self.protein_id),
            self.variant_id.clone(),
            self.offset_field(),
            self.descriptor.clone(),
            self.reference_peptide.clone(),
            self.mutant_peptide.clone(),
        ]
    }
}
