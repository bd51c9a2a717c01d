pub mod amino_acid;
pub mod mutation;
pub mod peptide;
pub mod reference;
