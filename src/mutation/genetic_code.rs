//! Rebuild the generation and transition tables from the standard genetic code.
//!
//! Every sense codon of an amino-acid is equally likely, and a point mutation
//! replaces one of the three bases by one of the three other nucleotides with
//! equal probability (9 mutants per codon).
use crate::shared::amino_acids::{AminoAcid, MutationOutcome, NB_AMINO_ACIDS, NB_OUTCOMES};
use crate::shared::sequence::{all_codons, codon_to_outcome, point_mutants, sense_codons};
use crate::shared::utils::{normalize_transition_matrix, Normalize};
use anyhow::Result;
use ndarray::{Array1, Array2};

/// Number of codons coding for each amino-acid, normalized over the sense codons
pub fn codon_usage_probabilities() -> Result<Array1<f64>> {
    let mut counts = Array1::<f64>::zeros(NB_AMINO_ACIDS);
    for codon in all_codons() {
        if let MutationOutcome::Residue(aa) = codon_to_outcome(&codon)? {
            counts[aa.index()] += 1.;
        }
    }
    counts.normalize_distribution()
}

/// Distribution of the outcomes of one random base change, for each amino-acid
pub fn point_mutation_transitions() -> Result<Array2<f64>> {
    let mut counts = Array2::<f64>::zeros((NB_AMINO_ACIDS, NB_OUTCOMES));
    for aa in AminoAcid::iter() {
        for codon in sense_codons(aa)? {
            for mutant in point_mutants(codon) {
                counts[[aa.index(), codon_to_outcome(&mutant)?.index()]] += 1.;
            }
        }
    }
    normalize_transition_matrix(&counts)
}
