//! Standard genetic code, and the codon-level view of the point mutations
use crate::shared::amino_acids::{AminoAcid, MutationOutcome};
use anyhow::{anyhow, Result};
use itertools::iproduct;
use phf::phf_map;

static DNA_TO_AMINO: phf::Map<&'static str, u8> = phf_map! {
    "TTT" => b'F', "TTC" => b'F', "TTA" => b'L', "TTG" => b'L', "TCT" => b'S', "TCC" => b'S',
    "TCA" => b'S', "TCG" => b'S', "TAT" => b'Y', "TAC" => b'Y', "TAA" => b'*', "TAG" => b'*',
    "TGT" => b'C', "TGC" => b'C', "TGA" => b'*', "TGG" => b'W', "CTT" => b'L', "CTC" => b'L',
    "CTA" => b'L', "CTG" => b'L', "CCT" => b'P', "CCC" => b'P', "CCA" => b'P', "CCG" => b'P',
    "CAT" => b'H', "CAC" => b'H', "CAA" => b'Q', "CAG" => b'Q', "CGT" => b'R', "CGC" => b'R',
    "CGA" => b'R', "CGG" => b'R', "ATT" => b'I', "ATC" => b'I', "ATA" => b'I', "ATG" => b'M',
    "ACT" => b'T', "ACC" => b'T', "ACA" => b'T', "ACG" => b'T', "AAT" => b'N', "AAC" => b'N',
    "AAA" => b'K', "AAG" => b'K', "AGT" => b'S', "AGC" => b'S', "AGA" => b'R', "AGG" => b'R',
    "GTT" => b'V', "GTC" => b'V', "GTA" => b'V', "GTG" => b'V', "GCT" => b'A', "GCC" => b'A',
    "GCA" => b'A', "GCG" => b'A', "GAT" => b'D', "GAC" => b'D', "GAA" => b'E', "GAG" => b'E',
    "GGT" => b'G', "GGC" => b'G', "GGA" => b'G', "GGG" => b'G'
};

// The standard ACGT nucleotides
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

pub type Codon = [u8; 3];

/// Translate a codon, stop codons give `MutationOutcome::Stop`
/// ```
/// use gcmemo::shared::sequence::codon_to_outcome;
/// use gcmemo::{AminoAcid, MutationOutcome};
/// assert!(codon_to_outcome(b"TGG").unwrap() == MutationOutcome::Residue(AminoAcid::W));
/// assert!(codon_to_outcome(b"TGA").unwrap() == MutationOutcome::Stop);
/// ```
pub fn codon_to_outcome(codon: &Codon) -> Result<MutationOutcome> {
    let codon_str = std::str::from_utf8(codon)?;
    match DNA_TO_AMINO.get(codon_str) {
        Some(b'*') => Ok(MutationOutcome::Stop),
        Some(&letter) => Ok(MutationOutcome::Residue(AminoAcid::from_u8(letter)?)),
        None => Err(anyhow!("Invalid codon: {}", codon_str)),
    }
}

/// All 64 codons, in ACGT order
pub fn all_codons() -> impl Iterator<Item = Codon> {
    iproduct!(NUCLEOTIDES, NUCLEOTIDES, NUCLEOTIDES).map(|(a, b, c)| [a, b, c])
}

/// The codons coding for `aa`
pub fn sense_codons(aa: AminoAcid) -> Result<Vec<Codon>> {
    let mut codons = Vec::new();
    for codon in all_codons() {
        if codon_to_outcome(&codon)? == MutationOutcome::Residue(aa) {
            codons.push(codon);
        }
    }
    Ok(codons)
}

/// The 9 codons that differ from `codon` by exactly one base
pub fn point_mutants(codon: Codon) -> impl Iterator<Item = Codon> {
    iproduct!(0..3, NUCLEOTIDES).filter_map(move |(pos, nt)| {
        if codon[pos] == nt {
            return None;
        }
        let mut mutant = codon;
        mutant[pos] = nt;
        Some(mutant)
    })
}
