//! The amino-acid alphabet and the possible outcomes of a point mutation
use anyhow::{anyhow, Result};
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NB_AMINO_ACIDS: usize = 20;
// the 20 amino-acids + the stop codon
pub const NB_OUTCOMES: usize = NB_AMINO_ACIDS + 1;

/// One residue of the alphabet.
/// The order of the variants is the Thomas-Dill order (grouped by
/// hydrophobicity), every table of the crate is indexed in that order.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum AminoAcid {
    C,
    M,
    F,
    I,
    L,
    V,
    W,
    Y,
    A,
    G,
    T,
    S,
    Q,
    N,
    E,
    D,
    H,
    R,
    K,
    P,
}

pub const ALPHABET: [AminoAcid; NB_AMINO_ACIDS] = [
    AminoAcid::C,
    AminoAcid::M,
    AminoAcid::F,
    AminoAcid::I,
    AminoAcid::L,
    AminoAcid::V,
    AminoAcid::W,
    AminoAcid::Y,
    AminoAcid::A,
    AminoAcid::G,
    AminoAcid::T,
    AminoAcid::S,
    AminoAcid::Q,
    AminoAcid::N,
    AminoAcid::E,
    AminoAcid::D,
    AminoAcid::H,
    AminoAcid::R,
    AminoAcid::K,
    AminoAcid::P,
];

const LETTERS: [u8; NB_AMINO_ACIDS] = *b"CMFILVWYAGTSQNEDHRKP";

static LETTERS_INV: phf::Map<u8, usize> = phf_map! {
    b'C' => 0, b'M' => 1, b'F' => 2, b'I' => 3, b'L' => 4,
    b'V' => 5, b'W' => 6, b'Y' => 7, b'A' => 8, b'G' => 9,
    b'T' => 10, b'S' => 11, b'Q' => 12, b'N' => 13, b'E' => 14,
    b'D' => 15, b'H' => 16, b'R' => 17, b'K' => 18, b'P' => 19,
};

impl AminoAcid {
    /// Row/column of the residue in the tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Result<AminoAcid> {
        ALPHABET
            .get(idx)
            .copied()
            .ok_or(anyhow!("Invalid amino-acid index: {}", idx))
    }

    /// One-letter code (uppercase)
    pub fn to_u8(self) -> u8 {
        LETTERS[self.index()]
    }

    /// Read a one-letter code, lowercase letters are accepted.
    /// ```
    /// use gcmemo::AminoAcid;
    /// assert!(AminoAcid::from_u8(b'w').unwrap() == AminoAcid::W);
    /// assert!(AminoAcid::from_u8(b'*').is_err());
    /// ```
    pub fn from_u8(letter: u8) -> Result<AminoAcid> {
        match LETTERS_INV.get(&letter.to_ascii_uppercase()) {
            Some(&idx) => Ok(ALPHABET[idx]),
            None => Err(anyhow!("Invalid amino-acid letter: {}", letter as char)),
        }
    }

    pub fn iter() -> impl Iterator<Item = AminoAcid> {
        ALPHABET.into_iter()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_u8() as char)
    }
}

/// Read a full residue sequence (e.g. a key region) from its one-letter codes
pub fn amino_acids_from_string(s: &str) -> Result<Vec<AminoAcid>> {
    s.bytes().map(AminoAcid::from_u8).collect()
}

pub fn amino_acids_to_string(seq: &[AminoAcid]) -> String {
    seq.iter().map(|aa| aa.to_u8() as char).collect()
}

/// Result of a single point mutation of a codon.
/// `Stop` is kept apart from the residues, a stop codon truncates the protein.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MutationOutcome {
    Residue(AminoAcid),
    Stop,
}

impl MutationOutcome {
    /// Column of the outcome in the transition matrix (stop is the last one)
    pub fn index(self) -> usize {
        match self {
            MutationOutcome::Residue(aa) => aa.index(),
            MutationOutcome::Stop => NB_AMINO_ACIDS,
        }
    }

    pub fn from_index(idx: usize) -> Result<MutationOutcome> {
        match idx {
            NB_AMINO_ACIDS => Ok(MutationOutcome::Stop),
            _ => Ok(MutationOutcome::Residue(AminoAcid::from_index(idx)?)),
        }
    }

    pub fn is_lethal(self) -> bool {
        self == MutationOutcome::Stop
    }

    /// The residue, if the mutation didn't produce a stop codon
    pub fn residue(self) -> Option<AminoAcid> {
        match self {
            MutationOutcome::Residue(aa) => Some(aa),
            MutationOutcome::Stop => None,
        }
    }

    pub fn iter() -> impl Iterator<Item = MutationOutcome> {
        ALPHABET
            .into_iter()
            .map(MutationOutcome::Residue)
            .chain(std::iter::once(MutationOutcome::Stop))
    }
}

impl From<AminoAcid> for MutationOutcome {
    fn from(aa: AminoAcid) -> MutationOutcome {
        MutationOutcome::Residue(aa)
    }
}

impl fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MutationOutcome::Residue(aa) => write!(f, "{}", aa),
            MutationOutcome::Stop => write!(f, "*"),
        }
    }
}
