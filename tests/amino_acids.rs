use anyhow::Result;

use gcmemo::shared::sequence::{all_codons, codon_to_outcome, point_mutants, sense_codons};
use gcmemo::shared::{amino_acids_from_string, amino_acids_to_string};
use gcmemo::{AminoAcid, MutationOutcome};

#[test]
fn amino_acids_test() -> Result<()> {
    let amino_acid_str = "CAFREW";
    let seq = amino_acids_from_string(amino_acid_str)?;
    assert!(seq[1] == AminoAcid::A);
    assert!(amino_acids_to_string(&seq) == amino_acid_str);
    assert!(amino_acids_from_string("cafrew")? == seq);
    assert!(amino_acids_from_string("CAFXEW").is_err());
    assert!(AminoAcid::from_index(20).is_err());
    assert!(MutationOutcome::from_index(20)? == MutationOutcome::Stop);
    assert!(MutationOutcome::from_index(4)? == MutationOutcome::Residue(AminoAcid::L));
    assert!(MutationOutcome::iter().count() == 21);
    Ok(())
}

#[test]
fn genetic_code() -> Result<()> {
    let mut nb_stops = 0;
    let mut nb_codons = 0;
    for codon in all_codons() {
        nb_codons += 1;
        if codon_to_outcome(&codon)?.is_lethal() {
            nb_stops += 1;
        }
    }
    assert!(nb_codons == 64);
    assert!(nb_stops == 3);

    assert!(sense_codons(AminoAcid::M)? == vec![*b"ATG"]);
    assert!(sense_codons(AminoAcid::L)?.len() == 6);
    let total: usize = AminoAcid::iter()
        .map(|aa| sense_codons(aa).map(|c| c.len()))
        .sum::<Result<usize>>()?;
    assert!(total == 61);

    let mutants: Vec<[u8; 3]> = point_mutants(*b"TGG").collect();
    assert!(mutants.len() == 9);
    assert!(mutants.contains(b"TGA") && mutants.contains(b"TAG"));
    assert!(!mutants.contains(b"TGG"));
    assert!(codon_to_outcome(b"XYZ").is_err());
    Ok(())
}
