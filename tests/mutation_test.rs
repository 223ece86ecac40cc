use anyhow::Result;
use gcmemo::mutation::tables::{GENERATION_PROBABILITIES, THOMAS_DILL, TRANSITION_PROBABILITIES};
use gcmemo::shared::{NB_AMINO_ACIDS, NB_OUTCOMES};
use gcmemo::{AminoAcid, MutationModel, MutationOutcome, ALPHABET};

mod common;
use common::{chi_square, chi_square_critical, outcome_counts, seeded_rng, NB_DRAWS};

#[test]
fn embedded_tables_are_distributions() -> Result<()> {
    let model = MutationModel::new()?;
    let total: f64 = model.generation_probabilities().iter().sum();
    assert!((total - 1.).abs() < 1e-6);

    for aa in AminoAcid::iter() {
        let row_sum: f64 = model.transition_probabilities(aa).iter().sum();
        assert!((row_sum - 1.).abs() < 1e-6, "row {} sums to {}", aa, row_sum);
    }

    let cumulative = model.cumulative_generation_probabilities();
    assert!(cumulative.len() == NB_AMINO_ACIDS);
    assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
    assert!((cumulative[NB_AMINO_ACIDS - 1] - 1.).abs() < 1e-6);
    Ok(())
}

#[test]
fn substitution_energy_is_symmetric() -> Result<()> {
    let model = MutationModel::new()?;
    for a in AminoAcid::iter() {
        for b in AminoAcid::iter() {
            assert!(model.substitution_energy(a, b) == model.substitution_energy(b, a));
        }
    }
    // spot checks against the Thomas-Dill table
    assert!(model.substitution_energy(AminoAcid::C, AminoAcid::C) == -1.79);
    assert!(model.substitution_energy(AminoAcid::K, AminoAcid::K) == 1.45);
    assert!(model.substitution_energy(AminoAcid::E, AminoAcid::P) == 0.84);
    assert!(model.substitution_energy(AminoAcid::M, AminoAcid::D) == 1.07);

    let delta = model.substitution_delta(AminoAcid::A, AminoAcid::C, AminoAcid::C);
    assert!((delta - (-1.79 + 0.3)).abs() < 1e-12);
    Ok(())
}

#[test]
fn tables_follow_the_alphabet_order() -> Result<()> {
    let model = MutationModel::new()?;
    // Met and Trp have a single codon, Leu/Ser/Arg have six
    assert!(model.generation_probability(AminoAcid::M) == 0.01639344);
    assert!(model.generation_probability(AminoAcid::W) == 0.01639344);
    for aa in [AminoAcid::L, AminoAcid::S, AminoAcid::R] {
        assert!(model.generation_probability(aa) == 0.09836066);
    }
    // Trp (TGG) -> TGA/TAG are stop codons
    let w_stop = model.transition_probability(AminoAcid::W, MutationOutcome::Stop);
    assert!((w_stop - 2. / 9.).abs() < 1e-6);
    // Phe can't mutate into a stop codon in one step
    assert!(model.transition_probability(AminoAcid::F, MutationOutcome::Stop) == 0.);
    Ok(())
}

#[test]
fn tables_match_the_genetic_code() -> Result<()> {
    let embedded = MutationModel::new()?;
    let derived = MutationModel::from_genetic_code()?;
    for aa in AminoAcid::iter() {
        assert!(
            (embedded.generation_probability(aa) - derived.generation_probability(aa)).abs()
                < 1e-6
        );
        for outcome in MutationOutcome::iter() {
            assert!(
                (embedded.transition_probability(aa, outcome)
                    - derived.transition_probability(aa, outcome))
                .abs()
                    < 1e-6,
                "{} -> {}",
                aa,
                outcome
            );
        }
    }
    Ok(())
}

#[test]
fn array_views() -> Result<()> {
    let model = MutationModel::new()?;
    let tm = model.transition_matrix_array();
    assert!(tm.dim() == (NB_AMINO_ACIDS, NB_OUTCOMES));
    assert!(tm[[AminoAcid::W.index(), NB_AMINO_ACIDS]] == TRANSITION_PROBABILITIES[6][20]);
    let sm = model.substitution_matrix_array();
    assert!(sm == sm.t());
    assert!(model.generation_probabilities_array().len() == NB_AMINO_ACIDS);
    Ok(())
}

#[test]
fn transitions_reproduce_the_table() -> Result<()> {
    let model = MutationModel::new()?;
    let mut rng = seeded_rng();
    for aa in AminoAcid::iter() {
        let outcomes: Vec<MutationOutcome> = (0..NB_DRAWS)
            .map(|_| model.sample_transition(aa, &mut rng))
            .collect();
        let counts = outcome_counts(&outcomes);
        let probas = model.transition_probabilities(aa);

        // impossible outcomes are never drawn
        for (idx, &p) in probas.iter().enumerate() {
            if p == 0. {
                assert!(counts[idx] == 0);
            }
        }
        let (stat, df) = chi_square(&counts, probas);
        assert!(
            stat < chi_square_critical(df),
            "{}: chi2 = {} (df = {})",
            aa,
            stat,
            df
        );
    }
    Ok(())
}

#[test]
fn generation_reproduces_the_table() -> Result<()> {
    let model = MutationModel::new()?;
    let mut rng = seeded_rng();
    let mut counts = vec![0; NB_AMINO_ACIDS];
    for aa in model.generate_sequence(NB_DRAWS, &mut rng) {
        counts[aa.index()] += 1;
    }
    let (stat, df) = chi_square(&counts, model.generation_probabilities());
    assert!(df == NB_AMINO_ACIDS - 1);
    assert!(stat < chi_square_critical(df), "chi2 = {}", stat);
    Ok(())
}

#[test]
fn corrupted_tables_are_rejected() {
    let mut generation = GENERATION_PROBABILITIES;
    generation[3] += 0.01;
    assert!(MutationModel::from_tables(&generation, &TRANSITION_PROBABILITIES, &THOMAS_DILL)
        .is_err());

    let mut transitions = TRANSITION_PROBABILITIES;
    transitions[AminoAcid::Y.index()][1] = 0.05;
    assert!(MutationModel::from_tables(&GENERATION_PROBABILITIES, &transitions, &THOMAS_DILL)
        .is_err());

    let mut energies = THOMAS_DILL;
    energies[0][1] = 0.;
    assert!(
        MutationModel::from_tables(&GENERATION_PROBABILITIES, &TRANSITION_PROBABILITIES, &energies)
            .is_err()
    );

    let mut negative = TRANSITION_PROBABILITIES;
    negative[0][0] = -0.11111111;
    negative[0][1] = 0.22222222;
    assert!(MutationModel::from_tables(&GENERATION_PROBABILITIES, &negative, &THOMAS_DILL)
        .is_err());
}

#[test]
fn alphabet_order() {
    let letters: String = ALPHABET.iter().map(|aa| aa.to_string()).collect();
    assert!(letters == "CMFILVWYAGTSQNEDHRKP");
    for (idx, aa) in ALPHABET.iter().enumerate() {
        assert!(aa.index() == idx);
    }
}
