use crate::mutation::genetic_code::{codon_usage_probabilities, point_mutation_transitions};
use crate::mutation::tables::{GENERATION_PROBABILITIES, THOMAS_DILL, TRANSITION_PROBABILITIES};
use crate::shared::amino_acids::{
    AminoAcid, MutationOutcome, ALPHABET, NB_AMINO_ACIDS, NB_OUTCOMES,
};
use crate::shared::distributions::{CumulativeDistribution, DiscreteDistribution};
use crate::shared::utils::{check_distribution, check_symmetric};
use anyhow::Result;
use ndarray::{Array1, Array2};
use rand::Rng;

pub type GenerationTable = [f64; NB_AMINO_ACIDS];
pub type TransitionTable = [[f64; NB_OUTCOMES]; NB_AMINO_ACIDS];
pub type EnergyTable = [[f64; NB_AMINO_ACIDS]; NB_AMINO_ACIDS];

/// Samplers built from the tables, so that they are only built once
#[derive(Clone, Debug)]
struct Generative {
    d_generation: CumulativeDistribution,
    d_transitions: Vec<DiscreteDistribution>, // one per source amino-acid
}

/// Amino-acid generation, point mutations (genetics) and the substitution
/// energies (biophysics). The three tables are kept separate and are never
/// modified after construction.
#[derive(Clone, Debug)]
pub struct MutationModel {
    generation: GenerationTable,
    transitions: TransitionTable,
    energies: EnergyTable,
    gen: Generative,
}

impl MutationModel {
    /// Model built on the embedded tables, checked before use
    pub fn new() -> Result<MutationModel> {
        MutationModel::from_tables(
            &GENERATION_PROBABILITIES,
            &TRANSITION_PROBABILITIES,
            &THOMAS_DILL,
        )
    }

    /// Build the model from user-provided tables. The tables are not
    /// normalized: a generation vector or a transition row that doesn't sum
    /// to 1, or a non-symmetric energy matrix, is an error.
    pub fn from_tables(
        generation: &GenerationTable,
        transitions: &TransitionTable,
        energies: &EnergyTable,
    ) -> Result<MutationModel> {
        check_distribution(generation, "generation probabilities")?;
        for aa in AminoAcid::iter() {
            check_distribution(
                &transitions[aa.index()],
                &format!("transition probabilities of {}", aa),
            )?;
        }
        check_symmetric(energies, "substitution energies")?;

        let gen = Generative {
            d_generation: CumulativeDistribution::new(generation)?,
            d_transitions: transitions
                .iter()
                .map(|row| DiscreteDistribution::new(row.to_vec()))
                .collect::<Result<Vec<_>>>()?,
        };
        log::debug!("Mutation model tables checked");

        Ok(MutationModel {
            generation: *generation,
            transitions: *transitions,
            energies: *energies,
            gen,
        })
    }

    /// Same model, but with the generation and transition tables derived
    /// from the standard genetic code instead of the embedded values.
    pub fn from_genetic_code() -> Result<MutationModel> {
        let mut generation = [0.; NB_AMINO_ACIDS];
        for (g, &p) in generation.iter_mut().zip(codon_usage_probabilities()?.iter()) {
            *g = p;
        }
        let mut transitions = [[0.; NB_OUTCOMES]; NB_AMINO_ACIDS];
        for ((ii, jj), &p) in point_mutation_transitions()?.indexed_iter() {
            transitions[ii][jj] = p;
        }
        MutationModel::from_tables(&generation, &transitions, &THOMAS_DILL)
    }

    pub fn generation_probability(&self, aa: AminoAcid) -> f64 {
        self.generation[aa.index()]
    }

    pub fn generation_probabilities(&self) -> &GenerationTable {
        &self.generation
    }

    pub fn cumulative_generation_probabilities(&self) -> &[f64] {
        self.gen.d_generation.cumulative()
    }

    pub fn transition_probability(&self, from: AminoAcid, to: MutationOutcome) -> f64 {
        self.transitions[from.index()][to.index()]
    }

    /// Distribution of the outcomes for a point mutation of `from`
    pub fn transition_probabilities(&self, from: AminoAcid) -> &[f64; NB_OUTCOMES] {
        &self.transitions[from.index()]
    }

    /// Thomas-Dill energy of the pair (a, b), symmetric in a and b
    pub fn substitution_energy(&self, a: AminoAcid, b: AminoAcid) -> f64 {
        self.energies[a.index()][b.index()]
    }

    /// Change of the contact energy with the epitope residue `epitope` when
    /// the key residue `old` is replaced by `new`
    pub fn substitution_delta(&self, old: AminoAcid, new: AminoAcid, epitope: AminoAcid) -> f64 {
        self.substitution_energy(new, epitope) - self.substitution_energy(old, epitope)
    }

    /// Draw an amino-acid according to the generation probabilities
    pub fn sample_generated_symbol<R: Rng>(&self, rng: &mut R) -> AminoAcid {
        ALPHABET[self.gen.d_generation.generate(rng)]
    }

    /// Draw a full sequence (for example a key region) residue by residue
    pub fn generate_sequence<R: Rng>(&self, length: usize, rng: &mut R) -> Vec<AminoAcid> {
        (0..length)
            .map(|_| self.sample_generated_symbol(rng))
            .collect()
    }

    /// Outcome of one point mutation in a codon of `from`. What a stop codon
    /// means for the cell is left to the caller.
    pub fn sample_transition<R: Rng>(&self, from: AminoAcid, rng: &mut R) -> MutationOutcome {
        let idx = self.gen.d_transitions[from.index()].generate(rng);
        match ALPHABET.get(idx) {
            Some(&aa) => MutationOutcome::Residue(aa),
            None => MutationOutcome::Stop,
        }
    }

    pub fn generation_probabilities_array(&self) -> Array1<f64> {
        Array1::from(self.generation.to_vec())
    }

    /// Transition matrix, rows: source amino-acid, columns: outcome (stop last)
    pub fn transition_matrix_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((NB_AMINO_ACIDS, NB_OUTCOMES), |(ii, jj)| {
            self.transitions[ii][jj]
        })
    }

    pub fn substitution_matrix_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((NB_AMINO_ACIDS, NB_AMINO_ACIDS), |(ii, jj)| {
            self.energies[ii][jj]
        })
    }
}
