//! Everything the simulation needs from the binding/mutation model,
//! built and checked once from the parameters
use crate::affinity::AffinityTransform;
use crate::kinetics::AntibodyKinetics;
use crate::mutation::MutationModel;
use crate::shared::amino_acids::{AminoAcid, MutationOutcome};
use crate::shared::parameters::Parameters;
use anyhow::Result;
use rand::Rng;
use std::path::Path;

/// The components are derived from the parameters and read-only afterwards.
/// Changing a parameter means building a new `Model`:
/// ```compile_fail
/// let mut m = gcmemo::Model::load_default().unwrap();
/// m.parameters.binding.thr = 0.2;
/// ```
#[derive(Clone, Debug)]
pub struct Model {
    parameters: Parameters,
    affinity: AffinityTransform,
    mutation: MutationModel,
    kinetics: AntibodyKinetics,
}

impl Model {
    /// Check the parameters and the tables. Fails on any inconsistency,
    /// before a single simulation step is run.
    pub fn new(parameters: Parameters) -> Result<Model> {
        parameters.validate()?;
        let model = Model {
            affinity: parameters.affinity_transform()?,
            mutation: MutationModel::new()?,
            kinetics: parameters.antibody_kinetics()?,
            parameters,
        };
        log::debug!(
            "Model ready: energy gradient {}, intercept {}",
            model.affinity.slope(),
            model.affinity.intercept()
        );
        Ok(model)
    }

    pub fn load_default() -> Result<Model> {
        Model::new(Parameters::default())
    }

    pub fn load_from_file(path: &Path) -> Result<Model> {
        Model::new(Parameters::load_from_file(path)?)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn affinity(&self) -> &AffinityTransform {
        &self.affinity
    }

    pub fn mutation(&self) -> &MutationModel {
        &self.mutation
    }

    pub fn kinetics(&self) -> &AntibodyKinetics {
        &self.kinetics
    }

    pub fn affinity_to_kd(&self, ebind: f64) -> f64 {
        self.affinity.affinity_to_kd(ebind)
    }

    pub fn sample_generated_symbol<R: Rng>(&self, rng: &mut R) -> AminoAcid {
        self.mutation.sample_generated_symbol(rng)
    }

    /// Draw a new hot spot (key region) of `n_key` residues
    pub fn generate_key_region<R: Rng>(&self, rng: &mut R) -> Vec<AminoAcid> {
        self.mutation
            .generate_sequence(self.parameters.binding.n_key, rng)
    }

    pub fn sample_transition<R: Rng>(&self, from: AminoAcid, rng: &mut R) -> MutationOutcome {
        self.mutation.sample_transition(from, rng)
    }

    pub fn substitution_energy(&self, a: AminoAcid, b: AminoAcid) -> f64 {
        self.mutation.substitution_energy(a, b)
    }

    pub fn serum_concentration(&self, t_secr_start: usize, tnow: usize) -> f64 {
        self.kinetics.serum_concentration(t_secr_start, tnow)
    }
}
