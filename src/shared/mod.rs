//! Shared functionalities: alphabet, genetic code, distributions, parameters
pub mod amino_acids;
pub mod distributions;
pub mod parameters;
pub mod sequence;
pub mod utils;

pub use amino_acids::{
    amino_acids_from_string, amino_acids_to_string, AminoAcid, MutationOutcome, ALPHABET,
    NB_AMINO_ACIDS, NB_OUTCOMES,
};
pub use distributions::{CumulativeDistribution, DiscreteDistribution};
pub use parameters::{
    ActivationMode, AntibodyParameters, BindingParameters, DynamicsParameters,
    GerminalCenterParameters, MutationParameters, Parameters, ScheduleParameters,
};
