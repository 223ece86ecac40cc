//! Somatic hypermutation: which residue appears, and what it is worth
pub mod genetic_code;
pub mod model;
pub mod tables;

pub use model::{EnergyTable, GenerationTable, MutationModel, TransitionTable};
