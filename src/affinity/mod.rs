//! Normalized binding energy -> free energy -> dissociation constant
pub mod transform;

pub use transform::{free_energy_to_kd, kd_to_free_energy, AffinityTransform};
