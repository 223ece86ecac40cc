#![warn(clippy::large_types_passed_by_value)]

pub mod affinity;
pub mod kinetics;
pub mod model;
pub mod mutation;
pub mod shared;

pub use crate::affinity::AffinityTransform;
pub use crate::kinetics::AntibodyKinetics;
pub use crate::model::Model;
pub use crate::mutation::MutationModel;

pub use crate::shared::{AminoAcid, MutationOutcome, Parameters, ALPHABET};
