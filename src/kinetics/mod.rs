//! Antibody feedback: serum concentration of the secreted antibodies
pub mod antibody;

pub use antibody::AntibodyKinetics;
