use anyhow::{anyhow, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Antibody secreted by plasma cells: a constant amount per timestep,
/// each dose decays exponentially and is diluted in the blood volume.
/// Deserialization goes through `new`, invalid values are rejected, and
/// the fields can't be set directly:
/// ```compile_fail
/// let k = gcmemo::AntibodyKinetics {
///     secretion_rate: 1.,
///     half_life: 0.,
///     blood_volume: 5.,
/// };
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "KineticsValues")]
pub struct AntibodyKinetics {
    secretion_rate: f64, // mol per cell and per timestep
    half_life: f64,      // timesteps
    blood_volume: f64,   // l
}

#[derive(Deserialize)]
struct KineticsValues {
    secretion_rate: f64,
    half_life: f64,
    blood_volume: f64,
}

impl TryFrom<KineticsValues> for AntibodyKinetics {
    type Error = anyhow::Error;

    fn try_from(v: KineticsValues) -> Result<AntibodyKinetics> {
        AntibodyKinetics::new(v.secretion_rate, v.half_life, v.blood_volume)
    }
}

impl AntibodyKinetics {
    pub fn new(secretion_rate: f64, half_life: f64, blood_volume: f64) -> Result<AntibodyKinetics> {
        if !(secretion_rate.is_finite() && secretion_rate >= 0.) {
            return Err(anyhow!(
                "Invalid antibody secretion rate: {}",
                secretion_rate
            ));
        }
        if !(half_life.is_finite() && half_life > 0.) {
            return Err(anyhow!("Invalid antibody half-life: {}", half_life));
        }
        if !(blood_volume.is_finite() && blood_volume > 0.) {
            return Err(anyhow!("Invalid blood volume: {}", blood_volume));
        }
        Ok(AntibodyKinetics {
            secretion_rate,
            half_life,
            blood_volume,
        })
    }

    pub fn secretion_rate(&self) -> f64 {
        self.secretion_rate
    }

    pub fn half_life(&self) -> f64 {
        self.half_life
    }

    pub fn blood_volume(&self) -> f64 {
        self.blood_volume
    }

    /// Serum concentration (mol/l) due to a single plasma cell that started
    /// secreting at `t_secr_start`. One dose per timestep in
    /// `t_secr_start..=tnow`, the dose of age k is scaled by 0.5^(k/half_life).
    /// If `tnow < t_secr_start` the sum is empty and the result is 0.
    /// ```
    /// use gcmemo::kinetics::AntibodyKinetics;
    /// let k = AntibodyKinetics::new(1., 10., 5.).unwrap();
    /// assert!(k.serum_concentration(3, 3) == 0.2);
    /// assert!(k.serum_concentration(4, 3) == 0.);
    /// ```
    pub fn serum_concentration(&self, t_secr_start: usize, tnow: usize) -> f64 {
        if tnow < t_secr_start {
            return 0.;
        }
        let secreted: f64 = (0..=tnow - t_secr_start)
            .map(|k| self.secretion_rate * 0.5f64.powf(k as f64 / self.half_life))
            .sum();
        secreted / self.blood_volume
    }

    /// Total serum concentration for a population of plasma cells, given the
    /// time each of them started secreting.
    pub fn serum_titer(&self, secretion_starts: &[usize], tnow: usize) -> f64 {
        secretion_starts
            .par_iter()
            .map(|&start| self.serum_concentration(start, tnow))
            .sum()
    }
}
