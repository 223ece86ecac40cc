use anyhow::{anyhow, Result};

// K_D [mol/l]   <-->    Delta G [kT]
// 10^-5         <-->    -11.5
// 10^-6         <-->    -13.8
// 10^-7         <-->    -16.1
// 10^-8         <-->    -18.4
// 10^-9         <-->    -20.7
// 10^-10        <-->    -23.0

/// Dissociation constant (mol/l) for a binding free energy (kT)
pub fn free_energy_to_kd(dg: f64) -> f64 {
    dg.exp()
}

/// Binding free energy (kT) for a dissociation constant (mol/l)
/// ```
/// use gcmemo::affinity::kd_to_free_energy;
/// assert!((kd_to_free_energy(1e-5) + 11.5).abs() < 0.05);
/// assert!((kd_to_free_energy(1e-9) + 20.7).abs() < 0.05);
/// ```
pub fn kd_to_free_energy(kd: f64) -> f64 {
    kd.ln()
}

/// Affine map from the normalized binding energy to the free energy,
/// anchored on thr -> e_low and 1 -> e_high. Only built through `new`,
/// the coefficients can't be given directly:
/// ```compile_fail
/// let t: gcmemo::AffinityTransform =
///     serde_json::from_str(r#"{"slope": 5.0, "intercept": 0.0}"#).unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffinityTransform {
    slope: f64,     // m
    intercept: f64, // y0
}

impl AffinityTransform {
    pub fn new(thr: f64, e_low: f64, e_high: f64) -> Result<AffinityTransform> {
        if !(thr.is_finite() && e_low.is_finite() && e_high.is_finite()) {
            return Err(anyhow!(
                "Invalid affinity transform: thr, e_low and e_high must be finite"
            ));
        }
        if thr == 1. {
            return Err(anyhow!(
                "Invalid affinity transform: thr = 1 leaves the energy gradient undefined"
            ));
        }
        let slope = (e_high - e_low) / (1. - thr);
        let intercept = -slope * thr + e_low;
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(anyhow!(
                "Invalid affinity transform: non-finite gradient (thr = {})",
                thr
            ));
        }
        Ok(AffinityTransform { slope, intercept })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Free energy (kT) of a normalized binding energy. Not clamped, values
    /// outside of [thr, upperlim] are extrapolated.
    pub fn free_energy(&self, ebind: f64) -> f64 {
        self.intercept + self.slope * ebind
    }

    /// Dissociation constant (mol/l) of a normalized binding energy
    /// ```
    /// use gcmemo::affinity::AffinityTransform;
    /// let t = AffinityTransform::new(0.6, -11.5, -20.7).unwrap();
    /// assert!(t.affinity_to_kd(0.8) < t.affinity_to_kd(0.7));
    /// ```
    pub fn affinity_to_kd(&self, ebind: f64) -> f64 {
        free_energy_to_kd(self.free_energy(ebind))
    }
}
