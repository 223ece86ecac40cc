//! Distributions used to sample residues and mutation outcomes
use crate::shared::utils::cumulative_sum;
use anyhow::{anyhow, Result};
use rand::Rng;
use rand_distr::{Distribution, WeightedAliasIndex};

/// Generate an integer with a given probability
#[derive(Clone, Debug)]
pub struct DiscreteDistribution {
    distribution: WeightedAliasIndex<f64>,
}

impl DiscreteDistribution {
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        if !weights.iter().all(|&x| x >= 0. && x.is_finite()) {
            return Err(anyhow!(
                "Error when creating distribution: negative or non-finite weights"
            ))?;
        }

        let distribution = WeightedAliasIndex::new(weights)
            .map_err(|e| anyhow!(format!("Error when creating distribution: {}", e)))?;
        Ok(DiscreteDistribution { distribution })
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> usize {
        self.distribution.sample(rng)
    }
}

/// Inverse-CDF sampling: draw u in [0, 1) and return the first index whose
/// cumulative probability is >= u.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeDistribution {
    cumulative: Vec<f64>,
}

impl CumulativeDistribution {
    /// The probabilities are used as they are (no normalization)
    pub fn new(probas: &[f64]) -> Result<Self> {
        if probas.is_empty() {
            return Err(anyhow!("Error when creating distribution: no values"));
        }
        if !probas.iter().all(|&x| x >= 0. && x.is_finite()) {
            return Err(anyhow!(
                "Error when creating distribution: negative or non-finite probabilities"
            ));
        }
        Ok(CumulativeDistribution {
            cumulative: cumulative_sum(probas),
        })
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Index for a given u. If rounding leaves the last cumulative value
    /// below u, the last index is returned.
    /// ```
    /// use gcmemo::shared::distributions::CumulativeDistribution;
    /// let d = CumulativeDistribution::new(&[0.25, 0.25, 0.5]).unwrap();
    /// assert!(d.invert(0.) == 0);
    /// assert!(d.invert(0.25) == 0);
    /// assert!(d.invert(0.3) == 1);
    /// assert!(d.invert(0.9) == 2);
    /// let short = CumulativeDistribution::new(&[0.5, 0.49]).unwrap();
    /// assert!(short.invert(0.995) == 1);
    /// ```
    pub fn invert(&self, u: f64) -> usize {
        self.cumulative
            .partition_point(|&c| c < u)
            .min(self.cumulative.len() - 1)
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> usize {
        self.invert(rng.gen::<f64>())
    }
}
