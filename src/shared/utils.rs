use anyhow::{anyhow, Result};
use ndarray::{s, Array1, Array2};

/// Tolerance used when checking that a table of probabilities sums to one
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Running sum, equivalent of np.cumsum
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0., |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Check that `probas` is a probability distribution (non-negative, sums to 1).
/// `name` is only used in the error message.
/// ```
/// use gcmemo::shared::utils::check_distribution;
/// assert!(check_distribution(&[0.2, 0.8], "test").is_ok());
/// assert!(check_distribution(&[0.2, 0.7], "test").is_err());
/// assert!(check_distribution(&[-0.2, 1.2], "test").is_err());
/// ```
pub fn check_distribution(probas: &[f64], name: &str) -> Result<()> {
    if probas.iter().any(|&x| x < 0. || !x.is_finite()) {
        return Err(anyhow!(
            "Corrupted table ({}): negative or non-finite probability",
            name
        ));
    }
    let sum: f64 = probas.iter().sum();
    if (sum - 1.).abs() > PROBABILITY_TOLERANCE {
        return Err(anyhow!(
            "Corrupted table ({}): probabilities sum to {} instead of 1",
            name,
            sum
        ));
    }
    Ok(())
}

/// Check that a square matrix is symmetric (exact equality) and finite
pub fn check_symmetric<const N: usize>(matrix: &[[f64; N]; N], name: &str) -> Result<()> {
    for ii in 0..N {
        for jj in 0..N {
            if !matrix[ii][jj].is_finite() {
                return Err(anyhow!("Corrupted table ({}): non-finite value", name));
            }
            if matrix[ii][jj] != matrix[jj][ii] {
                return Err(anyhow!(
                    "Corrupted table ({}): [{}][{}] = {} but [{}][{}] = {}",
                    name,
                    ii,
                    jj,
                    matrix[ii][jj],
                    jj,
                    ii,
                    matrix[jj][ii]
                ));
            }
        }
    }
    Ok(())
}

pub trait Normalize {
    fn normalize_distribution(&self) -> Result<Self>
    where
        Self: Sized;
}

impl Normalize for Array1<f64> {
    fn normalize_distribution(&self) -> Result<Self> {
        if self.iter().any(|&x| x < 0.0) {
            // negative values mean something wrong happened
            return Err(anyhow!("Array contains non-positive values"));
        }

        let sum = self.sum();
        if sum.abs() == 0.0f64 {
            return Ok(Array1::zeros(self.dim()));
        }

        Ok(self / sum)
    }
}

/// Normalize the elements of the array along the second axis
/// equivalent of a/a.sum(axis=1)[:, np.newaxis] in numpy
/// ```
/// use ndarray::{array, Array2};
/// use gcmemo::shared::utils::normalize_transition_matrix;
/// let a : Array2<f64> = array![[1.0, 3.0], [2.0, 2.0], [0., 0.]];
/// let result = normalize_transition_matrix(&a).unwrap();
/// assert!(result == array![[0.25, 0.75], [0.5, 0.5], [0., 0.]])
/// ```
pub fn normalize_transition_matrix(tm: &Array2<f64>) -> Result<Array2<f64>> {
    if tm.iter().any(|&x| !x.is_finite() || x < 0.) {
        return Err(anyhow!("Array contains negative or non-finite values"));
    }
    let mut normalized = Array2::<f64>::zeros(tm.dim());
    for kk in 0..tm.dim().0 {
        let sum = tm.slice(s![kk, ..]).sum();
        if sum.abs() == 0.0f64 {
            continue;
        }
        for ii in 0..tm.dim().1 {
            normalized[[kk, ii]] = tm[[kk, ii]] / sum;
        }
    }
    Ok(normalized)
}
