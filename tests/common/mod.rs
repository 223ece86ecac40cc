use gcmemo::shared::NB_OUTCOMES;
use gcmemo::MutationOutcome;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[allow(dead_code)]
pub const NB_DRAWS: usize = 100_000;

#[allow(dead_code)]
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

/// Pearson statistic of `counts` against `probas` (draws: sum of counts).
/// Categories with probability 0 are skipped, returns (statistic, degrees of freedom).
#[allow(dead_code)]
pub fn chi_square(counts: &[usize], probas: &[f64]) -> (f64, usize) {
    let draws: usize = counts.iter().sum();
    let mut stat = 0.;
    let mut categories = 0;
    for (&obs, &p) in counts.iter().zip(probas.iter()) {
        if p == 0. {
            continue;
        }
        let expected = draws as f64 * p;
        stat += (obs as f64 - expected).powi(2) / expected;
        categories += 1;
    }
    (stat, categories - 1)
}

/// Upper critical value of the chi-square distribution at p = 1e-4
/// (Wilson-Hilferty approximation)
#[allow(dead_code)]
pub fn chi_square_critical(df: usize) -> f64 {
    let z = 3.719;
    let k = df as f64;
    k * (1. - 2. / (9. * k) + z * (2. / (9. * k)).sqrt()).powi(3)
}

#[allow(dead_code)]
pub fn outcome_counts(outcomes: &[MutationOutcome]) -> Vec<usize> {
    let mut counts = vec![0; NB_OUTCOMES];
    for o in outcomes {
        counts[o.index()] += 1;
    }
    counts
}
