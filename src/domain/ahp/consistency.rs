//! Consistency ratio of a pairwise matrix against its derived weights.

use serde::{Deserialize, Serialize};

use super::{PairwiseMatrix, WeightVector};

/// Conventional acceptability threshold: CR at or above this is incoherent.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty's random index for n = 1..=10.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Random index for matrix size `n`; sizes above 10 reuse the n = 10 value.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        1..=10 => RANDOM_INDEX[n - 1],
        _ => RANDOM_INDEX[9],
    }
}

/// Intermediate quantities of a consistency evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub ratio: f64,
}

impl ConsistencyReport {
    /// True when the ratio is below `threshold`.
    pub fn is_acceptable(&self, threshold: f64) -> bool {
        self.ratio < threshold
    }
}

/// Computes Saaty's consistency ratio.
///
/// Informational only: an incoherent matrix is reported, never rejected.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Consistency ratio CR = CI / RI, or 0 when RI is 0 (n ≤ 2).
    ///
    /// `weights` must be the vector derived from `matrix`.
    pub fn ratio(matrix: &PairwiseMatrix, weights: &WeightVector) -> f64 {
        Self::evaluate(matrix, weights).ratio
    }

    /// Full evaluation with λmax, CI and RI.
    ///
    /// # Algorithm
    /// λmax = mean_i((Aw)[i] / w[i]); CI = (λmax − n) / (n − 1).
    pub fn evaluate(matrix: &PairwiseMatrix, weights: &WeightVector) -> ConsistencyReport {
        let n = matrix.dimension();
        debug_assert_eq!(n, weights.len(), "weights must come from this matrix");

        let ri = random_index(n);
        if n <= 2 {
            return ConsistencyReport {
                lambda_max: n as f64,
                consistency_index: 0.0,
                random_index: ri,
                ratio: 0.0,
            };
        }

        let w = weights.to_dvector();
        let aw = matrix.as_matrix() * &w;
        let lambda_max = aw
            .iter()
            .zip(w.iter())
            .map(|(a, w)| a / w)
            .sum::<f64>()
            / n as f64;

        let nf = n as f64;
        // λmax ≥ n for positive reciprocal matrices; clamp rounding noise.
        let consistency_index = ((lambda_max - nf) / (nf - 1.0)).max(0.0);
        let ratio = if ri == 0.0 { 0.0 } else { consistency_index / ri };

        ConsistencyReport {
            lambda_max,
            consistency_index,
            random_index: ri,
            ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{CriteriaSet, Judgments};

    fn consistent_matrix(w: &[f64]) -> PairwiseMatrix {
        PairwiseMatrix::from_upper(w.len(), |i, j| w[i] / w[j])
    }

    #[test]
    fn random_index_table() {
        assert_eq!(random_index(1), 0.0);
        assert_eq!(random_index(2), 0.0);
        assert_eq!(random_index(3), 0.58);
        assert_eq!(random_index(4), 0.90);
        assert_eq!(random_index(5), 1.12);
        assert_eq!(random_index(10), 1.49);
        assert_eq!(random_index(15), 1.49);
    }

    #[test]
    fn perfectly_consistent_matrix_has_zero_ratio() {
        let matrix = consistent_matrix(&[0.5, 0.3, 0.2]);
        let weights = matrix.weights();
        let report = ConsistencyEvaluator::evaluate(&matrix, &weights);

        assert!(report.ratio.abs() < 1e-9);
        assert!((report.lambda_max - 3.0).abs() < 1e-9);
        assert!(report.is_acceptable(CONSISTENCY_THRESHOLD));
    }

    #[test]
    fn two_by_two_is_always_consistent() {
        let criteria = CriteriaSet::new(["A", "B"]).unwrap();
        let matrix =
            PairwiseMatrix::build(&criteria, &Judgments::new().compare("A", "B", 9.0)).unwrap();
        assert_eq!(ConsistencyEvaluator::ratio(&matrix, &matrix.weights()), 0.0);
    }

    #[test]
    fn single_criterion_is_always_consistent() {
        let criteria = CriteriaSet::new(["A"]).unwrap();
        let matrix = PairwiseMatrix::build(&criteria, &Judgments::new()).unwrap();
        assert_eq!(ConsistencyEvaluator::ratio(&matrix, &matrix.weights()), 0.0);
    }

    #[test]
    fn example_matrix_is_slightly_inconsistent() {
        let criteria = CriteriaSet::new(["A", "B", "C"]).unwrap();
        let judgments = Judgments::new()
            .compare("A", "B", 3.0)
            .compare("A", "C", 5.0)
            .compare("B", "C", 2.0);
        let matrix = PairwiseMatrix::build(&criteria, &judgments).unwrap();
        let cr = ConsistencyEvaluator::ratio(&matrix, &matrix.weights());

        assert!(cr >= 0.0);
        assert!(cr < CONSISTENCY_THRESHOLD);
    }

    #[test]
    fn intransitive_judgments_exceed_threshold() {
        // A > B, B > C, but C > A strongly
        let criteria = CriteriaSet::new(["A", "B", "C"]).unwrap();
        let judgments = Judgments::new()
            .compare("A", "B", 9.0)
            .compare("B", "C", 9.0)
            .compare("C", "A", 9.0);
        let matrix = PairwiseMatrix::build(&criteria, &judgments).unwrap();
        let report = ConsistencyEvaluator::evaluate(&matrix, &matrix.weights());

        assert!(report.ratio >= CONSISTENCY_THRESHOLD);
        assert!(!report.is_acceptable(CONSISTENCY_THRESHOLD));
        assert_eq!(report.random_index, 0.58);
    }
}
