//! Property tests for the pairwise-comparison math.

use ahp_advisor::domain::ahp::{
    ConsistencyEvaluator, CriteriaSet, JudgmentAggregator, Judgments, PairwiseMatrix, WeightSolver,
};
use ahp_advisor::domain::scoring::{MacroScoreRow, MacroScoreTable, Normalizer};
use proptest::prelude::*;

fn criteria(n: usize) -> CriteriaSet {
    CriteriaSet::new((0..n).map(|i| format!("c{}", i))).unwrap()
}

/// Complete reciprocal matrix from row-major upper-triangle intensities.
fn matrix_from_upper(n: usize, upper: &[f64]) -> PairwiseMatrix {
    let set = criteria(n);
    let mut judgments = Judgments::new();
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            judgments.insert(format!("c{}", i), format!("c{}", j), upper[k]);
            k += 1;
        }
    }
    PairwiseMatrix::build_strict(&set, &judgments).unwrap()
}

fn reciprocal_matrix(max_n: usize) -> impl Strategy<Value = PairwiseMatrix> {
    (1usize..=max_n).prop_flat_map(|n| {
        prop::collection::vec(1.0f64 / 9.0..=9.0, n * (n - 1) / 2)
            .prop_map(move |upper| matrix_from_upper(n, &upper))
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn built_matrix_is_reciprocal(m in reciprocal_matrix(7)) {
        let n = m.dimension();
        for i in 0..n {
            prop_assert_eq!(m.get(i, i), 1.0);
            for j in 0..n {
                if i != j {
                    prop_assert!(close(m.get(i, j), 1.0 / m.get(j, i)));
                }
            }
        }
    }

    #[test]
    fn weights_sum_to_one_for_any_positive_square_matrix(
        rows in (1usize..=8).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(0.01f64..100.0, n), n)
        })
    ) {
        let weights = WeightSolver::solve_rows(&rows).unwrap();
        prop_assert_eq!(weights.len(), rows.len());
        prop_assert!((weights.sum() - 1.0).abs() < 1e-9);
        prop_assert!(weights.iter().all(|w| *w > 0.0));
    }

    #[test]
    fn consistent_matrix_has_zero_ratio(
        w in prop::collection::vec(0.05f64..10.0, 1..=9)
    ) {
        let rows: Vec<Vec<f64>> = w
            .iter()
            .map(|wi| w.iter().map(|wj| wi / wj).collect())
            .collect();
        let m = PairwiseMatrix::from_rows(rows).unwrap();
        let weights = m.weights();

        prop_assert!(ConsistencyEvaluator::ratio(&m, &weights).abs() < 1e-9);

        let total: f64 = w.iter().sum();
        for (derived, original) in weights.iter().zip(&w) {
            prop_assert!((derived - original / total).abs() < 1e-9);
        }
    }

    #[test]
    fn ratio_is_zero_up_to_two_criteria(m in reciprocal_matrix(2)) {
        prop_assert_eq!(ConsistencyEvaluator::ratio(&m, &m.weights()), 0.0);
    }

    #[test]
    fn ratio_is_never_negative(m in reciprocal_matrix(7)) {
        prop_assert!(ConsistencyEvaluator::ratio(&m, &m.weights()) >= 0.0);
    }

    #[test]
    fn aggregation_ignores_order(
        (a, b, c) in (3usize..=5).prop_flat_map(|n| {
            let upper = move || prop::collection::vec(1.0f64 / 9.0..=9.0, n * (n - 1) / 2)
                .prop_map(move |u| matrix_from_upper(n, &u));
            (upper(), upper(), upper())
        })
    ) {
        let forward = JudgmentAggregator::aggregate(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let shuffled = JudgmentAggregator::aggregate(&[c, a, b]).unwrap();

        let n = forward.dimension();
        for i in 0..n {
            for j in 0..n {
                prop_assert!(close(forward.get(i, j), shuffled.get(i, j)));
            }
        }
    }

    #[test]
    fn aggregating_identical_matrices_is_identity(m in reciprocal_matrix(6)) {
        let twice = JudgmentAggregator::aggregate(&[m.clone(), m.clone()]).unwrap();
        let n = m.dimension();
        for i in 0..n {
            for j in 0..n {
                prop_assert!(close(twice.get(i, j), m.get(i, j)));
            }
        }
    }

    #[test]
    fn normalized_scores_stay_in_unit_interval(
        cells in prop::collection::vec(
            prop::collection::vec(prop::option::of(1.0f64..=5.0), 3),
            0..12,
        )
    ) {
        let table = MacroScoreTable {
            criteria: criteria(3),
            rows: cells
                .into_iter()
                .enumerate()
                .map(|(i, scores)| MacroScoreRow { alternative: format!("alt{}", i), scores })
                .collect(),
        };

        let normalized = Normalizer::min_max(&table);
        for (before, after) in table.rows.iter().zip(&normalized.rows) {
            for (x, y) in before.scores.iter().zip(&after.scores) {
                prop_assert_eq!(x.is_some(), y.is_some());
                if let Some(y) = y {
                    prop_assert!((0.0..=1.0).contains(y));
                }
            }
        }
    }
}

