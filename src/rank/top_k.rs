use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

pub const DEFAULT_TOP_K: usize = 3;

/// One ranked entry: where it sat in the score vector, its label, its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub index: usize,
    pub label: String,
    pub score: f32,
}

/// Returns the `k` highest-scoring labels, best first.
///
/// `scores[i]` must belong to `labels[i]`; a length mismatch is an
/// `Alignment` error rather than a partial result. Equal scores keep their
/// original index order. NaN scores sort after every real score. If there are
/// fewer than `k` labels, all of them are returned.
pub fn top_k<S: AsRef<str>>(
    scores: &[f32],
    labels: &[S],
    k: usize,
) -> Result<Vec<Prediction>, ClassifyError> {
    if scores.len() != labels.len() {
        return Err(ClassifyError::Alignment { scores: scores.len(), labels: labels.len() });
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    // `sort_by` is stable, which gives the ascending-index tie-break.
    order.sort_by(|&a, &b| descending(scores[a], scores[b]));

    Ok(order
        .into_iter()
        .take(k)
        .map(|i| Prediction { index: i, label: labels[i].as_ref().to_owned(), score: scores[i] })
        .collect())
}

fn descending(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
