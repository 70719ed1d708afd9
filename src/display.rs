//! Caller-side text rendering of ranked results. The ranker itself only
//! returns structured `Prediction`s.

use crate::rank::Prediction;

const BULLET: char = '\u{2022}';

/// One `• label` line per prediction, best first.
pub fn format_bullets(predictions: &[Prediction]) -> String {
    predictions
        .iter()
        .map(|p| format!("{} {}", BULLET, p.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like `format_bullets`, with the raw score appended to each line.
pub fn format_bullets_with_scores(predictions: &[Prediction]) -> String {
    predictions
        .iter()
        .map(|p| format!("{} {} ({:.4})", BULLET, p.label, p.score))
        .collect::<Vec<_>>()
        .join("\n")
}
