//! Score aggregation.
//!
//! Converts the analyzer's 0-1 category scores into the 0-100 integers the
//! report exposes. The composite `score` is the SEO category alone; the
//! other categories are reported alongside, never blended into it.

use crate::error_handling::ScanError;
use crate::pagespeed::{CategoryScores, LighthouseResult};

/// Rounds a 0-1 category score to a 0-100 integer, half-up.
///
/// The epsilon absorbs binary representation error: f64 cannot hold 0.835
/// exactly (it parses just below 83.5%), and that value must still round
/// to 84.
pub fn round_category_score(score: f64) -> i64 {
    (score * 100.0 + 0.5 + 1e-9).floor() as i64
}

/// Rounded 0-100 category scores extracted from an analyzer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatedScores {
    /// The composite score: the SEO category.
    pub seo: i64,
    /// Performance category, 0-100.
    pub performance: i64,
    /// Accessibility category, 0-100.
    pub accessibility: i64,
    /// Best-practices category, 0-100.
    pub best_practices: i64,
}

/// Extracts and rounds the four category scores.
///
/// # Errors
///
/// Returns `ScanError::AnalyzerPayload` when the categories block or the SEO
/// category score is absent: without it no composite score can be produced.
/// Missing non-SEO categories degrade to zero instead.
pub fn aggregate_scores(audit: &LighthouseResult) -> Result<AggregatedScores, ScanError> {
    let categories = audit
        .categories
        .as_ref()
        .ok_or_else(|| ScanError::AnalyzerPayload("missing category scores".to_string()))?;

    let seo = categories
        .seo_score()
        .ok_or_else(|| ScanError::AnalyzerPayload("missing SEO category score".to_string()))?;

    Ok(AggregatedScores {
        seo: round_category_score(seo),
        performance: round_category_score(CategoryScores::score_or_zero(&categories.performance)),
        accessibility: round_category_score(CategoryScores::score_or_zero(
            &categories.accessibility,
        )),
        best_practices: round_category_score(CategoryScores::score_or_zero(
            &categories.best_practices,
        )),
    })
}
