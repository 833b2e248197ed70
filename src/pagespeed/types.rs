//! PageSpeed Insights response model.
//!
//! Only the slice of the (very large) API response that the report needs is
//! modeled: named Lighthouse audits and the four category scores. Everything
//! else is ignored during deserialization.

use std::collections::HashMap;

use serde::Deserialize;

// Audit names consumed by the issue pipeline and the performance block.
/// Audit id for the document title check.
pub const AUDIT_DOCUMENT_TITLE: &str = "document-title";
/// Audit id for the image alt text check.
pub const AUDIT_IMAGE_ALT: &str = "image-alt";
/// Audit id for first contentful paint timing.
pub const AUDIT_FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";
/// Audit id for largest contentful paint timing.
pub const AUDIT_LARGEST_CONTENTFUL_PAINT: &str = "largest-contentful-paint";
/// Audit id for cumulative layout shift.
pub const AUDIT_CUMULATIVE_LAYOUT_SHIFT: &str = "cumulative-layout-shift";
/// Audit id for the speed index timing.
pub const AUDIT_SPEED_INDEX: &str = "speed-index";
/// Audit id for the mobile viewport check.
pub const AUDIT_VIEWPORT: &str = "viewport";

/// Top-level PageSpeed Insights response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagespeedResponse {
    /// The Lighthouse report; absent when the analysis failed server-side.
    pub lighthouse_result: Option<LighthouseResult>,
}

/// The Lighthouse portion of a PageSpeed Insights response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseResult {
    /// Named audit results keyed by audit id (e.g. "document-title").
    #[serde(default)]
    pub audits: HashMap<String, AuditResult>,
    /// The four category scores. Absent when the analyzer call failed
    /// upstream; the scan treats that as a fatal dependency error.
    pub categories: Option<CategoryScores>,
}

impl LighthouseResult {
    /// Normalized score (0-1) of a named audit, if the audit ran and scored.
    pub fn audit_score(&self, name: &str) -> Option<f64> {
        self.audits.get(name).and_then(|audit| audit.score)
    }

    /// Numeric value of a named audit (milliseconds for timing audits).
    pub fn audit_numeric(&self, name: &str) -> Option<f64> {
        self.audits.get(name).and_then(|audit| audit.numeric_value)
    }

    /// Human-readable display value of a named audit, or "N/A".
    pub fn audit_display(&self, name: &str) -> String {
        self.audits
            .get(name)
            .and_then(|audit| audit.display_value.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// A single named audit result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Normalized score 0-1, absent for informational audits.
    pub score: Option<f64>,
    /// Human-readable value, e.g. "1.2 s".
    pub display_value: Option<String>,
    /// Raw numeric value; milliseconds for timing audits.
    pub numeric_value: Option<f64>,
}

/// The four Lighthouse category scores, each 0-1.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryScores {
    /// SEO category; the composite score is derived from this one alone.
    pub seo: Option<Category>,
    /// Performance category.
    pub performance: Option<Category>,
    /// Accessibility category.
    pub accessibility: Option<Category>,
    /// Best-practices category.
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
}

impl CategoryScores {
    /// The SEO category score, if the analyzer produced one.
    pub fn seo_score(&self) -> Option<f64> {
        self.seo.as_ref().and_then(|c| c.score)
    }

    /// A non-SEO category score, defaulting to 0 when absent.
    /// Individual missing sub-categories are reported as zero rather than
    /// failing the scan; only a wholly absent categories block is fatal.
    pub fn score_or_zero(category: &Option<Category>) -> f64 {
        category.as_ref().and_then(|c| c.score).unwrap_or(0.0)
    }
}

/// One category entry carrying its normalized score.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    /// Normalized category score 0-1.
    pub score: Option<f64>,
}
