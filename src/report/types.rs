//! Scan report types.
//!
//! These structs define the JSON contract returned to callers. Field names
//! serialize in camelCase to match the frontend's expectations.

use serde::{Deserialize, Serialize};

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    /// A problem that actively hurts rankings.
    Error,
    /// Worth fixing, but not critical.
    Warning,
    /// A check the page passes.
    Success,
}

/// A single categorized finding surfaced to the end user.
///
/// Issues are reported in synthesis order, which encodes priority; they are
/// never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity, serialized as the `type` field.
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// Short human-readable finding name.
    pub title: String,
    /// One-sentence explanation, citing measured values where relevant.
    pub description: String,
}

impl Issue {
    /// Builds an error-severity issue.
    pub fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            issue_type: IssueType::Error,
            title: title.to_string(),
            description: description.into(),
        }
    }

    /// Builds a warning-severity issue.
    pub fn warning(title: &str, description: impl Into<String>) -> Self {
        Self {
            issue_type: IssueType::Warning,
            title: title.to_string(),
            description: description.into(),
        }
    }

    /// Builds a success-severity issue.
    pub fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            issue_type: IssueType::Success,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Timing display values and non-SEO category scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// First contentful paint, display form (e.g. "1.2 s").
    pub fcp: String,
    /// Largest contentful paint, display form.
    pub lcp: String,
    /// Cumulative layout shift, display form.
    pub cls: String,
    /// Speed index, display form.
    pub speed: String,
    /// Accessibility category score, 0-100.
    pub accessibility: i64,
    /// Best-practices category score, 0-100.
    pub best_practices: i64,
    /// Performance category score, 0-100.
    pub performance_score: i64,
}

/// Markup-derived technical signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalReport {
    /// A `<link rel="canonical">` element is present.
    pub has_canonical: bool,
    /// Any Open Graph meta tag is present.
    pub has_open_graph: bool,
    /// Any Twitter Card meta tag is present.
    pub has_twitter_card: bool,
    /// Any JSON-LD structured data block is present.
    pub has_schema: bool,
    /// The root element declares a language.
    pub has_lang: bool,
    /// Anchors pointing at the scanned host.
    pub internal_links: usize,
    /// Anchors pointing at other hosts.
    pub external_links: usize,
    /// Total image tag count.
    pub image_count: usize,
    /// Images lacking alt text.
    pub images_without_alt: usize,
}

/// Markup-derived content metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    /// Approximate visible word count.
    pub word_count: usize,
    /// Character length of the page title.
    pub title_length: usize,
    /// Character length of the meta description.
    pub meta_desc_length: usize,
    /// Number of H1 headings.
    pub h1_count: usize,
    /// Number of H2 headings.
    pub h2_count: usize,
    /// Number of H3 headings.
    pub h3_count: usize,
}

/// The full scan report returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Composite score: the SEO category score, 0-100.
    pub score: i64,
    /// Findings in synthesis order.
    pub issues: Vec<Issue>,
    /// Timing display values and non-SEO category scores.
    pub performance: PerformanceReport,
    /// Markup-derived technical signals.
    pub technical: TechnicalReport,
    /// Markup-derived content metrics.
    pub content: ContentReport,
}
