//! Scan orchestration.
//!
//! Ties the pipeline together: validate the URL, fan out the page fetch and
//! the external analyzer call concurrently, analyze the fetched markup, then
//! synthesize issues and scores into the final report.

mod url;

pub use self::url::normalize_target_url;

use std::sync::Arc;

use log::{info, warn};

use crate::analyze::analyze_markup;
use crate::config::{Config, PAGESPEED_API_KEY_VAR};
use crate::error_handling::{InitializationError, ScanError};
use crate::fetch::fetch_page;
use crate::initialization::{init_analyzer_client, init_page_client};
use crate::pagespeed::{
    PageSpeedClient, AUDIT_CUMULATIVE_LAYOUT_SHIFT, AUDIT_FIRST_CONTENTFUL_PAINT,
    AUDIT_LARGEST_CONTENTFUL_PAINT, AUDIT_SPEED_INDEX,
};
use crate::report::{
    aggregate_scores, synthesize_issues, ContentReport, PerformanceReport, ScanResult,
    TechnicalReport,
};

/// Stateless scan executor.
///
/// Holds only shared HTTP clients; every scan derives all of its data from
/// the request URL, so a single `Scanner` is safe to share across arbitrary
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Scanner {
    page_client: Arc<reqwest::Client>,
    analyzer: Option<PageSpeedClient>,
}

impl Scanner {
    /// Builds a scanner from the service configuration.
    ///
    /// The analyzer API key comes from `--api-key` or the
    /// `PAGESPEED_API_KEY` environment variable. A missing key does not fail
    /// construction: it surfaces per scan as `ScanError::MissingApiKey`, so
    /// the service can still start and report the misconfiguration to
    /// callers.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let page_client = init_page_client(config)?;
        let analyzer_client = init_analyzer_client()?;

        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(PAGESPEED_API_KEY_VAR).ok())
            .filter(|key| !key.is_empty());

        let analyzer = match api_key {
            Some(key) => Some(PageSpeedClient::new(
                analyzer_client,
                config.pagespeed_endpoint.clone(),
                key,
            )),
            None => {
                warn!(
                    "{PAGESPEED_API_KEY_VAR} not configured; scans will fail until a key is provided"
                );
                None
            }
        };

        Ok(Self {
            page_client,
            analyzer,
        })
    }

    /// Runs a full scan of one URL.
    ///
    /// The page fetch and the analyzer call have no data dependency, so they
    /// are issued concurrently and awaited jointly. An analyzer failure is
    /// fatal (no score without it); a page fetch failure degrades to an
    /// empty document whose signals truthfully read as a page with no SEO
    /// metadata at all.
    ///
    /// # Errors
    ///
    /// * `ScanError::MissingUrl` / `ScanError::InvalidUrl` for bad input
    /// * `ScanError::MissingApiKey` when no analyzer key is configured
    /// * `ScanError::Analyzer*` when the analyzer call fails
    pub async fn scan(&self, raw_url: &str) -> Result<ScanResult, ScanError> {
        let url = normalize_target_url(raw_url)?;
        let analyzer = self.analyzer.as_ref().ok_or(ScanError::MissingApiKey)?;

        info!("Scanning {url}");

        let (html, audit) = tokio::join!(
            fetch_page(&self.page_client, url.as_str()),
            analyzer.analyze(url.as_str())
        );
        let audit = audit?;

        let scores = aggregate_scores(&audit)?;
        let signals = analyze_markup(&html, &url);
        let issues = synthesize_issues(&audit, &signals);

        info!(
            "Scan of {url} complete: score {} with {} issues",
            scores.seo,
            issues.len()
        );

        Ok(ScanResult {
            score: scores.seo,
            issues,
            performance: PerformanceReport {
                fcp: audit.audit_display(AUDIT_FIRST_CONTENTFUL_PAINT),
                lcp: audit.audit_display(AUDIT_LARGEST_CONTENTFUL_PAINT),
                cls: audit.audit_display(AUDIT_CUMULATIVE_LAYOUT_SHIFT),
                speed: audit.audit_display(AUDIT_SPEED_INDEX),
                accessibility: scores.accessibility,
                best_practices: scores.best_practices,
                performance_score: scores.performance,
            },
            technical: TechnicalReport {
                has_canonical: signals.has_canonical,
                has_open_graph: signals.has_open_graph,
                has_twitter_card: signals.has_twitter_card,
                has_schema: signals.has_structured_data,
                has_lang: signals.has_lang_attribute,
                internal_links: signals.internal_links,
                external_links: signals.external_links,
                image_count: signals.image_count,
                images_without_alt: signals.images_without_alt,
            },
            content: ContentReport {
                word_count: signals.word_count,
                title_length: signals.title_length,
                meta_desc_length: signals.meta_description_length,
                h1_count: signals.h1_count,
                h2_count: signals.h2_count,
                h3_count: signals.h3_count,
            },
        })
    }
}
