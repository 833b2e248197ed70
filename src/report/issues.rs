//! Issue synthesis.
//!
//! Merges the external analyzer's audit results with the markup signals into
//! an ordered list of findings. The checks run in a fixed order and each
//! appends at most one issue; the resulting insertion order encodes the
//! priority a reader of the report perceives (critical tag problems first,
//! then structure, performance, technical, social/rich-snippet, mobile, and
//! finally content/link volume) and must not be re-sorted.

use crate::analyze::MarkupSignals;
use crate::config::{
    FCP_WARN_THRESHOLD_MS, LCP_WARN_THRESHOLD_MS, META_DESCRIPTION_MAX_CHARS,
    META_DESCRIPTION_MIN_CHARS, MIN_WORD_COUNT, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::pagespeed::{
    LighthouseResult, AUDIT_DOCUMENT_TITLE, AUDIT_FIRST_CONTENTFUL_PAINT, AUDIT_IMAGE_ALT,
    AUDIT_LARGEST_CONTENTFUL_PAINT, AUDIT_VIEWPORT,
};
use crate::report::types::Issue;

/// Synthesizes the ordered issue list from audit results and markup signals.
pub fn synthesize_issues(audit: &LighthouseResult, signals: &MarkupSignals) -> Vec<Issue> {
    let mut issues = Vec::new();

    // 1. Meta description
    if !signals.has_meta_description {
        issues.push(Issue::error(
            "Missing Meta Description",
            "Your page is missing a meta description which is crucial for SEO rankings.",
        ));
    } else if signals.meta_description_length < META_DESCRIPTION_MIN_CHARS
        || signals.meta_description_length > META_DESCRIPTION_MAX_CHARS
    {
        issues.push(Issue::warning(
            "Meta Description Length",
            format!(
                "Your meta description is {} characters. Aim for {}-{} characters.",
                signals.meta_description_length, META_DESCRIPTION_MIN_CHARS,
                META_DESCRIPTION_MAX_CHARS
            ),
        ));
    }

    // 2. Title tag
    if !signals.has_title || audit.audit_score(AUDIT_DOCUMENT_TITLE) == Some(0.0) {
        issues.push(Issue::error(
            "Missing or Poor Title Tag",
            "Your page title is missing or not optimized for search engines.",
        ));
    } else if signals.title_length < TITLE_MIN_CHARS || signals.title_length > TITLE_MAX_CHARS {
        issues.push(Issue::warning(
            "Title Tag Length",
            format!(
                "Your title is {} characters. Aim for {}-{} characters.",
                signals.title_length, TITLE_MIN_CHARS, TITLE_MAX_CHARS
            ),
        ));
    }

    // 3. H1 structure
    if signals.h1_count == 0 {
        issues.push(Issue::error(
            "Missing H1 Tag",
            "Your page has no H1 heading, which search engines use to understand the page topic.",
        ));
    } else if signals.h1_count > 1 {
        issues.push(Issue::warning(
            "Multiple H1 Tags",
            format!(
                "Your page has {} H1 headings. Use exactly one H1 per page.",
                signals.h1_count
            ),
        ));
    } else {
        issues.push(Issue::success(
            "Good Heading Structure",
            "Your page has proper H1 tags for better content structure.",
        ));
    }

    // 4. Image alt text
    if audit.audit_score(AUDIT_IMAGE_ALT) == Some(0.0) || signals.images_without_alt > 0 {
        issues.push(Issue::warning(
            "Images Missing Alt Text",
            format!(
                "{} images are missing alt text, hurting accessibility and SEO.",
                signals.images_without_alt
            ),
        ));
    }

    // 5. First contentful paint
    if audit
        .audit_numeric(AUDIT_FIRST_CONTENTFUL_PAINT)
        .is_some_and(|ms| ms > FCP_WARN_THRESHOLD_MS)
    {
        issues.push(Issue::warning(
            "Slow Page Speed",
            format!(
                "Your page takes {} to load. Aim for under 2.5s.",
                audit.audit_display(AUDIT_FIRST_CONTENTFUL_PAINT)
            ),
        ));
    }

    // 6. Largest contentful paint
    if audit
        .audit_numeric(AUDIT_LARGEST_CONTENTFUL_PAINT)
        .is_some_and(|ms| ms > LCP_WARN_THRESHOLD_MS)
    {
        issues.push(Issue::warning(
            "Slow Largest Contentful Paint",
            format!(
                "Your largest content element takes {} to render. Aim for under 2.5s.",
                audit.audit_display(AUDIT_LARGEST_CONTENTFUL_PAINT)
            ),
        ));
    }

    // 7. Transport security
    if !signals.uses_https {
        issues.push(Issue::error(
            "No SSL Certificate",
            "Your website is not using HTTPS, which negatively impacts SEO rankings.",
        ));
    } else {
        issues.push(Issue::success(
            "HTTPS Enabled",
            "Your website uses HTTPS, which is good for security and SEO.",
        ));
    }

    // 8. Canonical tag
    if !signals.has_canonical {
        issues.push(Issue::warning(
            "Missing Canonical Tag",
            "Without a canonical tag, search engines may index duplicate versions of this page.",
        ));
    } else {
        issues.push(Issue::success(
            "Canonical Tag Present",
            "Your page declares a canonical URL, preventing duplicate content issues.",
        ));
    }

    // 9. Language declaration
    if !signals.has_lang_attribute {
        issues.push(Issue::warning(
            "Missing Language Declaration",
            "The <html> element has no lang attribute, which helps search engines and screen readers.",
        ));
    }

    // 10. Open Graph
    if !signals.has_open_graph {
        issues.push(Issue::warning(
            "Missing Open Graph Tags",
            "Without Open Graph tags, shared links to your page render without a rich preview.",
        ));
    } else {
        issues.push(Issue::success(
            "Open Graph Tags Present",
            "Your page provides Open Graph metadata for rich social sharing.",
        ));
    }

    // 11. Twitter Card
    if !signals.has_twitter_card {
        issues.push(Issue::warning(
            "Missing Twitter Card Tags",
            "Twitter Card metadata controls how your page appears when shared on X/Twitter.",
        ));
    }

    // 12. Structured data
    if !signals.has_structured_data {
        issues.push(Issue::warning(
            "No Structured Data",
            "JSON-LD structured data helps search engines show rich snippets for your page.",
        ));
    } else {
        issues.push(Issue::success(
            "Structured Data Present",
            "Your page includes JSON-LD structured data for rich search results.",
        ));
    }

    // 13. Mobile viewport
    if audit.audit_score(AUDIT_VIEWPORT) == Some(1.0) {
        issues.push(Issue::success(
            "Mobile Friendly",
            "Your website has a viewport meta tag and is mobile-optimized.",
        ));
    } else {
        issues.push(Issue::error(
            "Not Mobile Friendly",
            "Your page is missing a valid viewport meta tag, hurting mobile rankings.",
        ));
    }

    // 14. Content volume
    if signals.word_count < MIN_WORD_COUNT {
        issues.push(Issue::warning(
            "Low Content Volume",
            format!(
                "Your page has {} words. Pages with {}+ words tend to rank better.",
                signals.word_count, MIN_WORD_COUNT
            ),
        ));
    }

    // 15. Internal links
    if signals.internal_links == 0 {
        issues.push(Issue::warning(
            "No Internal Links",
            "Internal links help search engines discover and rank your other pages.",
        ));
    }

    issues
}
