//! Markup signal extraction.
//!
//! Derives a flat record of SEO signals from one HTML document. Parsing is
//! tolerant (html5ever via `scraper`): malformed or partial markup degrades
//! to absent signals, it never aborts the scan. For all single-value
//! extractions (title, meta description) the first match wins.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::analyze::links::{classify_link, LinkScope};
use crate::utils::parse_selector_unsafe;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const OPEN_GRAPH_SELECTOR_STR: &str = "meta[property^='og:']";
const TWITTER_CARD_SELECTOR_STR: &str = "meta[name^='twitter:']";
const HTML_LANG_SELECTOR_STR: &str = "html[lang]";
const H1_SELECTOR_STR: &str = "h1";
const H2_SELECTOR_STR: &str = "h2";
const H3_SELECTOR_STR: &str = "h3";
const IMG_SELECTOR_STR: &str = "img";
const ANCHOR_SELECTOR_STR: &str = "a[href]";
const SCRIPT_SELECTOR_STR: &str = "script";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));
static OPEN_GRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OPEN_GRAPH_SELECTOR_STR, "OPEN_GRAPH_SELECTOR"));
static TWITTER_CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TWITTER_CARD_SELECTOR_STR, "TWITTER_CARD_SELECTOR"));
static HTML_LANG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(HTML_LANG_SELECTOR_STR, "HTML_LANG_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H2_SELECTOR_STR, "H2_SELECTOR"));
static H3_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H3_SELECTOR_STR, "H3_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(SCRIPT_SELECTOR_STR, "SCRIPT_SELECTOR"));

// Tag-stripping pattern for the word count heuristic.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").unwrap_or_else(|e| {
        panic!("Failed to compile tag-strip regex: {e}. This is a programming error.")
    })
});

/// Flat record of SEO signals derived from one HTML document.
///
/// Immutable after construction. `Default` is the all-false/all-zero record,
/// which is exactly what an empty document produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupSignals {
    /// First `<title>` has non-empty text content.
    pub has_title: bool,
    /// Character length of the first title's trimmed text.
    pub title_length: usize,
    /// First `<meta name="description">` carries a content attribute.
    pub has_meta_description: bool,
    /// Character length of the first meta description's trimmed content.
    pub meta_description_length: usize,
    /// A `<link rel="canonical">` element is present.
    pub has_canonical: bool,
    /// Any `<meta property="og:*">` element is present.
    pub has_open_graph: bool,
    /// Any `<meta name="twitter:*">` element is present.
    pub has_twitter_card: bool,
    /// Any `<script type="application/ld+json">` element is present.
    pub has_structured_data: bool,
    /// The root `<html>` element carries a lang attribute.
    pub has_lang_attribute: bool,
    /// Number of `<h1>` elements.
    pub h1_count: usize,
    /// Number of `<h2>` elements.
    pub h2_count: usize,
    /// Number of `<h3>` elements.
    pub h3_count: usize,
    /// Total `<img>` tag count.
    pub image_count: usize,
    /// `<img>` tags lacking an alt attribute entirely (alt="" counts as
    /// present).
    pub images_without_alt: usize,
    /// Anchors classified as internal to the scanned host.
    pub internal_links: usize,
    /// Anchors classified as external.
    pub external_links: usize,
    /// Whitespace-separated token count after stripping tags. A heuristic
    /// approximation, not a rendered-text word count: script and style text
    /// count toward it.
    pub word_count: usize,
    /// The request URL's scheme is https.
    pub uses_https: bool,
}

/// Derives [`MarkupSignals`] from raw HTML and the original request URL.
///
/// Pure function: no I/O, deterministic, and tolerant of malformed input.
/// An empty document yields the all-false/all-zero record.
///
/// # Arguments
///
/// * `html` - Raw HTML text (possibly empty after a degraded fetch)
/// * `url` - The scanned URL, used for the https flag and link
///   classification
pub fn analyze_markup(html: &str, url: &Url) -> MarkupSignals {
    let document = Html::parse_document(html);
    let host = url.host_str();

    let mut signals = MarkupSignals {
        uses_https: url.scheme() == "https",
        ..MarkupSignals::default()
    };

    if let Some(element) = document.select(&TITLE_SELECTOR).next() {
        let title: String = element.text().collect::<String>().trim().to_string();
        signals.has_title = !title.is_empty();
        signals.title_length = title.chars().count();
    }

    if let Some(content) = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
    {
        signals.has_meta_description = true;
        signals.meta_description_length = content.trim().chars().count();
    }

    signals.has_canonical = document.select(&CANONICAL_SELECTOR).next().is_some();
    signals.has_open_graph = document.select(&OPEN_GRAPH_SELECTOR).next().is_some();
    signals.has_twitter_card = document.select(&TWITTER_CARD_SELECTOR).next().is_some();
    signals.has_lang_attribute = document.select(&HTML_LANG_SELECTOR).next().is_some();

    // Attribute value matching is case-sensitive in CSS selectors, so the
    // JSON-LD type check compares ignoring case instead.
    signals.has_structured_data = document.select(&SCRIPT_SELECTOR).any(|element| {
        element
            .value()
            .attr("type")
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
    });

    signals.h1_count = document.select(&H1_SELECTOR).count();
    signals.h2_count = document.select(&H2_SELECTOR).count();
    signals.h3_count = document.select(&H3_SELECTOR).count();

    for element in document.select(&IMG_SELECTOR) {
        signals.image_count += 1;
        if element.value().attr("alt").is_none() {
            signals.images_without_alt += 1;
        }
    }

    for element in document.select(&ANCHOR_SELECTOR) {
        if let Some(href) = element.value().attr("href") {
            match classify_link(href, host) {
                LinkScope::Internal => signals.internal_links += 1,
                LinkScope::External => signals.external_links += 1,
                LinkScope::Unscoped => {}
            }
        }
    }

    signals.word_count = TAG_RE.replace_all(html, " ").split_whitespace().count();

    debug!(
        "Markup signals for {url}: title={} ({} chars), desc={} ({} chars), h1={}, words={}, links={}/{} internal/external",
        signals.has_title,
        signals.title_length,
        signals.has_meta_description,
        signals.meta_description_length,
        signals.h1_count,
        signals.word_count,
        signals.internal_links,
        signals.external_links,
    );

    signals
}
