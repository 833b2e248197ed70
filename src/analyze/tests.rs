// Markup analyzer tests.

use super::*;
use url::Url;

fn https_url() -> Url {
    Url::parse("https://example.co.uk/page").expect("test URL should parse")
}

fn http_url() -> Url {
    Url::parse("http://insecure-site.test").expect("test URL should parse")
}

#[test]
fn test_empty_html_yields_all_zero_signals() {
    let signals = analyze_markup("", &http_url());
    assert_eq!(
        signals,
        MarkupSignals {
            uses_https: false,
            ..MarkupSignals::default()
        }
    );
}

#[test]
fn test_empty_html_https_flag_comes_from_url() {
    let signals = analyze_markup("", &https_url());
    assert!(signals.uses_https);
    assert!(!signals.has_title);
    assert_eq!(signals.word_count, 0);
}

#[test]
fn test_analyze_is_deterministic() {
    let html = r#"<html lang="en"><head><title>Test Page</title>
        <meta name="description" content="A description">
        <link rel="canonical" href="https://example.co.uk/page">
        </head><body><h1>Heading</h1><p>Some body text here</p>
        <a href="/about">About</a><a href="https://other.com">Other</a>
        </body></html>"#;
    let first = analyze_markup(html, &https_url());
    let second = analyze_markup(html, &https_url());
    assert_eq!(first, second);
}

#[test]
fn test_title_presence_and_length() {
    let html = r#"<html><head><title>Hi</title></head></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert!(signals.has_title);
    assert_eq!(signals.title_length, 2);
}

#[test]
fn test_title_whitespace_trimmed() {
    let html = "<html><head><title>\n   Test Page   \n</title></head></html>";
    let signals = analyze_markup(html, &https_url());
    assert!(signals.has_title);
    assert_eq!(signals.title_length, "Test Page".chars().count());
}

#[test]
fn test_empty_title_counts_as_missing() {
    let html = r#"<html><head><title>   </title></head></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert!(!signals.has_title);
    assert_eq!(signals.title_length, 0);
}

#[test]
fn test_first_title_wins() {
    let html = r#"<html><head><title>First</title><title>Second title</title></head></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert_eq!(signals.title_length, 5);
}

#[test]
fn test_meta_description_presence_and_length() {
    let html = r#"<html><head><meta name="description" content="A short description"></head></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert!(signals.has_meta_description);
    assert_eq!(
        signals.meta_description_length,
        "A short description".chars().count()
    );
}

#[test]
fn test_first_meta_description_wins() {
    let html = r#"<html><head>
        <meta name="description" content="first">
        <meta name="description" content="the much longer second description">
        </head></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert_eq!(signals.meta_description_length, 5);
}

#[test]
fn test_meta_description_missing_content_attribute() {
    let html = r#"<html><head><meta name="description"></head></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert!(!signals.has_meta_description);
}

#[test]
fn test_canonical_detection() {
    let with = r#"<html><head><link rel="canonical" href="https://example.co.uk/"></head></html>"#;
    let without = r#"<html><head><link rel="stylesheet" href="/style.css"></head></html>"#;
    assert!(analyze_markup(with, &https_url()).has_canonical);
    assert!(!analyze_markup(without, &https_url()).has_canonical);
}

#[test]
fn test_open_graph_detection() {
    let html = r#"<html><head><meta property="og:title" content="Title"></head></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert!(signals.has_open_graph);
    assert!(!signals.has_twitter_card);
}

#[test]
fn test_twitter_card_detection() {
    let html = r#"<html><head><meta name="twitter:card" content="summary"></head></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert!(signals.has_twitter_card);
    assert!(!signals.has_open_graph);
}

#[test]
fn test_structured_data_detection() {
    let html = r#"<html><head><script type="application/ld+json">{"@type":"WebPage"}</script></head></html>"#;
    assert!(analyze_markup(html, &https_url()).has_structured_data);
}

#[test]
fn test_structured_data_type_case_insensitive() {
    let html = r#"<html><head><script type="APPLICATION/LD+JSON">{}</script></head></html>"#;
    assert!(analyze_markup(html, &https_url()).has_structured_data);
}

#[test]
fn test_plain_script_is_not_structured_data() {
    let html = r#"<html><head><script>var x = 1;</script></head></html>"#;
    assert!(!analyze_markup(html, &https_url()).has_structured_data);
}

#[test]
fn test_html_lang_detection() {
    let with = r#"<html lang="en"><head></head><body></body></html>"#;
    let without = r#"<html><head></head><body></body></html>"#;
    assert!(analyze_markup(with, &https_url()).has_lang_attribute);
    assert!(!analyze_markup(without, &https_url()).has_lang_attribute);
}

#[test]
fn test_heading_counts() {
    let html = r#"<html><body>
        <h1>One</h1>
        <h2>A</h2><h2>B</h2>
        <h3>X</h3><h3>Y</h3><h3>Z</h3>
        </body></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert_eq!(signals.h1_count, 1);
    assert_eq!(signals.h2_count, 2);
    assert_eq!(signals.h3_count, 3);
}

#[test]
fn test_image_alt_counting() {
    let html = r#"<html><body>
        <img src="a.png" alt="described">
        <img src="b.png" alt="">
        <img src="c.png">
        </body></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert_eq!(signals.image_count, 3);
    // Only c.png lacks the attribute entirely; alt="" still counts as present.
    assert_eq!(signals.images_without_alt, 1);
}

#[test]
fn test_link_classification_buckets() {
    let html = r##"<html><body>
        <a href="/about">internal root-relative</a>
        <a href="https://example.co.uk/contact">internal same host</a>
        <a href="https://other.com">external</a>
        <a href="mailto:x@y.com">neither</a>
        <a href="#top">neither</a>
        </body></html>"##;
    let signals = analyze_markup(html, &https_url());
    assert_eq!(signals.internal_links, 2);
    assert_eq!(signals.external_links, 1);
}

#[test]
fn test_word_count_strips_tags() {
    let html = r#"<html><body><p>one two three</p><div>four five</div></body></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert_eq!(signals.word_count, 5);
}

#[test]
fn test_word_count_includes_script_text() {
    // The strip-tags heuristic deliberately keeps script/style text.
    let html = r#"<html><head><script>var x = 1;</script></head><body>hello</body></html>"#;
    let signals = analyze_markup(html, &https_url());
    assert_eq!(signals.word_count, 5); // "var x = 1; hello"
}

#[test]
fn test_malformed_html_does_not_panic() {
    let html = r#"<html><head><body><h1>Still<a href="/x">works"#;
    let signals = analyze_markup(html, &https_url());
    assert_eq!(signals.h1_count, 1);
    assert_eq!(signals.internal_links, 1);
}
