//! Markup analysis.
//!
//! This module derives SEO signals from raw HTML independently of the
//! external analyzer:
//! - Title and meta description presence/length
//! - Canonical, Open Graph, Twitter Card, JSON-LD, html lang
//! - Heading, image, and link counts
//! - Word count and transport security
//!
//! All parsing is done tolerantly via the `scraper` crate, with the word
//! count using a tag-stripping regex.

mod links;
mod signals;

pub use links::{classify_link, LinkScope};
pub use signals::{analyze_markup, MarkupSignals};
