//! External performance analyzer (PageSpeed Insights) client and response
//! model.

mod client;
mod types;

pub use client::PageSpeedClient;
pub use types::{
    AuditResult, Category, CategoryScores, LighthouseResult, PagespeedResponse,
    AUDIT_CUMULATIVE_LAYOUT_SHIFT, AUDIT_DOCUMENT_TITLE, AUDIT_FIRST_CONTENTFUL_PAINT,
    AUDIT_IMAGE_ALT, AUDIT_LARGEST_CONTENTFUL_PAINT, AUDIT_SPEED_INDEX, AUDIT_VIEWPORT,
};
