//! Result page and item models.
//!
//! This module defines the types a search response decodes into: [`ResultItem`],
//! an opaque render payload paired with the resource identifier used for
//! favorites matching, and [`SearchResultPage`], one page of results together
//! with its pagination cursors.
//!
//! # Wire format
//!
//! The backend wraps result pages in a pagination envelope:
//!
//! ```json
//! {
//!   "meta": { "total_count": 42, "next": "/api/v1/sitters/?offset=20", "previous": null },
//!   "objects": [ { "resource_uri": "/api/v1/sitters/3/", "template": "<li>…</li>" } ]
//! }
//! ```
//!
//! [`SearchResultPage::from_json`] decodes that envelope. The `next`/`previous`
//! cursors are opaque tokens: they are only meaningful relative to the page that
//! produced them and are echoed back verbatim to request a relative page.

use serde::{Deserialize, Serialize};

use crate::domain::error::Result;

/// One rendered search result.
///
/// The `template` field is an opaque display payload produced server-side; the
/// core never inspects it. `resource_uri` identifies the underlying resource
/// and is used only for favorites matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Canonical resource identifier, e.g. `/api/v1/sitters/3/`.
    pub resource_uri: String,

    /// Server-rendered display payload, passed through to the renderer as-is.
    pub template: String,
}

/// One page of search results with its pagination cursors.
///
/// Produced by decoding a transport response, consumed by the search
/// controller. `next`/`previous` are `None` on the last/first page
/// respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultPage {
    /// Result items in server order.
    pub items: Vec<ResultItem>,

    /// Total number of matches across all pages.
    pub total: u64,

    /// Opaque cursor for the following page, if any.
    pub next: Option<String>,

    /// Opaque cursor for the preceding page, if any.
    pub previous: Option<String>,
}

/// Backend pagination envelope, as produced by the search API.
#[derive(Deserialize)]
struct Envelope {
    meta: EnvelopeMeta,
    objects: Vec<ResultItem>,
}

#[derive(Deserialize)]
struct EnvelopeMeta {
    total_count: u64,
    next: Option<String>,
    previous: Option<String>,
}

impl SearchResultPage {
    /// Decodes a page from the backend's pagination envelope.
    ///
    /// # Errors
    ///
    /// Returns [`SitterscopeError::Page`](crate::SitterscopeError::Page) if the
    /// payload is not valid JSON or does not match the envelope shape.
    pub fn from_json(payload: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(payload)?;
        Ok(Self {
            items: envelope.objects,
            total: envelope.meta.total_count,
            next: envelope.meta.next,
            previous: envelope.meta.previous,
        })
    }

    /// Returns `true` if this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_decodes_envelope() {
        let payload = r#"{
            "meta": {"limit": 20, "offset": 0, "total_count": 42,
                     "next": "/api/v1/sitters/?offset=20", "previous": null},
            "objects": [
                {"resource_uri": "/api/v1/sitters/3/", "template": "<li>a</li>"},
                {"resource_uri": "/api/v1/sitters/7/", "template": "<li>b</li>"}
            ]
        }"#;

        let page = SearchResultPage::from_json(payload).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.next.as_deref(), Some("/api/v1/sitters/?offset=20"));
        assert_eq!(page.previous, None);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].resource_uri, "/api/v1/sitters/3/");
        assert_eq!(page.items[1].template, "<li>b</li>");
    }

    #[test]
    fn test_from_json_empty_page() {
        let payload = r#"{
            "meta": {"total_count": 0, "next": null, "previous": null},
            "objects": []
        }"#;

        let page = SearchResultPage::from_json(payload).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[test]
    fn test_from_json_rejects_malformed_payload() {
        assert!(SearchResultPage::from_json("not json").is_err());
        assert!(SearchResultPage::from_json(r#"{"objects": []}"#).is_err());
    }

    #[test]
    fn test_page_serde_roundtrip() {
        let page = SearchResultPage {
            items: vec![ResultItem {
                resource_uri: "/api/v1/families/1/".to_string(),
                template: "<li>x</li>".to_string(),
            }],
            total: 1,
            next: None,
            previous: Some("tokA".to_string()),
        };

        let encoded = serde_json::to_string(&page).unwrap();
        let decoded: SearchResultPage = serde_json::from_str(&encoded).unwrap();
        assert_eq!(page, decoded);
    }
}
