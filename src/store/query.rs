//! Wire-format query strings for the document store list endpoint.
//!
//! The store expects each `queries[]` parameter to be a small JSON object
//! naming the query method, the attribute it applies to, and its values.
//! These helpers build exactly those strings.

use serde_json::json;

/// Builders for the store's JSON query strings.
pub struct Query;

impl Query {
    /// Equality filter on a string attribute.
    #[must_use]
    pub fn equal(attribute: &str, value: &str) -> String {
        json!({
            "method": "equal",
            "attribute": attribute,
            "values": [value],
        })
        .to_string()
    }

    /// Caps the number of returned documents.
    #[must_use]
    pub fn limit(count: usize) -> String {
        json!({
            "method": "limit",
            "values": [count],
        })
        .to_string()
    }

    /// Orders results by a numeric attribute, highest first.
    #[must_use]
    pub fn order_desc(attribute: &str) -> String {
        json!({
            "method": "orderDesc",
            "attribute": attribute,
        })
        .to_string()
    }
}
