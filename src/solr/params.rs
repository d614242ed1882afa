use serde::Serialize;

/// Sent as `q` when the caller gives none; matches every document.
pub const WILDCARD_QUERY: &str = "*:*";
const QUERY_OPERATOR: &str = "OR";
const ROWS: u32 = 10;

/// Outbound select parameters, encoded as `q`, `wt`, `q.op` and `rows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub q: String,
    pub wt: &'static str,
    #[serde(rename = "q.op")]
    pub q_op: &'static str,
    pub rows: u32,
}

impl SearchParams {
    /// Build parameters for a caller query. `None` becomes the wildcard;
    /// an empty string is passed through as-is.
    pub fn new(query: Option<String>) -> Self {
        Self {
            q: query.unwrap_or_else(|| WILDCARD_QUERY.to_string()),
            wt: "json",
            q_op: QUERY_OPERATOR,
            rows: ROWS,
        }
    }
}
