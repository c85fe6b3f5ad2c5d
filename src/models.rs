use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// One entry from the search API's `items` array. Any of the fields may be
/// missing in the upstream payload; absent fields stay absent rather than
/// failing extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

impl SearchResultItem {
    #[cfg(test)]
    pub fn with_snippet(snippet: &str) -> Self {
        Self {
            title: None,
            link: None,
            snippet: Some(snippet.to_string()),
        }
    }
}

/// Search metadata attached to a reply when a search was attempted.
/// Serializes as either `{"results": [...]}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchMeta {
    Results { results: Vec<SearchResultItem> },
    Error { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<SearchMeta>,
}

impl ChatReply {
    pub fn plain(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            meta: None,
        }
    }

    pub fn with_meta(reply: impl Into<String>, meta: SearchMeta) -> Self {
        Self {
            reply: reply.into(),
            meta: Some(meta),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub search_configured: bool,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_serializes_as_results_object() {
        let meta = SearchMeta::Results {
            results: vec![SearchResultItem {
                title: Some("T".to_string()),
                link: Some("https://example.com".to_string()),
                snippet: Some("S".to_string()),
            }],
        };
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["results"][0]["title"], "T");
    }

    #[test]
    fn meta_serializes_as_error_object() {
        let meta = SearchMeta::Error {
            error: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            serde_json::json!({ "error": "boom" })
        );
    }

    #[test]
    fn plain_reply_omits_meta_field() {
        let value = serde_json::to_value(ChatReply::plain("hi")).unwrap();
        assert_eq!(value, serde_json::json!({ "reply": "hi" }));
    }

    #[test]
    fn request_tolerates_missing_message() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.message, "");
    }
}
