use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::{ChatReply, SearchMeta};
use crate::services::search_client::{SearchBackend, SearchOutcome};
use crate::services::summarizer::summarize;
use crate::services::RuleTable;

pub const EMPTY_MESSAGE_REPLY: &str = "Please send a message.";
pub const SEARCH_UNAVAILABLE_REPLY: &str =
    "Sorry, I couldn't fetch search results right now. Try again later.";

/// Literal prefix that forces a search, bypassing the rule table.
const SEARCH_PREFIX: &str = "search:";

/// Per-request dispatcher: rule lookup first, search as fallback. Holds no
/// state across requests beyond the immutable rule table.
#[derive(Clone)]
pub struct ChatService {
    rules: RuleTable,
    backend: Arc<dyn SearchBackend>,
    max_results: u32,
}

impl ChatService {
    pub fn new(rules: RuleTable, backend: Arc<dyn SearchBackend>, max_results: u32) -> Self {
        Self {
            rules,
            backend,
            max_results,
        }
    }

    pub async fn handle(&self, message: &str) -> ChatReply {
        let text = message.trim();
        if text.is_empty() {
            return ChatReply::plain(EMPTY_MESSAGE_REPLY);
        }

        // Explicit "search: ..." request: surface errors verbatim so the
        // user can see what went wrong.
        if text.to_lowercase().starts_with(SEARCH_PREFIX) {
            let query = text
                .split_once(':')
                .map(|(_, rest)| rest.trim())
                .unwrap_or_default();
            let outcome = self.backend.search(query, self.max_results).await;
            let reply = summarize(&outcome);
            return ChatReply::with_meta(reply, meta_from(outcome));
        }

        if let Some(reply) = self.rules.lookup(text) {
            debug!(message = text, "rule table hit");
            return ChatReply::plain(reply);
        }

        // Implicit fallback search: the user did not ask for a search, so
        // hide failures behind a friendly reply.
        match self.backend.search(text, self.max_results).await {
            Err(e) => {
                warn!(error = %e, "fallback search failed");
                ChatReply::plain(SEARCH_UNAVAILABLE_REPLY)
            }
            outcome @ Ok(_) => {
                let reply = summarize(&outcome);
                ChatReply::with_meta(reply, meta_from(outcome))
            }
        }
    }
}

fn meta_from(outcome: SearchOutcome) -> SearchMeta {
    match outcome {
        Ok(results) => SearchMeta::Results { results },
        Err(e) => SearchMeta::Error {
            error: e.to_string(),
        },
    }
}
