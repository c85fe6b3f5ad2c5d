use std::collections::HashMap;

/// Fixed phrase-to-reply table consulted before any search. Built once at
/// startup and never mutated.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<String, String>,
}

impl RuleTable {
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let rules = pairs
            .into_iter()
            .map(|(phrase, reply)| (phrase.into().trim().to_lowercase(), reply.into()))
            .collect();
        Self { rules }
    }

    /// Exact lookup after trimming and lowercasing. No substring or fuzzy
    /// matching.
    pub fn lookup(&self, text: &str) -> Option<&str> {
        self.rules
            .get(&text.trim().to_lowercase())
            .map(String::as_str)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new([
            (
                "hello",
                "Hello! Welcome to Strata, your smart assistant. How can I help you today?",
            ),
            (
                "hi",
                "Hi! Ask me anything or type 'search: your query' to fetch from Google.",
            ),
            (
                "who are you",
                "I'm a simple chatbot that can answer basic questions and search Google for you.",
            ),
            (
                "help",
                "Try: 'What is Python?', or 'search: best coffee near me'.",
            ),
        ])
    }
}
