use crate::models::SearchResultItem;
use crate::services::search_client::SearchOutcome;

pub const NO_RESULTS_REPLY: &str = "No good results found on Google.";
pub const UNSUMMARIZABLE_REPLY: &str = "Found something but couldn't summarize.";

/// Number of snippets joined into the synthesized reply.
const SNIPPET_LIMIT: usize = 2;

/// Reduces a search outcome to one short reply string. Errors pass through
/// verbatim; results collapse to the first two non-empty snippets, falling
/// back to the first title.
pub fn summarize(outcome: &SearchOutcome) -> String {
    let items = match outcome {
        Ok(items) => items,
        Err(e) => return e.to_string(),
    };

    if items.is_empty() {
        return NO_RESULTS_REPLY.to_string();
    }

    let summary = items
        .iter()
        .filter_map(|item| item.snippet.as_deref())
        .filter(|snippet| !snippet.is_empty())
        .take(SNIPPET_LIMIT)
        .collect::<Vec<_>>()
        .join(" ");

    if !summary.is_empty() {
        return summary;
    }

    first_title(items).unwrap_or_else(|| UNSUMMARIZABLE_REPLY.to_string())
}

fn first_title(items: &[SearchResultItem]) -> Option<String> {
    items.first().and_then(|item| item.title.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::search_client::SearchError;
    use rstest::rstest;

    fn item(title: Option<&str>, snippet: Option<&str>) -> SearchResultItem {
        SearchResultItem {
            title: title.map(String::from),
            link: None,
            snippet: snippet.map(String::from),
        }
    }

    #[test]
    fn error_message_passes_through_verbatim() {
        let outcome: SearchOutcome = Err(SearchError::Upstream {
            status: 403,
            body: "quota exceeded".to_string(),
        });
        assert_eq!(summarize(&outcome), "Search API returned 403: quota exceeded");
    }

    #[test]
    fn empty_results_yield_no_results_reply() {
        assert_eq!(summarize(&Ok(vec![])), NO_RESULTS_REPLY);
    }

    #[rstest]
    #[case(vec![Some("a"), Some("b"), Some("c")], "a b")]
    #[case(vec![Some("a")], "a")]
    #[case(vec![None, Some("a"), Some("b")], "a b")]
    #[case(vec![Some(""), Some("a"), Some("b")], "a b")]
    fn joins_first_two_usable_snippets(
        #[case] snippets: Vec<Option<&str>>,
        #[case] expected: &str,
    ) {
        let items = snippets
            .into_iter()
            .map(|snippet| item(None, snippet))
            .collect::<Vec<_>>();
        assert_eq!(summarize(&Ok(items)), expected);
    }

    #[test]
    fn falls_back_to_first_title_when_no_snippets() {
        let items = vec![item(Some("T"), None), item(Some("U"), None)];
        assert_eq!(summarize(&Ok(items)), "T");
    }

    #[test]
    fn falls_back_to_fixed_reply_when_title_also_absent() {
        let items = vec![item(None, None)];
        assert_eq!(summarize(&Ok(items)), UNSUMMARIZABLE_REPLY);
    }
}
