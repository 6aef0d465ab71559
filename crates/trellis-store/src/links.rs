//! Wiki-link extraction

use std::sync::LazyLock;

use regex::Regex;

static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]|]+)(?:\|[^\[\]]*)?\]\]").unwrap());

/// Extract `[[Target]]` and `[[Target|Alias]]` references from note
/// content, in document order. Targets are trimmed but otherwise kept
/// verbatim; duplicates are preserved. Resolution against real
/// documents happens downstream.
pub fn extract_wiki_links(content: &str) -> Vec<String> {
    WIKI_LINK
        .captures_iter(content)
        .filter_map(|cap| {
            let target = cap[1].trim();
            if target.is_empty() {
                None
            } else {
                Some(target.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_and_aliased_links() {
        let content = "See [[Projects/Roadmap]] and [[Inbox|my inbox]].";
        assert_eq!(
            extract_wiki_links(content),
            vec!["Projects/Roadmap".to_string(), "Inbox".to_string()]
        );
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let content = "[[B]] then [[A]] then [[B]]";
        assert_eq!(extract_wiki_links(content), vec!["B", "A", "B"]);
    }

    #[test]
    fn trims_and_drops_empty_targets() {
        assert_eq!(extract_wiki_links("[[ Padded ]] [[   ]]"), vec!["Padded"]);
    }

    #[test]
    fn ignores_unclosed_brackets() {
        assert!(extract_wiki_links("[[not a link").is_empty());
        assert!(extract_wiki_links("no links at all").is_empty());
    }
}
