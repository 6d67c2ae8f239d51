use log::warn;
use scraper::{Html, Selector};

/// Narrow capability the executor needs from an HTML parser: does the body
/// contain at least one element matching the selector?
pub trait SelectorMatcher: Send + Sync {
    fn find_first_match(&self, body: &str, selector: &str) -> bool;
}

/// CSS selector matching over a parsed DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssSelectorMatcher;

impl SelectorMatcher for CssSelectorMatcher {
    fn find_first_match(&self, body: &str, selector: &str) -> bool {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(e) => {
                // The API is the authority on selector validity; locally an
                // unparseable selector just never matches.
                warn!("success_selector {:?} did not parse: {:?}", selector, e);
                return false;
            }
        };

        let document = Html::parse_document(body);
        document.select(&parsed).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_present_element() {
        let body = r#"<html><body><div id="ok">done</div></body></html>"#;
        assert!(CssSelectorMatcher.find_first_match(body, "#ok"));
    }

    #[test]
    fn rejects_missing_element() {
        let body = "<html><body><p>loading</p></body></html>";
        assert!(!CssSelectorMatcher.find_first_match(body, "#ok"));
    }

    #[test]
    fn invalid_selector_never_matches() {
        let body = "<html><body><p>anything</p></body></html>";
        assert!(!CssSelectorMatcher.find_first_match(body, "p[unclosed"));
    }

    #[test]
    fn matches_nested_selector() {
        let body = r#"<div class="results"><ul><li class="item">a</li></ul></div>"#;
        assert!(CssSelectorMatcher.find_first_match(body, ".results li.item"));
    }
}
