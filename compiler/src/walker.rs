//! Structural helpers over a parsed HTML tree.
//!
//! Nothing here knows about the reference page; the extractor decides what
//! the nodes mean.

use scraper::{ElementRef, Html, Selector};

use crate::error::GenError;

/// Compiles a CSS selector, reporting the selector text on failure.
pub fn selector(text: &str) -> Result<Selector, GenError> {
    Selector::parse(text).map_err(|_| GenError::InvalidSelector(text.to_string()))
}

/// First descendant of `node` matching `selector`.
pub fn find<'a>(node: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    node.select(selector).next()
}

/// All descendants of `node` matching `selector`, in document order.
pub fn find_all<'a>(node: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    node.select(selector).collect()
}

/// Like [`find`], but a missing match is an error naming `context`.
pub fn require<'a>(
    node: ElementRef<'a>,
    selector: &Selector,
    selector_text: &str,
    context: &str,
) -> Result<ElementRef<'a>, GenError> {
    find(node, selector).ok_or_else(|| GenError::MissingElement {
        context:  context.to_string(),
        selector: selector_text.to_string(),
    })
}

/// Locates the single element carrying the anchor `name` anywhere in the document.
pub fn anchor<'a>(document: &'a Html, name: &str) -> Result<ElementRef<'a>, GenError> {
    let by_name = selector(&format!("a[name=\"{}\"]", name))?;
    let mut matches = document.select(&by_name);
    let first = matches
        .next()
        .ok_or_else(|| GenError::MissingAnchor(name.to_string()))?;
    if matches.next().is_some() {
        return Err(GenError::MissingAnchor(format!("{} (not unique)", name)));
    }
    Ok(first)
}

/// Enclosing element, if the parent is an element rather than the document.
pub fn parent(node: ElementRef<'_>) -> Option<ElementRef<'_>> {
    node.parent().and_then(ElementRef::wrap)
}

/// Descendant text, concatenated and trimmed.
pub fn text(node: ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// Every element after `node` in document order, starting with its own
/// descendants. Each call yields a fresh sequence.
pub fn successors(node: ElementRef<'_>) -> Successors<'_> {
    Successors { next: following(node) }
}

pub struct Successors<'a> {
    next: Option<ElementRef<'a>>,
}

impl<'a> Iterator for Successors<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = following(current);
        Some(current)
    }
}

/// Next element in a pre-order walk of the whole tree.
fn following(node: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if let Some(child) = node.children().find_map(ElementRef::wrap) {
        return Some(child);
    }
    let mut current = node;
    loop {
        if let Some(sibling) = current.next_siblings().find_map(ElementRef::wrap) {
            return Some(sibling);
        }
        current = parent(current)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div id="a"><p>one</p><p>two <b>bold</b></p></div>
        <h3><a name="start"></a>Start</h3>
        <p>
          three
        </p>
        <ul><li>four</li></ul>
    </body></html>"#;

    fn names<'a>(nodes: impl Iterator<Item = ElementRef<'a>>) -> Vec<String> {
        nodes.map(|n| n.value().name().to_string()).collect()
    }

    #[test]
    fn successors_walk_in_document_order() {
        let document = Html::parse_document(PAGE);
        let start = parent(anchor(&document, "start").expect("anchor failed")).expect("parent failed");
        assert_eq!(start.value().name(), "h3");
        assert_eq!(names(successors(start)), vec!["a", "p", "ul", "li"]);
    }

    #[test]
    fn successors_restart_per_call() {
        let document = Html::parse_document(PAGE);
        let div = find(document.root_element(), &selector("div").unwrap()).unwrap();
        let first: Vec<_> = names(successors(div));
        let second: Vec<_> = names(successors(div));
        assert_eq!(first, second);
        assert_eq!(&first[..4], &["p", "p", "b", "h3"]);
    }

    #[test]
    fn text_is_concatenated_and_trimmed() {
        let document = Html::parse_document(PAGE);
        let paragraphs = find_all(document.root_element(), &selector("p").unwrap());
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(text(paragraphs[1]), "two bold");
        assert_eq!(text(paragraphs[2]), "three");
    }

    #[test]
    fn missing_anchor_fails_loudly() {
        let document = Html::parse_document(PAGE);
        assert!(matches!(anchor(&document, "nowhere"), Err(GenError::MissingAnchor(_))));
    }

    #[test]
    fn require_reports_context() {
        let document = Html::parse_document(PAGE);
        let err = require(document.root_element(), &selector("table").unwrap(), "table", "page")
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing \"table\" in page");
    }
}
