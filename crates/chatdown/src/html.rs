//! HTML parsing support.
//!
//! This module parses HTML strings with `scraper` and converts the result
//! to the [`Node`] tree consumed by the serializer.

use scraper::{ElementRef, Html, Node as ScraperNode};

use chatdown_core::{Node, Tag};

/// Elements whose content is never part of the rendered text
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Parse an HTML fragment into a Node tree.
///
/// # Example
///
/// ```rust
/// use chatdown::{parse_html, serialize, SerializerOptions};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
/// let markdown = serialize(&node, &SerializerOptions::default());
/// assert_eq!(markdown, "\n## Hello World\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let fragment = Html::parse_fragment(html);
    element_to_node(fragment.root_element())
}

/// Convert a scraper ElementRef to our Node structure.
///
/// Walks the subtree with an explicit stack of open elements, so page
/// nesting depth never grows the call stack.
pub fn element_to_node(element: ElementRef) -> Node {
    let mut current = (element_shell(element), element.children());
    let mut open = Vec::new();

    loop {
        match current.1.next() {
            Some(child) => match child.value() {
                ScraperNode::Text(text) => {
                    current.0.add_child(Node::text(&text.text));
                }
                ScraperNode::Element(child_value) if !is_skipped(child_value.name()) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        let frame = (element_shell(child_element), child_element.children());
                        open.push(std::mem::replace(&mut current, frame));
                    }
                }
                _ => {}
            },
            None => match open.pop() {
                Some(mut parent) => {
                    parent.0.add_child(current.0);
                    current = parent;
                }
                None => return current.0,
            },
        }
    }
}

/// Element node with tag and attributes but no children yet
fn element_shell(element: ElementRef) -> Node {
    let value = element.value();
    let mut node = Node::element(Tag::from_name(value.name()));

    if let Node::Element(ref mut target) = node {
        for (name, attr_value) in value.attrs() {
            target.set_attr(name, attr_value);
        }
    }

    node
}

fn is_skipped(name: &str) -> bool {
    SKIPPED_ELEMENTS
        .iter()
        .any(|skipped| skipped.eq_ignore_ascii_case(name))
}
