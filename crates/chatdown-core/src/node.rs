//! Document tree model.
//!
//! A [`Node`] is either a text leaf or an [`Element`] carrying a [`Tag`],
//! an ordered attribute map and ordered children. Front ends (HTML parsers,
//! DOM bridges) build this tree; the serializer only reads it.

use indexmap::IndexMap;

/// Element tags understood by the serializer.
///
/// Anything outside the vocabulary is kept as [`Tag::Other`] and rendered
/// through the content-preserving default rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Preformatted block (`<pre>`)
    CodeBlock,
    /// Inline code span (`<code>`)
    InlineCode,
    /// Heading, level 1-6
    Heading(u8),
    Paragraph,
    Bold,
    Italic,
    Link,
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    Table,
    /// Row group (`<thead>`, `<tbody>`, `<tfoot>`)
    TableSection,
    TableRow,
    TableCell,
    LineBreak,
    HorizontalRule,
    /// Unrecognized element, with its lowercase source name
    Other(String),
}

impl Tag {
    /// Map an HTML element name to a tag (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "pre" => Tag::CodeBlock,
            "code" => Tag::InlineCode,
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "p" => Tag::Paragraph,
            "strong" | "b" => Tag::Bold,
            "em" | "i" => Tag::Italic,
            "a" => Tag::Link,
            "ul" => Tag::UnorderedList,
            "ol" => Tag::OrderedList,
            "li" => Tag::ListItem,
            "blockquote" => Tag::Blockquote,
            "table" => Tag::Table,
            "thead" | "tbody" | "tfoot" => Tag::TableSection,
            "tr" => Tag::TableRow,
            "td" | "th" => Tag::TableCell,
            "br" => Tag::LineBreak,
            "hr" => Tag::HorizontalRule,
            _ => Tag::Other(name),
        }
    }

    /// Check if this tag is a list container
    pub fn is_list(&self) -> bool {
        matches!(self, Tag::UnorderedList | Tag::OrderedList)
    }
}

/// An element node: tag, attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    /// Attributes in source order. Names are stored lowercase.
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Find the first descendant element with the given tag (depth-first)
    pub fn find_descendant(&self, tag: &Tag) -> Option<&Element> {
        let mut stack: Vec<&Element> = self.element_children().collect();
        stack.reverse();

        while let Some(element) = stack.pop() {
            if &element.tag == tag {
                return Some(element);
            }
            let start = stack.len();
            stack.extend(element.element_children());
            stack[start..].reverse();
        }
        None
    }

    /// Flattened text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        push_text_content(&self.children, &mut out);
        out
    }
}

impl Drop for Element {
    /// Tear down descendants with a worklist so deep trees never recurse.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            if let Node::Element(element) = &mut node {
                stack.append(&mut element.children);
            }
        }
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a new element node
    pub fn element(tag: Tag) -> Self {
        Node::Element(Element::new(tag))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag: Tag, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Create an element node from an HTML element name
    pub fn named(name: &str) -> Self {
        Self::element(Tag::from_name(name))
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Add a child node. Text nodes cannot have children; the call is a no-op.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Tag of an element node, `None` for text
    pub fn tag(&self) -> Option<&Tag> {
        self.as_element().map(|e| &e.tag)
    }

    /// Get all child nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        push_text_content(std::slice::from_ref(self), &mut out);
        out
    }
}

/// Append the flattened text of `nodes` to `out` without recursing.
fn push_text_content(nodes: &[Node], out: &mut String) {
    let mut stack: Vec<&Node> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => stack.extend(element.children.iter().rev()),
        }
    }
}
