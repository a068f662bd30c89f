//! Tree serialization
//!
//! Walks a [`Node`] depth-first, left to right, and builds a Markdown
//! fragment by concatenation. Block constructs pad themselves with
//! newlines; inline constructs never do, so fragments compose when
//! concatenated. Every input maps to some output: missing attributes
//! become empty strings and unknown tags pass their children through.

use crate::node::{Element, Node, Tag};
use crate::options::{NestedListStyle, SerializerOptions};
use crate::table::{serialize_table, table_rows};
use crate::utilities::{code_language, escape_markdown, prefix_lines};

/// Headings never exceed ATX level 6
const MAX_HEADING_LEVEL: u8 = 6;

/// Serialize a node to a Markdown fragment
pub fn serialize(node: &Node, options: &SerializerOptions) -> String {
    let mut output = String::new();
    serialize_node(node, options, 0, &mut output);
    output
}

fn serialize_node(node: &Node, options: &SerializerOptions, depth: usize, out: &mut String) {
    match node {
        Node::Text(text) => {
            if options.escape_text {
                out.push_str(&escape_markdown(text));
            } else {
                out.push_str(text);
            }
        }
        Node::Element(element) => {
            if exceeds_depth(options, depth, &element.tag) {
                out.push_str(&element.text_content());
                return;
            }
            serialize_element(element, options, depth, out);
        }
    }
}

/// Check the depth guard, logging when it trips
fn exceeds_depth(options: &SerializerOptions, depth: usize, tag: &Tag) -> bool {
    let exceeded = options.max_depth.is_some_and(|max| depth > max);
    if exceeded {
        tracing::warn!(
            depth,
            tag = ?tag,
            "document nesting exceeds depth limit, emitting flattened text"
        );
    }
    exceeded
}

/// Push flattened text, trimmed and escaped when `escape_text` is set
fn push_plain_text(text: &str, options: &SerializerOptions, out: &mut String) {
    let text = text.trim();
    if options.escape_text {
        out.push_str(&escape_markdown(text));
    } else {
        out.push_str(text);
    }
}

fn serialize_element(
    element: &Element,
    options: &SerializerOptions,
    depth: usize,
    out: &mut String,
) {
    match &element.tag {
        Tag::CodeBlock => serialize_code_block(element, options, out),

        Tag::InlineCode => {
            out.push('`');
            out.push_str(&element.text_content());
            out.push('`');
        }

        Tag::Heading(level) => {
            let level = level
                .saturating_add(options.heading_offset)
                .clamp(1, MAX_HEADING_LEVEL);
            out.push('\n');
            out.push_str(&"#".repeat(level as usize));
            out.push(' ');
            push_plain_text(&element.text_content(), options, out);
            out.push('\n');
        }

        Tag::Paragraph => {
            let content = serialize_children(element, options, depth);
            out.push('\n');
            out.push_str(content.trim());
            out.push('\n');
        }

        Tag::Bold => {
            out.push_str("**");
            serialize_children_into(element, options, depth, out);
            out.push_str("**");
        }

        Tag::Italic => {
            out.push('*');
            serialize_children_into(element, options, depth, out);
            out.push('*');
        }

        Tag::Link => {
            out.push('[');
            serialize_children_into(element, options, depth, out);
            out.push_str("](");
            out.push_str(element.attr("href").unwrap_or(""));
            out.push(')');
        }

        Tag::UnorderedList | Tag::OrderedList => {
            out.push('\n');
            serialize_list(element, options, depth, 0, out);
        }

        Tag::Blockquote => {
            let content = serialize_children(element, options, depth);
            out.push('\n');
            out.push_str(&prefix_lines(content.trim(), "> "));
            out.push('\n');
        }

        Tag::Table => {
            out.push('\n');
            out.push_str(&serialize_table(&table_rows(element)));
            out.push('\n');
        }

        Tag::LineBreak => out.push('\n'),

        Tag::HorizontalRule => {
            out.push('\n');
            out.push_str(&options.hr);
            out.push('\n');
        }

        Tag::ListItem | Tag::TableSection | Tag::TableRow | Tag::TableCell => {
            serialize_children_into(element, options, depth, out);
        }

        Tag::Other(name) => {
            tracing::trace!(tag = %name, "passing through unrecognized element");
            serialize_children_into(element, options, depth, out);
        }
    }
}

fn serialize_children(element: &Element, options: &SerializerOptions, depth: usize) -> String {
    let mut content = String::new();
    serialize_children_into(element, options, depth, &mut content);
    content
}

fn serialize_children_into(
    element: &Element,
    options: &SerializerOptions,
    depth: usize,
    out: &mut String,
) {
    for child in &element.children {
        serialize_node(child, options, depth + 1, out);
    }
}

fn serialize_code_block(element: &Element, options: &SerializerOptions, out: &mut String) {
    let code = element.find_descendant(&Tag::InlineCode);
    let language = code_language(element, code);
    let text = code.unwrap_or(element).text_content();

    out.push('\n');
    out.push_str(&options.fence);
    out.push_str(language);
    out.push('\n');
    out.push_str(text.trim_end());
    out.push('\n');
    out.push_str(&options.fence);
    out.push('\n');
}

/// Emit one line per list item. `indent` counts nesting levels and is
/// only non-zero for [`NestedListStyle::Indented`]; `depth` is the tree
/// depth of `list` and feeds the depth guard.
fn serialize_list(
    list: &Element,
    options: &SerializerOptions,
    depth: usize,
    indent: usize,
    out: &mut String,
) {
    let ordered = list.tag == Tag::OrderedList;
    let items = list
        .element_children()
        .filter(|child| child.tag == Tag::ListItem);

    for (index, item) in items.enumerate() {
        out.push_str(&"  ".repeat(indent));
        if ordered {
            out.push_str(&format!("{}. ", index + 1));
        } else {
            out.push(options.bullet_marker);
            out.push(' ');
        }

        match options.nested_lists {
            NestedListStyle::Inline => {
                push_plain_text(&item.text_content(), options, out);
                out.push('\n');
            }
            NestedListStyle::Indented if exceeds_depth(options, depth + 1, &item.tag) => {
                push_plain_text(&item.text_content(), options, out);
                out.push('\n');
            }
            NestedListStyle::Indented => {
                push_plain_text(&item_own_text(item), options, out);
                out.push('\n');
                for nested in item.element_children().filter(|c| c.tag.is_list()) {
                    serialize_list(nested, options, depth + 2, indent + 1, out);
                }
            }
        }
    }
}

/// Flattened text of a list item, excluding its direct nested lists
fn item_own_text(item: &Element) -> String {
    item.children
        .iter()
        .filter(|child| !child.tag().is_some_and(Tag::is_list))
        .map(Node::text_content)
        .collect()
}
