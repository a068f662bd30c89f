//! Text helpers shared by the serializers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::Element;

static LANGUAGE_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)(?:language|lang)-([^\s]+)").expect("valid language class regex")
});

/// Escape markdown special characters
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '#' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Language hint from a `class` attribute such as `"hljs language-rust"`
pub fn language_from_class(class: &str) -> Option<&str> {
    LANGUAGE_CLASS
        .captures(class)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Language hint for a code block.
///
/// Checks the nested code element's class, then the block's own class,
/// then a `data-language` attribute on the block.
pub fn code_language<'a>(block: &'a Element, code: Option<&'a Element>) -> &'a str {
    code.into_iter()
        .chain(std::iter::once(block))
        .find_map(|e| e.attr("class").and_then(language_from_class))
        .or_else(|| block.attr("data-language").map(str::trim))
        .unwrap_or("")
}

/// Prefix every line of `content` with `prefix`
pub fn prefix_lines(content: &str, prefix: &str) -> String {
    content
        .lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, Tag};

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("*test*"), "\\*test\\*");
        assert_eq!(escape_markdown("a | b"), "a \\| b");
        assert_eq!(escape_markdown("`x`"), "\\`x\\`");
        assert_eq!(escape_markdown("normal"), "normal");
    }

    #[test]
    fn test_language_from_class() {
        assert_eq!(language_from_class("language-rust"), Some("rust"));
        assert_eq!(language_from_class("hljs lang-py"), Some("py"));
        assert_eq!(language_from_class("c++ language-c++"), Some("c++"));
        assert_eq!(language_from_class("mylanguage-x"), None);
        assert_eq!(language_from_class(""), None);
    }

    #[test]
    fn test_code_language_fallbacks() {
        let code = Node::element_with_attrs(Tag::InlineCode, vec![("class", "language-go")]);
        let pre = Node::element_with_attrs(Tag::CodeBlock, vec![("class", "language-js")]);
        let bare_pre = Node::element_with_attrs(Tag::CodeBlock, vec![("data-language", "sql")]);

        let code = code.as_element().unwrap();
        let pre = pre.as_element().unwrap();
        let bare_pre = bare_pre.as_element().unwrap();

        assert_eq!(code_language(pre, Some(code)), "go");
        assert_eq!(code_language(pre, None), "js");
        assert_eq!(code_language(bare_pre, None), "sql");
        assert_eq!(code_language(&Element::new(Tag::CodeBlock), None), "");
    }

    #[test]
    fn test_prefix_lines() {
        assert_eq!(prefix_lines("a\nb", "> "), "> a\n> b");
        assert_eq!(prefix_lines("", "> "), "");
    }
}
