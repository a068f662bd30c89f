//! Turn discovery in rendered conversation pages.

use scraper::{ElementRef, Html, Selector};

use chatdown_core::{Node, Role};

use crate::html::element_to_node;
use crate::{ChatdownError, Result};

/// How turn roots are located in a page
#[derive(Debug, Clone)]
pub struct TurnSelector {
    /// Attribute that marks a turn root and carries its role
    pub role_attribute: String,

    /// Skip elements whose role value is not recognized instead of failing
    pub skip_unknown_roles: bool,
}

impl Default for TurnSelector {
    fn default() -> Self {
        Self {
            role_attribute: "data-role".to_string(),
            skip_unknown_roles: true,
        }
    }
}

/// A role-tagged content root found in a page
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRoot {
    pub role: Role,
    pub content: Node,
}

/// Find the turn roots of an HTML document, in document order.
///
/// Only the outermost element carrying the role attribute counts; marked
/// elements nested inside a turn stay part of that turn's content.
pub fn extract_turns(html: &str, selector: &TurnSelector) -> Result<Vec<TurnRoot>> {
    let attribute = selector.role_attribute.as_str();
    let css = Selector::parse(&format!("[{}]", attribute))
        .map_err(|e| ChatdownError::InvalidSelector(format!("{}: {}", attribute, e)))?;

    let document = Html::parse_document(html);
    let mut turns = Vec::new();

    for element in document.select(&css) {
        if has_marked_ancestor(element, attribute) {
            continue;
        }

        let value = element.value().attr(attribute).unwrap_or("");
        let role = match value.parse::<Role>() {
            Ok(role) => role,
            Err(_) if selector.skip_unknown_roles => {
                tracing::debug!(role = value, "skipping element with unrecognized role");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        turns.push(TurnRoot {
            role,
            content: element_to_node(element),
        });
    }

    tracing::debug!(count = turns.len(), attribute, "extracted conversation turns");

    if turns.is_empty() {
        return Err(ChatdownError::NoTurnsFound);
    }
    Ok(turns)
}

fn has_marked_ancestor(element: ElementRef, attribute: &str) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().attr(attribute).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <main>
            <div data-role="user"><p>What is Rust?</p></div>
            <div data-role="assistant">
              <p>A <strong>systems</strong> language.</p>
              <div data-role="user">quoted</div>
            </div>
            <div data-role="system">hidden</div>
          </main>
        </body></html>
    "#;

    #[test]
    fn test_extract_turns_in_order() {
        let turns = extract_turns(PAGE, &TurnSelector::default()).unwrap();
        let roles: Vec<Role> = turns.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Agent]);
        assert!(turns[1].content.text_content().contains("quoted"));
    }

    #[test]
    fn test_unknown_role_strict() {
        let selector = TurnSelector {
            skip_unknown_roles: false,
            ..Default::default()
        };
        let err = extract_turns(PAGE, &selector).unwrap_err();
        assert!(matches!(
            err,
            ChatdownError::Core(chatdown_core::Error::UnknownRole(ref role)) if role == "system"
        ));
    }

    #[test]
    fn test_no_turns_found() {
        let err = extract_turns("<p>nothing here</p>", &TurnSelector::default()).unwrap_err();
        assert!(matches!(err, ChatdownError::NoTurnsFound));
    }

    #[test]
    fn test_custom_attribute() {
        let selector = TurnSelector {
            role_attribute: "data-message-author-role".to_string(),
            ..Default::default()
        };
        let html = r#"<div data-message-author-role="model">hi</div>"#;
        let turns = extract_turns(html, &selector).unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::Agent);
    }

    #[test]
    fn test_invalid_attribute_name() {
        let selector = TurnSelector {
            role_attribute: "bad attr]".to_string(),
            ..Default::default()
        };
        let err = extract_turns("<div></div>", &selector).unwrap_err();
        assert!(matches!(err, ChatdownError::InvalidSelector(_)));
    }
}
