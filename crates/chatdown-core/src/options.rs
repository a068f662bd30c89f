//! Configuration options for Markdown serialization

/// How lists nested inside list items are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedListStyle {
    /// Flatten each item to plain text; nested lists run inline with
    /// their parent item's text
    #[default]
    Inline,
    /// Render nested lists on their own lines below the parent item,
    /// indented two spaces per level
    Indented,
}

/// Options for Markdown serialization
#[derive(Debug, Clone)]
pub struct SerializerOptions {
    /// Added to the source heading level before clamping to 6.
    /// The default of 1 leaves level 1 free for transcript role headers.
    pub heading_offset: u8,

    /// Bullet list marker
    pub bullet_marker: char,

    /// Fence string for code blocks
    pub fence: String,

    /// Horizontal rule string
    pub hr: String,

    /// Backslash-escape Markdown metacharacters in text nodes
    pub escape_text: bool,

    /// Nested list rendering
    pub nested_lists: NestedListStyle,

    /// Nodes nested deeper than this are emitted as flattened text.
    /// `None` disables the guard.
    pub max_depth: Option<usize>,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            heading_offset: 1,
            bullet_marker: '-',
            fence: "```".to_string(),
            hr: "---".to_string(),
            escape_text: false,
            nested_lists: NestedListStyle::Inline,
            max_depth: Some(512),
        }
    }
}
