//! # chatdown
//!
//! Convert rendered chat conversations to Markdown transcripts.
//!
//! Conversation pages rarely expose the Markdown their messages were
//! written in. This crate recovers a faithful Markdown rendering from the
//! rendered markup: each role-tagged turn is parsed into a
//! [`chatdown_core::Node`] tree, serialized, and placed under a
//! `# user` / `# agent` header.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use chatdown::{ChatdownService, Node, Tag};
//!
//! let service = ChatdownService::new();
//!
//! let h1 = Node::element(Tag::Heading(1)).with_child(Node::text("Hello World"));
//!
//! let markdown = service.serialize(&h1);
//! assert_eq!(markdown, "\n## Hello World\n");
//! ```
//!
//! ## Example (HTML page)
//!
//! ```rust
//! use chatdown::ChatdownService;
//!
//! let service = ChatdownService::new();
//! let page = r#"<div data-role="user"><p>Hi</p></div>
//!               <div data-role="assistant"><p>Hello!</p></div>"#;
//!
//! let transcript = service.transcript_from_html(page).unwrap();
//! assert_eq!(transcript, "# user\n\nHi\n\n# agent\n\nHello!\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
mod service;
mod transcript;
#[cfg(feature = "html")]
mod turns;

pub use chatdown_core::{
    escape_markdown, serialize, serialize_table, Element, NestedListStyle, Node, Role,
    SerializerOptions, Tag,
};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use service::{ChatdownOptions, ChatdownService};
pub use transcript::{render_transcript, TranscriptOptions, Turn};
#[cfg(feature = "html")]
pub use turns::{extract_turns, TurnRoot, TurnSelector};

/// Error type for chatdown operations
#[derive(Debug, thiserror::Error)]
pub enum ChatdownError {
    #[error("No conversation turns found")]
    NoTurnsFound,

    #[error("Invalid turn selector: {0}")]
    InvalidSelector(String),

    #[error(transparent)]
    Core(#[from] chatdown_core::Error),
}

pub type Result<T> = std::result::Result<T, ChatdownError>;
