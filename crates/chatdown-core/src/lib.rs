//! chatdown-core - tree to Markdown serialization
//!
//! This crate turns a rendered, semantically tagged document tree into a
//! Markdown fragment. It is used by `chatdown` to transcribe conversation
//! turns when only the rendered markup is available.
//!
//! # Architecture
//!
//! ```text
//! Node tree ──serialize──▶ Markdown fragment
//!     │
//!     └─ table ──table_rows──▶ cell text ──serialize_table──▶ pipe table
//! ```
//!
//! Serialization is total: malformed input (missing attributes, unknown
//! tags, ragged tables) degrades to some output instead of failing.
//!
//! # Example
//!
//! ```rust
//! use chatdown_core::{serialize, Node, SerializerOptions, Tag};
//!
//! let p = Node::element(Tag::Paragraph)
//!     .with_child(Node::text("Hello "))
//!     .with_child(Node::element(Tag::Bold).with_child(Node::text("World")));
//!
//! let markdown = serialize(&p, &SerializerOptions::default());
//! assert_eq!(markdown, "\nHello **World**\n");
//! ```

mod node;
mod options;
mod role;
mod serialize;
mod table;
mod utilities;

pub use node::{Element, Node, Tag};
pub use options::{NestedListStyle, SerializerOptions};
pub use role::Role;
pub use serialize::serialize;
pub use table::{serialize_table, table_rows};
pub use utilities::{escape_markdown, language_from_class};

/// Error type for chatdown-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, Error>;
