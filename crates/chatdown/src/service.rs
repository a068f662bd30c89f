//! ChatdownService - the main entry point for transcript conversion.

use chatdown_core::{serialize, Node, SerializerOptions};

use crate::transcript::{render_transcript, TranscriptOptions, Turn};
#[cfg(feature = "html")]
use crate::turns::{extract_turns, TurnSelector};
#[cfg(feature = "html")]
use crate::Result;

/// Options for ChatdownService
#[derive(Debug, Clone, Default)]
pub struct ChatdownOptions {
    /// Tree serializer options
    pub serializer: SerializerOptions,

    /// Turn discovery
    #[cfg(feature = "html")]
    pub turns: TurnSelector,

    /// Transcript assembly
    pub transcript: TranscriptOptions,
}

/// The main service for converting rendered conversations to Markdown
#[derive(Debug, Clone, Default)]
pub struct ChatdownService {
    options: ChatdownOptions,
}

impl ChatdownService {
    /// Create a new ChatdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ChatdownService with custom options
    pub fn with_options(options: ChatdownOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ChatdownOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ChatdownOptions {
        &mut self.options
    }

    /// Serialize one content tree to a Markdown fragment
    pub fn serialize(&self, node: &Node) -> String {
        serialize(node, &self.options.serializer)
    }

    /// Serialize an HTML fragment to Markdown
    #[cfg(feature = "html")]
    pub fn serialize_html(&self, html: &str) -> String {
        self.serialize(&crate::html::parse_html(html))
    }

    /// Join already serialized turns into a transcript
    pub fn render(&self, turns: &[Turn]) -> String {
        render_transcript(turns, &self.options.transcript)
    }

    /// Discover and serialize every turn of a rendered conversation page
    #[cfg(feature = "html")]
    pub fn turns_from_html(&self, html: &str) -> Result<Vec<Turn>> {
        let roots = extract_turns(html, &self.options.turns)?;
        Ok(roots
            .iter()
            .map(|root| Turn::new(root.role, self.serialize(&root.content)))
            .collect())
    }

    /// Convert a rendered conversation page to a Markdown transcript
    #[cfg(feature = "html")]
    pub fn transcript_from_html(&self, html: &str) -> Result<String> {
        let turns = self.turns_from_html(html)?;
        Ok(self.render(&turns))
    }
}
