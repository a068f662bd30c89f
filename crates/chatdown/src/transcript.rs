//! Transcript assembly.
//!
//! Each turn is rendered under a level-1 role header (`# user`,
//! `# agent`); serialized headings start at level 2 so they never
//! collide with these.

use once_cell::sync::Lazy;
use regex::Regex;

use chatdown_core::Role;

static BLANK_LINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank line regex"));

/// One serialized conversation turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub markdown: String,
}

impl Turn {
    pub fn new(role: Role, markdown: impl Into<String>) -> Self {
        Self {
            role,
            markdown: markdown.into(),
        }
    }
}

/// Options for transcript rendering
#[derive(Debug, Clone, Default)]
pub struct TranscriptOptions {
    /// Collapse runs of three or more newlines to a single blank line.
    /// This also applies inside code blocks.
    pub collapse_blank_lines: bool,
}

/// Join turns into one Markdown document
pub fn render_transcript(turns: &[Turn], options: &TranscriptOptions) -> String {
    let transcript = turns
        .iter()
        .map(|turn| format!("# {}\n\n{}\n", turn.role, turn.markdown.trim()))
        .collect::<Vec<_>>()
        .join("\n");

    if options.collapse_blank_lines {
        BLANK_LINE_RUNS.replace_all(&transcript, "\n\n").into_owned()
    } else {
        transcript
    }
}
