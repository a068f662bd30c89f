//! End-to-end conversion of rendered conversation pages.

use chatdown::{ChatdownError, ChatdownOptions, ChatdownService, Role};

const CONVERSATION: &str = r#"<!DOCTYPE html>
<html>
<head><title>Chat</title><style>.x { color: red }</style></head>
<body>
  <nav>Sidebar</nav>
  <article data-role="user">
    <div class="bubble"><p>How do I read a file in <code>Rust</code>?</p></div>
  </article>
  <article data-role="assistant">
    <div class="markdown">
      <h2>Reading files</h2>
      <p>Use <a href="https://doc.rust-lang.org/std/fs/fn.read_to_string.html">read_to_string</a>:</p>
      <pre><div class="toolbar">rust</div><code class="language-rust">let s = std::fs::read_to_string("a.txt")?;
</code></pre>
      <ol start="3">
        <li>Open the file</li>
        <li>Read <em>everything</em></li>
      </ol>
      <blockquote><p>Errors are values.</p></blockquote>
      <table>
        <thead><tr><th>Fn</th><th>Returns</th></tr></thead>
        <tbody>
          <tr><td>read</td><td>Vec&lt;u8&gt;</td></tr>
          <tr><td>read_to_string</td></tr>
        </tbody>
      </table>
      <hr>
      <p>Done.</p>
    </div>
  </article>
</body>
</html>
"#;

#[test]
fn test_full_conversation() {
    let service = ChatdownService::new();
    let transcript = service.transcript_from_html(CONVERSATION).unwrap();

    assert!(transcript.starts_with("# user\n\nHow do I read a file in `Rust`?\n\n# agent\n\n"));
    assert!(transcript.contains("\n### Reading files\n"));
    assert!(transcript.contains(
        "Use [read_to_string](https://doc.rust-lang.org/std/fs/fn.read_to_string.html):"
    ));
    assert!(transcript.contains(
        "\n```rust\nlet s = std::fs::read_to_string(\"a.txt\")?;\n```\n"
    ));
    assert!(transcript.contains("\n1. Open the file\n2. Read everything\n"));
    assert!(transcript.contains("\n> Errors are values.\n"));
    assert!(transcript.contains(
        "| Fn | Returns |\n| --- | --- |\n| read | Vec<u8> |\n| read_to_string |  |"
    ));
    assert!(transcript.contains("\n---\n"));
    assert!(transcript.ends_with("Done.\n"));
    assert!(!transcript.contains("Sidebar"));
    assert!(!transcript.contains("color: red"));
}

#[test]
fn test_turn_roles_and_order() {
    let service = ChatdownService::new();
    let turns = service.turns_from_html(CONVERSATION).unwrap();

    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[1].role, Role::Agent);
}

#[test]
fn test_collapse_blank_lines() {
    let mut options = ChatdownOptions::default();
    options.transcript.collapse_blank_lines = true;
    let service = ChatdownService::with_options(options);

    let transcript = service.transcript_from_html(CONVERSATION).unwrap();
    assert!(!transcript.contains("\n\n\n"));
}

#[test]
fn test_page_without_turns() {
    let service = ChatdownService::new();
    let err = service
        .transcript_from_html("<html><body><p>Empty</p></body></html>")
        .unwrap_err();
    assert!(matches!(err, ChatdownError::NoTurnsFound));
    assert_eq!(err.to_string(), "No conversation turns found");
}

#[test]
fn test_deeply_nested_turn() {
    let depth = 20_000;
    let page = format!(
        r#"<div data-role="user">{}<b>deep</b>{}</div><div data-role="agent"><p>ok</p></div>"#,
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );

    let service = ChatdownService::new();
    let transcript = service.transcript_from_html(&page).unwrap();
    assert_eq!(transcript, "# user\n\ndeep\n\n# agent\n\nok\n");
}
