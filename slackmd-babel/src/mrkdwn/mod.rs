//! Slack message markup ("mrkdwn") scanning
//!
//!     Slack stores message text with a small inline markup embedded in it. This module
//!     recognizes the four angle-bracket constructs and line breaks, and reports them, in
//!     document order, to a [`Listener`]:
//!
//!     | Construct        | Syntax                              | Callback       |
//!     |------------------|-------------------------------------|----------------|
//!     | Newline          | `\n`                                | `on_new_line`  |
//!     | Text run         | anything else                       | `on_text`      |
//!     | Link             | `<http://…>`, `<http://…\|text>`    | `on_link`      |
//!     | User mention     | `<@U123>`, `<@U123\|alias>`         | `on_user`      |
//!     | Channel mention  | `<#C123>`, `<#C123\|alias>`         | `on_channel`   |
//!     | Variable mention | `<!here>`, `<!here\|here>`          | `on_variable`  |
//!
//!     Anything else, including bold/italic markers, emoji shortcodes and malformed
//!     `<…` sequences, is plain text. Scanning never fails.
//!
//!     The scanner does not touch HTML entities (`&lt;`, `&gt;`, `&amp;`); renderers decode
//!     them with [`decode_entities`] when producing output.

mod entities;
mod parser;

pub use entities::decode_entities;
pub use parser::{parse, parse_events, MessageParser};

/// Receives the constructs found while scanning a message.
///
/// The parser knows nothing about what implementors do with the callbacks, so rendering,
/// resolution and structural capture are interchangeable.
pub trait Listener {
    fn on_new_line(&mut self);

    /// A maximal run of plain text. Never empty.
    fn on_text(&mut self, text: &str);

    /// `alt` is `None` when the markup has no `|alias` part.
    fn on_user(&mut self, id: &str, alt: Option<&str>);

    fn on_channel(&mut self, id: &str, alt: Option<&str>);

    fn on_variable(&mut self, name: &str, alt: Option<&str>);

    /// `text` is everything after the first `|`, which may itself contain `|`.
    fn on_link(&mut self, href: &str, text: Option<&str>);
}
