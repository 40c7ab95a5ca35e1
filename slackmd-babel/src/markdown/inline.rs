//! Inline rendering of message events.

use super::{escape, link_destination};
use crate::ir::events::{replay, Event};
use crate::mrkdwn::{decode_entities, parse, Listener};

/// Markdown hard line break.
pub const HARD_BREAK: &str = "  \n";

/// Render already scanned (usually resolved) events.
pub fn render_events(events: &[Event]) -> String {
    let mut renderer = InlineRenderer::new();
    replay(events, &mut renderer);
    renderer.into_string()
}

/// Scan and render raw message text. Mentions without an alias show their raw ID.
pub fn render_text(text: &str) -> String {
    let mut renderer = InlineRenderer::new();
    parse(text, &mut renderer);
    renderer.into_string()
}

/// Listener that accumulates inline Markdown.
///
/// Text, aliases and link labels are entity-decoded and then escaped; link
/// destinations are decoded and percent-encoded where Markdown would misread them.
#[derive(Debug, Default, Clone)]
pub struct InlineRenderer {
    output: String,
}

impl InlineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }

    fn push_literal(&mut self, text: &str) {
        self.output.push_str(&escape(&decode_entities(text)));
    }
}

impl Listener for InlineRenderer {
    fn on_new_line(&mut self) {
        self.output.push_str(HARD_BREAK);
    }

    fn on_text(&mut self, text: &str) {
        self.push_literal(text);
    }

    fn on_user(&mut self, id: &str, alt: Option<&str>) {
        self.output.push('@');
        self.push_literal(alt.unwrap_or(id));
    }

    fn on_channel(&mut self, id: &str, alt: Option<&str>) {
        self.push_literal("#");
        self.push_literal(alt.unwrap_or(id));
    }

    fn on_variable(&mut self, name: &str, alt: Option<&str>) {
        // Newer exports alias `<!here>` as `@here`
        let label = alt.map_or(name, |alt| alt.trim_start_matches('@'));
        self.output.push('@');
        self.push_literal(label);
    }

    fn on_link(&mut self, href: &str, text: Option<&str>) {
        let label = text.filter(|text| !text.is_empty()).unwrap_or(href);
        self.output.push('[');
        self.push_literal(label);
        self.output.push_str("](");
        self.output.push_str(&link_destination(&decode_entities(href)));
        self.output.push(')');
    }
}
