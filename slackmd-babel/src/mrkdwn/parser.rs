//! Single-pass scanner for Slack message markup.
//!
//! The scanner is in one of two states. In text it extends the current run until a
//! newline or a `<`. At a `<` it looks ahead, within the current line, for the closing
//! `>`: if a well-formed construct is found the pending run is flushed and the construct
//! reported, otherwise the `<` stays part of the text run. End of input flushes the run.

use super::Listener;
use crate::ir::events::{Event, EventRecorder};

/// Scan `text` and report its constructs to `listener`.
pub fn parse<L: Listener + ?Sized>(text: &str, listener: &mut L) {
    MessageParser::new(listener).parse(text);
}

/// Scan `text` into an owned event list.
pub fn parse_events(text: &str) -> Vec<Event> {
    let mut recorder = EventRecorder::new();
    parse(text, &mut recorder);
    recorder.into_events()
}

/// Drives a [`Listener`] over message text.
///
/// The parser keeps no state between calls to [`MessageParser::parse`].
pub struct MessageParser<'l, L: Listener + ?Sized> {
    listener: &'l mut L,
}

impl<'l, L: Listener + ?Sized> MessageParser<'l, L> {
    pub fn new(listener: &'l mut L) -> Self {
        MessageParser { listener }
    }

    pub fn parse(&mut self, text: &str) {
        let mut run_start = 0;
        let mut cursor = 0;

        while let Some(offset) = text[cursor..].find(&['\n', '<'][..]) {
            let at = cursor + offset;
            if text.as_bytes()[at] == b'\n' {
                self.flush(&text[run_start..at]);
                self.listener.on_new_line();
                cursor = at + 1;
                run_start = cursor;
                continue;
            }

            match Construct::scan(&text[at..]) {
                Some((construct, len)) => {
                    self.flush(&text[run_start..at]);
                    self.emit(construct);
                    cursor = at + len;
                    run_start = cursor;
                }
                // Literal '<', keep extending the run
                None => cursor = at + 1,
            }
        }

        self.flush(&text[run_start..]);
    }

    fn flush(&mut self, run: &str) {
        if !run.is_empty() {
            self.listener.on_text(run);
        }
    }

    fn emit(&mut self, construct: Construct<'_>) {
        match construct {
            Construct::User { id, alt } => self.listener.on_user(id, alt),
            Construct::Channel { id, alt } => self.listener.on_channel(id, alt),
            Construct::Variable { name, alt } => self.listener.on_variable(name, alt),
            Construct::Link { href, text } => self.listener.on_link(href, text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Construct<'a> {
    User { id: &'a str, alt: Option<&'a str> },
    Channel { id: &'a str, alt: Option<&'a str> },
    Variable { name: &'a str, alt: Option<&'a str> },
    Link { href: &'a str, text: Option<&'a str> },
}

impl<'a> Construct<'a> {
    /// Recognize a construct at the start of `input`, which begins with `<`.
    ///
    /// Returns the construct and the number of bytes it spans, including both
    /// delimiters. The first `>` closes the construct; a newline or another `<`
    /// before it means there is no construct here.
    fn scan(input: &'a str) -> Option<(Self, usize)> {
        let inner = input.strip_prefix('<')?;
        let end = inner.find(&['>', '\n', '<'][..])?;
        if inner.as_bytes()[end] != b'>' {
            return None;
        }
        let construct = Self::from_body(&inner[..end])?;
        Some((construct, end + 2))
    }

    fn from_body(body: &'a str) -> Option<Self> {
        let (target, alt) = match body.split_once('|') {
            Some((target, alt)) => (target, Some(alt)),
            None => (body, None),
        };

        let construct = if let Some(id) = target.strip_prefix('@') {
            Construct::User { id, alt }
        } else if let Some(id) = target.strip_prefix('#') {
            Construct::Channel { id, alt }
        } else if let Some(name) = target.strip_prefix('!') {
            Construct::Variable { name, alt }
        } else {
            Construct::Link {
                href: target,
                text: alt,
            }
        };

        let target_is_empty = match construct {
            Construct::User { id, .. } | Construct::Channel { id, .. } => id.is_empty(),
            Construct::Variable { name, .. } => name.is_empty(),
            Construct::Link { href, .. } => href.is_empty(),
        };
        if target_is_empty {
            None
        } else {
            Some(construct)
        }
    }
}
