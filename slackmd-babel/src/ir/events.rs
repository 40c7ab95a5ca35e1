//! Defines the flat event stream representation of a message.

use crate::mrkdwn::Listener;
use serde::Serialize;

/// A reference to a user, channel or variable, with the display alias given
/// in the markup, if any.
///
/// `alt` is `None` when the markup carried no `|alias` part. A present but
/// empty alias (`<@U1|>`) is kept as `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mention {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Mention {
    pub fn new(id: impl Into<String>, alt: Option<String>) -> Self {
        Mention { id: id.into(), alt }
    }

    /// The alias when one was given, the raw identifier otherwise.
    pub fn display(&self) -> &str {
        self.alt.as_deref().unwrap_or(&self.id)
    }
}

/// A hyperlink with optional display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>, text: Option<String>) -> Self {
        Link {
            href: href.into(),
            text,
        }
    }
}

/// Represents a single event in the message stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Event {
    NewLine,
    Text(String),
    User(Mention),
    Channel(Mention),
    Variable(Mention),
    Link(Link),
}

impl Event {
    pub fn text(content: impl Into<String>) -> Self {
        Event::Text(content.into())
    }

    pub fn user(id: impl Into<String>, alt: Option<&str>) -> Self {
        Event::User(Mention::new(id, alt.map(str::to_string)))
    }

    pub fn channel(id: impl Into<String>, alt: Option<&str>) -> Self {
        Event::Channel(Mention::new(id, alt.map(str::to_string)))
    }

    pub fn variable(name: impl Into<String>, alt: Option<&str>) -> Self {
        Event::Variable(Mention::new(name, alt.map(str::to_string)))
    }

    pub fn link(href: impl Into<String>, text: Option<&str>) -> Self {
        Event::Link(Link::new(href, text.map(str::to_string)))
    }
}

/// Drive `listener` with the callbacks that produced `events`, in order.
pub fn replay<L: Listener + ?Sized>(events: &[Event], listener: &mut L) {
    for event in events {
        match event {
            Event::NewLine => listener.on_new_line(),
            Event::Text(text) => listener.on_text(text),
            Event::User(m) => listener.on_user(&m.id, m.alt.as_deref()),
            Event::Channel(m) => listener.on_channel(&m.id, m.alt.as_deref()),
            Event::Variable(m) => listener.on_variable(&m.id, m.alt.as_deref()),
            Event::Link(link) => listener.on_link(&link.href, link.text.as_deref()),
        }
    }
}

/// Listener that captures every callback as an [`Event`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventRecorder {
    events: Vec<Event>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Listener for EventRecorder {
    fn on_new_line(&mut self) {
        self.events.push(Event::NewLine);
    }

    fn on_text(&mut self, text: &str) {
        self.events.push(Event::text(text));
    }

    fn on_user(&mut self, id: &str, alt: Option<&str>) {
        self.events.push(Event::user(id, alt));
    }

    fn on_channel(&mut self, id: &str, alt: Option<&str>) {
        self.events.push(Event::channel(id, alt));
    }

    fn on_variable(&mut self, name: &str, alt: Option<&str>) {
        self.events.push(Event::variable(name, alt));
    }

    fn on_link(&mut self, href: &str, text: Option<&str>) {
        self.events.push(Event::link(href, text));
    }
}
