//! Identifier resolution
//!
//!     Turns a [`RawMessage`] into a [`ResolvedMessage`]: the text is scanned again and
//!     every user and channel mention without an explicit alias gets its display name
//!     from the directories. Unknown identifiers are common in partial exports and
//!     resolve to themselves, so resolution always succeeds.

pub mod directory;
pub mod timestamp;

pub use directory::{ChannelDirectory, UserDirectory};
pub use timestamp::{parse_slack_ts, slack_ts_to_time};

use crate::archive::{Channel, RawMessage, User};
use crate::ir::events::Event;
use crate::mrkdwn::{parse, Listener};
use chrono::{DateTime, Utc};

/// A message ready for rendering.
///
/// Every user and channel mention in `events` carries its display text in `alt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMessage {
    pub ts: DateTime<Utc>,
    /// Display name of the sender
    pub sender: String,
    pub subtype: Option<String>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default)]
pub struct Resolver {
    users: UserDirectory,
    channels: ChannelDirectory,
}

impl Resolver {
    pub fn new(channels: &[Channel], users: &[User]) -> Self {
        Self::from_directories(UserDirectory::new(users), ChannelDirectory::new(channels))
    }

    pub fn from_directories(users: UserDirectory, channels: ChannelDirectory) -> Self {
        Resolver { users, channels }
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn channels(&self) -> &ChannelDirectory {
        &self.channels
    }

    pub fn resolve(&self, message: &RawMessage) -> ResolvedMessage {
        ResolvedMessage {
            ts: slack_ts_to_time(&message.ts),
            sender: self.sender(message),
            subtype: message.subtype.clone(),
            events: self.resolve_text(&message.text),
        }
    }

    /// Scan `text`, filling in display names for mentions without an alias.
    pub fn resolve_text(&self, text: &str) -> Vec<Event> {
        let mut listener = ResolvingListener {
            resolver: self,
            events: Vec::new(),
        };
        parse(text, &mut listener);
        listener.events
    }

    /// Sender display name: the user's name, then the integration's
    /// `username`, then its `bot_id`.
    fn sender(&self, message: &RawMessage) -> String {
        if let Some(user) = &message.user {
            return self.users.display_name(user).to_string();
        }
        message
            .username
            .as_ref()
            .or(message.bot_id.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

struct ResolvingListener<'r> {
    resolver: &'r Resolver,
    events: Vec<Event>,
}

impl Listener for ResolvingListener<'_> {
    fn on_new_line(&mut self) {
        self.events.push(Event::NewLine);
    }

    fn on_text(&mut self, text: &str) {
        self.events.push(Event::text(text));
    }

    fn on_user(&mut self, id: &str, alt: Option<&str>) {
        let resolver = self.resolver;
        let name = alt.unwrap_or_else(|| resolver.users.display_name(id));
        self.events.push(Event::user(id, Some(name)));
    }

    fn on_channel(&mut self, id: &str, alt: Option<&str>) {
        let resolver = self.resolver;
        let name = alt.unwrap_or_else(|| resolver.channels.display_name(id));
        self.events.push(Event::channel(id, Some(name)));
    }

    fn on_variable(&mut self, name: &str, alt: Option<&str>) {
        self.events.push(Event::variable(name, alt));
    }

    fn on_link(&mut self, href: &str, text: Option<&str>) {
        self.events.push(Event::link(href, text));
    }
}
