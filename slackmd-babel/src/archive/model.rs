//! Records deserialized from a Slack export.
//!
//! Only the fields the converter uses are modeled; everything else in the export
//! is ignored on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub topic: ChannelText,
    #[serde(default)]
    pub purpose: ChannelText,
}

/// Topic or purpose of a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChannelText {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub last_set: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub profile: UserProfile,
}

impl User {
    /// Avatar shown in the user table.
    pub fn icon_url(&self) -> &str {
        &self.profile.image_24
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_24: String,
    #[serde(default)]
    pub image_48: String,
}

/// A message as stored in a history file, markup untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawMessage {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub subtype: Option<String>,
    /// Sender user ID
    #[serde(default)]
    pub user: Option<String>,
    /// Display name for integrations posting without a user
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub text: String,
    pub ts: String,
}

impl RawMessage {
    pub fn new(ts: impl Into<String>, user: Option<&str>, text: impl Into<String>) -> Self {
        RawMessage {
            kind: "message".to_string(),
            user: user.map(str::to_string),
            text: text.into(),
            ts: ts.into(),
            ..Default::default()
        }
    }
}

/// Summary of one chunk of a channel's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkInfo {
    /// Channel name, taken from the history directory
    pub channel: String,
    /// Zero-based position of the chunk in the channel history
    pub index: usize,
    pub first_ts: DateTime<Utc>,
    pub last_ts: DateTime<Utc>,
}

impl ChunkInfo {
    /// One-based chunk number used in page names and listings.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}
