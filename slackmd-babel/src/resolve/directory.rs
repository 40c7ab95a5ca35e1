//! Read-only lookup tables from identifiers to export metadata.

use crate::archive::{Channel, User};
use std::collections::HashMap;

/// User ID → user record.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new(users: &[User]) -> Self {
        users.iter().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// The user's name, or `id` itself when the user is unknown.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |user| user.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<User> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        UserDirectory {
            users: iter.into_iter().map(|user| (user.id.clone(), user)).collect(),
        }
    }
}

/// Channel ID → channel name.
#[derive(Debug, Clone, Default)]
pub struct ChannelDirectory {
    names: HashMap<String, String>,
}

impl ChannelDirectory {
    pub fn new(channels: &[Channel]) -> Self {
        ChannelDirectory {
            names: channels
                .iter()
                .map(|channel| (channel.id.clone(), channel.name.clone()))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// The channel's name, or `id` itself when the channel is unknown.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
