//! Output file names.
//!
//! Pages link to each other by these names, so they are the only place the layout
//! of the output directory is decided.

pub const INDEX_FILE: &str = "index.md";
pub const USERS_FILE: &str = "users.md";

pub fn channel_file(channel: &str) -> String {
    format!("channel--{channel}.md")
}

/// `number` is one-based.
pub fn history_file(channel: &str, number: usize) -> String {
    format!("history--{channel}--{number}.md")
}
