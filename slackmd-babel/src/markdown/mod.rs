//! Markdown rendering
//!
//!     Every `to_*` operation returns the lines of one block, terminated by an empty line
//!     so blocks can be concatenated into a page without further separators.
//!
//!     | Operation          | Output                                                   |
//!     |--------------------|----------------------------------------------------------|
//!     | `to_heading`       | `## text`                                                |
//!     | `to_paragraph`     | escaped text, one line per source line                   |
//!     | `to_link_list`     | `* [text](target)` per entry                             |
//!     | `to_channel_list`  | `* [\#name](channel--name.md)` per channel              |
//!     | `to_chunk_list`    | `* [n (first - last)](history--name--n.md)` per chunk    |
//!     | `to_message_list`  | `* <time> @sender: body` per message                     |
//!     | `to_user_table`    | `\|ID\|Icon\|Name\|Email\|FirstName\|LastName\|Title\|`  |
//!
//!     Literal text is passed through [`escape`]; Markdown syntax built here never is.
//!     Times are RFC 3339 with a numeric offset in the configured [`DisplayZone`].

pub mod inline;

pub use inline::{render_events, render_text, InlineRenderer};

use crate::archive::{Channel, ChunkInfo, User};
use crate::error::ZoneError;
use crate::naming;
use crate::resolve::ResolvedMessage;
use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};
use std::str::FromStr;

/// Characters with a meaning in Markdown that message text must not trigger.
pub const ESCAPED_CHARS: &[char] = &['#', '[', ']', '<', '>', '\\', '!', '*', '`', '|'];

const USER_TABLE_COLUMNS: [&str; 7] = [
    "ID",
    "Icon",
    "Name",
    "Email",
    "FirstName",
    "LastName",
    "Title",
];

/// Indentation keeping a wrapped message inside its bullet.
const CONTINUATION_INDENT: &str = "  ";

/// Prefix every Markdown-special character of `text` with a backslash.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPED_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Percent-encode the characters that would end or confuse a link destination.
pub(crate) fn link_destination(href: &str) -> String {
    let mut encoded = String::with_capacity(href.len());
    for c in href.chars() {
        match c {
            ' ' => encoded.push_str("%20"),
            '(' => encoded.push_str("%28"),
            ')' => encoded.push_str("%29"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            _ => encoded.push(c),
        }
    }
    encoded
}

/// Time zone used to display message times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The zone of the machine running the conversion
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn format(&self, time: DateTime<Utc>) -> String {
        match self {
            DisplayZone::Local => time
                .with_timezone(&Local)
                .to_rfc3339_opts(SecondsFormat::Secs, false),
            DisplayZone::Fixed(offset) => time
                .with_timezone(offset)
                .to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = ZoneError;

    /// Accepts `local`, `utc`/`Z`, or an offset `±HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ZoneError::InvalidOffset(s.to_string());
        let value = s.trim();
        if value.eq_ignore_ascii_case("local") {
            return Ok(DisplayZone::Local);
        }
        if value.eq_ignore_ascii_case("utc") || value == "Z" {
            return FixedOffset::east_opt(0)
                .map(DisplayZone::Fixed)
                .ok_or_else(invalid);
        }

        let (sign, rest) = match value.as_bytes().first() {
            Some(b'+') => (1, &value[1..]),
            Some(b'-') => (-1, &value[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| -> Option<i32> {
            if part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse().ok()
            } else {
                None
            }
        };
        let hours = two_digits(hours).ok_or_else(invalid)?;
        let minutes = two_digits(minutes).filter(|m| *m < 60).ok_or_else(invalid)?;
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(DisplayZone::Fixed)
            .ok_or_else(invalid)
    }
}

/// Knobs for [`MarkdownTranslator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorOptions {
    pub zone: DisplayZone,
}

/// Renders headings, lists and tables for the archive pages.
#[derive(Debug, Clone, Default)]
pub struct MarkdownTranslator {
    options: TranslatorOptions,
}

impl MarkdownTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TranslatorOptions) -> Self {
        MarkdownTranslator { options }
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    pub fn escape(&self, text: &str) -> String {
        escape(text)
    }

    pub fn format_time(&self, time: DateTime<Utc>) -> String {
        self.options.zone.format(time)
    }

    pub fn to_heading(&self, level: usize, text: &str) -> Vec<String> {
        vec![format!("{} {}", "#".repeat(level), escape(text)), String::new()]
    }

    /// Escaped text. Blank input produces no block at all.
    pub fn to_paragraph(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let mut lines: Vec<String> = text.lines().map(escape).collect();
        lines.push(String::new());
        lines
    }

    /// One bullet per `(text, target)` pair; text is escaped.
    pub fn to_link_list<S, T>(&self, entries: &[(S, T)]) -> Vec<String>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut lines: Vec<String> = entries
            .iter()
            .map(|(text, target)| {
                format!(
                    "* [{}]({})",
                    escape(text.as_ref()),
                    link_destination(target.as_ref())
                )
            })
            .collect();
        lines.push(String::new());
        lines
    }

    pub fn to_channel_list(&self, channels: &[Channel]) -> Vec<String> {
        let entries: Vec<(String, String)> = channels
            .iter()
            .map(|channel| {
                (
                    format!("#{}", channel.name),
                    naming::channel_file(&channel.name),
                )
            })
            .collect();
        self.to_link_list(&entries)
    }

    pub fn to_chunk_list(&self, chunks: &[ChunkInfo]) -> Vec<String> {
        let mut lines: Vec<String> = chunks
            .iter()
            .map(|chunk| {
                format!(
                    "* [{} ({} - {})]({})",
                    chunk.number(),
                    self.format_time(chunk.first_ts),
                    self.format_time(chunk.last_ts),
                    link_destination(&naming::history_file(&chunk.channel, chunk.number())),
                )
            })
            .collect();
        lines.push(String::new());
        lines
    }

    /// One bullet per message. Line breaks inside a message continue the bullet.
    pub fn to_message_list(&self, messages: &[ResolvedMessage]) -> Vec<String> {
        let mut lines = Vec::new();
        for message in messages {
            let mut body = render_events(&message.events);
            while body.ends_with(inline::HARD_BREAK) {
                body.truncate(body.len() - inline::HARD_BREAK.len());
            }
            let item = format!(
                "* {} @{}: {}",
                self.format_time(message.ts),
                escape(&message.sender),
                body
            );
            let mut item_lines = item.split('\n');
            if let Some(first) = item_lines.next() {
                lines.push(first.to_string());
            }
            lines.extend(item_lines.map(|line| format!("{CONTINUATION_INDENT}{line}")));
        }
        lines.push(String::new());
        lines
    }

    pub fn to_user_table(&self, users: &[User]) -> Vec<String> {
        let mut lines = vec![
            format!("|{}|", USER_TABLE_COLUMNS.join("|")),
            format!("|{}|", ["----"; USER_TABLE_COLUMNS.len()].join("|")),
        ];
        for user in users {
            let icon = if user.icon_url().is_empty() {
                String::new()
            } else {
                format!("![]({})", link_destination(user.icon_url()))
            };
            let cells = [
                escape(&user.id),
                icon,
                escape(&user.name),
                escape(&user.profile.email),
                escape(&user.profile.first_name),
                escape(&user.profile.last_name),
                escape(&user.profile.title),
            ];
            lines.push(format!("|{}|", cells.join("|")));
        }
        lines.push(String::new());
        lines
    }
}
