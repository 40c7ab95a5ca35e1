//! Slack export to Markdown conversion
//!
//!     This crate turns a Slack workspace export (channel and user metadata plus per-day
//!     message history files) into cross-linked Markdown pages.
//!
//!     This is a pure lib, that is, it powers slackmd-cli but is shell agnostic: no code
//!     here supposes a shell environment, be it std printing, env vars or exit codes.
//!
//! Architecture
//!
//!     The hard part is the message text. Slack embeds a small markup in it (links,
//!     user/channel/variable mentions with optional aliases, HTML-escaped literals) that
//!     has to be decoded before the text can be re-escaped for Markdown. That work is split
//!     in three layers:
//!
//!     - mrkdwn: a single-pass scanner reporting constructs to a Listener trait
//!     - resolve: a listener that fills in display names from the export directories
//!     - markdown: a listener that renders inline Markdown, plus the page blocks
//!
//!     The Listener decouples scanning from what is done with the result, so rendering,
//!     resolution and test capture are interchangeable. ir::events is the owned form of the
//!     callbacks, used to keep resolved messages around until they are rendered.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── archive                 # Export model and JSON loaders
//!     ├── ir                      # Owned event stream + replay
//!     ├── mrkdwn                  # Scanner and Listener trait
//!     ├── resolve                 # Directories, timestamps, Resolver
//!     ├── markdown                # Escaping, inline renderer, page blocks
//!     ├── naming.rs               # Output file names
//!     ├── publish.rs              # Export dir -> output dir
//!     └── lib.rs
//!
//! Error Policy
//!
//!     Scanning, resolving and rendering are total. Malformed markup is text, unknown
//!     identifiers display as themselves and unreadable timestamps become the epoch:
//!     archived chat data is never fully clean and one bad record must not stop a
//!     conversion. Only the loaders and the publisher return errors.
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # aggregates the subdirectories
//!     ├── common                  # fixture helpers
//!     ├── fixtures/export         # a small Slack export
//!     ├── mrkdwn
//!     ├── markdown
//!     └── resolve
pub mod archive;
pub mod error;
pub mod ir;
pub mod markdown;
pub mod mrkdwn;
pub mod naming;
pub mod publish;
pub mod resolve;

pub use error::{ArchiveError, TimestampError, ZoneError};
pub use ir::events::{Event, EventRecorder};
pub use markdown::{escape, DisplayZone, MarkdownTranslator, TranslatorOptions};
pub use mrkdwn::{parse, parse_events, Listener, MessageParser};
pub use publish::{publish, PublishReport, PublishSpec};
pub use resolve::{slack_ts_to_time, ResolvedMessage, Resolver};
