//! Slack export archive model and loaders
//!
//!     A Slack export is a directory laid out as:
//!
//!     .
//!     ├── channels.json           # array of channel metadata
//!     ├── users.json              # array of user metadata
//!     └── <channel-name>
//!         ├── 2016-05-13.json     # array of messages posted that day
//!         └── 2016-05-18.json
//!
//!     History is read in file-name order and split into fixed-size chunks, each of
//!     which becomes one Markdown page.

pub mod model;
pub mod reader;

pub use model::{Channel, ChannelText, ChunkInfo, RawMessage, User, UserProfile};
pub use reader::{
    read_all_chunks, read_all_chunks_as_info, read_channel_history, read_channels, read_users,
    CHANNELS_FILE, USERS_FILE,
};
