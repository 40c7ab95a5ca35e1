//! Loaders for export metadata and channel history.

use super::model::{Channel, ChunkInfo, RawMessage, User};
use crate::error::ArchiveError;
use crate::resolve::timestamp::slack_ts_to_time;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CHANNELS_FILE: &str = "channels.json";
pub const USERS_FILE: &str = "users.json";

/// Read `channels.json`, preserving file order.
pub fn read_channels(path: impl AsRef<Path>) -> Result<Vec<Channel>, ArchiveError> {
    let channels: Vec<Channel> = read_json(path.as_ref())?;
    debug!(path = %path.as_ref().display(), count = channels.len(), "loaded channels");
    Ok(channels)
}

/// Read `users.json`, preserving file order.
pub fn read_users(path: impl AsRef<Path>) -> Result<Vec<User>, ArchiveError> {
    let users: Vec<User> = read_json(path.as_ref())?;
    debug!(path = %path.as_ref().display(), count = users.len(), "loaded users");
    Ok(users)
}

/// Read every message of a channel history directory, oldest file first.
pub fn read_channel_history(dir: impl AsRef<Path>) -> Result<Vec<RawMessage>, ArchiveError> {
    read_history(dir.as_ref())
}

/// Read a channel history directory split into chunks of `chunk_size` messages.
///
/// The last chunk holds the remainder and may be shorter.
pub fn read_all_chunks(
    chunk_size: usize,
    dir: impl AsRef<Path>,
) -> Result<Vec<Vec<RawMessage>>, ArchiveError> {
    if chunk_size == 0 {
        return Err(ArchiveError::InvalidChunkSize);
    }
    let messages = read_history::<RawMessage>(dir.as_ref())?;
    Ok(messages.chunks(chunk_size).map(<[_]>::to_vec).collect())
}

/// Summarize the chunks of a channel history without keeping message bodies.
pub fn read_all_chunks_as_info(
    chunk_size: usize,
    dir: impl AsRef<Path>,
) -> Result<Vec<ChunkInfo>, ArchiveError> {
    if chunk_size == 0 {
        return Err(ArchiveError::InvalidChunkSize);
    }
    let dir = dir.as_ref();
    let stamps = read_history::<Stamp>(dir)?;
    let channel = channel_name(dir);
    Ok(stamps
        .chunks(chunk_size)
        .enumerate()
        .filter_map(|(index, chunk)| chunk_info(&channel, index, chunk, |s| s.ts.as_str()))
        .collect())
}

/// Build the summary for one chunk; `None` for an empty chunk.
pub(crate) fn chunk_info<T>(
    channel: &str,
    index: usize,
    chunk: &[T],
    ts: impl Fn(&T) -> &str,
) -> Option<ChunkInfo> {
    let first = chunk.first()?;
    let last = chunk.last()?;
    Some(ChunkInfo {
        channel: channel.to_string(),
        index,
        first_ts: slack_ts_to_time(ts(first)),
        last_ts: slack_ts_to_time(ts(last)),
    })
}

/// The channel a history directory belongs to.
pub(crate) fn channel_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Message shape used when only timestamps are needed.
#[derive(Deserialize)]
struct Stamp {
    ts: String,
}

fn read_history<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, ArchiveError> {
    let mut messages = Vec::new();
    for path in history_files(dir)? {
        let mut day: Vec<T> = read_json(&path)?;
        debug!(path = %path.display(), count = day.len(), "loaded history file");
        messages.append(&mut day);
    }
    Ok(messages)
}

/// The `*.json` files of a history directory, sorted by file name.
fn history_files(dir: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
    let entries = fs::read_dir(dir).map_err(|err| ArchiveError::io(dir, err))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| ArchiveError::io(dir, err))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArchiveError> {
    let file = File::open(path).map_err(|err| ArchiveError::io(path, err))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArchiveError::Json {
        path: path.to_path_buf(),
        source,
    })
}
