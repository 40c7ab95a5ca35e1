//! Archive publishing pipeline.
//!
//! Converts a whole export directory into a directory of cross-linked Markdown
//! pages:
//!
//! - `index.md`: archive title, channel list, link to the user page
//! - `users.md`: user table
//! - `channel--<name>.md`: purpose, topic and the list of history pages
//! - `history--<name>--<n>.md`: one chunk of messages
//!
//! For single pages, use [`MarkdownTranslator`] and [`Resolver`] directly.

use crate::archive::reader::{channel_name, chunk_info};
use crate::archive::{
    read_all_chunks, read_channels, read_users, Channel, ChunkInfo, RawMessage, User,
    CHANNELS_FILE, USERS_FILE,
};
use crate::error::ArchiveError;
use crate::markdown::{MarkdownTranslator, TranslatorOptions};
use crate::naming;
use crate::resolve::Resolver;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_CHUNK_SIZE: usize = 100;
pub const DEFAULT_TITLE: &str = "Slack Archive";

/// Specifies how to publish an export.
///
/// ```ignore
/// let spec = PublishSpec::new("export", "out")
///     .with_chunk_size(500)
///     .with_title("Team archive");
/// let report = publish(&spec)?;
/// ```
#[derive(Debug, Clone)]
pub struct PublishSpec {
    /// Root of the Slack export (holds `channels.json` and `users.json`).
    pub source: PathBuf,
    /// Directory receiving the Markdown pages; created when missing.
    pub output: PathBuf,
    /// Messages per history page.
    pub chunk_size: usize,
    /// Heading of the index page.
    pub title: String,
    pub options: TranslatorOptions,
}

impl PublishSpec {
    pub fn new(source: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            title: DEFAULT_TITLE.to_string(),
            options: TranslatorOptions::default(),
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_options(mut self, options: TranslatorOptions) -> Self {
        self.options = options;
        self
    }
}

/// Result of a publish operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishReport {
    /// Every page written, in write order.
    pub files: Vec<PathBuf>,
    /// Number of messages rendered across all history pages.
    pub messages: usize,
}

/// Writes every page of the export described by `spec`.
///
/// # Errors
///
/// Returns [`ArchiveError`] if the metadata files are missing or malformed, a
/// history file cannot be read, or a page cannot be written. A channel without
/// a history directory is not an error; it gets an empty history list.
pub fn publish(spec: &PublishSpec) -> Result<PublishReport, ArchiveError> {
    if spec.chunk_size == 0 {
        return Err(ArchiveError::InvalidChunkSize);
    }
    let channels = read_channels(spec.source.join(CHANNELS_FILE))?;
    let users = read_users(spec.source.join(USERS_FILE))?;
    fs::create_dir_all(&spec.output).map_err(|err| ArchiveError::io(&spec.output, err))?;

    let mut publisher = Publisher {
        spec,
        translator: MarkdownTranslator::with_options(spec.options.clone()),
        resolver: Resolver::new(&channels, &users),
        report: PublishReport::default(),
    };
    publisher.write_index(&channels)?;
    publisher.write_users(&users)?;
    for channel in &channels {
        publisher.write_channel(channel)?;
    }

    info!(
        pages = publisher.report.files.len(),
        messages = publisher.report.messages,
        output = %spec.output.display(),
        "published archive"
    );
    Ok(publisher.report)
}

struct Publisher<'a> {
    spec: &'a PublishSpec,
    translator: MarkdownTranslator,
    resolver: Resolver,
    report: PublishReport,
}

impl Publisher<'_> {
    fn write_index(&mut self, channels: &[Channel]) -> Result<(), ArchiveError> {
        let m = &self.translator;
        let page = [
            m.to_heading(1, &self.spec.title),
            m.to_heading(2, "Channels"),
            m.to_channel_list(channels),
            m.to_heading(2, "Users"),
            m.to_link_list(&[("Users", naming::USERS_FILE)]),
        ];
        self.write_page(naming::INDEX_FILE, &page)
    }

    fn write_users(&mut self, users: &[User]) -> Result<(), ArchiveError> {
        let m = &self.translator;
        let page = [m.to_heading(1, "Users"), m.to_user_table(users)];
        self.write_page(naming::USERS_FILE, &page)
    }

    fn write_channel(&mut self, channel: &Channel) -> Result<(), ArchiveError> {
        let history_dir = self.spec.source.join(&channel.name);
        let chunks = if history_dir.is_dir() {
            read_all_chunks(self.spec.chunk_size, &history_dir)?
        } else {
            warn!(channel = %channel.name, "no history directory, publishing an empty channel");
            Vec::new()
        };

        let name = channel_name(&history_dir);
        let infos: Vec<ChunkInfo> = chunks
            .iter()
            .enumerate()
            .filter_map(|(index, chunk)| chunk_info(&name, index, chunk, |m| m.ts.as_str()))
            .collect();

        let m = &self.translator;
        let page = [
            m.to_heading(1, &format!("#{}", channel.name)),
            m.to_paragraph(&channel.purpose.value),
            m.to_paragraph(&channel.topic.value),
            m.to_heading(2, "History"),
            m.to_chunk_list(&infos),
            m.to_link_list(&[("Index", naming::INDEX_FILE)]),
        ];
        self.write_page(&naming::channel_file(&channel.name), &page)?;

        for (info, chunk) in infos.iter().zip(&chunks) {
            self.write_history(channel, info, chunk)?;
        }
        Ok(())
    }

    fn write_history(
        &mut self,
        channel: &Channel,
        info: &ChunkInfo,
        chunk: &[RawMessage],
    ) -> Result<(), ArchiveError> {
        let resolved: Vec<_> = chunk.iter().map(|msg| self.resolver.resolve(msg)).collect();
        let m = &self.translator;
        let page = [
            m.to_heading(1, &format!("#{} ({})", channel.name, info.number())),
            m.to_message_list(&resolved),
            m.to_link_list(&[(
                format!("#{}", channel.name),
                naming::channel_file(&channel.name),
            )]),
        ];
        self.report.messages += resolved.len();
        self.write_page(&naming::history_file(&channel.name, info.number()), &page)
    }

    fn write_page(&mut self, file_name: &str, blocks: &[Vec<String>]) -> Result<(), ArchiveError> {
        let path = self.spec.output.join(file_name);
        let contents = blocks.concat().join("\n");
        fs::write(&path, contents).map_err(|err| ArchiveError::io(&path, err))?;
        debug!(path = %path.display(), "wrote page");
        self.report.files.push(path);
        Ok(())
    }
}
