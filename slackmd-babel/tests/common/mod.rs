//! Shared fixture helpers.

use slackmd_babel::archive::{read_channels, read_users, Channel, User};
use slackmd_babel::{MarkdownTranslator, Resolver, TranslatorOptions};
use std::path::PathBuf;

/// Root of the sample export.
pub fn export_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("export")
}

pub fn channel_dir(name: &str) -> PathBuf {
    export_dir().join(name)
}

pub fn channels() -> Vec<Channel> {
    read_channels(export_dir().join("channels.json")).expect("fixture channels")
}

pub fn users() -> Vec<User> {
    read_users(export_dir().join("users.json")).expect("fixture users")
}

pub fn resolver() -> Resolver {
    Resolver::new(&channels(), &users())
}

/// Translator pinned to the zone the fixture data was recorded in.
pub fn tokyo_translator() -> MarkdownTranslator {
    MarkdownTranslator::with_options(TranslatorOptions {
        zone: "+09:00".parse().expect("valid offset"),
    })
}
