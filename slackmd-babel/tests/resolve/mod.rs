//! Resolver tests against the sample export.

use crate::common::{channel_dir, resolver};
use slackmd_babel::archive::{read_all_chunks, RawMessage};
use slackmd_babel::ir::events::Mention;
use slackmd_babel::Event;

fn mentions(events: &[Event]) -> Vec<Mention> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::User(m) | Event::Channel(m) => Some(m.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn mention_without_alias_resolves_from_directory() {
    let message = RawMessage::new("1463128987.000002", Some("U00000002"), "cc <@U00000001>");
    let resolved = resolver().resolve(&message);
    assert_eq!(
        mentions(&resolved.events),
        vec![Mention::new("U00000001", Some("alice".to_string()))]
    );
}

#[test]
fn unknown_mention_resolves_to_raw_id() {
    let message = RawMessage::new("0", None, "<@U99999999>");
    let resolved = resolver().resolve(&message);
    assert_eq!(
        mentions(&resolved.events),
        vec![Mention::new("U99999999", Some("U99999999".to_string()))]
    );
}

#[test]
fn channel_mentions_resolve_to_names() {
    let resolved = resolver().resolve_text("<#C00000002> <#C00000001|renamed>");
    assert_eq!(
        mentions(&resolved),
        vec![
            Mention::new("C00000002", Some("channel2".to_string())),
            Mention::new("C00000001", Some("renamed".to_string())),
        ]
    );
}

#[test]
fn whole_history_resolves() {
    let resolver = resolver();
    let chunks = read_all_chunks(3, channel_dir("channel1")).unwrap();
    let senders: Vec<_> = chunks
        .iter()
        .flatten()
        .map(|message| resolver.resolve(message).sender)
        .collect();
    assert_eq!(
        senders,
        vec!["alice", "alice", "bob", "bob", "alice", "deploybot"]
    );
}

#[test]
fn resolution_is_independent_of_message_order() {
    let resolver = resolver();
    let chunks = read_all_chunks(3, channel_dir("channel1")).unwrap();
    let messages: Vec<_> = chunks.into_iter().flatten().collect();

    let forward: Vec<_> = messages.iter().map(|m| resolver.resolve(m)).collect();
    let mut backward: Vec<_> = messages.iter().rev().map(|m| resolver.resolve(m)).collect();
    backward.reverse();

    assert_eq!(forward, backward);
}
