//! Rendered blocks read back through a CommonMark parser.

use crate::common::{channel_dir, resolver, tokyo_translator};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use slackmd_babel::archive::read_all_chunks;

fn with_document<R>(markdown: &str, inspect: impl for<'a> FnOnce(&'a AstNode<'a>) -> R) -> R {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &ComrakOptions::default());
    inspect(root)
}

fn link_urls<'a>(root: &'a AstNode<'a>) -> Vec<String> {
    root.descendants()
        .filter_map(|node| match node.data.borrow().value {
            NodeValue::Link(ref link) => Some(link.url.clone()),
            _ => None,
        })
        .collect()
}

fn count<'a>(root: &'a AstNode<'a>, matches: impl Fn(&NodeValue) -> bool) -> usize {
    root.descendants()
        .filter(|node| matches(&node.data.borrow().value))
        .count()
}

fn plain_text<'a>(root: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for node in root.descendants() {
        if let NodeValue::Text(ref t) = node.data.borrow().value {
            text.push_str(t);
        }
    }
    text
}

fn message_markdown() -> String {
    let resolver = resolver();
    let messages: Vec<_> = read_all_chunks(100, channel_dir("channel1"))
        .unwrap()
        .into_iter()
        .flatten()
        .map(|m| resolver.resolve(&m))
        .collect();
    tokyo_translator().to_message_list(&messages).join("\n")
}

#[test]
fn escaped_heading_stays_literal() {
    let m = tokyo_translator();
    let markdown = m.to_heading(1, "#general [*team*]").join("\n");
    with_document(&markdown, |root| {
        assert_eq!(count(root, |v| matches!(v, NodeValue::Heading(_))), 1);
        assert_eq!(count(root, |v| matches!(v, NodeValue::Emph)), 0);
        assert_eq!(plain_text(root), "#general [*team*]");
    });
}

#[test]
fn one_list_item_per_message() {
    let markdown = message_markdown();
    with_document(&markdown, |root| {
        assert_eq!(count(root, |v| matches!(v, NodeValue::List(_))), 1);
        assert_eq!(count(root, |v| matches!(v, NodeValue::Item(_))), 6);
    });
}

#[test]
fn only_slack_links_become_links() {
    let markdown = message_markdown();
    with_document(&markdown, |root| {
        assert_eq!(link_urls(root), vec!["http://example.com/"]);
        assert_eq!(count(root, |v| matches!(v, NodeValue::Emph)), 0);
        assert_eq!(count(root, |v| matches!(v, NodeValue::HtmlInline(_))), 0);
    });
}

#[test]
fn multi_line_message_keeps_hard_break() {
    let markdown = message_markdown();
    with_document(&markdown, |root| {
        assert_eq!(count(root, |v| matches!(v, NodeValue::LineBreak)), 1);
        assert!(plain_text(root).contains("please review *before* 3pm <JST>"));
    });
}

#[test]
fn channel_links_target_pages() {
    let m = tokyo_translator();
    let markdown = m
        .to_link_list(&[("#random", "channel--random.md"), ("a (b)", "x y.md")])
        .join("\n");
    with_document(&markdown, |root| {
        assert_eq!(link_urls(root), vec!["channel--random.md", "x%20y.md"]);
        assert!(plain_text(root).contains("#random"));
    });
}
