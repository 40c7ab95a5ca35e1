//! Page blocks rendered from the sample export.

use crate::common::{channel_dir, channels, resolver, tokyo_translator, users};
use insta::assert_snapshot;
use slackmd_babel::archive::{read_all_chunks, read_all_chunks_as_info};
use slackmd_babel::ResolvedMessage;

fn resolved_chunk(index: usize) -> Vec<ResolvedMessage> {
    let resolver = resolver();
    let chunks = read_all_chunks(3, channel_dir("channel1")).unwrap();
    chunks[index].iter().map(|m| resolver.resolve(m)).collect()
}

#[test]
fn heading_escapes_channel_sigil() {
    let m = tokyo_translator();
    assert_eq!(m.to_heading(2, "#channel-name"), vec!["## \\#channel-name", ""]);
}

#[test]
fn channel_list() {
    let m = tokyo_translator();
    assert_eq!(
        m.to_channel_list(&channels()),
        vec![
            "* [\\#channel1](channel--channel1.md)",
            "* [\\#channel2](channel--channel2.md)",
            "",
        ]
    );
}

#[test]
fn chunk_list() {
    let m = tokyo_translator();
    let infos = read_all_chunks_as_info(3, channel_dir("channel1")).unwrap();
    assert_eq!(
        m.to_chunk_list(&infos),
        vec![
            "* [1 (2016-05-13T17:43:07+09:00 - 2016-05-13T17:43:09+09:00)](history--channel1--1.md)",
            "* [2 (2016-05-13T17:43:58+09:00 - 2016-05-18T18:39:16+09:00)](history--channel1--2.md)",
            "",
        ]
    );
}

#[test]
fn message_list() {
    let m = tokyo_translator();
    assert_eq!(
        m.to_message_list(&resolved_chunk(0)),
        vec![
            "* 2016-05-13T17:43:07+09:00 @alice: @alice has joined the channel",
            "* 2016-05-13T17:43:09+09:00 @alice: @alice set the channel purpose: ",
            "* 2016-05-13T17:43:09+09:00 @bob: @bob has joined the channel",
            "",
        ]
    );
}

#[test]
fn message_list_with_markup() {
    let m = tokyo_translator();
    assert_eq!(
        m.to_message_list(&resolved_chunk(1)),
        vec![
            "* 2016-05-13T17:43:58+09:00 @bob: hi @alice, see [example \\| docs](http://example.com/) & \\#channel2",
            "* 2016-05-18T18:30:00+09:00 @alice: release notes  ",
            "  @here please review \\*before\\* 3pm \\<JST\\>",
            "* 2016-05-18T18:39:16+09:00 @deploybot: deployed by @U99999999",
            "",
        ]
    );
}

#[test]
fn empty_message_list_is_just_the_separator() {
    assert_eq!(tokyo_translator().to_message_list(&[]), vec![""]);
}

#[test]
fn user_table() {
    let table = tokyo_translator().to_user_table(&users());
    assert_snapshot!(table.join("\n"), @r"
|ID|Icon|Name|Email|FirstName|LastName|Title|
|----|----|----|----|----|----|----|
|U00000001|![](https://avatars.slack-edge.com/2016-04-27/00000000000_01234567890abcdef012_24.jpg)|alice|alice.doe@example.com|Alice|Doe|title1|
|U00000002|![](https://secure.gravatar.com/avatar/0123456789abcdef0123456789abcdef.jpg?s=24&d=https%3A%2F%2Fa.slack-edge.com%2F66f9%2Fimg%2Favatars%2Fava_0002-24.png)|bob|bob.doe@example.com|Bob|Doe|title2|
");
}
