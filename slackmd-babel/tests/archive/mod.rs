//! Loader tests against the sample export.

use crate::common::{channel_dir, channels, users};
use chrono::{TimeZone, Utc};
use slackmd_babel::archive::{read_all_chunks, read_all_chunks_as_info};

#[test]
fn channels_keep_file_order() {
    let names: Vec<_> = channels().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["channel1", "channel2"]);
}

#[test]
fn channel_purpose_is_loaded() {
    assert_eq!(channels()[0].purpose.value, "General *discussion*");
    assert!(channels()[1].purpose.value.is_empty());
}

#[test]
fn users_carry_profiles() {
    let users = users();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "alice");
    assert_eq!(users[0].profile.email, "alice.doe@example.com");
    assert!(users[1].icon_url().starts_with("https://secure.gravatar.com/"));
}

#[test]
fn history_spans_day_files_in_order() {
    let chunks = read_all_chunks(3, channel_dir("channel1")).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), 3);
    assert_eq!(chunks[1].len(), 3);
    assert_eq!(chunks[0][0].subtype.as_deref(), Some("channel_join"));
    assert_eq!(chunks[1][2].username.as_deref(), Some("deploybot"));
}

#[test]
fn chunk_infos_summarize_first_and_last_messages() {
    let infos = read_all_chunks_as_info(3, channel_dir("channel1")).unwrap();
    assert_eq!(infos.len(), 2);

    assert_eq!(infos[0].channel, "channel1");
    assert_eq!(infos[0].index, 0);
    assert_eq!(infos[0].number(), 1);
    assert_eq!(
        infos[0].first_ts.timestamp(),
        Utc.with_ymd_and_hms(2016, 5, 13, 8, 43, 7).unwrap().timestamp()
    );
    assert_eq!(
        infos[1].last_ts.timestamp(),
        Utc.with_ymd_and_hms(2016, 5, 18, 9, 39, 16).unwrap().timestamp()
    );
}

#[test]
fn one_chunk_when_size_exceeds_history() {
    let infos = read_all_chunks_as_info(100, channel_dir("channel1")).unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].first_ts.timestamp(), 1_463_128_987);
    assert_eq!(infos[0].last_ts.timestamp(), 1_463_564_356);
}
