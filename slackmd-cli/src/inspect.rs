//! CLI-specific transforms
//!
//! `slackmd inspect <file> [transform]` reads raw message text (the `text` field of a
//! Slack message, entities and all) and shows one processing stage of it.
//!
//! 1. **Scanning** - mrkdwn text → event stream
//!    - `events-simple`: one event per line
//!    - `events-json`: the events as JSON
//!
//! 2. **Rendering** - events → inline Markdown
//!    - `markdown`: the text as it appears in a history page (mentions are not resolved)
//!
//! ## Extra Parameters
//!
//! - `pretty`: "false" switches `events-json` to compact output.
//!
//! Example: `slackmd inspect message.txt events-json --extra-pretty false`

use slackmd_babel::markdown::render_text;
use slackmd_babel::{parse_events, Event};
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["events-simple", "events-json", "markdown"];

pub const DEFAULT_TRANSFORM: &str = "events-simple";

/// Execute a named transform on message text with optional extra parameters.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "events-simple" => Ok(events_to_simple(&parse_events(source))),
        "events-json" => {
            let events = parse_events(source);
            let pretty = extra_params
                .get("pretty")
                .map(|value| value != "false")
                .unwrap_or(true);
            let json = if pretty {
                serde_json::to_string_pretty(&events)
            } else {
                serde_json::to_string(&events)
            };
            json.map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "markdown" => {
            let mut output = render_text(source);
            output.push('\n');
            Ok(output)
        }
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn events_to_simple(events: &[Event]) -> String {
    let mut output = String::new();
    for event in events {
        let line = match event {
            Event::NewLine => "new-line".to_string(),
            Event::Text(text) => format!("text {text:?}"),
            Event::User(mention) => with_alt("user", &mention.id, mention.alt.as_deref()),
            Event::Channel(mention) => with_alt("channel", &mention.id, mention.alt.as_deref()),
            Event::Variable(mention) => {
                with_alt("variable", &mention.id, mention.alt.as_deref())
            }
            Event::Link(link) => with_alt("link", &link.href, link.text.as_deref()),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn with_alt(kind: &str, target: &str, alt: Option<&str>) -> String {
    match alt {
        Some(alt) => format!("{kind} {target} | {alt:?}"),
        None => format!("{kind} {target}"),
    }
}
