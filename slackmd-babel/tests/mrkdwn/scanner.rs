//! Event sequences produced by the scanner, observed through a hand-written listener.

use slackmd_babel::Listener;
use slackmd_babel::MessageParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    NewLine,
    Text,
    User,
    Channel,
    Variable,
    Link,
}

/// `(kind, text, target)`: text is the run, alias or link text; target the id or href.
type Record = (Kind, String, String);

#[derive(Default)]
struct RecordingListener {
    records: Vec<Record>,
}

impl RecordingListener {
    fn add(&mut self, kind: Kind, text: Option<&str>, target: &str) {
        self.records
            .push((kind, text.unwrap_or_default().to_string(), target.to_string()));
    }
}

impl Listener for RecordingListener {
    fn on_new_line(&mut self) {
        self.add(Kind::NewLine, None, "");
    }
    fn on_text(&mut self, text: &str) {
        self.add(Kind::Text, Some(text), "");
    }
    fn on_user(&mut self, id: &str, alt: Option<&str>) {
        self.add(Kind::User, alt, id);
    }
    fn on_channel(&mut self, id: &str, alt: Option<&str>) {
        self.add(Kind::Channel, alt, id);
    }
    fn on_variable(&mut self, name: &str, alt: Option<&str>) {
        self.add(Kind::Variable, alt, name);
    }
    fn on_link(&mut self, href: &str, text: Option<&str>) {
        self.add(Kind::Link, text, href);
    }
}

fn record(input: &str) -> Vec<Record> {
    let mut listener = RecordingListener::default();
    MessageParser::new(&mut listener).parse(input);
    listener.records
}

fn r(kind: Kind, text: &str, target: &str) -> Record {
    (kind, text.to_string(), target.to_string())
}

#[test]
fn empty_input_emits_nothing() {
    assert!(record("").is_empty());
}

#[test]
fn single_line() {
    assert_eq!(record("single line"), vec![r(Kind::Text, "single line", "")]);
}

#[test]
fn multi_line() {
    assert_eq!(
        record("multi\nline"),
        vec![
            r(Kind::Text, "multi", ""),
            r(Kind::NewLine, "", ""),
            r(Kind::Text, "line", ""),
        ]
    );
}

#[test]
fn links() {
    assert_eq!(
        record("links\n<http://example.com/> <http://example.com/|example | example>"),
        vec![
            r(Kind::Text, "links", ""),
            r(Kind::NewLine, "", ""),
            r(Kind::Link, "", "http://example.com/"),
            r(Kind::Text, " ", ""),
            r(Kind::Link, "example | example", "http://example.com/"),
        ]
    );
}

#[test]
fn users_variables_and_channels() {
    let input = "user, variable, channel\n<@U11111111>, <@U22222222|bob>, and <!here|here>\n\nPlease check <#C11111111> and <#C22222222|channel2> channels";
    assert_eq!(
        record(input),
        vec![
            r(Kind::Text, "user, variable, channel", ""),
            r(Kind::NewLine, "", ""),
            r(Kind::User, "", "U11111111"),
            r(Kind::Text, ", ", ""),
            r(Kind::User, "bob", "U22222222"),
            r(Kind::Text, ", and ", ""),
            r(Kind::Variable, "here", "here"),
            r(Kind::NewLine, "", ""),
            r(Kind::NewLine, "", ""),
            r(Kind::Text, "Please check ", ""),
            r(Kind::Channel, "", "C11111111"),
            r(Kind::Text, " and ", ""),
            r(Kind::Channel, "channel2", "C22222222"),
            r(Kind::Text, " channels", ""),
        ]
    );
}

#[test]
fn unterminated_construct_is_text() {
    assert_eq!(
        record("see <http://example.com/ later"),
        vec![r(Kind::Text, "see <http://example.com/ later", "")]
    );
}

#[test]
fn construct_does_not_span_lines() {
    assert_eq!(
        record("<@U1\n>"),
        vec![
            r(Kind::Text, "<@U1", ""),
            r(Kind::NewLine, "", ""),
            r(Kind::Text, ">", ""),
        ]
    );
}

#[test]
fn stray_open_bracket_before_construct() {
    assert_eq!(
        record("a < b <@U1> c"),
        vec![
            r(Kind::Text, "a < b ", ""),
            r(Kind::User, "", "U1"),
            r(Kind::Text, " c", ""),
        ]
    );
}

#[test]
fn empty_constructs_are_text() {
    assert_eq!(record("<> <@> <#|x>"), vec![r(Kind::Text, "<> <@> <#|x>", "")]);
}

#[test]
fn first_close_bracket_ends_the_construct() {
    // A '>' inside link text is not supported
    assert_eq!(
        record("<http://a.example/|a > b>"),
        vec![
            r(Kind::Link, "a ", "http://a.example/"),
            r(Kind::Text, " b>", ""),
        ]
    );
}

#[test]
fn stray_close_bracket_is_text() {
    assert_eq!(record("a > b"), vec![r(Kind::Text, "a > b", "")]);
}

#[test]
fn adjacent_constructs() {
    assert_eq!(
        record("<@U1><#C1><!channel>"),
        vec![
            r(Kind::User, "", "U1"),
            r(Kind::Channel, "", "C1"),
            r(Kind::Variable, "", "channel"),
        ]
    );
}

#[test]
fn parser_is_reusable() {
    let mut listener = RecordingListener::default();
    let mut parser = MessageParser::new(&mut listener);
    parser.parse("one");
    parser.parse("<@U1>");
    assert_eq!(
        listener.records,
        vec![r(Kind::Text, "one", ""), r(Kind::User, "", "U1")]
    );
}
