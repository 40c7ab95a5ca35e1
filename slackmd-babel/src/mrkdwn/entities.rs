use std::borrow::Cow;

/// Decode the three HTML entities Slack uses to escape control characters in
/// message text.
///
/// Any other `&` sequence is left as is.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let (replacement, consumed) = if rest.starts_with("&lt;") {
            ('<', 4)
        } else if rest.starts_with("&gt;") {
            ('>', 4)
        } else if rest.starts_with("&amp;") {
            ('&', 5)
        } else {
            ('&', 1)
        };
        decoded.push(replacement);
        rest = &rest[consumed..];
    }
    decoded.push_str(rest);

    Cow::Owned(decoded)
}
