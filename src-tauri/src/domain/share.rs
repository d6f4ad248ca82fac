//! External Share Link
//!
//! Builds the pre-filled compose URL for the social platform.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Characters left unescaped by JavaScript's `encodeURIComponent`
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `https://twitter.com/intent/tweet?text=<url-encoded content>`
pub fn tweet_intent_url(content: &str) -> String {
    format!(
        "{}?text={}",
        TWEET_INTENT_URL,
        utf8_percent_encode(content, COMPONENT_ENCODE_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_url_encodes_reserved() {
        assert_eq!(
            tweet_intent_url("a b&c"),
            "https://twitter.com/intent/tweet?text=a%20b%26c"
        );
    }

    #[test]
    fn test_intent_url_keeps_unreserved_marks() {
        assert_eq!(
            tweet_intent_url("it's (ok)! ~*-_."),
            "https://twitter.com/intent/tweet?text=it's%20(ok)!%20~*-_."
        );
    }

    #[test]
    fn test_intent_url_encodes_utf8_and_newlines() {
        assert_eq!(
            tweet_intent_url("café\n#1"),
            "https://twitter.com/intent/tweet?text=caf%C3%A9%0A%231"
        );
    }
}
