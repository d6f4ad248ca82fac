//! Remix Domain
//!
//! Output modes, the fixed instruction prompts, and reply post-processing.

use serde::{Deserialize, Serialize};

/// Line prefix the model is told to put in front of every tweet
pub const TWEET_MARKER: &str = "TWEET:";

const TWEETS_PROMPT: &str = r#"
You are a social media expert and ghostwriter.

You work for a popular blogger, and your job is to take their blog post and come up with a variety of tweets to share ideas from the post.

Since you are a ghostwriter, you need to make sure to follow the style, tone, and voice of the blog post as closely as possible.

Remember: Tweets cannot be longer than 280 characters.

Please return at least five tweets. Each tweet must be on its own line and must start with "TWEET:" (this prefix will be removed later).

Do not use any hashtags or emojis.

Here is the blog post:
"#;

const REMIX_PROMPT: &str = r#"
You are a skilled editor. Rewrite the content below so it reads fresh and engaging while keeping its meaning, facts, and the author's voice.

Return only the rewritten content, without any preamble.

Here is the content:
"#;

/// What the remix action should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RemixMode {
    /// One rewritten passage
    Remix,
    /// Several tweet-length variants
    #[default]
    Tweets,
}

impl RemixMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemixMode::Remix => "remix",
            RemixMode::Tweets => "tweets",
        }
    }

    /// Fixed instruction prompt for this mode
    pub fn prompt(&self) -> &'static str {
        match self {
            RemixMode::Remix => REMIX_PROMPT,
            RemixMode::Tweets => TWEETS_PROMPT,
        }
    }

    /// Full user message: prompt followed by the input
    pub fn build_message(&self, input: &str) -> String {
        format!("{} {}", self.prompt(), input)
    }
}

/// Result of a remix action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RemixOutput {
    Text { text: String },
    Tweets { tweets: Vec<String> },
}

impl RemixOutput {
    /// Shape a raw model reply according to the mode
    pub fn from_reply(mode: RemixMode, reply: &str) -> Self {
        match mode {
            RemixMode::Remix => RemixOutput::Text { text: reply.trim().to_string() },
            RemixMode::Tweets => RemixOutput::Tweets { tweets: extract_tweets(reply) },
        }
    }
}

/// Keep the lines starting with the marker, stripped of it, in reply order
pub fn extract_tweets(reply: &str) -> Vec<String> {
    reply
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix(TWEET_MARKER))
        .map(|tweet| tweet.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_marker_and_drops_other_lines() {
        let reply = "TWEET: hello\nnot a tweet\nTWEET:  world ";
        assert_eq!(extract_tweets(reply), vec!["hello", "world"]);
    }

    #[test]
    fn test_extract_without_markers_is_empty() {
        let reply = "Here are some thoughts.\nNothing tagged.\n";
        assert!(extract_tweets(reply).is_empty());
        assert!(extract_tweets("").is_empty());
    }

    #[test]
    fn test_extract_handles_indent_and_crlf() {
        let reply = "Sure!\r\n   TWEET: first\r\nTWEET:second\r\n- TWEET: not leading\r\n";
        assert_eq!(extract_tweets(reply), vec!["first", "second"]);
    }

    #[test]
    fn test_extract_keeps_later_marker_text() {
        let reply = "TWEET: say TWEET: twice";
        assert_eq!(extract_tweets(reply), vec!["say TWEET: twice"]);
    }

    #[test]
    fn test_build_message_appends_input() {
        let msg = RemixMode::Tweets.build_message("My post");
        assert!(msg.contains("must start with \"TWEET:\""));
        assert!(msg.ends_with(" My post"));
    }

    #[test]
    fn test_output_serialization() {
        let out = RemixOutput::from_reply(RemixMode::Tweets, "TWEET: a");
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "tweets", "tweets": ["a"]}));

        let out = RemixOutput::from_reply(RemixMode::Remix, "  rewritten \n");
        assert_eq!(out, RemixOutput::Text { text: "rewritten".into() });
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&RemixMode::Remix).unwrap(), "\"remix\"");
        let mode: RemixMode = serde_json::from_str("\"tweets\"").unwrap();
        assert_eq!(mode, RemixMode::Tweets);
        assert_eq!(RemixMode::default().as_str(), "tweets");
    }
}
