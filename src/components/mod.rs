//! UI Components
//!
//! Reusable Leptos components.

mod char_count;
mod input_form;
mod results_view;
mod saved_tweet_row;
mod saved_tweets_panel;
mod tweet_card;

pub use char_count::CharCount;
pub use input_form::InputForm;
pub use results_view::ResultsView;
pub use saved_tweet_row::SavedTweetRow;
pub use saved_tweets_panel::SavedTweetsPanel;
pub use tweet_card::TweetCard;
