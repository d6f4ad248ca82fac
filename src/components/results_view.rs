//! Results View Component
//!
//! Renders the remix output: a single passage or a list of draft tweets.

use leptos::prelude::*;

use crate::components::TweetCard;
use crate::models::RemixOutput;
use crate::session::EditSession;

/// What the view renders; text edits inside a shape never change it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Nothing,
    Text,
    NoTweets,
    Tweets,
}

fn shape_of(output: Option<&RemixOutput>) -> Shape {
    match output {
        None => Shape::Nothing,
        Some(RemixOutput::Text { .. }) => Shape::Text,
        Some(RemixOutput::Tweets { tweets }) if tweets.is_empty() => Shape::NoTweets,
        Some(RemixOutput::Tweets { .. }) => Shape::Tweets,
    }
}

#[component]
pub fn ResultsView(result: RwSignal<Option<RemixOutput>>) -> impl IntoView {
    let edit = RwSignal::new(EditSession::<usize>::new());

    // A new remix replaces every draft, so drop any edit in progress
    Effect::new(move |prev: Option<bool>| {
        let has_result = result.with(|r| r.is_some());
        if prev.is_some() {
            edit.update(|s| s.cancel());
        }
        has_result
    });

    let shape = Memo::new(move |_| result.with(|r| shape_of(r.as_ref())));

    let text = move || {
        result.with(|r| match r {
            Some(RemixOutput::Text { text }) => text.clone(),
            _ => String::new(),
        })
    };

    let tweet_count = move || {
        result.with(|r| match r {
            Some(RemixOutput::Tweets { tweets }) => tweets.len(),
            _ => 0,
        })
    };

    let tweet_at = move |index: usize| {
        Signal::derive(move || {
            result.with(|r| match r {
                Some(RemixOutput::Tweets { tweets }) => tweets.get(index).cloned().unwrap_or_default(),
                _ => String::new(),
            })
        })
    };

    // Local only: drafts are never persisted by editing
    let apply_edit = Callback::new(move |(index, text): (usize, String)| {
        result.update(|r| {
            if let Some(RemixOutput::Tweets { tweets }) = r {
                if let Some(tweet) = tweets.get_mut(index) {
                    *tweet = text;
                }
            }
        });
    });

    // Only a change of shape remounts; edits reach the cards through `tweet_at`
    view! {
        {move || match shape.get() {
            Shape::Nothing => ().into_any(),
            Shape::Text => view! {
                <section class="results">
                    <h2>"Remixed Content:"</h2>
                    <p class="remixed-text">{text}</p>
                </section>
            }.into_any(),
            Shape::NoTweets => view! {
                <section class="results">
                    <h2>"Generated Tweets:"</h2>
                    <p class="empty-hint">"No tweets were found in the reply."</p>
                </section>
            }.into_any(),
            Shape::Tweets => view! {
                <section class="results">
                    <h2>"Generated Tweets:"</h2>
                    <For
                        each=move || 0..tweet_count()
                        key=|index| *index
                        children=move |index| view! {
                            <TweetCard
                                index=index
                                text=tweet_at(index)
                                edit=edit
                                on_edit=apply_edit
                            />
                        }
                    />
                </section>
            }.into_any(),
        }}
    }
}
