//! Saved Tweet Row Component
//!
//! One persisted tweet in the side panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::alert;
use crate::commands;
use crate::components::CharCount;
use crate::models::SavedTweet;
use crate::session::EditSession;
use crate::store::{store_settle_delete, store_update_content, use_saved_store};

#[component]
pub fn SavedTweetRow(tweet: SavedTweet, edit: RwSignal<EditSession<i64>>) -> impl IntoView {
    let store = use_saved_store();

    let id = tweet.id;
    let created = tweet.created_date().to_string();
    let content = RwSignal::new(tweet.content);

    let (confirming_delete, set_confirming_delete) = signal(false);

    let is_editing = move || edit.with(|s| s.is_editing(id));
    let buffer = Signal::derive(move || edit.with(|s| s.buffer().to_string()));

    // Persist first; the cache only changes once the backend accepted it
    let confirm_edit = move |_: web_sys::MouseEvent| {
        let Some((id, new_content)) = edit.try_update(|s| s.confirm()).flatten() else {
            return;
        };
        spawn_local(async move {
            match commands::update_saved_tweet(id, &new_content).await {
                Ok(()) => {
                    content.set(new_content.clone());
                    store_update_content(&store, id, &new_content);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[SavedTweets] Update #{} failed: {}", id, e).into());
                    alert(&e);
                }
            }
        });
    };

    let delete = move |_: web_sys::MouseEvent| {
        set_confirming_delete.set(false);
        spawn_local(async move {
            let outcome = commands::delete_saved_tweet(id).await;
            store_settle_delete(&store, id, &outcome);
            if let Err(e) = outcome {
                web_sys::console::error_1(&format!("[SavedTweets] Delete #{} failed: {}", id, e).into());
                alert(&e);
            }
        });
    };

    let share = move |_: web_sys::MouseEvent| {
        let text = content.get();
        spawn_local(async move {
            if let Err(e) = commands::share_tweet(&text).await {
                web_sys::console::error_1(&format!("[SavedTweets] Share failed: {}", e).into());
            }
        });
    };

    view! {
        <div class="saved-tweet">
            <Show
                when=is_editing
                fallback=move || view! { <p class="tweet-text">{move || content.get()}</p> }
            >
                <textarea
                    class="tweet-edit"
                    prop:value=move || buffer.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit.update(|s| s.set_buffer(value));
                    }
                />
            </Show>

            <div class="saved-tweet-meta">
                <span class="saved-date">{created}</span>
                {move || {
                    let shown: Signal<String> = if is_editing() { buffer } else { content.into() };
                    view! { <CharCount text=shown /> }
                }}
            </div>

            <div class="tweet-actions">
                <Show
                    when=is_editing
                    fallback=move || view! {
                        <button class="share-btn" on:click=share>"Tweet"</button>
                        <button class="edit-btn" on:click=move |_| {
                            let current = content.get();
                            edit.update(|s| s.begin(id, &current));
                        }>"Edit"</button>
                        <Show
                            when=move || confirming_delete.get()
                            fallback=move || view! {
                                <button class="delete-btn" on:click=move |_| set_confirming_delete.set(true)>"Delete"</button>
                            }
                        >
                            <span class="delete-confirm-text">"Delete this tweet?"</span>
                            <button class="confirm-btn" on:click=delete>"Yes"</button>
                            <button class="cancel-btn" on:click=move |_| set_confirming_delete.set(false)>"No"</button>
                        </Show>
                    }
                >
                    <button class="confirm-btn" on:click=confirm_edit>"Save"</button>
                    <button class="cancel-btn" on:click=move |_| edit.update(|s| s.cancel())>"Cancel"</button>
                </Show>
            </div>
        </div>
    }
}
