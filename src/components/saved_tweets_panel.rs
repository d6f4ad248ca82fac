//! Saved Tweets Panel
//!
//! Collapsible side panel listing persisted tweets. Reloads on mount and
//! whenever the app context's reload trigger changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::SavedTweetRow;
use crate::context::AppContext;
use crate::session::EditSession;
use crate::store::{store_replace_all, store_tweets, use_saved_store};

#[component]
pub fn SavedTweetsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_saved_store();
    let edit = RwSignal::new(EditSession::<i64>::new());

    // Load on mount and on every reload signal; the list replaces the cache
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        spawn_local(async move {
            match commands::list_saved_tweets().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[SavedTweets] Loaded {} tweets, trigger={}", loaded.len(), trigger).into());
                    store_replace_all(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[SavedTweets] Load failed: {}", e).into());
                }
            }
        });
    });

    let toggle = move |_: web_sys::MouseEvent| ctx.set_panel_collapsed(!ctx.panel_collapsed.get());

    view! {
        <aside class=move || if ctx.panel_collapsed.get() { "saved-panel collapsed" } else { "saved-panel" }>
            <div class="saved-panel-header">
                <button class="collapse-btn" on:click=toggle>
                    {move || if ctx.panel_collapsed.get() { "◀" } else { "▶" }}
                </button>
                <Show when=move || !ctx.panel_collapsed.get()>
                    <h2>"Saved Tweets"</h2>
                </Show>
            </div>

            <Show when=move || !ctx.panel_collapsed.get()>
                <div class="saved-list">
                    <For
                        each=move || store_tweets(&store)
                        key=|tweet| (tweet.id, tweet.content.clone())
                        children=move |tweet| view! { <SavedTweetRow tweet=tweet edit=edit /> }
                    />
                </div>
            </Show>
        </aside>
    }
}
