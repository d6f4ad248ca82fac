//! Tweet Card Component
//!
//! One draft tweet in the results list, with edit, share and save actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::alert;
use crate::commands;
use crate::components::CharCount;
use crate::context::AppContext;
use crate::session::EditSession;

/// A single draft tweet
///
/// Edits stay local; saving sends whatever text the card currently shows.
#[component]
pub fn TweetCard(
    index: usize,
    #[prop(into)] text: Signal<String>,
    edit: RwSignal<EditSession<usize>>,
    #[prop(into)] on_edit: Callback<(usize, String)>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (saving, set_saving) = signal(false);

    let is_editing = move || edit.with(|s| s.is_editing(index));
    let buffer = Signal::derive(move || edit.with(|s| s.buffer().to_string()));

    let confirm_edit = move |_: web_sys::MouseEvent| {
        if let Some((i, new_text)) = edit.try_update(|s| s.confirm()).flatten() {
            on_edit.run((i, new_text));
        }
    };

    let share = move |_: web_sys::MouseEvent| {
        let content = text.get();
        spawn_local(async move {
            if let Err(e) = commands::share_tweet(&content).await {
                web_sys::console::error_1(&format!("[TweetCard] Share failed: {}", e).into());
            }
        });
    };

    let save = move |_: web_sys::MouseEvent| {
        let content = text.get();
        set_saving.set(true);
        spawn_local(async move {
            match commands::save_tweet(&content).await {
                Ok(saved) => {
                    web_sys::console::log_1(&format!("[TweetCard] Saved tweet #{}", saved.id).into());
                    ctx.reload();
                }
                Err(e) => alert(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="tweet-card">
            <Show
                when=is_editing
                fallback=move || view! { <p class="tweet-text">{move || text.get()}</p> }
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

            <div class="tweet-actions">
                {move || {
                    let shown = if is_editing() { buffer } else { text };
                    view! { <CharCount text=shown /> }
                }}
                <Show
                    when=is_editing
                    fallback=move || view! {
                        <button class="edit-btn" on:click=move |_| {
                            let current = text.get();
                            edit.update(|s| s.begin(index, &current));
                        }>"Edit"</button>
                        <button class="share-btn" on:click=share>"Tweet"</button>
                        <button class="save-btn" disabled=move || saving.get() on:click=save>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    }
                >
                    <button class="confirm-btn" on:click=confirm_edit>"Done"</button>
                    <button class="cancel-btn" on:click=move |_| edit.update(|s| s.cancel())>"Cancel"</button>
                </Show>
            </div>
        </div>
    }
}
