//! Input Form Component
//!
//! Free-text input with output mode selector and the remix action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::alert;
use crate::commands;
use crate::models::{RemixMode, RemixOutput};

/// Output mode options
const REMIX_MODES: &[(RemixMode, &str)] = &[
    (RemixMode::Tweets, "Tweets"),
    (RemixMode::Remix, "Remix"),
];

/// Form that sends the input to the remix action
#[component]
pub fn InputForm(#[prop(into)] on_result: Callback<RemixOutput>) -> impl IntoView {
    let (input_text, set_input_text) = signal(String::new());
    let (mode, set_mode) = signal(RemixMode::default());
    let (is_loading, set_is_loading) = signal(false);

    let disabled = move || is_loading.get() || input_text.get().is_empty();

    let remix = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if disabled() { return; }
        let text = input_text.get();
        let selected_mode = mode.get();
        set_is_loading.set(true);

        // The button stays disabled until this settles, so replies never race
        spawn_local(async move {
            let result = commands::remix_content(&text, selected_mode).await;
            set_is_loading.set(false);
            match result {
                Ok(output) => on_result.run(output),
                Err(e) => alert(&e),
            }
        });
    };

    view! {
        <form class="input-form" on:submit=remix>
            <textarea
                class="input-text"
                placeholder="Paste your content here..."
                prop:value=move || input_text.get()
                on:input=move |ev| set_input_text.set(event_target_value(&ev))
            />

            <div class="mode-selector-row">
                {REMIX_MODES.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <button
                            type="button"
                            class=move || if mode.get() == value { "mode-btn active" } else { "mode-btn" }
                            on:click=move |_| set_mode.set(value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <button type="submit" class="remix-btn" disabled=disabled>
                {move || if is_loading.get() { "Remixing..." } else { "Remix Content" }}
            </button>
        </form>
    }
}
