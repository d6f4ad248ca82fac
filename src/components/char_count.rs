//! Remaining character count badge

use leptos::prelude::*;

use crate::models::remaining_chars;

/// Shows `280 - length`; turns red when negative but never blocks anything
#[component]
pub fn CharCount(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let remaining = move || text.with(|t| remaining_chars(t));

    view! {
        <span class=move || if remaining() < 0 { "char-count over" } else { "char-count" }>
            {remaining}
        </span>
    }
}
