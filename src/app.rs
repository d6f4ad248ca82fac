//! Content Remixer App
//!
//! Main application component: remix form and results, with the saved
//! tweets panel on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{InputForm, ResultsView, SavedTweetsPanel};
use crate::context::AppContext;
use crate::models::RemixOutput;
use crate::store::SavedState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (panel_collapsed, set_panel_collapsed) = signal(false);
    let result = RwSignal::new(None::<RemixOutput>);

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (panel_collapsed, set_panel_collapsed));
    provide_context(ctx);
    provide_context(Store::new(SavedState::default()));

    view! {
        <div class=move || if ctx.panel_collapsed.get() { "app-layout panel-collapsed" } else { "app-layout" }>
            <main class="main-content">
                <h1>"Content Remixer"</h1>
                <p class="subtitle">"Transform your content with AI-powered remixing"</p>

                <InputForm on_result=move |output: RemixOutput| result.set(Some(output)) />

                <ResultsView result=result />
            </main>

            <SavedTweetsPanel />
        </div>
    }
}
