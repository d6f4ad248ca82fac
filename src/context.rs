//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload saved tweets from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload saved tweets from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Whether the saved tweets panel is collapsed - read
    pub panel_collapsed: ReadSignal<bool>,
    /// Whether the saved tweets panel is collapsed - write
    set_panel_collapsed: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        panel_collapsed: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            panel_collapsed: panel_collapsed.0,
            set_panel_collapsed: panel_collapsed.1,
        }
    }

    /// Trigger a reload of saved tweets
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Report the panel's collapse state so the layout can adjust
    pub fn set_panel_collapsed(&self, collapsed: bool) {
        self.set_panel_collapsed.set(collapsed);
    }
}
