//! Connection indicator — a colored dot plus text for the last fetch outcome.

use leptos::prelude::*;
use tankview_domain::connection::ConnectionState;

/// Dot-and-text indicator driven by the fetch cycle's connection state.
#[component]
pub fn ConnectionIndicator(state: ReadSignal<ConnectionState>) -> impl IntoView {
    view! {
        <div class="connection">
            <span class=move || state.get().dot_class()></span>
            <span class="connection-status">{move || state.get().label()}</span>
        </div>
    }
}
