//! Stat card component for displaying a labelled readout.

use leptos::prelude::*;

/// A card displaying a label and a readout value.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The value to display.
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
        </div>
    }
}
