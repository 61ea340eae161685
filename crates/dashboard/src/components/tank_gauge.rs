//! Tank gauge — the water-fill visual and percentage readout.

use leptos::prelude::*;

/// Fill-level visual. The same percentage string drives both the water
/// height and the text label; out-of-range values pass through verbatim.
#[component]
pub fn TankGauge(
    /// Fill percentage as display text, e.g. `"72%"`.
    percent: String,
) -> impl IntoView {
    let height = percent.clone();
    view! {
        <div class="tank-gauge">
            <div class="tank">
                <div class="water" style:height=height></div>
            </div>
            <p class="percentage">{percent}</p>
        </div>
    }
}
