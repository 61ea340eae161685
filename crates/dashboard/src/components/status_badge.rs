//! Status badge — icon plus colored label for the reported fill status.

use leptos::prelude::*;
use tankview_domain::status::TankStatus;

/// Icon-and-label badge for a tank status. Unrecognized labels render with
/// the fallback icon and no color class.
#[component]
pub fn StatusBadge(status: TankStatus) -> impl IntoView {
    let class = status
        .css_class()
        .map_or_else(|| "status-text".to_string(), |c| format!("status-text {c}"));
    view! {
        <div class="status-indicator">
            <span class="status-icon">{status.icon()}</span>
            <span class=class>{status.label().to_string()}</span>
        </div>
    }
}
