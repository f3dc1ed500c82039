//! Status and decoration badges

use leptos::prelude::*;
use tracker_core::PlayerStatus;

/// Badge coloured by player status
#[component]
pub fn StatusBadge(
    /// Status to show
    status: PlayerStatus,
) -> impl IntoView {
    let class = if status.is_online() {
        "badge badge-online"
    } else {
        "badge badge-offline"
    };

    view! { <span class=class>{status.to_string()}</span> }
}

/// Decorative pulsing badge such as "LIVE"
///
/// Static markup only; nothing checks liveness.
#[component]
pub fn PulseBadge(
    /// Badge text
    text: &'static str,
) -> impl IntoView {
    view! {
        <span class="badge badge-outline">
            <span class="dot dot-pulse"></span>
            {text}
        </span>
    }
}
