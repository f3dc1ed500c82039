//! Card building blocks for the dashboard grids

use leptos::prelude::*;

/// Summary card with a label, a big value and an icon tint
#[component]
pub fn StatCard(
    /// Caption above the value
    label: &'static str,
    /// Value to display
    #[prop(into)]
    value: String,
    /// Colour class of the icon
    tint: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div>
                <p class="stat-label">{label}</p>
                <p class="stat-value">{value}</p>
            </div>
            <div class={format!("stat-icon {tint}")}></div>
        </div>
    }
}

/// Small tile inside a statistics grid
#[component]
pub fn StatTile(
    /// Caption
    label: &'static str,
    /// Value to display
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="tile">
            <p class="tile-label">{label}</p>
            <p class="tile-value">{value}</p>
        </div>
    }
}

/// Row with a label on the left and a bold value on the right
#[component]
pub fn KeyValueRow(
    /// Left-hand label
    label: &'static str,
    /// Right-hand value
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="row">
            <span>{label}</span>
            <span class="bold">{value}</span>
        </div>
    }
}

/// Titled card wrapping its children
#[component]
pub fn SectionCard(
    /// Card heading
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <h3 class="card-title">{title}</h3>
            {children()}
        </section>
    }
}
