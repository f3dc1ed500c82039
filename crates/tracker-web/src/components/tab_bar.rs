//! Tab navigation carrying the current query and sort key

use super::page_href;
use leptos::prelude::*;
use tracker_core::{SortKey, Tab};

/// Link class for a tab, highlighting the active one
fn tab_class(tab: Tab, active: Tab) -> &'static str {
    if tab == active {
        "tab tab-active"
    } else {
        "tab"
    }
}

/// One link per tab in `tabs`
#[component]
pub fn TabBar(
    /// Tabs offered by the layout, in display order
    tabs: &'static [Tab],
    /// Currently selected tab
    active: Tab,
    /// Search text to keep when switching tabs
    #[prop(into)]
    query: String,
    /// Sort key to keep when switching tabs
    sort: SortKey,
) -> impl IntoView {
    view! {
        <nav class="tabs">
            {tabs
                .iter()
                .map(|&tab| {
                    view! {
                        <a class={tab_class(tab, active)} href={page_href(tab, &query, sort)}>
                            {tab.label()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
