//! Server-side rendering of the dashboard page
//!
//! One request renders the shared shell (header and tab bar) plus the panel
//! of the session's active tab. Panels other than the active one are not sent.

pub mod activity;
pub mod camera;
pub mod dashboard;
pub mod players;

use crate::components::{PulseBadge, TabBar};
use activity::ActivityPanel;
use camera::CameraPanel;
use dashboard::DashboardPanel;
use leptos::prelude::*;
use players::PlayersPanel;
use tracker_core::{DashboardSession, Dataset, Tab, config::DashboardConfig};

/// Path the stylesheet is served from
pub const STYLESHEET_PATH: &str = "/assets/style.css";

/// Inputs needed to render one page
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Presentation settings
    pub config: &'a DashboardConfig,
    /// Data to show
    pub dataset: &'a Dataset,
    /// View state of the requesting session
    pub session: &'a DashboardSession,
    /// Preformatted wall-clock time for the camera overlay
    pub clock: &'a str,
}

/// Render the complete HTML document
#[must_use]
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let session = ctx.session;
    let active = session.active_tab();
    let panel = render_panel(ctx);
    let title = ctx.config.title.clone();

    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href={STYLESHEET_PATH} />
            </head>
            <body>
                <Header title={ctx.config.title.clone()} subtitle={ctx.config.subtitle.clone()} />
                <main class="container">
                    <TabBar
                        tabs={session.layout().tabs()}
                        active={active}
                        query={session.search_query().to_string()}
                        sort={session.sort_key()}
                    />
                    <div class="panel" id={format!("panel-{}", active.as_str())}>
                        {panel}
                    </div>
                </main>
            </body>
        </html>
    };

    format!("<!doctype html>\n{}", document.to_html())
}

/// Panel for the session's active tab
#[must_use]
pub fn render_panel(ctx: &PageContext<'_>) -> AnyView {
    match ctx.session.active_tab() {
        Tab::Dashboard => view! { <DashboardPanel dataset={ctx.dataset.clone()} /> }.into_any(),
        Tab::Players => view! {
            <PlayersPanel dataset={ctx.dataset.clone()} session={ctx.session.clone()} />
        }
        .into_any(),
        Tab::Camera => view! {
            <CameraPanel camera={ctx.dataset.camera.clone()} clock={ctx.clock} />
        }
        .into_any(),
        Tab::Activity => view! {
            <ActivityPanel message={ctx.config.activity_message.clone()} />
        }
        .into_any(),
    }
}

/// Page header with the title and the decorative status badge
#[component]
fn Header(
    /// Dashboard title
    title: String,
    /// Line under the title
    subtitle: String,
) -> impl IntoView {
    view! {
        <header class="header">
            <div class="container header-content">
                <div class="brand">
                    <div class="logo"></div>
                    <div>
                        <h1>{title}</h1>
                        <p class="muted small">{subtitle}</p>
                    </div>
                </div>
                <PulseBadge text="System Active" />
            </div>
        </header>
    }
}
