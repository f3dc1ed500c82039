//! Camera tab: an offline placeholder, there is no feed behind it

use crate::components::SectionCard;
use leptos::prelude::*;
use tracker_core::types::CameraNotice;

/// Camera placeholder panel
#[component]
pub fn CameraPanel(
    /// Target shown in the placeholder
    camera: CameraNotice,
    /// Preformatted wall-clock time for the overlay
    #[prop(into)]
    clock: String,
) -> impl IntoView {
    let status_class = if camera.status.is_online() {
        "bold text-online"
    } else {
        "bold text-offline"
    };
    let status = capitalize(&camera.status.to_string());
    let notice = format!(
        "Live camera feed is only available when the target is actively playing a game. \
         Monitoring resumes once {} joins any game.",
        camera.target
    );
    let CameraNotice {
        target,
        last_game,
        last_seen,
        ..
    } = camera;

    view! {
        <section class="card">
            <div class="row">
                <h3 class="card-title">"Live Camera Feed"</h3>
                <span class="badge badge-offline">
                    <span class="dot dot-offline"></span>
                    "OFFLINE"
                </span>
            </div>
            <div class="feed">
                <div class="feed-message">
                    <p class="bold muted">"Camera Feed Unavailable"</p>
                    <p class="muted small">"Target is not in any game"</p>
                </div>
                <span class="feed-overlay feed-target mono">{target.clone()}</span>
                <span class="feed-overlay feed-clock mono">{clock}</span>
            </div>
            <div class="grid grid-2 camera-facts">
                <p>
                    <span class="muted">"Target:"</span>
                    <span class="bold">{target}</span>
                </p>
                <p>
                    <span class="muted">"Last game:"</span>
                    <span class="bold">{last_game}</span>
                </p>
                <p>
                    <span class="muted">"Status:"</span>
                    <span class={status_class}>{status}</span>
                </p>
                <p>
                    <span class="muted">"Last seen:"</span>
                    <span class="bold">{last_seen}</span>
                </p>
            </div>
        </section>
        <SectionCard title="Camera Notice">
            <p class="muted small">{notice}</p>
        </SectionCard>
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracker_core::Dataset;

    fn render(clock: &str) -> String {
        let camera = Dataset::demo().camera;
        view! { <CameraPanel camera={camera} clock={clock.to_string()} /> }.to_html()
    }

    #[test]
    fn test_camera_placeholder_content() {
        let html = render("12:34:56");

        assert!(html.contains("Camera Feed Unavailable"));
        assert!(html.contains("OFFLINE"));
        assert!(html.contains(r#"<span class="bold">frozen soul (dg)</span>"#));
        assert!(html.contains(r#"<span class="bold text-offline">Offline</span>"#));
        assert!(html.contains("Monitoring resumes once pixel_pilot joins any game."));
    }

    #[test]
    fn test_clock_is_rendered() {
        let html = render("12:34:56");

        assert!(html.contains(r#"<span class="feed-overlay feed-clock mono">12:34:56</span>"#));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("offline"), "Offline");
        assert_eq!(capitalize(""), "");
    }
}
