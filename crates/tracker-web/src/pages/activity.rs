//! Activity tab: shows the configured message in shifted form

use leptos::prelude::*;
use tracker_core::encode;

/// Activity panel
#[component]
pub fn ActivityPanel(
    /// Message to show after encoding
    #[prop(into)]
    message: String,
) -> impl IntoView {
    let cipher = encode(&message);

    view! {
        <section class="card centered">
            <div class="lock"></div>
            <h3>"Activity Log Encrypted"</h3>
            <p class="muted">
                "This section contains classified information. Access restricted to authorized personnel only."
            </p>
            <div class="cipher mono">{cipher}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_encoded_default_message() {
        let html = view! { <ActivityPanel message="all due in time, andre" /> }.to_html();

        assert!(html.contains(r#"<div class="cipher mono">bmm evf jo ujnf- boesf</div>"#));
        assert!(!html.contains("all due in time"));
    }

    #[test]
    fn test_encoded_output_is_escaped() {
        // ';' shifts to '<' and '=' to '>'
        let html = view! { <ActivityPanel message=";b=" /> }.to_html();

        assert!(html.contains("&lt;c&gt;"));
        assert!(!html.contains("<c>"));
    }
}
