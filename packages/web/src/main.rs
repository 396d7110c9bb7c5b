use api::Settings;
use dioxus::prelude::*;

use ui::{DirectoryPage, DirectoryProvider};

/// The browser has no working directory or environment, so settings are
/// baked in at build time.
const SETTINGS_TOML: &str = include_str!("../directory.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = use_hook(|| match Settings::from_toml(SETTINGS_TOML) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!("Firestore not configured: {}", e);
            None
        }
    });

    rsx! {
        DirectoryProvider {
            settings: settings,
            DirectoryPage {}
        }
    }
}
