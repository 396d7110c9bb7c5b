use dioxus::prelude::*;

use ui::{DirectoryPage, DirectoryProvider};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // directory.toml and DIRECTORY__* variables, read once at startup
    let settings = use_hook(|| match api::Settings::load() {
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
