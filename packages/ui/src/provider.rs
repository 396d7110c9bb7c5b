//! Directory context and hooks for the UI.
//!
//! [`DirectoryProvider`] builds the controller once, shares it through context
//! and loads the collection on mount. Components call [`use_directory`] to get
//! the controller; doing so also subscribes them to its changes.

use std::ops::Deref;
use std::rc::Rc;

use api::Settings;
use directory::DirectorySync;
use dioxus::prelude::*;

use crate::backend::Backend;
use crate::presenter::{use_presenter_provider, UiPresenter};

pub type Directory = DirectorySync<Backend, UiPresenter>;

/// Shared handle to the controller.
#[derive(Clone)]
pub struct DirectoryHandle {
    inner: Rc<Directory>,
    backend_label: &'static str,
}

impl DirectoryHandle {
    pub fn backend_label(&self) -> &'static str {
        self.backend_label
    }
}

impl Deref for DirectoryHandle {
    type Target = Directory;

    fn deref(&self) -> &Directory {
        &self.inner
    }
}

/// Bumped by the controller after every state change.
#[derive(Clone, Copy)]
struct Revision(Signal<u64>);

/// Get the directory controller and re-render when it changes.
pub fn use_directory() -> DirectoryHandle {
    let revision = use_context::<Revision>();
    // Reading the signal subscribes the calling component.
    let _ = *revision.0.read();
    use_context::<DirectoryHandle>()
}

/// Provider component that owns the directory controller.
/// Wrap the page with this; `settings: None` runs against an in-memory store.
#[component]
pub fn DirectoryProvider(settings: Option<Settings>, children: Element) -> Element {
    let presenter = use_presenter_provider();
    let revision = use_signal(|| 0u64);
    use_context_provider(|| Revision(revision));

    let handle = use_context_provider(move || {
        let backend = Backend::from_settings(settings.as_ref());
        let backend_label = backend.label();
        let sync = DirectorySync::new(backend, presenter).on_change(move || {
            let mut revision = revision;
            *revision.write() += 1;
        });
        DirectoryHandle {
            inner: Rc::new(sync),
            backend_label,
        }
    });

    // Initial load
    use_hook(move || {
        spawn(async move {
            // Failures are already reported as toasts.
            let _ = handle.refresh().await;
        });
    });

    rsx! {
        {children}
    }
}
