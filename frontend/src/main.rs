//! KumiFont Main Entry Point

use std::cell::RefCell;
use std::sync::OnceLock;
use zoon::*;

/// Stores the main application task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

thread_local! {
    /// The app owns the actors behind the UI; it lives as long as the page.
    static APP: RefCell<Option<app::KumiFontApp>> = const { RefCell::new(None) };
}

mod analytics;
mod app;
mod clipboard;
mod controls;
mod dataflow;
mod font_loader;
mod modal;
mod preview_panel;
mod theme;
mod toast;
mod typography;

pub fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        zoon::eprintln!("FRONTEND PANIC: {}", panic_info);
    }));

    let handle = Task::start_droppable(async {
        let app = app::KumiFontApp::new();
        let root_element = app.root();
        APP.with(|slot| *slot.borrow_mut() = Some(app));
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}
