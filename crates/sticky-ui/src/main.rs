//! sticky: always-on-top desktop sticky note
//!
//! GPUI window holding a single multi-line editor. The note text and window
//! geometry are loaded before the window opens and written back when it
//! closes; see `sticky_core::shell` for the rules.

use gpui::{App, Application};
use sticky_core::errors::StickyError;
use sticky_core::logging::quiet_from_env;
use sticky_core::{Shell, StatePaths, StickyConfig, init_logging};

mod backend;
mod errors;
mod overlay;
mod theme;
mod views;
mod window;

fn main() {
    init_logging(quiet_from_env());

    // Must run before the toolkit reads its environment.
    if let Err(e) = backend::force_x11_backend() {
        tracing::error!(
            event = "ui.backend.unsupported",
            error = %e,
            error_code = e.error_code()
        );
        std::process::exit(1);
    }

    let config = match StickyConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                event = "ui.config.load_failed",
                error = %e,
                error_code = e.error_code()
            );
            std::process::exit(1);
        }
    };

    let paths = StatePaths::resolve(&config);
    tracing::info!(
        event = "ui.startup",
        note_file = %paths.note_file.display(),
        geometry_file = %paths.geometry_file.display()
    );

    let mut shell = Shell::new(&paths);
    let startup = shell.start();

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        if let Err(e) = window::open_note_window(&config, shell, startup, cx) {
            tracing::error!(
                event = "ui.window.open_failed",
                error = %e,
                error_code = e.error_code()
            );
            std::process::exit(1);
        }
    });
}
