//! Windowing backend selection.
//!
//! The overlay hint only exists on X11, so the toolkit must not pick its
//! Wayland backend. gpui prefers Wayland whenever `WAYLAND_DISPLAY` is set;
//! removing it makes gpui fall back to X11 (XWayland on Wayland sessions).

use std::ffi::OsStr;

use crate::overlay::OverlayError;

pub const WAYLAND_DISPLAY_ENV: &str = "WAYLAND_DISPLAY";
pub const X11_DISPLAY_ENV: &str = "DISPLAY";

/// Force the X11 backend. Returns whether the environment was changed.
///
/// Must be called from `main` before the toolkit or any other thread starts.
///
/// # Errors
///
/// Returns [`OverlayError::UnsupportedPlatform`] when no X11 display is
/// available, since the toolkit would fail to start on the X11 backend.
pub fn force_x11_backend() -> Result<bool, OverlayError> {
    let wayland = std::env::var_os(WAYLAND_DISPLAY_ENV);
    require_x11_display(
        std::env::var_os(X11_DISPLAY_ENV).as_deref(),
        wayland.as_deref(),
    )?;

    if wayland.is_none() {
        return Ok(false);
    }

    // SAFETY: called at the top of main before any other thread exists, so
    // nothing can read the environment concurrently.
    unsafe { std::env::remove_var(WAYLAND_DISPLAY_ENV) };

    tracing::info!(event = "ui.backend.forced_x11", removed = WAYLAND_DISPLAY_ENV);
    Ok(true)
}

/// Check that an X11 display is configured, naming the session type if not.
fn require_x11_display(
    display: Option<&OsStr>,
    wayland_display: Option<&OsStr>,
) -> Result<(), OverlayError> {
    if display.is_some_and(|v| !v.is_empty()) {
        return Ok(());
    }

    let backend = if wayland_display.is_some_and(|v| !v.is_empty()) {
        "wayland"
    } else {
        "headless"
    };

    Err(OverlayError::UnsupportedPlatform { backend })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Restores `DISPLAY` and `WAYLAND_DISPLAY` on drop.
    struct DisplayEnvGuard {
        display: Option<OsString>,
        wayland: Option<OsString>,
    }

    impl DisplayEnvGuard {
        fn capture() -> Self {
            Self {
                display: std::env::var_os(X11_DISPLAY_ENV),
                wayland: std::env::var_os(WAYLAND_DISPLAY_ENV),
            }
        }
    }

    impl Drop for DisplayEnvGuard {
        fn drop(&mut self) {
            for (var, value) in [
                (X11_DISPLAY_ENV, &self.display),
                (WAYLAND_DISPLAY_ENV, &self.wayland),
            ] {
                // SAFETY: Caller holds ENV_LOCK throughout guard lifetime
                unsafe {
                    match value {
                        Some(v) => std::env::set_var(var, v),
                        None => std::env::remove_var(var),
                    }
                }
            }
        }
    }

    #[test]
    fn test_require_x11_display_present() {
        assert!(require_x11_display(Some(OsStr::new(":0")), None).is_ok());
        assert!(
            require_x11_display(Some(OsStr::new(":1")), Some(OsStr::new("wayland-0"))).is_ok()
        );
    }

    #[test]
    fn test_require_x11_display_wayland_only_session() {
        let err = require_x11_display(None, Some(OsStr::new("wayland-0"))).unwrap_err();
        assert!(matches!(
            err,
            OverlayError::UnsupportedPlatform { backend: "wayland" }
        ));
    }

    #[test]
    fn test_require_x11_display_empty_is_headless() {
        let err = require_x11_display(Some(OsStr::new("")), None).unwrap_err();
        assert!(matches!(
            err,
            OverlayError::UnsupportedPlatform { backend: "headless" }
        ));
    }

    #[test]
    fn test_force_x11_removes_wayland_display() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = DisplayEnvGuard::capture();

        // SAFETY: We hold ENV_LOCK to serialize test access
        unsafe {
            std::env::set_var(X11_DISPLAY_ENV, ":0");
            std::env::set_var(WAYLAND_DISPLAY_ENV, "wayland-0");
        }

        assert!(force_x11_backend().unwrap());
        assert!(std::env::var_os(WAYLAND_DISPLAY_ENV).is_none());
        assert!(!force_x11_backend().unwrap(), "second call has nothing to remove");
    }

    #[test]
    fn test_force_x11_without_display_is_unsupported() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = DisplayEnvGuard::capture();

        // SAFETY: We hold ENV_LOCK to serialize test access
        unsafe {
            std::env::remove_var(X11_DISPLAY_ENV);
            std::env::set_var(WAYLAND_DISPLAY_ENV, "wayland-0");
        }

        let err = force_x11_backend().unwrap_err();
        assert!(matches!(
            err,
            OverlayError::UnsupportedPlatform { backend: "wayland" }
        ));
        // Environment left untouched on failure
        assert!(std::env::var_os(WAYLAND_DISPLAY_ENV).is_some());
    }
}
