//! Opening the note window and wiring its lifecycle callbacks.

use gpui::{
    App, AppContext, Bounds, Pixels, SharedString, TitlebarOptions, WindowBounds, WindowKind,
    WindowOptions, point, px, size,
};
use gpui_component::Root;
use sticky_core::{Shell, StartupState, StickyConfig, WindowGeometry};

use crate::errors::WindowError;
use crate::overlay::{self, OverlayHints};
use crate::views::NoteView;

/// Open the note window, apply the overlay hint and hook up shutdown.
///
/// The window is placed at the saved geometry when there is one, otherwise
/// centered at the configured default size.
///
/// # Errors
///
/// Returns an error if the window cannot be opened or the overlay hint cannot
/// be applied. The caller decides whether that is fatal.
pub fn open_note_window(
    config: &StickyConfig,
    shell: Shell,
    startup: StartupState,
    cx: &mut App,
) -> Result<(), WindowError> {
    let bounds = match startup.geometry {
        Some(geometry) => geometry_to_bounds(geometry),
        None => Bounds::centered(
            None,
            size(
                px(config.window.width() as f32),
                px(config.window.height() as f32),
            ),
            cx,
        ),
    };

    let background = config.window.background_rgb();
    let hints = OverlayHints::from_config(&config.window);
    let text = startup.text;

    let mut note_view = None;
    let handle = cx
        .open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from(config.window.title().to_string())),
                    ..Default::default()
                }),
                kind: WindowKind::Normal,
                focus: true,
                show: true,
                ..Default::default()
            },
            |window, cx| {
                let view = cx.new(|cx| NoteView::new(shell, text, background, window, cx));
                note_view = Some(view.downgrade());
                cx.new(|cx| Root::new(view, window, cx))
            },
        )
        .map_err(|e| WindowError::OpenFailed {
            message: e.to_string(),
        })?;

    let note_view = note_view.ok_or(WindowError::WindowGone)?;

    let overlay = handle
        .update(cx, |_, window, cx| {
            window.on_window_should_close(cx, move |window, cx| {
                let geometry = bounds_to_geometry(window.window_bounds().get_bounds());
                if let Err(e) = note_view.update(cx, |view, _| view.on_close_requested(geometry)) {
                    tracing::warn!(
                        event = "ui.window.close_request_dropped",
                        error = %e,
                        "Note view already released; geometry not saved"
                    );
                }
                true
            });

            overlay::apply(window, hints)
        })
        .map_err(|_| WindowError::WindowGone)??;

    tracing::info!(
        event = "ui.window.opened",
        x11_window = overlay.window,
        restored_geometry = startup.geometry.is_some()
    );

    Ok(())
}

/// Window bounds for a saved geometry.
pub fn geometry_to_bounds(geometry: WindowGeometry) -> Bounds<Pixels> {
    Bounds::new(
        point(px(geometry.x as f32), px(geometry.y as f32)),
        size(px(geometry.width as f32), px(geometry.height as f32)),
    )
}

/// Geometry to save for the given window bounds, rounded to whole pixels.
pub fn bounds_to_geometry(bounds: Bounds<Pixels>) -> WindowGeometry {
    let round = |value: Pixels| f32::from(value).round() as i32;
    WindowGeometry::new(
        round(bounds.origin.x),
        round(bounds.origin.y),
        round(bounds.size.width).max(1),
        round(bounds.size.height).max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_bounds_round_trip() {
        let geometry = WindowGeometry::new(10, 20, 300, 400);
        assert_eq!(bounds_to_geometry(geometry_to_bounds(geometry)), geometry);
    }

    #[test]
    fn test_negative_origin_preserved() {
        let geometry = WindowGeometry::new(-1280, -12, 200, 200);
        assert_eq!(bounds_to_geometry(geometry_to_bounds(geometry)), geometry);
    }

    #[test]
    fn test_fractional_bounds_round() {
        let bounds = Bounds::new(
            point(px(10.4), px(19.6)),
            size(px(199.5), px(200.49)),
        );
        assert_eq!(
            bounds_to_geometry(bounds),
            WindowGeometry::new(10, 20, 200, 200)
        );
    }

    #[test]
    fn test_collapsed_size_is_clamped() {
        let bounds = Bounds::new(point(px(0.0), px(0.0)), size(px(0.0), px(0.2)));
        let geometry = bounds_to_geometry(bounds);
        assert_eq!((geometry.width, geometry.height), (1, 1));
    }
}
