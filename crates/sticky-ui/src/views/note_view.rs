//! The note itself: a borderless multi-line editor on a colored background.

use gpui::{
    App, AppContext, Context, Entity, FocusHandle, Focusable, IntoElement, Render, Window, div,
    prelude::*, px, rgb,
};
use gpui_component::input::{Input, InputState};
use sticky_core::{Shell, WindowGeometry};

use crate::theme;

/// Root view of the note window.
///
/// Owns the lifecycle [`Shell`]: the window's close request persists the
/// geometry through [`NoteView::on_close_requested`], and releasing the view
/// (the window being destroyed) persists the text and quits the app.
pub struct NoteView {
    editor: Entity<InputState>,
    shell: Shell,
    background: u32,
}

impl NoteView {
    pub fn new(
        shell: Shell,
        text: String,
        background: u32,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let editor = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .default_value(text)
        });

        let focus_handle = editor.read(cx).focus_handle(cx);
        window.focus(&focus_handle);

        cx.on_release(|view: &mut NoteView, cx: &mut App| view.on_destroyed(cx))
            .detach();

        Self {
            editor,
            shell,
            background,
        }
    }

    pub fn on_close_requested(&mut self, geometry: WindowGeometry) {
        // Failures are logged by the shell; closing proceeds regardless.
        if let Ok(true) = self.shell.close_requested(geometry) {
            tracing::debug!(event = "ui.note.close_handled", geometry = %geometry);
        }
    }

    fn on_destroyed(&mut self, cx: &mut App) {
        let text = self.editor.read(cx).value().to_string();

        if let Ok(true) = self.shell.destroyed(&text) {
            tracing::debug!(event = "ui.note.destroy_handled", bytes = text.len());
        }

        tracing::info!(event = "ui.shutdown");
        cx.quit();
    }
}

impl Focusable for NoteView {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.editor.read(cx).focus_handle(cx)
    }
}

impl Render for NoteView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(rgb(self.background))
            .text_color(rgb(theme::TEXT))
            .px(px(theme::TEXT_MARGIN))
            .py(px(theme::TEXT_PADDING_Y))
            .child(Input::new(&self.editor).appearance(false).h_full())
    }
}
