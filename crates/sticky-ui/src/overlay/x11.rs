use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use sticky_core::config::WindowConfig;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    Atom, AtomEnum, ClientMessageEvent, ConnectionExt as _, EventMask, PropMode,
};
use x11rb::wrapper::ConnectionExt as _;

use super::errors::OverlayError;

/// `_NET_WM_STATE_ADD` action in a `_NET_WM_STATE` client message.
const NET_WM_STATE_ADD: u32 = 1;
/// Source indication: request comes from a normal application.
const SOURCE_APPLICATION: u32 = 1;

x11rb::atom_manager! {
    pub Atoms: AtomsCookie {
        _NET_WM_STATE,
        _NET_WM_STATE_ABOVE,
        _NET_WM_STATE_STICKY,
        _NET_WM_STATE_SKIP_TASKBAR,
        _NET_WM_STATE_SKIP_PAGER,
        _NET_WM_WINDOW_TYPE,
        _NET_WM_WINDOW_TYPE_UTILITY,
    }
}

/// Which hints to request in addition to "above".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayHints {
    pub sticky: bool,
    pub skip_taskbar: bool,
}

impl OverlayHints {
    pub fn from_config(config: &WindowConfig) -> Self {
        Self {
            sticky: config.sticky(),
            skip_taskbar: config.skip_taskbar(),
        }
    }

    /// `_NET_WM_STATE` atoms to add, "above" first.
    fn states(&self, atoms: &Atoms) -> Vec<Atom> {
        let mut states = vec![atoms._NET_WM_STATE_ABOVE];
        if self.sticky {
            states.push(atoms._NET_WM_STATE_STICKY);
        }
        if self.skip_taskbar {
            states.push(atoms._NET_WM_STATE_SKIP_TASKBAR);
            states.push(atoms._NET_WM_STATE_SKIP_PAGER);
        }
        states
    }
}

/// The X11 window the hints were applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayHandle {
    pub window: u32,
}

/// Request that `window` stays above other windows.
///
/// Writes `_NET_WM_STATE` directly (honored if the window manager has not
/// managed the window yet) and sends the EWMH add request to the root window
/// (honored once it has).
pub fn apply(
    window: &impl HasWindowHandle,
    hints: OverlayHints,
) -> Result<OverlayHandle, OverlayError> {
    let xid = x11_window_id(window)?;

    let (conn, screen_num) = x11rb::connect(None)?;
    let root = conn.setup().roots[screen_num].root;
    let atoms = Atoms::new(&conn)?.reply()?;
    let states = hints.states(&atoms);

    conn.change_property32(
        PropMode::REPLACE,
        xid,
        atoms._NET_WM_STATE,
        AtomEnum::ATOM,
        &states,
    )?
    .check()?;

    conn.change_property32(
        PropMode::REPLACE,
        xid,
        atoms._NET_WM_WINDOW_TYPE,
        AtomEnum::ATOM,
        &[atoms._NET_WM_WINDOW_TYPE_UTILITY],
    )?
    .check()?;

    for event in state_messages(xid, atoms._NET_WM_STATE, &states) {
        conn.send_event(
            false,
            root,
            EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
            event,
        )?
        .check()?;
    }

    conn.flush()?;

    tracing::info!(
        event = "ui.overlay.applied",
        window = xid,
        states = states.len(),
        sticky = hints.sticky,
        skip_taskbar = hints.skip_taskbar
    );

    Ok(OverlayHandle { window: xid })
}

/// Extract the X11 window id, or report which backend the window is on.
pub fn x11_window_id(window: &impl HasWindowHandle) -> Result<u32, OverlayError> {
    let handle = window
        .window_handle()
        .map_err(|e| OverlayError::HandleUnavailable {
            message: e.to_string(),
        })?;

    match handle.as_raw() {
        RawWindowHandle::Xcb(h) => Ok(h.window.get()),
        RawWindowHandle::Xlib(h) => {
            u32::try_from(h.window).map_err(|_| OverlayError::HandleUnavailable {
                message: format!("Xlib window id {} does not fit in 32 bits", h.window),
            })
        }
        other => Err(OverlayError::UnsupportedPlatform {
            backend: backend_name(&other),
        }),
    }
}

fn backend_name(handle: &RawWindowHandle) -> &'static str {
    match handle {
        RawWindowHandle::Wayland(_) => "wayland",
        RawWindowHandle::AppKit(_) => "appkit",
        RawWindowHandle::Win32(_) => "win32",
        RawWindowHandle::Web(_) => "web",
        _ => "unknown",
    }
}

/// Build `_NET_WM_STATE` add requests; each message carries up to two states.
fn state_messages(window: u32, net_wm_state: Atom, states: &[Atom]) -> Vec<ClientMessageEvent> {
    states
        .chunks(2)
        .map(|pair| {
            let first = pair[0];
            let second = pair.get(1).copied().unwrap_or(0);
            ClientMessageEvent::new(
                32,
                window,
                net_wm_state,
                [NET_WM_STATE_ADD, first, second, SOURCE_APPLICATION, 0],
            )
        })
        .collect()
}
