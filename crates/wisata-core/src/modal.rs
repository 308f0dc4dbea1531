// crates/wisata-core/src/modal.rs

//! # Map modal controller
//!
//! ```text
//!   Closed --open()--> Loading --viewer_loaded()--> Open
//!     ^                   |                           |
//!     +------close()------+-----------close()---------+
//! ```
//!
//! The controller owns the single modal session. Session handlers (Escape
//! to close, focus containment) are represented by a guard value produced
//! by the surface; dropping the guard detaches them. Because the session
//! holds exactly one guard, re-opening replaces (and therefore detaches)
//! the previous set before the new one is attached.

use crate::config::Messages;
use crate::maps::{MapProvider, MapTarget};
use crate::model::CardRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalState {
    Closed,
    Loading,
    Open,
}

/// The modal scaffold on the page.
pub trait ModalSurface {
    /// Handle to the card the modal was opened for.
    type Card: Clone;
    /// Handle to whatever had focus before the modal opened.
    type Focus;
    /// Keeps the session's document listeners attached while alive.
    type Guard;

    fn set_title(&mut self, title: &str);
    fn set_caption(&mut self, caption: &str);
    fn set_external_link(&mut self, href: &str);
    fn set_loading(&mut self, loading: bool);

    /// Points the viewer at `src`; completion arrives via
    /// [`MapModal::viewer_loaded`].
    fn load_viewer(&mut self, src: &str);

    /// Blanks the viewer, abandoning any in-flight load.
    fn clear_viewer(&mut self);

    fn set_visible(&mut self, visible: bool);
    fn set_background_scroll(&mut self, enabled: bool);

    fn focused(&self) -> Option<Self::Focus>;
    fn focus_close_control(&mut self);
    fn restore_focus(&mut self, target: &Self::Focus);

    /// Attaches the Escape and focus-containment handlers.
    fn attach_session_handlers(&mut self) -> Self::Guard;
}

struct ModalSession<S: ModalSurface> {
    card: S::Card,
    target: MapTarget,
    previous_focus: Option<S::Focus>,
    _handlers: S::Guard,
}

pub struct MapModal<S: ModalSurface> {
    surface: S,
    maps: MapProvider,
    messages: Messages,
    state: ModalState,
    session: Option<ModalSession<S>>,
}

impl<S: ModalSurface> MapModal<S> {
    pub fn new(surface: S, maps: MapProvider, messages: Messages) -> Self {
        Self {
            surface,
            maps,
            messages,
            state: ModalState::Closed,
            session: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The card bound to the current session.
    pub fn bound_card(&self) -> Option<&S::Card> {
        self.session.as_ref().map(|s| &s.card)
    }

    /// URLs and caption of the current session.
    pub fn target(&self) -> Option<&MapTarget> {
        self.session.as_ref().map(|s| &s.target)
    }

    /// Opens the viewer for `card`. An already open session is closed first.
    pub fn open(&mut self, card: &CardRecord<S::Card>) -> &MapTarget {
        if self.session.is_some() {
            tracing::debug!("modal re-opened; closing previous session");
            self.close();
        }

        let target = self.maps.target_for(card, &self.messages);
        let title = if card.title.is_empty() {
            self.messages.default_modal_title.as_str()
        } else {
            card.title.as_str()
        };

        self.surface.set_title(title);
        self.surface.set_loading(true);
        self.surface.load_viewer(&target.embed_url);
        self.surface.set_caption(&target.caption);
        self.surface.set_external_link(&target.external_url);
        self.surface.set_visible(true);
        self.surface.set_background_scroll(false);

        let previous_focus = self.surface.focused();
        self.surface.focus_close_control();
        let handlers = self.surface.attach_session_handlers();

        tracing::debug!(title, embed = %target.embed_url, "modal opened");
        self.state = ModalState::Loading;
        let session = self.session.insert(ModalSession {
            card: card.element.clone(),
            target,
            previous_focus,
            _handlers: handlers,
        });
        &session.target
    }

    /// Load-complete signal from the viewer.
    ///
    /// Only a load of the current session's embed URL while in `Loading`
    /// counts; anything else (a blank page left behind by `close`, a load
    /// that lost a race with a re-open) is ignored. Returns whether the
    /// state advanced.
    pub fn viewer_loaded(&mut self, src: &str) -> bool {
        if self.state != ModalState::Loading {
            return false;
        }
        let current = self.session.as_ref().map(|s| s.target.embed_url.as_str());
        if current != Some(src) {
            tracing::trace!(src, "ignoring stale viewer load");
            return false;
        }
        self.surface.set_loading(false);
        self.surface.focus_close_control();
        self.state = ModalState::Open;
        true
    }

    /// Closes the modal. Calling it while closed only re-applies the closed
    /// styling.
    pub fn close(&mut self) {
        self.surface.clear_viewer();
        self.surface.set_loading(false);
        self.surface.set_visible(false);
        self.surface.set_background_scroll(true);

        if let Some(session) = self.session.take() {
            let ModalSession {
                previous_focus,
                _handlers,
                ..
            } = session;
            // Handlers go first: restoring focus must not bounce off the
            // containment handler.
            drop(_handlers);
            if let Some(focus) = previous_focus {
                self.surface.restore_focus(&focus);
            }
            tracing::debug!("modal closed");
        }
        self.state = ModalState::Closed;
    }
}

impl<S: ModalSurface> Drop for MapModal<S> {
    fn drop(&mut self) {
        if self.session.is_some() {
            self.close();
        }
    }
}
