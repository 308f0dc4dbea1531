// crates/wisata-wasm/src/modal.rs

//! # Map modal over the DOM
//!
//! [`DomModal`] implements [`ModalSurface`] for the `#mapModal` scaffold.
//! The controller is shared as `Rc<RefCell<MapModal<DomModal>>>`; the
//! surface keeps only a weak handle back to it so the Escape listener can
//! close the session without creating a cycle.
//!
//! The focus-containment listener never touches the controller. Focus moves
//! happen synchronously inside `open`/`close` while the controller is
//! borrowed, so borrowing it from `focusin` would fail.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlIFrameElement};
use wisata_core::config::Selectors;
use wisata_core::{CardRecord, EnhancerConfig, MapModal, ModalSurface, Result, WisataError};

use crate::dom;

pub(crate) type SharedModal = Rc<RefCell<MapModal<DomModal>>>;

const OPEN: &str = "open";
const BLANK: &str = "about:blank";

/// Escape and focus-containment listeners of one modal session.
pub struct SessionListeners {
    _keydown: EventListener,
    _focusin: EventListener,
}

pub struct DomModal {
    doc: Document,
    root: Element,
    viewer: HtmlIFrameElement,
    close: HtmlElement,
    title: Option<Element>,
    coords: Option<Element>,
    open_link: Option<HtmlAnchorElement>,
    loader: Option<Element>,
    controller: Weak<RefCell<MapModal<DomModal>>>,
}

impl DomModal {
    fn new(doc: Document, selectors: &Selectors) -> Result<Self> {
        let root = dom::require(&doc, &selectors.modal)?;
        let viewer = dom::require(&doc, &selectors.modal_viewer)?
            .dyn_into::<HtmlIFrameElement>()
            .map_err(|_| WisataError::MissingElement(selectors.modal_viewer.clone()))?;
        let close = dom::require(&doc, &selectors.modal_close)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WisataError::MissingElement(selectors.modal_close.clone()))?;

        let title = dom::query(&doc, &selectors.modal_title);
        let coords = dom::query(&doc, &selectors.modal_coords);
        let open_link = dom::query(&doc, &selectors.modal_open_link)
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok());
        let loader = dom::query_in(&root, &selectors.modal_loader)
            .or_else(|| create_loader(&doc, &root, &viewer, selectors));

        Ok(Self {
            doc,
            root,
            viewer,
            close,
            title,
            coords,
            open_link,
            loader,
            controller: Weak::new(),
        })
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn viewer(&self) -> &HtmlIFrameElement {
        &self.viewer
    }

    pub(crate) fn close_control(&self) -> &HtmlElement {
        &self.close
    }

    /// Source of the document the viewer just finished loading.
    ///
    /// A readable `about:blank` document means the blank page left behind by
    /// `close` (or the initial one) is what loaded, whatever `src` says now.
    /// The provider's embed is cross-origin, so for it we fall back to the
    /// exact source we assigned (not the browser-resolved URL).
    pub(crate) fn loaded_src(&self) -> String {
        let blank = self
            .viewer
            .content_document()
            .and_then(|doc| doc.url().ok())
            .is_some_and(|url| url == BLANK);
        if blank {
            return BLANK.to_owned();
        }
        self.viewer.get_attribute("src").unwrap_or_default()
    }
}

/// The loader is part of the markup contract but older pages ship without
/// it; build one (with a spinner) in front of the viewer.
fn create_loader(
    doc: &Document,
    root: &Element,
    viewer: &HtmlIFrameElement,
    selectors: &Selectors,
) -> Option<Element> {
    let loader = dom::create(doc, "div", dom::class_name(&selectors.modal_loader)).ok()?;
    let spinner = dom::create(doc, "div", "spinner").ok()?;
    loader.append_child(&spinner).ok()?;
    let parent = dom::query_in(root, &selectors.modal_content).unwrap_or_else(|| root.clone());
    if parent.contains(Some(viewer.as_ref())) {
        parent.insert_before(&loader, Some(viewer.as_ref())).ok()?;
    } else {
        parent.append_child(&loader).ok()?;
    }
    Some(loader)
}

impl ModalSurface for DomModal {
    type Card = Element;
    type Focus = HtmlElement;
    type Guard = SessionListeners;

    fn set_title(&mut self, title: &str) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(title));
        }
    }

    fn set_caption(&mut self, caption: &str) {
        if let Some(el) = &self.coords {
            el.set_text_content(Some(caption));
        }
    }

    fn set_external_link(&mut self, href: &str) {
        if let Some(link) = &self.open_link {
            link.set_href(href);
        }
    }

    fn set_loading(&mut self, loading: bool) {
        if let Some(loader) = &self.loader {
            dom::set_style(loader, "display", if loading { "flex" } else { "none" });
        }
    }

    fn load_viewer(&mut self, src: &str) {
        self.viewer.set_src(src);
    }

    fn clear_viewer(&mut self) {
        self.viewer.set_src(BLANK);
    }

    fn set_visible(&mut self, visible: bool) {
        let classes = self.root.class_list();
        let _ = if visible {
            classes.add_1(OPEN)
        } else {
            classes.remove_1(OPEN)
        };
        let _ = self
            .root
            .set_attribute("aria-hidden", if visible { "false" } else { "true" });
    }

    fn set_background_scroll(&mut self, enabled: bool) {
        if let Some(body) = self.doc.body() {
            let _ = body
                .style()
                .set_property("overflow", if enabled { "" } else { "hidden" });
        }
    }

    fn focused(&self) -> Option<HtmlElement> {
        self.doc
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn focus_close_control(&mut self) {
        let _ = self.close.focus();
    }

    fn restore_focus(&mut self, target: &HtmlElement) {
        let _ = target.focus();
    }

    fn attach_session_handlers(&mut self) -> SessionListeners {
        let controller = self.controller.clone();
        let keydown = EventListener::new(&self.doc, "keydown", move |event| {
            let escape = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|k| k.key() == "Escape");
            if !escape {
                return;
            }
            let Some(modal) = controller.upgrade() else {
                return;
            };
            close_modal(&modal);
        });

        let root = self.root.clone();
        let close = self.close.clone();
        let focusin = EventListener::new(&self.doc, "focusin", move |event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| root.contains(Some(&node)));
            if !inside {
                event.stop_propagation();
                let _ = close.focus();
            }
        });

        SessionListeners {
            _keydown: keydown,
            _focusin: focusin,
        }
    }
}

/// Builds the shared modal controller, or reports which required element
/// is missing.
pub(crate) fn build(doc: &Document, config: &EnhancerConfig) -> Result<SharedModal> {
    let surface = DomModal::new(doc.clone(), &config.selectors)?;
    let modal = Rc::new(RefCell::new(MapModal::new(
        surface,
        config.maps.clone(),
        config.messages.clone(),
    )));
    modal.borrow_mut().surface_mut().controller = Rc::downgrade(&modal);
    Ok(modal)
}

/// Opens the modal for `card` using the page's selectors.
pub(crate) fn open_for(modal: &SharedModal, card: &Element, selectors: &Selectors) -> bool {
    let Ok(mut modal) = modal.try_borrow_mut() else {
        tracing::warn!("map modal is busy; open ignored");
        return false;
    };
    let record = CardRecord::from_source(card.clone(), &dom::card_source(card, selectors));
    modal.open(&record);
    true
}

pub(crate) fn close_modal(modal: &SharedModal) {
    if let Ok(mut modal) = modal.try_borrow_mut() {
        modal.close();
    }
}

/// Persistent listeners: map buttons, close button, backdrop and viewer
/// load completion.
pub(crate) fn wire(
    doc: &Document,
    selectors: &Selectors,
    modal: &SharedModal,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let (root, viewer, close) = {
        let m = modal.borrow();
        let s = m.surface();
        (s.root().clone(), s.viewer().clone(), s.close_control().clone())
    };

    let m = modal.clone();
    let sel = selectors.clone();
    listeners.push(EventListener::new(doc, "click", move |event| {
        let Some(target) = dom::target_element(event) else {
            return;
        };
        let Some(trigger) = dom::closest(&target, &sel.maps_button) else {
            return;
        };
        event.prevent_default();
        if let Some(card) = dom::closest(&trigger, &sel.card) {
            open_for(&m, &card, &sel);
        }
    }));

    let m = modal.clone();
    listeners.push(EventListener::new(&close, "click", move |_| close_modal(&m)));

    let m = modal.clone();
    let backdrop = root.clone();
    listeners.push(EventListener::new(&root, "click", move |event| {
        let on_backdrop = dom::target_element(event).is_some_and(|t| t == backdrop);
        if on_backdrop {
            close_modal(&m);
        }
    }));

    let m = modal.clone();
    listeners.push(EventListener::new(&viewer, "load", move |_| {
        let Ok(mut modal) = m.try_borrow_mut() else {
            return;
        };
        let src = modal.surface().loaded_src();
        if modal.viewer_loaded(&src) {
            tracing::debug!("map viewer loaded");
        }
    }));

    listeners
}
