//! wisata-wasm — WebAssembly front end for wisata-core
//!
//! This crate wires the host-agnostic components of `wisata-core` to a real
//! page: search box and results dropdown, optional column layout with
//! overview maps, the map modal, header/card effects and the music toggle.
//!
//! What it provides
//! ----------------
//! - Automatic setup of logging and panic reporting on module load
//!   (via `#[wasm_bindgen(start)]`)
//! - An `Enhancer` handle that attaches everything to the current document:
//!   - `new Enhancer(options?)` / `Enhancer.fromJson(text)`
//!   - `search(q)` returning `{ query, matches: [{ title, subtitle }] }`
//!   - `selectResult(title)`, `columnize(n)`
//!   - `openMap(cardElement)`, `closeMap()`, `modalState()`, `mapTarget()`
//!   - `destroy()` detaching every listener and timer
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Enhancer } from 'wisata-wasm';
//!
//! async function main() {
//!   await init();
//!   const page = new Enhancer({ layout: { columnize: true } });
//!   console.log(page.search('bali'));
//! }
//! document.addEventListener('DOMContentLoaded', main);
//! ```
//!
//! Notes
//! -----
//! - Options are the camelCase form of `wisata_core::EnhancerConfig`; every
//!   field is optional.
//! - Missing optional page parts (no header, no modal, no music toggle)
//!   disable that feature and log at debug level. `openMap` on a page
//!   without a modal throws.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use wisata_core::{columnize, EnhancerConfig, ModalState, ResultEntry, WisataError};

mod columns;
mod dom;
mod effects;
mod modal;
mod music;
mod search;

use crate::columns::DomColumns;
use crate::effects::Effects;
use crate::modal::SharedModal;
use crate::search::SearchController;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
        tracing::info!("wisata-wasm loaded");
    });
}

/* --------------------------------------------------------------------------
   Enhancer
-------------------------------------------------------------------------- */

#[derive(Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    matches: Vec<ResultEntry>,
}

struct Page {
    doc: Document,
    config: EnhancerConfig,
    search: Rc<RefCell<SearchController>>,
    columns: Option<DomColumns>,
    modal: Option<SharedModal>,
    _effects: Option<Effects>,
    listeners: Vec<EventListener>,
}

/// Handle to an enhanced page. Dropping it (or calling `destroy`) detaches
/// every listener it installed.
#[wasm_bindgen]
pub struct Enhancer {
    page: Option<Page>,
}

#[wasm_bindgen]
impl Enhancer {
    /// Enhances the current document. `options` may be `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Enhancer, JsValue> {
        let config = if options.is_undefined() || options.is_null() {
            EnhancerConfig::default()
        } else {
            let config: EnhancerConfig = serde_wasm_bindgen::from_value(options)?;
            config.validate().map_err(dom::js_error)?;
            config
        };
        Self::with_config(config).map_err(dom::js_error)
    }

    /// Same as the constructor, with options given as a JSON document.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(text: &str) -> Result<Enhancer, JsValue> {
        let config = EnhancerConfig::from_json(text).map_err(dom::js_error)?;
        Self::with_config(config).map_err(dom::js_error)
    }

    /// Filters the cards and renders the dropdown. A blank query shows
    /// every card and reports no matches.
    pub fn search(&mut self, query: &str) -> Result<JsValue, JsValue> {
        let page = self.page()?;
        let mut search = page.search.borrow_mut();
        search.search(query);
        let report = SearchReport {
            query,
            matches: search.engine.index().entries(search.engine.last()),
        };
        Ok(to_value(&report)?)
    }

    /// Scrolls to the card titled `title` and resets the search.
    #[wasm_bindgen(js_name = selectResult)]
    pub fn select_result(&mut self, title: &str) -> Result<bool, JsValue> {
        let page = self.page()?;
        let found = page.search.borrow_mut().select_result(title);
        Ok(found)
    }

    /// Rebuilds the card container into `n` columns. Returns whether the
    /// layout changed.
    pub fn columnize(&mut self, n: usize) -> Result<bool, JsValue> {
        let page = self.page_mut()?;
        page.columnize(n).map_err(dom::js_error)
    }

    /// Opens the map modal for a card element.
    #[wasm_bindgen(js_name = openMap)]
    pub fn open_map(&mut self, card: Element) -> Result<(), JsValue> {
        let page = self.page()?;
        let Some(modal) = page.modal.as_ref() else {
            let missing = WisataError::MissingElement(page.config.selectors.modal.clone());
            return Err(dom::js_error(missing));
        };
        modal::open_for(modal, &card, &page.config.selectors);
        Ok(())
    }

    #[wasm_bindgen(js_name = closeMap)]
    pub fn close_map(&mut self) -> Result<(), JsValue> {
        if let Some(modal) = &self.page()?.modal {
            modal::close_modal(modal);
        }
        Ok(())
    }

    /// `"closed"`, `"loading"` or `"open"`.
    #[wasm_bindgen(js_name = modalState)]
    pub fn modal_state(&self) -> Result<JsValue, JsValue> {
        let state = match &self.page()?.modal {
            Some(modal) => modal
                .try_borrow()
                .map(|m| m.state())
                .map_err(|_| JsValue::from_str("map modal is busy"))?,
            None => ModalState::Closed,
        };
        Ok(to_value(&state)?)
    }

    /// `{ embedUrl, externalUrl, caption }` of the open session, or
    /// `undefined` while the modal is closed.
    #[wasm_bindgen(js_name = mapTarget)]
    pub fn map_target(&self) -> Result<JsValue, JsValue> {
        let Some(modal) = &self.page()?.modal else {
            return Ok(JsValue::UNDEFINED);
        };
        let modal = modal
            .try_borrow()
            .map_err(|_| JsValue::from_str("map modal is busy"))?;
        if !modal.is_open() {
            return Ok(JsValue::UNDEFINED);
        }
        match modal.target() {
            Some(target) => Ok(to_value(target)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Detaches everything. Further calls throw.
    pub fn destroy(&mut self) {
        if self.page.take().is_some() {
            tracing::debug!("enhancer destroyed");
        }
    }
}

impl Enhancer {
    /// Enhances the current document with an already validated config.
    pub fn with_config(config: EnhancerConfig) -> wisata_core::Result<Self> {
        let doc = dom::document()?;
        Page::attach(doc, config).map(|page| Self { page: Some(page) })
    }

    fn page(&self) -> Result<&Page, JsValue> {
        self.page
            .as_ref()
            .ok_or_else(|| JsValue::from_str("enhancer was destroyed"))
    }

    fn page_mut(&mut self) -> Result<&mut Page, JsValue> {
        self.page
            .as_mut()
            .ok_or_else(|| JsValue::from_str("enhancer was destroyed"))
    }
}

/// Logs a feature that could not start. Missing markup is expected on
/// trimmed-down pages and stays at debug level.
fn skipped(feature: &str, err: &WisataError) {
    if err.is_soft() {
        tracing::debug!(feature, %err, "feature disabled");
    } else {
        tracing::warn!(feature, %err, "feature failed to start");
    }
}

impl Page {
    fn attach(doc: Document, config: EnhancerConfig) -> wisata_core::Result<Self> {
        let columns = dom::query(&doc, &config.selectors.container)
            .map(|c| DomColumns::new(doc.clone(), c, config.selectors.clone()));
        if columns.is_none() {
            tracing::debug!(selector = %config.selectors.container, "card container not found");
        }

        let controller = Rc::new(RefCell::new(SearchController::new(&doc, &config)));
        let mut page = Page {
            listeners: search::wire(&doc, &config.selectors, &controller),
            doc,
            search: controller,
            columns,
            modal: None,
            _effects: None,
            config,
        };

        if page.config.layout.columnize {
            page.columnize(page.config.layout.column_count)?;
        }

        match modal::build(&page.doc, &page.config) {
            Ok(m) => {
                page.listeners
                    .extend(modal::wire(&page.doc, &page.config.selectors, &m));
                page.modal = Some(m);
            }
            Err(err) => skipped("map modal", &err),
        }

        if page.config.effects.enabled {
            page._effects = Some(Effects::start(&page.doc, &page.config));
        }

        match music::wire(&page.doc, &page.config) {
            Ok(listeners) => page.listeners.extend(listeners),
            Err(err) => skipped("music", &err),
        }

        tracing::info!(
            cards = page.search.borrow().engine.index().len(),
            "page enhanced"
        );
        Ok(page)
    }

    fn columnize(&mut self, n: usize) -> wisata_core::Result<bool> {
        let Some(host) = self.columns.as_mut() else {
            if n == 0 {
                return Err(WisataError::InvalidColumnCount(n));
            }
            return Ok(false);
        };
        let outcome = columnize(host, n, &self.config.maps, &self.config.messages)?;
        if outcome.changed_layout() {
            self.search
                .borrow_mut()
                .rebuild(&self.doc, &self.config.selectors);
        }
        Ok(outcome.changed_layout())
    }
}
