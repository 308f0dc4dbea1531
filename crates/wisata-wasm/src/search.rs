// crates/wisata-wasm/src/search.rs

//! Search box, results dropdown and card visibility over the live DOM.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use wisata_core::config::Selectors;
use wisata_core::{EnhancerConfig, ResultsView, SearchEngine, SearchIndex, SearchSurface};

use crate::dom;

const ACTIVE: &str = "active";

/// The DOM side of [`SearchSurface`].
///
/// Both the input and the dropdown are optional: without them `search`
/// still filters the cards, it just has nowhere to render rows.
pub(crate) struct DomSearch {
    doc: Document,
    input: Option<HtmlInputElement>,
    results: Option<Element>,
    item_class: String,
}

impl DomSearch {
    pub(crate) fn new(doc: Document, selectors: &Selectors) -> Self {
        let input = dom::query(&doc, &selectors.search_input)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let results = dom::query(&doc, &selectors.search_results);
        if input.is_none() {
            tracing::debug!(selector = %selectors.search_input, "search input not found");
        }
        Self {
            doc,
            input,
            results,
            item_class: dom::class_name(&selectors.result_item).to_owned(),
        }
    }

    pub(crate) fn input_value(&self) -> String {
        self.input.as_ref().map(|i| i.value()).unwrap_or_default()
    }

    /// Forces the dropdown open regardless of its content.
    pub(crate) fn activate(&self) {
        if let Some(results) = &self.results {
            let _ = results.class_list().add_1(ACTIVE);
        }
    }

    fn row(&self, name: &str, province: &str) -> Option<Element> {
        let row = dom::create(&self.doc, "div", &self.item_class).ok()?;
        let _ = row.set_attribute("data-title", name);
        let name_el = dom::create(&self.doc, "div", "search-result-name").ok()?;
        name_el.set_text_content(Some(name));
        let province_el = dom::create(&self.doc, "div", "search-result-province").ok()?;
        province_el.set_text_content(Some(province));
        row.append_child(&name_el).ok()?;
        row.append_child(&province_el).ok()?;
        Some(row)
    }
}

impl SearchSurface<Element> for DomSearch {
    fn set_card_visible(&mut self, card: &Element, visible: bool) {
        dom::set_style(card, "display", if visible { "" } else { "none" });
    }

    fn render_results(&mut self, view: &ResultsView<'_>) {
        let Some(results) = self.results.clone() else {
            return;
        };
        match view {
            ResultsView::Hidden => {
                let _ = results.class_list().remove_1(ACTIVE);
            }
            ResultsView::NoResults(message) => {
                results.set_inner_html("");
                if let Ok(row) = dom::create(&self.doc, "div", &self.item_class) {
                    row.set_text_content(Some(message));
                    let _ = results.append_child(&row);
                }
                let _ = results.class_list().add_1(ACTIVE);
            }
            ResultsView::Entries(entries) => {
                results.set_inner_html("");
                for entry in entries.iter() {
                    if let Some(row) = self.row(&entry.title, &entry.subtitle) {
                        let _ = results.append_child(&row);
                    }
                }
                let _ = results.class_list().add_1(ACTIVE);
            }
        }
    }

    fn clear_input(&mut self) {
        if let Some(input) = &self.input {
            input.set_value("");
        }
    }

    fn scroll_to(&mut self, card: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        card.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Engine plus the surface it renders to, shared by the listeners.
pub(crate) struct SearchController {
    pub(crate) engine: SearchEngine<Element>,
    pub(crate) surface: DomSearch,
}

impl SearchController {
    pub(crate) fn new(doc: &Document, config: &EnhancerConfig) -> Self {
        let index = SearchIndex::build(dom::page_cards(doc, &config.selectors));
        tracing::debug!(cards = index.len(), "search index built");
        Self {
            engine: SearchEngine::from_config(index, config),
            surface: DomSearch::new(doc.clone(), &config.selectors),
        }
    }

    pub(crate) fn search(&mut self, query: &str) {
        self.engine.search(&mut self.surface, query);
    }

    pub(crate) fn select_result(&mut self, title: &str) -> bool {
        self.engine.select_result(&mut self.surface, title)
    }

    /// Re-scans the page after cards moved and re-applies the last filter.
    pub(crate) fn rebuild(&mut self, doc: &Document, selectors: &Selectors) {
        let index = SearchIndex::build(dom::page_cards(doc, selectors));
        self.engine.rebuild(&mut self.surface, index);
    }
}

/// Hooks the input, the search button and the document-level click
/// handling (result selection, outside-click dismissal).
pub(crate) fn wire(
    doc: &Document,
    selectors: &Selectors,
    controller: &Rc<RefCell<SearchController>>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    if let Some(input) = dom::query(doc, &selectors.search_input) {
        let c = controller.clone();
        listeners.push(EventListener::new(&input, "input", move |_| {
            let mut c = c.borrow_mut();
            let query = c.surface.input_value();
            c.search(&query);
        }));

        let c = controller.clone();
        listeners.push(EventListener::new(&input, "keydown", move |event| {
            let enter = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|k| k.key() == "Enter");
            if enter {
                event.prevent_default();
                let mut c = c.borrow_mut();
                let query = c.surface.input_value();
                c.search(&query);
            }
        }));
    }

    if let Some(button) = dom::query(doc, &selectors.search_button) {
        let c = controller.clone();
        listeners.push(EventListener::new(&button, "click", move |event| {
            event.prevent_default();
            let mut c = c.borrow_mut();
            let query = c.surface.input_value();
            c.search(&query);
            c.surface.activate();
        }));
    }

    let c = controller.clone();
    let item = selectors.result_item.clone();
    let container = selectors.search_container.clone();
    listeners.push(EventListener::new(doc, "click", move |event| {
        let Some(target) = dom::target_element(event) else {
            return;
        };
        let Ok(mut c) = c.try_borrow_mut() else {
            return;
        };
        if let Some(row) = dom::closest(&target, &item) {
            let title = row.get_attribute("data-title").or_else(|| {
                dom::query_in(&row, ".search-result-name").and_then(|n| n.text_content())
            });
            if let Some(title) = title {
                c.select_result(&title);
            }
        }
        if dom::closest(&target, &container).is_none() {
            c.surface.render_results(&ResultsView::Hidden);
        }
    }));

    listeners
}
