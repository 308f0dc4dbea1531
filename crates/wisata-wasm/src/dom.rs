// crates/wisata-wasm/src/dom.rs

//! Thin helpers over `web-sys` shared by the page components.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, Window};
use wisata_core::config::Selectors;
use wisata_core::effects::{Point, Rect};
use wisata_core::{CardSource, WisataError};

pub(crate) fn window() -> Result<Window, WisataError> {
    web_sys::window().ok_or_else(|| WisataError::MissingElement("window".into()))
}

pub(crate) fn document() -> Result<Document, WisataError> {
    window()?
        .document()
        .ok_or_else(|| WisataError::MissingElement("document".into()))
}

pub(crate) fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

pub(crate) fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Like [`query`], but a missing element is a (soft) error.
pub(crate) fn require(doc: &Document, selector: &str) -> Result<Element, WisataError> {
    query(doc, selector).ok_or_else(|| WisataError::MissingElement(selector.to_owned()))
}

/// All matches of `selector` in document order.
pub(crate) fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    match doc.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// `.search-result-item` -> `search-result-item`.
pub(crate) fn class_name(selector: &str) -> &str {
    selector.trim_start_matches('.')
}

pub(crate) fn create(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub(crate) fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub(crate) fn style_value(el: &Element, property: &str) -> String {
    el.dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}

pub(crate) fn rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Pointer position of a mouse event, if it is one.
pub(crate) fn pointer(event: &Event) -> Option<Point> {
    event
        .dyn_ref::<web_sys::MouseEvent>()
        .map(|e| Point::new(f64::from(e.client_x()), f64::from(e.client_y())))
}

/// The event target as an element.
pub(crate) fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

pub(crate) fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

fn text_of(card: &Element, selector: &str) -> String {
    query_in(card, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

/// Reads the markup contract off a card element.
pub(crate) fn card_source(card: &Element, selectors: &Selectors) -> CardSource {
    CardSource {
        title: text_of(card, &selectors.title),
        subtitle: text_of(card, &selectors.subtitle),
        place_id: card.get_attribute(&selectors.place_id_attr),
        lat: card.get_attribute(&selectors.lat_attr),
        lng: card.get_attribute(&selectors.lng_attr),
    }
}

/// Every card on the page, in document order.
pub(crate) fn page_cards(doc: &Document, selectors: &Selectors) -> Vec<(Element, CardSource)> {
    query_all(doc, &selectors.card)
        .into_iter()
        .map(|card| {
            let source = card_source(&card, selectors);
            (card, source)
        })
        .collect()
}

/// Converts a core error into a JS `Error` at the binding boundary.
pub(crate) fn js_error(err: WisataError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
