// crates/wisata-wasm/src/columns.rs

use gloo::events::EventListener;
use web_sys::{Document, Element};
use wisata_core::columns::{Column, ColumnLayout};
use wisata_core::config::Selectors;
use wisata_core::{CardSource, ColumnHost};

use crate::dom;

const READY: &str = "columns-ready";

/// The card container as a [`ColumnHost`].
///
/// Column maps open their search link in a new tab; those click listeners
/// live as long as this value.
pub(crate) struct DomColumns {
    doc: Document,
    container: Element,
    selectors: Selectors,
    listeners: Vec<EventListener>,
}

impl DomColumns {
    pub(crate) fn new(doc: Document, container: Element, selectors: Selectors) -> Self {
        Self {
            doc,
            container,
            selectors,
            listeners: Vec::new(),
        }
    }

    fn column_element(&mut self, column: &Column<Element>) -> Option<Element> {
        let col = dom::create(&self.doc, "div", "card-column").ok()?;
        let _ = col.set_attribute("data-col", &column.index.to_string());

        let map = dom::create(&self.doc, "div", "column-map").ok()?;
        let frame = self.doc.create_element("iframe").ok()?;
        let _ = frame.set_attribute("src", &column.map.embed_url);
        let _ = frame.set_attribute("loading", "lazy");
        let caption = dom::create(&self.doc, "div", "map-caption").ok()?;
        caption.set_text_content(Some(&column.map.caption));
        map.append_child(&frame).ok()?;
        map.append_child(&caption).ok()?;

        let href = column.map.external_url.clone();
        self.listeners.push(EventListener::new(&map, "click", move |_| {
            if let Ok(window) = dom::window() {
                let _ = window.open_with_url_and_target(&href, "_blank");
            }
        }));

        col.append_child(&map).ok()?;
        for card in &column.cards {
            col.append_child(card).ok()?;
        }
        Some(col)
    }
}

impl ColumnHost for DomColumns {
    type Card = Element;

    fn is_columnized(&self) -> bool {
        self.container.class_list().contains(READY)
    }

    fn cards(&self) -> Vec<(Element, CardSource)> {
        dom::query_all_in(&self.container, &self.selectors.card)
            .into_iter()
            .map(|card| {
                let source = dom::card_source(&card, &self.selectors);
                (card, source)
            })
            .collect()
    }

    fn install(&mut self, layout: &ColumnLayout<Element>) {
        let Ok(wrapper) = dom::create(&self.doc, "div", "columns") else {
            return;
        };
        for column in &layout.columns {
            if let Some(col) = self.column_element(column) {
                let _ = wrapper.append_child(&col);
            }
        }
        self.container.set_inner_html("");
        let _ = self.container.append_child(&wrapper);
        let _ = self.container.class_list().add_1(READY);
    }
}
