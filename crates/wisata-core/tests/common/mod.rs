// In-memory page surfaces shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use wisata_core::columns::ColumnLayout;
use wisata_core::prelude::*;

pub fn sample_cards() -> Vec<(usize, CardSource)> {
    vec![
        (
            0,
            CardSource::new("Pantai Kuta", "Bali").with_coordinates("-8.7184", "115.1686"),
        ),
        (
            1,
            CardSource::new("Danau Toba", "Sumatera Utara").with_place_id("ChIJ-toba"),
        ),
        (2, CardSource::new("Candi Borobudur", "Jawa Tengah")),
        (3, CardSource::new("Tanah Lot", "Bali")),
        (4, CardSource::new("Raja Ampat", "Papua Barat Daya")),
    ]
}

// -----------------------------------------------------------------------------
// Search
// -----------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FakePage {
    pub visible: HashMap<usize, bool>,
    pub results: Vec<String>,
    pub active: bool,
    pub input: String,
    pub scrolled_to: Vec<usize>,
}

impl FakePage {
    pub fn is_visible(&self, card: usize) -> bool {
        self.visible.get(&card).copied().unwrap_or(true)
    }

    pub fn visible_cards(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self
            .visible
            .iter()
            .filter(|(_, shown)| **shown)
            .map(|(&c, _)| c)
            .collect();
        v.sort_unstable();
        v
    }
}

impl SearchSurface<usize> for FakePage {
    fn set_card_visible(&mut self, card: &usize, visible: bool) {
        self.visible.insert(*card, visible);
    }

    fn render_results(&mut self, view: &ResultsView<'_>) {
        match view {
            ResultsView::Hidden => self.active = false,
            ResultsView::NoResults(msg) => {
                self.results = vec![msg.to_string()];
                self.active = true;
            }
            ResultsView::Entries(entries) => {
                self.results = entries
                    .iter()
                    .map(|e| format!("{} / {}", e.title, e.subtitle))
                    .collect();
                self.active = true;
            }
        }
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn scroll_to(&mut self, card: &usize) {
        self.scrolled_to.push(*card);
    }
}

// -----------------------------------------------------------------------------
// Columns
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FakeColumn {
    pub col: usize,
    pub map_caption: String,
    pub map_embed: String,
    pub map_link: String,
    pub cards: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Card(usize),
    Columns(Vec<FakeColumn>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeContainer {
    pub sources: HashMap<usize, CardSource>,
    pub children: Vec<Node>,
    pub columns_ready: bool,
    pub installs: usize,
}

impl FakeContainer {
    pub fn new(cards: Vec<(usize, CardSource)>) -> Self {
        Self {
            children: cards.iter().map(|(id, _)| Node::Card(*id)).collect(),
            sources: cards.into_iter().collect(),
            columns_ready: false,
            installs: 0,
        }
    }

    pub fn columns(&self) -> Option<&[FakeColumn]> {
        self.children.iter().find_map(|n| match n {
            Node::Columns(cols) => Some(cols.as_slice()),
            Node::Card(_) => None,
        })
    }
}

impl ColumnHost for FakeContainer {
    type Card = usize;

    fn is_columnized(&self) -> bool {
        self.columns_ready
    }

    fn cards(&self) -> Vec<(usize, CardSource)> {
        let mut ids = Vec::new();
        for node in &self.children {
            match node {
                Node::Card(id) => ids.push(*id),
                Node::Columns(cols) => ids.extend(cols.iter().flat_map(|c| c.cards.iter().copied())),
            }
        }
        ids.into_iter()
            .map(|id| (id, self.sources[&id].clone()))
            .collect()
    }

    fn install(&mut self, layout: &ColumnLayout<usize>) {
        let cols = layout
            .columns
            .iter()
            .map(|c| FakeColumn {
                col: c.index,
                map_caption: c.map.caption.clone(),
                map_embed: c.map.embed_url.clone(),
                map_link: c.map.external_url.clone(),
                cards: c.cards.clone(),
            })
            .collect();
        self.children = vec![Node::Columns(cols)];
        self.columns_ready = true;
        self.installs += 1;
    }
}

// -----------------------------------------------------------------------------
// Modal
// -----------------------------------------------------------------------------

/// Detaches (decrements the live counter) on drop.
pub struct HandlerGuard(Rc<Cell<usize>>);

impl Drop for HandlerGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

#[derive(Debug)]
pub struct FakeModal {
    pub title: String,
    pub caption: String,
    pub link: String,
    pub loading: bool,
    pub viewer_src: String,
    pub visible: bool,
    pub background_scroll: bool,
    pub focus: Option<&'static str>,
    pub live_handlers: Rc<Cell<usize>>,
    pub attach_calls: usize,
}

impl FakeModal {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            caption: String::new(),
            link: String::new(),
            loading: false,
            viewer_src: String::new(),
            visible: false,
            background_scroll: true,
            focus: Some("maps-button"),
            live_handlers: Rc::new(Cell::new(0)),
            attach_calls: 0,
        }
    }
}

impl ModalSurface for FakeModal {
    type Card = usize;
    type Focus = &'static str;
    type Guard = HandlerGuard;

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption = caption.to_owned();
    }

    fn set_external_link(&mut self, href: &str) {
        self.link = href.to_owned();
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn load_viewer(&mut self, src: &str) {
        self.viewer_src = src.to_owned();
    }

    fn clear_viewer(&mut self) {
        self.viewer_src.clear();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_background_scroll(&mut self, enabled: bool) {
        self.background_scroll = enabled;
    }

    fn focused(&self) -> Option<&'static str> {
        self.focus
    }

    fn focus_close_control(&mut self) {
        self.focus = Some("close");
    }

    fn restore_focus(&mut self, target: &&'static str) {
        self.focus = Some(*target);
    }

    fn attach_session_handlers(&mut self) -> HandlerGuard {
        self.attach_calls += 1;
        self.live_handlers.set(self.live_handlers.get() + 1);
        HandlerGuard(self.live_handlers.clone())
    }
}

pub fn record(id: usize, source: CardSource) -> CardRecord<usize> {
    CardRecord::from_source(id, &source)
}
