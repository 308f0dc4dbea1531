//! Search demo for wisata-rs
//!
//! This example demonstrates how to:
//! - Build a search index from card attributes
//! - Drive card visibility through a `SearchSurface`
//! - Jump to a result and reset the filter
//! - Switch to accent-insensitive matching

use std::collections::BTreeMap;
use wisata_rs::prelude::*;

/// Prints what a page would do instead of touching a DOM.
#[derive(Default)]
struct ConsolePage {
    visible: BTreeMap<usize, bool>,
}

impl SearchSurface<usize> for ConsolePage {
    fn set_card_visible(&mut self, card: &usize, visible: bool) {
        self.visible.insert(*card, visible);
    }

    fn render_results(&mut self, view: &ResultsView<'_>) {
        match view {
            ResultsView::Hidden => println!("  dropdown: hidden"),
            ResultsView::NoResults(msg) => println!("  dropdown: {msg}"),
            ResultsView::Entries(entries) => {
                for e in entries.iter() {
                    println!("  dropdown: {} ({})", e.title, e.subtitle);
                }
            }
        }
    }

    fn clear_input(&mut self) {
        println!("  input cleared");
    }

    fn scroll_to(&mut self, card: &usize) {
        println!("  scrolled to card #{card}");
    }
}

impl ConsolePage {
    fn print_visible(&self) {
        let shown: Vec<_> = self
            .visible
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.to_string())
            .collect();
        println!("  visible cards: [{}]", shown.join(", "));
    }
}

fn cards() -> Vec<(usize, CardSource)> {
    vec![
        (0, CardSource::new("Pantai Kuta", "Bali").with_coordinates("-8.7184", "115.1686")),
        (1, CardSource::new("Danau Toba", "Sumatera Utara")),
        (2, CardSource::new("Candi Borobudur", "Jawa Tengah")),
        (3, CardSource::new("Tanah Lot", "Bali")),
        (4, CardSource::new("Pulau Komodo", "Nusa Tenggara Timur")),
    ]
}

fn main() -> Result<()> {
    println!("=== wisata-rs Search Demo ===\n");

    let config = EnhancerConfig::default();
    let mut page = ConsolePage::default();
    let mut engine = SearchEngine::from_config(SearchIndex::build(cards()), &config);
    println!("Indexed {} cards\n", engine.index().len());

    // Example 1: filter by province
    println!("--- Example 1: search \"bali\" ---");
    engine.search(&mut page, "bali");
    page.print_visible();
    println!();

    // Example 2: nothing matches
    println!("--- Example 2: search \"xyz\" ---");
    engine.search(&mut page, "xyz");
    page.print_visible();
    println!();

    // Example 3: pick a result
    println!("--- Example 3: select \"Tanah Lot\" ---");
    engine.search(&mut page, "tanah");
    let found = engine.select_result(&mut page, "Tanah Lot");
    println!("  found: {found}");
    page.print_visible();
    println!();

    // Example 4: accent-insensitive matching from JSON config
    println!("--- Example 4: folded matching ---");
    let folded = EnhancerConfig::from_json(r#"{ "search": { "matchMode": "folded" } }"#)?;
    let mut engine = SearchEngine::from_config(
        SearchIndex::build([(0, CardSource::new("Nusa Penída", "Bali"))]),
        &folded,
    );
    let set = engine.search(&mut page, "penida");
    println!("  \"penida\" matches: {:?}", set.match_count());

    Ok(())
}
