mod common;

use common::{record, sample_cards, FakeContainer, FakePage, Node};
use wisata_core::columns::plan_columns;
use wisata_core::prelude::*;

fn run(host: &mut FakeContainer, n: usize) -> Result<ColumnizeOutcome> {
    let config = EnhancerConfig::default();
    columnize(host, n, &config.maps, &config.messages)
}

#[test]
fn cards_are_dealt_round_robin_preserving_order() {
    let cards: Vec<_> = (0..10)
        .map(|i| (i, CardSource::new(format!("Card {i}"), "Bali")))
        .collect();
    let mut host = FakeContainer::new(cards);

    let outcome = run(&mut host, 4).unwrap();
    assert_eq!(outcome, ColumnizeOutcome::Built { columns: 4, cards: 10 });

    let cols = host.columns().unwrap();
    let dealt: Vec<Vec<usize>> = cols.iter().map(|c| c.cards.clone()).collect();
    assert_eq!(
        dealt,
        vec![vec![0, 4, 8], vec![1, 5, 9], vec![2, 6], vec![3, 7]]
    );
    assert_eq!(
        cols.iter().map(|c| c.col).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn column_maps_prefer_coordinates_then_subtitle_then_fallback() {
    let mut host = FakeContainer::new(sample_cards());
    run(&mut host, 6).unwrap();
    let cols = host.columns().unwrap();

    // Column 0 starts with Pantai Kuta (coordinates).
    assert_eq!(
        cols[0].map_embed,
        "https://www.google.com/maps?q=-8.7184%2C115.1686&z=6&output=embed"
    );
    assert_eq!(cols[0].map_caption, "Bali");
    assert_eq!(
        cols[0].map_link,
        "https://www.google.com/maps/search/?api=1&query=-8.7184%2C115.1686"
    );

    // Column 1 starts with Danau Toba: a place id is not used for overviews.
    assert_eq!(
        cols[1].map_embed,
        "https://www.google.com/maps?q=Sumatera%20Utara&z=6&output=embed"
    );
    assert_eq!(cols[1].map_caption, "Sumatera Utara");

    // Column 5 has no cards at all.
    assert!(cols[5].cards.is_empty());
    assert_eq!(
        cols[5].map_embed,
        "https://www.google.com/maps?q=Indonesia&z=6&output=embed"
    );
    assert_eq!(cols[5].map_caption, "Lokasi");
}

#[test]
fn first_card_without_subtitle_uses_fallbacks() {
    let config = EnhancerConfig::default();
    let records = vec![record(0, CardSource::new("Gunung Bromo", ""))];
    let layout = plan_columns(&records, 1, &config.maps, &config.messages).unwrap();

    let map = &layout.columns[0].map;
    assert_eq!(map.query, "Indonesia");
    assert_eq!(map.caption, "Lokasi");
}

#[test]
fn columnize_twice_equals_columnize_once() {
    let mut once = FakeContainer::new(sample_cards());
    run(&mut once, 4).unwrap();

    let mut twice = FakeContainer::new(sample_cards());
    run(&mut twice, 4).unwrap();
    let second = run(&mut twice, 4).unwrap();

    assert_eq!(second, ColumnizeOutcome::AlreadyColumnized);
    assert!(!second.changed_layout());
    assert_eq!(twice.children, once.children);
    assert_eq!(twice.installs, 1);
}

#[test]
fn empty_container_is_left_alone() {
    let mut host = FakeContainer::new(Vec::new());
    assert_eq!(run(&mut host, 4).unwrap(), ColumnizeOutcome::NoCards);
    assert!(!host.columns_ready);
    assert!(host.children.is_empty());
}

#[test]
fn zero_columns_is_rejected() {
    let mut host = FakeContainer::new(sample_cards());
    let err = run(&mut host, 0).unwrap_err();
    assert!(matches!(err, WisataError::InvalidColumnCount(0)));
    assert!(host.children.iter().all(|n| matches!(n, Node::Card(_))));
}

#[test]
fn index_rebuilt_after_columnize_follows_column_order() {
    let mut host = FakeContainer::new(sample_cards());
    let mut engine = SearchEngine::from_config(
        SearchIndex::build(host.cards()),
        &EnhancerConfig::default(),
    );
    let mut page = FakePage::default();
    engine.search(&mut page, "bali");

    run(&mut host, 2).unwrap();
    engine.rebuild(&mut page, SearchIndex::build(host.cards()));

    // Columns: [0, 2, 4] then [1, 3].
    let titles: Vec<&str> = engine
        .index()
        .records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Pantai Kuta", "Candi Borobudur", "Raja Ampat", "Danau Toba", "Tanah Lot"]
    );
    assert_eq!(page.visible_cards(), vec![0, 3]);
    assert_eq!(engine.last().match_count(), Some(2));
}
