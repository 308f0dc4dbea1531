mod common;

use common::{record, FakeModal};
use wisata_core::prelude::*;

fn modal() -> MapModal<FakeModal> {
    let config = EnhancerConfig::default();
    MapModal::new(FakeModal::new(), config.maps, config.messages)
}

#[test]
fn coordinates_round_trip_into_embed_and_link() {
    let mut modal = modal();
    let card = record(
        0,
        CardSource::new("Monas", "DKI Jakarta").with_coordinates("-6.2", "106.8"),
    );

    let target = modal.open(&card).clone();
    assert!(target.embed_url.contains("q=-6.2%2C106.8"));
    assert!(target.embed_url.contains("&z=14"));
    assert!(target.external_url.contains("query=-6.2%2C106.8"));
    assert_eq!(target.caption, "-6.2, 106.8");

    let surface = modal.surface();
    assert_eq!(surface.viewer_src, target.embed_url);
    assert_eq!(surface.link, target.external_url);
    assert_eq!(surface.caption, "-6.2, 106.8");
}

#[test]
fn coordinate_text_is_normalized_in_caption_and_queries() {
    let mut modal = modal();
    let card = record(
        0,
        CardSource::new("Monas", "DKI Jakarta").with_coordinates(" -6.20 ", "106.80"),
    );

    let target = modal.open(&card).clone();
    assert_eq!(target.caption, "-6.2, 106.8");
    assert!(target.embed_url.contains("q=-6.2%2C106.8&z=14"));
    assert!(target.external_url.ends_with("query=-6.2%2C106.8"));
}

#[test]
fn place_id_beats_coordinates() {
    let mut modal = modal();
    let card = record(
        0,
        CardSource::new("Danau Toba", "Sumatera Utara")
            .with_place_id("ChIJ123")
            .with_coordinates("2.6", "98.8"),
    );

    let target = modal.open(&card).clone();
    assert_eq!(
        target.embed_url,
        "https://www.google.com/maps?q=place_id:ChIJ123&output=embed"
    );
    assert_eq!(
        target.external_url,
        "https://www.google.com/maps/place/?q=place_id:ChIJ123"
    );
    assert_eq!(target.caption, "Place ID: ChIJ123");
    assert!(!target.embed_url.contains("z="));
}

#[test]
fn free_text_fallback_and_default_title() {
    let mut modal = modal();

    let target = modal
        .open(&record(0, CardSource::new("Candi Prambanan", "DI Yogyakarta")))
        .clone();
    assert_eq!(
        target.embed_url,
        "https://www.google.com/maps?q=Candi%20Prambanan%20DI%20Yogyakarta&output=embed"
    );
    assert_eq!(
        target.external_url,
        "https://www.google.com/maps/search/?api=1&query=Candi%20Prambanan%20DI%20Yogyakarta"
    );
    assert_eq!(target.caption, "—");
    assert_eq!(modal.surface().title, "Candi Prambanan");

    let target = modal.open(&record(1, CardSource::new("", ""))).clone();
    assert_eq!(
        target.embed_url,
        "https://www.google.com/maps?q=Indonesia&output=embed"
    );
    assert_eq!(modal.surface().title, "Peta Lokasi");
}

#[test]
fn open_load_close_lifecycle() {
    let mut modal = modal();
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(!modal.is_open());
    assert!(modal.target().is_none());

    let card = record(7, CardSource::new("Pantai Kuta", "Bali"));
    let embed = modal.open(&card).embed_url.clone();

    assert_eq!(modal.state(), ModalState::Loading);
    assert!(modal.is_open());
    assert_eq!(modal.target().map(|t| t.embed_url.as_str()), Some(embed.as_str()));
    assert_eq!(modal.bound_card(), Some(&7));
    {
        let s = modal.surface();
        assert!(s.visible);
        assert!(s.loading);
        assert!(!s.background_scroll);
        assert_eq!(s.focus, Some("close"));
        assert_eq!(s.live_handlers.get(), 1);
    }

    assert!(modal.viewer_loaded(&embed));
    assert_eq!(modal.state(), ModalState::Open);
    assert!(!modal.surface().loading);
    assert_eq!(modal.surface().focus, Some("close"));

    assert!(modal.is_open());

    modal.close();
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(!modal.is_open());
    assert!(modal.target().is_none());
    let s = modal.surface();
    assert!(!s.visible);
    assert!(s.background_scroll);
    assert!(s.viewer_src.is_empty());
    assert_eq!(s.focus, Some("maps-button"));
    assert_eq!(s.live_handlers.get(), 0);
    assert!(modal.bound_card().is_none());
}

#[test]
fn closing_before_load_still_restores_scroll_and_focus() {
    let mut modal = modal();
    let card = record(0, CardSource::new("Pantai Kuta", "Bali"));
    let embed = modal.open(&card).embed_url.clone();

    modal.close();
    assert!(modal.surface().background_scroll);
    assert_eq!(modal.surface().focus, Some("maps-button"));
    assert_eq!(modal.surface().live_handlers.get(), 0);

    // The abandoned load reports in late and must not resurrect the modal.
    assert!(!modal.viewer_loaded(&embed));
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn reopening_keeps_exactly_one_handler_set() {
    let mut modal = modal();
    let a = record(0, CardSource::new("Pantai Kuta", "Bali"));
    let b = record(1, CardSource::new("Danau Toba", "Sumatera Utara"));

    let first = modal.open(&a).embed_url.clone();
    modal.open(&b);
    modal.open(&a);

    assert_eq!(modal.surface().attach_calls, 3);
    assert_eq!(modal.surface().live_handlers.get(), 1);
    assert_eq!(modal.bound_card(), Some(&0));
    assert_eq!(modal.state(), ModalState::Loading);

    // Only the latest embed URL completes the load.
    modal.open(&b);
    assert!(!modal.viewer_loaded(&first));
    assert_eq!(modal.state(), ModalState::Loading);
}

#[test]
fn close_when_closed_is_harmless() {
    let mut modal = modal();
    modal.close();
    modal.close();

    let s = modal.surface();
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(!s.visible);
    assert!(s.background_scroll);
    assert_eq!(s.focus, Some("maps-button"));
    assert_eq!(s.live_handlers.get(), 0);
}

#[test]
fn load_signal_while_open_is_ignored() {
    let mut modal = modal();
    let embed = modal
        .open(&record(0, CardSource::new("Pantai Kuta", "Bali")))
        .embed_url
        .clone();
    assert!(modal.viewer_loaded(&embed));
    assert!(!modal.viewer_loaded(&embed));
    assert_eq!(modal.state(), ModalState::Open);
}
