use rand::rngs::SmallRng;
use rand::SeedableRng;
use wisata_core::config::{EffectsConfig, ParallaxConfig};
use wisata_core::effects::*;
use wisata_core::prelude::*;

#[test]
fn parallax_follows_pointer_around_the_header_centre() {
    let rect = Rect::new(0.0, 100.0, 800.0, 400.0);
    let offset = parallax_offset(Point::new(600.0, 100.0), rect, 0.5);
    assert_eq!(offset, Point::new(100.0, -100.0));

    let cfg = ParallaxConfig::default();
    assert_eq!(
        parallax_transform(&cfg, Some(offset)),
        "scale(1.08) translate(100px, -100px)"
    );
    assert_eq!(parallax_transform(&cfg, None), "scale(1.08)");
    assert_eq!(scroll_background_position(120.0, 0.5), "center 60px");
}

#[test]
fn particle_batch_respects_configured_ranges() {
    let cfg = EffectsConfig::default().particles;
    let mut rng = SmallRng::seed_from_u64(7);
    let batch = particle_batch(&mut rng, &cfg);

    assert_eq!(batch.len(), 12);
    for p in &batch {
        assert!((16.0..66.0).contains(&p.size_px));
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..2.0).contains(&p.delay_secs));
        assert!((6.0..11.0).contains(&p.duration_secs));
        assert!((8_000..=14_000).contains(&p.lifetime_ms));
        assert_eq!(p.bottom_px, -120.0);
    }

    let style = batch[0].style();
    assert_eq!(style[0].0, "width");
    assert_eq!(style[0].1, style[1].1);
    assert!(style[2].1.ends_with('%'));
}

#[test]
fn ripple_and_glow_are_card_local() {
    let rect = Rect::new(50.0, 20.0, 200.0, 100.0);

    let origin = ripple_origin(Point::new(150.0, 70.0), rect, 22.0);
    assert_eq!(origin, Point::new(89.0, 39.0));

    assert_eq!(pointer_glow(Point::new(100.0, 45.0), rect), (25.0, 25.0));
    assert_eq!(pointer_glow(Point::new(1.0, 1.0), Rect::default()), GLOW_REST);
}

#[test]
fn closest_card_to_viewport_centre() {
    assert_eq!(closest_to_center([-300.0, 180.0, 420.0, 900.0], 800.0), Some(2));
    assert_eq!(closest_to_center([300.0, 500.0], 800.0), Some(0));
    assert_eq!(closest_to_center(std::iter::empty(), 800.0), None);
}

#[test]
fn music_toggle_recovers_from_rejected_playback() {
    let messages = Messages::default();
    let mut music = MusicToggle::default();
    assert_eq!(music.view(&messages).status, "🎵 Musik tradisional Indonesia");

    assert_eq!(music.toggle(), MusicCommand::Play);
    let view = music.view(&messages);
    assert!(view.playing);
    assert_eq!(view.button_title, "Hentikan musik");

    assert!(music.play_rejected("NotAllowedError"));
    assert_eq!(music.state(), MusicState::Failed);
    let view = music.view(&messages);
    assert!(!view.playing);
    assert_eq!(view.status, "❌ Gagal memutar musik");

    // A retry from the failed state plays again.
    assert_eq!(music.toggle(), MusicCommand::Play);
    assert_eq!(music.toggle(), MusicCommand::Pause);
    assert!(!music.play_rejected("late rejection"));
    assert_eq!(music.state(), MusicState::Stopped);

    music.toggle();
    music.ended();
    assert_eq!(music.view(&messages).button_title, "Putar musik");
}
