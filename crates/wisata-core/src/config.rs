// crates/wisata-core/src/config.rs

//! # Page configuration
//!
//! Every knob the enhancement layer reads: the markup contract (selectors),
//! localized strings, map provider templates, layout and effect tunables.
//! All fields default to the values the page ships with, so an empty JSON
//! object (or no options at all from JS) is a valid configuration.

use crate::error::{Result, WisataError};
use crate::maps::MapProvider;
use crate::text::MatchMode;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhancerConfig {
    pub selectors: Selectors,
    pub messages: Messages,
    pub layout: LayoutConfig,
    pub search: SearchConfig,
    pub maps: MapProvider,
    pub effects: EffectsConfig,
}

impl EnhancerConfig {
    /// Parses a (possibly partial) JSON document and validates it.
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> Result<Self> {
        let config: EnhancerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.layout.column_count == 0 {
            return Err(WisataError::InvalidConfig(
                "layout.columnCount must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.effects.reveal_threshold) {
            return Err(WisataError::InvalidConfig(format!(
                "effects.revealThreshold must be within 0..=1 (got {})",
                self.effects.reveal_threshold
            )));
        }
        let p = &self.effects.particles;
        for (name, span) in [
            ("sizePx", p.size_px),
            ("delaySecs", p.delay_secs),
            ("durationSecs", p.duration_secs),
            ("lifetimeSecs", p.lifetime_secs),
        ] {
            if !span.is_valid() {
                return Err(WisataError::InvalidConfig(format!(
                    "effects.particles.{name}: min {} exceeds max {}",
                    span.min, span.max
                )));
            }
        }
        if self.maps.base_url.trim().is_empty() {
            return Err(WisataError::InvalidConfig("maps.baseUrl is empty".into()));
        }
        Ok(())
    }
}

/// The markup contract. Ids carry their `#`, classes their `.`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub container: String,
    pub card: String,
    pub title: String,
    pub subtitle: String,
    pub place_id_attr: String,
    pub lat_attr: String,
    pub lng_attr: String,
    pub maps_button: String,

    pub search_input: String,
    pub search_results: String,
    pub search_button: String,
    pub search_container: String,
    pub result_item: String,

    pub modal: String,
    pub modal_viewer: String,
    pub modal_close: String,
    pub modal_title: String,
    pub modal_coords: String,
    pub modal_open_link: String,
    pub modal_content: String,
    pub modal_loader: String,

    pub header: String,
    pub header_video: String,

    pub music_toggle: String,
    pub music_audio: String,
    pub music_status: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            container: ".cards".into(),
            card: ".card".into(),
            title: "h3".into(),
            subtitle: "p".into(),
            place_id_attr: "data-placeid".into(),
            lat_attr: "data-lat".into(),
            lng_attr: "data-lng".into(),
            maps_button: ".maps-button".into(),
            search_input: "#searchInput".into(),
            search_results: "#searchResults".into(),
            search_button: "#searchBtn".into(),
            search_container: ".search-container".into(),
            result_item: ".search-result-item".into(),
            modal: "#mapModal".into(),
            modal_viewer: "#mapModalIframe".into(),
            modal_close: "#mapModalClose".into(),
            modal_title: "#mapModalTitle".into(),
            modal_coords: "#mapModalCoords".into(),
            modal_open_link: "#mapModalOpenBtn".into(),
            modal_content: ".map-modal-content".into(),
            modal_loader: ".map-modal-loading".into(),
            header: "header".into(),
            header_video: "#header-video".into(),
            music_toggle: "#musicToggle".into(),
            music_audio: "#bgMusic".into(),
            music_status: "#musicStatus".into(),
        }
    }
}

/// User-visible strings. Defaults are the page's Indonesian copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub no_results: String,
    pub default_modal_title: String,
    pub column_caption_fallback: String,
    pub place_id_caption_prefix: String,
    pub no_location_caption: String,
    pub music_playing: String,
    pub music_failed: String,
    pub music_idle: String,
    pub music_stop_title: String,
    pub music_play_title: String,
    pub scroll_hint: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_results: "Tidak ada hasil yang ditemukan".into(),
            default_modal_title: "Peta Lokasi".into(),
            column_caption_fallback: "Lokasi".into(),
            place_id_caption_prefix: "Place ID: ".into(),
            no_location_caption: "—".into(),
            music_playing: "▶ Musik dimainkan...".into(),
            music_failed: "❌ Gagal memutar musik".into(),
            music_idle: "🎵 Musik tradisional Indonesia".into(),
            music_stop_title: "Hentikan musik".into(),
            music_play_title: "Putar musik".into(),
            scroll_hint: "⬇ scroll down to explore ⬇".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Rebuild the card grid into columns on start-up.
    pub columnize: bool,
    pub column_count: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columnize: false,
            column_count: 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub match_mode: MatchMode,
}

/// A closed `[min, max]` interval to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !self.is_valid() || self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsConfig {
    pub enabled: bool,
    pub particles: ParticleConfig,
    pub parallax: ParallaxConfig,
    pub ripple: RippleConfig,
    pub glow_animation: String,
    pub reveal_threshold: f64,
    pub scroll_dim_opacity: f64,
    pub scroll_hint_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            particles: ParticleConfig::default(),
            parallax: ParallaxConfig::default(),
            ripple: RippleConfig::default(),
            glow_animation: "glow 2s ease-in-out infinite".into(),
            reveal_threshold: 0.08,
            scroll_dim_opacity: 0.8,
            scroll_hint_ms: 12_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub batch: usize,
    pub size_px: Span,
    pub delay_secs: Span,
    pub duration_secs: Span,
    pub lifetime_secs: Span,
    pub bottom_px: f64,
    pub respawn_ms: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            batch: 12,
            size_px: Span::new(16.0, 66.0),
            delay_secs: Span::new(0.0, 2.0),
            duration_secs: Span::new(6.0, 11.0),
            lifetime_secs: Span::new(8.0, 14.0),
            bottom_px: -120.0,
            respawn_ms: 9_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    pub pointer_factor: f64,
    pub scale: f64,
    pub scroll_factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            pointer_factor: 0.02,
            scale: 1.08,
            scroll_factor: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RippleConfig {
    pub size_px: f64,
    pub lifetime_ms: u32,
    pub color: String,
    pub animation: String,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            size_px: 22.0,
            lifetime_ms: 700,
            color: "rgba(212,175,55,0.45)".into(),
            animation: "ripple 0.6s ease-out".into(),
        }
    }
}
