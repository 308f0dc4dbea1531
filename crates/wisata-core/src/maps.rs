// crates/wisata-core/src/maps.rs

//! # Map provider URLs
//!
//! The provider is an opaque URL service: we only ever build two kinds of
//! links against it.
//!
//! - embed: `<base>?q=<query>[&z=<zoom>]&output=embed`
//!   or `<base>?q=place_id:<id>&output=embed`
//! - external: `<base>/search/?api=1&query=<query>`
//!   or `<base>/place/?q=place_id:<id>`
//!
//! Query values are percent-encoded, so `-6.2,106.8` travels as
//! `-6.2%2C106.8`.

use crate::config::Messages;
use crate::model::{CardRecord, LocationHint};
use serde::{Deserialize, Serialize};
use urlencoding::encode;

/// URL templates plus the zoom levels and fallback the page uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapProvider {
    pub base_url: String,
    /// Zoom for a single card's coordinates.
    pub close_zoom: u8,
    /// Zoom for the per-column province overview.
    pub overview_zoom: u8,
    /// Query used when a card carries no usable text at all.
    pub fallback_query: String,
}

impl Default for MapProvider {
    fn default() -> Self {
        Self {
            base_url: "https://www.google.com/maps".into(),
            close_zoom: 14,
            overview_zoom: 6,
            fallback_query: "Indonesia".into(),
        }
    }
}

/// Everything the modal needs to show one card on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTarget {
    pub embed_url: String,
    pub external_url: String,
    /// Human-readable location. Coordinates are shown as parsed numbers in
    /// shortest form, so `data-lat="-6.20"` reads `-6.2`; the embed and
    /// external queries use the same normalized text.
    pub caption: String,
}

/// The overview map injected at the top of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMap {
    pub query: String,
    pub caption: String,
    pub embed_url: String,
    pub external_url: String,
}

impl MapProvider {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Embed URL for a free-text or `lat,lng` query.
    pub fn embed_query(&self, query: &str, zoom: Option<u8>) -> String {
        match zoom {
            Some(z) => format!("{}?q={}&z={z}&output=embed", self.base(), encode(query)),
            None => format!("{}?q={}&output=embed", self.base(), encode(query)),
        }
    }

    /// Embed URL for a provider place identifier.
    pub fn embed_place(&self, place_id: &str) -> String {
        format!("{}?q=place_id:{}&output=embed", self.base(), encode(place_id))
    }

    /// Navigable search link for a free-text or `lat,lng` query.
    pub fn search_link(&self, query: &str) -> String {
        format!("{}/search/?api=1&query={}", self.base(), encode(query))
    }

    /// Navigable link for a provider place identifier.
    pub fn place_link(&self, place_id: &str) -> String {
        format!("{}/place/?q=place_id:{}", self.base(), encode(place_id))
    }

    /// Resolves a card into embed URL, external link and caption.
    ///
    /// Precedence is strict: place id, then coordinates, then the free-text
    /// `title subtitle` query (or [`MapProvider::fallback_query`]).
    pub fn target_for<H>(&self, card: &CardRecord<H>, messages: &Messages) -> MapTarget {
        match &card.location {
            LocationHint::PlaceId(id) => MapTarget {
                embed_url: self.embed_place(id),
                external_url: self.place_link(id),
                caption: format!("{}{id}", messages.place_id_caption_prefix),
            },
            LocationHint::Coordinates { lat, lng } => {
                let query = format!("{lat},{lng}");
                MapTarget {
                    embed_url: self.embed_query(&query, Some(self.close_zoom)),
                    external_url: self.search_link(&query),
                    caption: format!("{lat}, {lng}"),
                }
            }
            LocationHint::None => {
                let query = card.free_text_query(&self.fallback_query);
                MapTarget {
                    embed_url: self.embed_query(&query, None),
                    external_url: self.search_link(&query),
                    caption: messages.no_location_caption.clone(),
                }
            }
        }
    }

    /// Embed URL used when there is no card to show.
    pub fn fallback_embed(&self) -> String {
        self.embed_query(&self.fallback_query, None)
    }

    /// Builds the overview map for a column headed by `first`.
    ///
    /// Coordinates win over the subtitle; a column without cards (or whose
    /// first card has neither) shows the fallback query. Place ids are not
    /// used here: the overview is about the province, not the spot.
    pub fn column_map<H>(&self, first: Option<&CardRecord<H>>, messages: &Messages) -> ColumnMap {
        let subtitle = first
            .map(|c| c.subtitle.as_str())
            .filter(|s| !s.is_empty());
        let query = first
            .and_then(|c| c.location.coordinate_query())
            .or_else(|| subtitle.map(str::to_owned))
            .unwrap_or_else(|| self.fallback_query.clone());
        let caption = subtitle
            .unwrap_or(&messages.column_caption_fallback)
            .to_owned();

        ColumnMap {
            embed_url: self.embed_query(&query, Some(self.overview_zoom)),
            external_url: self.search_link(&query),
            query,
            caption,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_commas_are_percent_encoded() {
        let maps = MapProvider::default();
        assert_eq!(
            maps.search_link("Pantai Kuta, Bali"),
            "https://www.google.com/maps/search/?api=1&query=Pantai%20Kuta%2C%20Bali"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_tolerated() {
        let maps = MapProvider {
            base_url: "https://maps.example.test/".into(),
            ..MapProvider::default()
        };
        assert_eq!(
            maps.place_link("abc"),
            "https://maps.example.test/place/?q=place_id:abc"
        );
    }
}
