// crates/wisata-core/src/model.rs

use crate::text::{non_blank, parse_opt_f64};
use serde::{Deserialize, Serialize};

/// Raw card attributes as they are read off the page.
///
/// This mirrors the markup contract (`h3`, first `p`, `data-placeid`,
/// `data-lat`, `data-lng`) and is what hosts hand to the index builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSource {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
}

impl CardSource {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            ..Self::default()
        }
    }

    pub fn with_place_id(mut self, id: impl Into<String>) -> Self {
        self.place_id = Some(id.into());
        self
    }

    pub fn with_coordinates(mut self, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        self.lat = Some(lat.into());
        self.lng = Some(lng.into());
        self
    }

    /// Resolves the location attributes into a [`LocationHint`].
    ///
    /// A place id wins when it is non-blank. Coordinates count only when
    /// both halves parse; a lone `data-lat` is ignored.
    pub fn location_hint(&self) -> LocationHint {
        if let Some(id) = non_blank(self.place_id.as_deref()) {
            return LocationHint::PlaceId(id.to_owned());
        }
        match (
            parse_opt_f64(self.lat.as_deref()),
            parse_opt_f64(self.lng.as_deref()),
        ) {
            (Some(lat), Some(lng)) => LocationHint::Coordinates { lat, lng },
            _ => LocationHint::None,
        }
    }
}

/// Where a card points on the map, in precedence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum LocationHint {
    PlaceId(String),
    Coordinates { lat: f64, lng: f64 },
    None,
}

impl LocationHint {
    /// The `lat,lng` query string, when this hint carries coordinates.
    pub fn coordinate_query(&self) -> Option<String> {
        match self {
            LocationHint::Coordinates { lat, lng } => Some(format!("{lat},{lng}")),
            _ => None,
        }
    }
}

/// One searchable card.
///
/// `element` is a handle back into the host's page tree. The index never
/// creates or destroys elements, so the handle is only a reference: for the
/// DOM host it is a cloned `web_sys::Element`, for tests anything `Clone`.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRecord<H> {
    pub title: String,
    pub subtitle: String,
    pub location: LocationHint,
    pub element: H,
}

impl<H> CardRecord<H> {
    /// Builds a record from raw attributes, trimming the text fields.
    pub fn from_source(element: H, source: &CardSource) -> Self {
        Self {
            title: source.title.trim().to_owned(),
            subtitle: source.subtitle.trim().to_owned(),
            location: source.location_hint(),
            element,
        }
    }

    /// `title + " " + subtitle`, trimmed, or `fallback` when both are blank.
    pub fn free_text_query<'a>(&'a self, fallback: &'a str) -> std::borrow::Cow<'a, str> {
        let joined = format!("{} {}", self.title, self.subtitle);
        let joined = joined.trim();
        if joined.is_empty() {
            std::borrow::Cow::Borrowed(fallback)
        } else {
            std::borrow::Cow::Owned(joined.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_place_id_falls_through_to_coordinates() {
        let src = CardSource::new("Monas", "DKI Jakarta")
            .with_place_id("   ")
            .with_coordinates("-6.1754", "106.8272");
        assert_eq!(
            src.location_hint(),
            LocationHint::Coordinates {
                lat: -6.1754,
                lng: 106.8272
            }
        );
    }

    #[test]
    fn half_coordinates_are_ignored() {
        let mut src = CardSource::new("Monas", "DKI Jakarta");
        src.lat = Some("-6.1754".into());
        assert_eq!(src.location_hint(), LocationHint::None);

        let src = CardSource::new("Monas", "DKI Jakarta").with_coordinates("n/a", "106.8");
        assert_eq!(src.location_hint(), LocationHint::None);
    }

    #[test]
    fn free_text_query_trims_and_falls_back() {
        let rec = CardRecord::from_source((), &CardSource::new("  ", " "));
        assert_eq!(rec.free_text_query("Indonesia"), "Indonesia");

        let rec = CardRecord::from_source((), &CardSource::new("Candi Borobudur", ""));
        assert_eq!(rec.free_text_query("Indonesia"), "Candi Borobudur");
    }
}
