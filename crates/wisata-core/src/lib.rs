// crates/wisata-core/src/lib.rs

//! # wisata-core
//!
//! Host-agnostic logic behind the wisata places page: card index, search
//! and result navigation, the column layout with overview maps, the map
//! modal state machine, the music toggle and the arithmetic for the
//! cosmetic effects.
//!
//! Nothing in this crate touches a DOM. Components talk to the page through
//! small "surface" traits ([`SearchSurface`], [`ColumnHost`],
//! [`ModalSurface`]) that the `wisata-wasm` crate implements over
//! `web-sys`, and that tests implement in memory.
//!
//! ```rust
//! use wisata_core::prelude::*;
//!
//! let index = SearchIndex::build([
//!     (0, CardSource::new("Pantai Kuta", "Bali")),
//!     (1, CardSource::new("Danau Toba", "Sumatera Utara")),
//! ]);
//! let set = index.matches("bali", MatchMode::Lowercase);
//! assert!(set.is_visible(0));
//! assert!(!set.is_visible(1));
//! ```

pub mod columns;
pub mod config;
pub mod effects;
pub mod error;
pub mod index;
pub mod maps;
pub mod modal;
pub mod model;
pub mod music;
mod navigator;
pub mod search;
pub mod text;

// Re-exports
pub use crate::columns::{columnize, ColumnHost, ColumnLayout, ColumnizeOutcome};
pub use crate::config::EnhancerConfig;
pub use crate::error::{Result, WisataError};
pub use crate::index::{MatchSet, ResultEntry, SearchIndex};
pub use crate::maps::{ColumnMap, MapProvider, MapTarget};
pub use crate::modal::{MapModal, ModalState, ModalSurface};
pub use crate::model::{CardRecord, CardSource, LocationHint};
pub use crate::search::{ResultsView, SearchEngine, SearchSurface};

pub mod prelude {
    pub use crate::columns::{columnize, plan_columns, ColumnHost, ColumnLayout, ColumnizeOutcome};
    pub use crate::config::{EnhancerConfig, Messages, Selectors};
    pub use crate::error::{Result, WisataError};
    pub use crate::index::{MatchSet, ResultEntry, SearchIndex};
    pub use crate::maps::{ColumnMap, MapProvider, MapTarget};
    pub use crate::modal::{MapModal, ModalState, ModalSurface};
    pub use crate::model::{CardRecord, CardSource, LocationHint};
    pub use crate::music::{MusicCommand, MusicState, MusicToggle};
    pub use crate::search::{ResultsView, SearchEngine, SearchSurface};
    pub use crate::text::MatchMode;
}
