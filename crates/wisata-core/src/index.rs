// crates/wisata-core/src/index.rs

use crate::model::{CardRecord, CardSource};
use crate::text::MatchMode;
use serde::Serialize;

/// Flat, ordered view over the cards on the page.
///
/// Order is document order at build time. The index is a derived value:
/// after anything moves cards around it is rebuilt wholesale, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndex<H> {
    records: Vec<CardRecord<H>>,
}

impl<H> Default for SearchIndex<H> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<H> SearchIndex<H> {
    /// Scans `(handle, attributes)` pairs in document order.
    pub fn build<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = (H, CardSource)>,
    {
        let records = cards
            .into_iter()
            .map(|(element, source)| CardRecord::from_source(element, &source))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[CardRecord<H>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose title equals `title` exactly.
    ///
    /// With duplicate titles the earliest card in document order wins.
    pub fn find_by_title(&self, title: &str) -> Option<&CardRecord<H>> {
        self.records.iter().find(|r| r.title == title)
    }

    /// Filters the index for `query`.
    ///
    /// A blank query yields [`MatchSet::All`]. Otherwise a record matches
    /// when its title or subtitle contains the normalized query.
    pub fn matches(&self, query: &str, mode: MatchMode) -> MatchSet {
        if query.trim().is_empty() {
            return MatchSet::All;
        }
        let q = mode.key(query);
        let indices = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                mode.key(&r.title).contains(&q) || mode.key(&r.subtitle).contains(&q)
            })
            .map(|(i, _)| i)
            .collect();
        MatchSet::Filtered {
            query: query.to_owned(),
            indices,
        }
    }

    /// Dropdown rows for `set`, in index order.
    pub fn entries(&self, set: &MatchSet) -> Vec<ResultEntry> {
        match set {
            MatchSet::All => Vec::new(),
            MatchSet::Filtered { indices, .. } => indices
                .iter()
                .filter_map(|&i| self.records.get(i))
                .map(|r| ResultEntry {
                    title: r.title.clone(),
                    subtitle: r.subtitle.clone(),
                })
                .collect(),
        }
    }
}

/// Outcome of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatchSet {
    /// No filter in effect; every card is visible.
    #[default]
    All,
    /// A non-blank query and the indices (ascending) of matching records.
    Filtered { query: String, indices: Vec<usize> },
}

impl MatchSet {
    pub fn is_visible(&self, index: usize) -> bool {
        match self {
            MatchSet::All => true,
            MatchSet::Filtered { indices, .. } => indices.binary_search(&index).is_ok(),
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            MatchSet::All => None,
            MatchSet::Filtered { query, .. } => Some(query),
        }
    }

    /// Number of matching records; `None` when unfiltered.
    pub fn match_count(&self) -> Option<usize> {
        match self {
            MatchSet::All => None,
            MatchSet::Filtered { indices, .. } => Some(indices.len()),
        }
    }
}

/// One row in the results dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub title: String,
    pub subtitle: String,
}
