// crates/wisata-core/src/search.rs

//! # Search engine
//!
//! Drives card visibility and the results dropdown from a query string.
//! The engine owns the [`SearchIndex`] and remembers the last filter so
//! that a rebuilt index (after columnizing) can be brought back in line
//! with what the user currently sees.

use crate::config::EnhancerConfig;
use crate::index::{MatchSet, ResultEntry, SearchIndex};
use crate::text::MatchMode;

/// What the results dropdown should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView<'a> {
    /// Deactivate the dropdown. Its content is left as-is.
    Hidden,
    /// A single, non-clickable empty-state row.
    NoResults(&'a str),
    /// One row per match, in index order.
    Entries(&'a [ResultEntry]),
}

/// The page pieces search writes to.
///
/// `H` is the host's card handle, the same one stored in the index.
pub trait SearchSurface<H> {
    fn set_card_visible(&mut self, card: &H, visible: bool);

    /// Replaces the dropdown content and toggles its "active" state.
    fn render_results(&mut self, view: &ResultsView<'_>);

    fn clear_input(&mut self);

    /// Smooth, centered scroll to `card`.
    fn scroll_to(&mut self, card: &H);
}

#[derive(Debug, Clone)]
pub struct SearchEngine<H> {
    index: SearchIndex<H>,
    mode: MatchMode,
    no_results: String,
    pub(crate) last: MatchSet,
}

impl<H> SearchEngine<H> {
    pub fn new(index: SearchIndex<H>, mode: MatchMode, no_results: impl Into<String>) -> Self {
        Self {
            index,
            mode,
            no_results: no_results.into(),
            last: MatchSet::All,
        }
    }

    pub fn from_config(index: SearchIndex<H>, config: &EnhancerConfig) -> Self {
        Self::new(
            index,
            config.search.match_mode,
            config.messages.no_results.clone(),
        )
    }

    pub fn index(&self) -> &SearchIndex<H> {
        &self.index
    }

    /// The filter currently applied to the page.
    pub fn last(&self) -> &MatchSet {
        &self.last
    }

    /// Runs `query` and applies the result to `surface`.
    ///
    /// Every card's visibility is written on every call, so the page always
    /// reflects exactly this query. Zero matches hides every card and shows
    /// the empty-state row.
    pub fn search<S>(&mut self, surface: &mut S, query: &str) -> &MatchSet
    where
        S: SearchSurface<H> + ?Sized,
    {
        let set = self.index.matches(query, self.mode);
        tracing::debug!(query, matches = ?set.match_count(), "search");

        match &set {
            MatchSet::All => surface.render_results(&ResultsView::Hidden),
            MatchSet::Filtered { indices, .. } if indices.is_empty() => {
                surface.render_results(&ResultsView::NoResults(&self.no_results))
            }
            MatchSet::Filtered { .. } => {
                let entries = self.index.entries(&set);
                surface.render_results(&ResultsView::Entries(&entries));
            }
        }
        self.apply_visibility(surface, &set);
        self.last = set;
        &self.last
    }

    /// Drops any filter: all cards visible, dropdown hidden.
    pub fn reset<S>(&mut self, surface: &mut S)
    where
        S: SearchSurface<H> + ?Sized,
    {
        surface.render_results(&ResultsView::Hidden);
        self.apply_visibility(surface, &MatchSet::All);
        self.last = MatchSet::All;
    }

    /// Swaps in a freshly built index and re-applies the last query's card
    /// visibility to it. The results dropdown is left untouched.
    pub fn rebuild<S>(&mut self, surface: &mut S, index: SearchIndex<H>)
    where
        S: SearchSurface<H> + ?Sized,
    {
        tracing::debug!(cards = index.len(), "search index rebuilt");
        self.index = index;
        let set = match self.last.query() {
            Some(query) => self.index.matches(query, self.mode),
            None => MatchSet::All,
        };
        self.apply_visibility(surface, &set);
        self.last = set;
    }

    pub(crate) fn apply_visibility<S>(&self, surface: &mut S, set: &MatchSet)
    where
        S: SearchSurface<H> + ?Sized,
    {
        for (i, record) in self.index.records().iter().enumerate() {
            surface.set_card_visible(&record.element, set.is_visible(i));
        }
    }
}
