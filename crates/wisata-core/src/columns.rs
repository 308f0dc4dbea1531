// crates/wisata-core/src/columns.rs

//! # Layout columnizer
//!
//! Redistributes a flat card grid into `N` columns (card `i` goes to column
//! `i mod N`) and heads each column with a province-level overview map.
//! The host marks its container once the columns are installed, which makes
//! the whole operation idempotent.

use crate::config::Messages;
use crate::error::{Result, WisataError};
use crate::maps::{ColumnMap, MapProvider};
use crate::model::{CardRecord, CardSource};

/// A page region that can be rebuilt into columns.
pub trait ColumnHost {
    type Card: Clone;

    /// `true` once [`ColumnHost::install`] has run (the `columns-ready` mark).
    fn is_columnized(&self) -> bool;

    /// Current cards in document order.
    fn cards(&self) -> Vec<(Self::Card, CardSource)>;

    /// Replaces the container's children with `layout` and marks it.
    ///
    /// Cards are moved, never recreated.
    fn install(&mut self, layout: &ColumnLayout<Self::Card>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column<H> {
    pub index: usize,
    pub cards: Vec<H>,
    pub map: ColumnMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout<H> {
    pub columns: Vec<Column<H>>,
}

impl<H> ColumnLayout<H> {
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnizeOutcome {
    /// Columns were built and installed.
    Built { columns: usize, cards: usize },
    /// The container already carries the columns mark.
    AlreadyColumnized,
    /// Nothing to distribute.
    NoCards,
}

impl ColumnizeOutcome {
    /// Whether the page structure changed (and the search index is stale).
    pub fn changed_layout(&self) -> bool {
        matches!(self, ColumnizeOutcome::Built { .. })
    }
}

/// Computes the round-robin layout for `records` without touching a page.
pub fn plan_columns<H: Clone>(
    records: &[CardRecord<H>],
    column_count: usize,
    maps: &MapProvider,
    messages: &Messages,
) -> Result<ColumnLayout<H>> {
    if column_count == 0 {
        return Err(WisataError::InvalidColumnCount(column_count));
    }

    let mut buckets: Vec<Vec<&CardRecord<H>>> = vec![Vec::new(); column_count];
    for (i, record) in records.iter().enumerate() {
        buckets[i % column_count].push(record);
    }

    let columns = buckets
        .into_iter()
        .enumerate()
        .map(|(index, members)| Column {
            index,
            map: maps.column_map(members.first().copied(), messages),
            cards: members.into_iter().map(|r| r.element.clone()).collect(),
        })
        .collect();

    Ok(ColumnLayout { columns })
}

/// Rebuilds `host` into `column_count` columns.
///
/// Returns without touching the page when the host is already columnized
/// or holds no cards. A zero column count is rejected up front.
pub fn columnize<T>(
    host: &mut T,
    column_count: usize,
    maps: &MapProvider,
    messages: &Messages,
) -> Result<ColumnizeOutcome>
where
    T: ColumnHost + ?Sized,
{
    if column_count == 0 {
        return Err(WisataError::InvalidColumnCount(column_count));
    }
    if host.is_columnized() {
        tracing::debug!("columnize: container already columnized");
        return Ok(ColumnizeOutcome::AlreadyColumnized);
    }

    let records: Vec<CardRecord<T::Card>> = host
        .cards()
        .into_iter()
        .map(|(card, source)| CardRecord::from_source(card, &source))
        .collect();
    if records.is_empty() {
        return Ok(ColumnizeOutcome::NoCards);
    }

    let layout = plan_columns(&records, column_count, maps, messages)?;
    host.install(&layout);

    tracing::debug!(columns = column_count, cards = records.len(), "columnized");
    Ok(ColumnizeOutcome::Built {
        columns: column_count,
        cards: records.len(),
    })
}
