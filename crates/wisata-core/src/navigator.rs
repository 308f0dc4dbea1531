// crates/wisata-core/src/navigator.rs

use crate::index::MatchSet;
use crate::search::{ResultsView, SearchEngine, SearchSurface};

impl<H> SearchEngine<H> {
    /// Jumps to the card titled `title` and clears the search.
    ///
    /// On a hit the card is scrolled into view, the input emptied, the
    /// dropdown closed and every card made visible again. An unknown title
    /// leaves the page untouched and returns `false`.
    pub fn select_result<S>(&mut self, surface: &mut S, title: &str) -> bool
    where
        S: SearchSurface<H> + ?Sized,
    {
        let Some(record) = self.index().find_by_title(title) else {
            tracing::debug!(title, "select_result: no card with that title");
            return false;
        };

        surface.scroll_to(&record.element);
        surface.clear_input();
        surface.render_results(&ResultsView::Hidden);
        self.apply_visibility(surface, &MatchSet::All);
        self.last = MatchSet::All;
        true
    }
}
