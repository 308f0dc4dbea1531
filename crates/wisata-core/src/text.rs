// crates/wisata-core/src/text.rs

use serde::{Deserialize, Serialize};

/// How search queries are compared against card text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Plain Unicode lowercasing on both sides.
    #[default]
    Lowercase,
    /// Transliterate to ASCII first, then lowercase (`Sulawési` matches
    /// `sulawesi`).
    Folded,
}

impl MatchMode {
    /// Normalizes `s` into the comparison key for this mode.
    pub fn key(self, s: &str) -> String {
        match self {
            MatchMode::Lowercase => s.to_lowercase(),
            MatchMode::Folded => fold_key(s),
        }
    }
}

/// Convert a string into a folded key suitable for comparison.
///
/// Transliterates Unicode to ASCII with `deunicode`, then lowercases.
///
/// ```rust
/// use wisata_core::text::fold_key;
///
/// assert_eq!(fold_key("Nusa Penída"), "nusa penida");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Parses an optional attribute value into a finite `f64`.
///
/// Whitespace is trimmed; blanks, garbage and non-finite values give `None`.
pub fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Returns the trimmed value when it is non-blank.
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}
