//! Card sizing policy for the bento feed grid.
//!
//! The size-to-span table below is the single source of truth; no other
//! module may restate the grid numbers. Posts declare a [`CardSize`] and the
//! feed derives its [`LayoutSpan`] and visual treatment from here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Presentation size class a post declares for the feed grid.
///
/// Stored as lowercase text; unknown or missing stored values degrade to
/// [`CardSize::Standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    /// Default single-cell card.
    #[default]
    Standard,
    /// Double-width, double-height lead card.
    Hero,
    /// Double-width card.
    Wide,
    /// Single-cell card rendered with an icon instead of an image.
    Square,
}

/// Grid footprint of a card on the 4-column feed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSpan {
    /// Number of grid columns the card occupies.
    pub columns: u8,
    /// Number of grid rows the card occupies.
    pub rows: u8,
}

impl CardSize {
    /// Lowercase storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hero => "hero",
            Self::Wide => "wide",
            Self::Square => "square",
        }
    }

    /// Parse a stored value, degrading unknown sizes to [`CardSize::Standard`].
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Parse a value strictly, rejecting unknown sizes. Admin input goes
    /// through here; only already-stored values get the degrading parse.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(Self::Standard),
            "hero" => Some(Self::Hero),
            "wide" => Some(Self::Wide),
            "square" => Some(Self::Square),
            _ => None,
        }
    }

    /// Grid footprint for this size.
    #[must_use]
    pub fn span(self) -> LayoutSpan {
        match self {
            Self::Hero => LayoutSpan { columns: 2, rows: 2 },
            Self::Wide => LayoutSpan { columns: 2, rows: 1 },
            Self::Square | Self::Standard => LayoutSpan { columns: 1, rows: 1 },
        }
    }

    /// Whether the card renders a centre-anchored icon instead of its image.
    #[must_use]
    pub fn shows_icon(self) -> bool {
        matches!(self, Self::Square)
    }
}

#[cfg(test)]
mod tests {
    //! Pins the size table; the feed and admin surfaces both rely on it.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(CardSize::Hero, 2, 2)]
    #[case(CardSize::Wide, 2, 1)]
    #[case(CardSize::Square, 1, 1)]
    #[case(CardSize::Standard, 1, 1)]
    fn spans_match_the_grid_table(#[case] size: CardSize, #[case] columns: u8, #[case] rows: u8) {
        assert_eq!(size.span(), LayoutSpan { columns, rows });
    }

    #[rstest]
    fn only_square_cards_show_icons() {
        assert!(CardSize::Square.shows_icon());
        assert!(!CardSize::Hero.shows_icon());
        assert!(!CardSize::Wide.shows_icon());
        assert!(!CardSize::Standard.shows_icon());
    }

    #[rstest]
    #[case("hero", CardSize::Hero)]
    #[case("wide", CardSize::Wide)]
    #[case("square", CardSize::Square)]
    #[case("standard", CardSize::Standard)]
    #[case("", CardSize::Standard)]
    #[case("banner", CardSize::Standard)]
    fn stored_values_parse_with_standard_fallback(#[case] stored: &str, #[case] expected: CardSize) {
        assert_eq!(CardSize::from_stored(stored), expected);
    }

    #[rstest]
    fn storage_representation_round_trips() {
        for size in [CardSize::Standard, CardSize::Hero, CardSize::Wide, CardSize::Square] {
            assert_eq!(CardSize::from_stored(size.as_str()), size);
        }
    }
}
