use crate::track::SlidePlacement;

/// One slide: an index and caller-owned content the engine never inspects.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Slide<C> {
    /// Slide index in `[0, slide_count)`.
    pub index: usize,
    /// Opaque renderable.
    pub content: C,
}

/// A slide paired with where it should be drawn this frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedSlide<'a, C> {
    /// The slide.
    pub slide: &'a Slide<C>,
    /// Its placement.
    pub placement: SlidePlacement,
}

/// Pair a deck with a track's placements by slide index.
///
/// Placements for indices outside the deck are skipped; so are slides without a placement
/// (an unmeasured track has none).
pub fn place<'a, C>(deck: &'a [Slide<C>], placements: &[SlidePlacement]) -> Vec<PlacedSlide<'a, C>> {
    placements
        .iter()
        .filter_map(|p| {
            deck.iter()
                .find(|s| s.index == p.index)
                .map(|slide| PlacedSlide {
                    slide,
                    placement: *p,
                })
        })
        .collect()
}
