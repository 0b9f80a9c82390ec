//! Duplex print pagination.
//!
//! Cards are laid out `capacity` to a sheet: one page of fronts followed by one page of
//! backs. Slot `i` of the backs page holds the answer to slot `i` of the fronts page, so a
//! sheet printed double-sided and flipped on its long edge lines every question up with its
//! answer. Every page reserves all `capacity` bands even when fewer cards remain.

use std::num::NonZeroUsize;

use log::debug;
use nonzero_ext::nonzero;

use crate::deck::types::Flashcard;
use crate::error::{Error, Result};
use crate::render::card::{render_back, render_front, BackView, FrontView, Medium};

/// Cards per printed page.
pub const PAGE_CAPACITY: usize = 3;

/// US letter, portrait.
pub const LETTER_WIDTH_MM: f64 = 215.9;
pub const LETTER_HEIGHT_MM: f64 = 279.4;

pub fn default_capacity() -> NonZeroUsize {
    nonzero!(PAGE_CAPACITY)
}

/// Parse a user-supplied capacity, rejecting zero.
pub fn capacity_from(value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or(Error::InvalidCapacity)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSide {
    Fronts,
    Backs,
}

/// One physical page of uniformly sized slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub side: PageSide,
    /// Always `capacity` long; trailing `None`s are blank bands.
    pub slots: Vec<Option<T>>,
    /// Hard page break after this page.
    pub break_after: bool,
}

impl<T> Page<T> {
    fn new(side: PageSide, items: impl IntoIterator<Item = T>, capacity: NonZeroUsize) -> Self {
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        slots.resize_with(capacity.get(), || None);
        Self {
            side,
            slots,
            break_after: true,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a card.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Height of one band; the same for every page of a given capacity.
    pub fn slot_height_mm(&self) -> f64 {
        LETTER_HEIGHT_MM / self.capacity() as f64
    }
}

/// One duplex sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePair {
    pub fronts: Page<FrontView>,
    pub backs: Page<BackView>,
}

/// Split `cards` into page pairs of at most `capacity` cards, keeping their order.
pub fn paginate(cards: &[Flashcard], capacity: NonZeroUsize) -> Vec<PagePair> {
    let mut pairs: Vec<PagePair> = cards
        .chunks(capacity.get())
        .map(|chunk| PagePair {
            fronts: Page::new(PageSide::Fronts, chunk.iter().map(render_front), capacity),
            backs: Page::new(
                PageSide::Backs,
                chunk.iter().map(|card| render_back(card, Medium::Print)),
                capacity,
            ),
        })
        .collect();

    if let Some(last) = pairs.last_mut() {
        last.backs.break_after = false;
    }

    debug!(
        "Paginated {} cards into {} sheets ({} per page)",
        cards.len(),
        pairs.len(),
        capacity
    );
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::types::Side;

    fn cards(n: u32) -> Vec<Flashcard> {
        (1..=n)
            .map(|id| {
                Flashcard::new(
                    id,
                    format!("comment {}", id),
                    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
                    None,
                    id,
                    if id % 2 == 0 { Side::White } else { Side::Black },
                )
            })
            .collect()
    }

    fn fill_pattern(pairs: &[PagePair]) -> Vec<usize> {
        pairs.iter().map(|p| p.fronts.filled()).collect()
    }

    fn card_ids(pair: &PagePair) -> Vec<u32> {
        pair.fronts.slots.iter().flatten().map(|f| f.card_id).collect()
    }

    #[test]
    fn empty_deck_has_no_pages() {
        assert!(paginate(&[], default_capacity()).is_empty());
    }

    #[test]
    fn up_to_three_cards_fit_one_sheet() {
        for n in 1..=3 {
            let pairs = paginate(&cards(n), default_capacity());
            assert_eq!(pairs.len(), 1, "{} cards", n);
            let pair = &pairs[0];
            assert_eq!(pair.fronts.capacity(), 3);
            assert_eq!(pair.backs.capacity(), 3);
            assert_eq!(pair.fronts.filled(), n as usize);
            assert_eq!(pair.backs.filled(), n as usize);
            assert!(pair.fronts.slots[n as usize..].iter().all(Option::is_none));
            assert!(pair.backs.slots[n as usize..].iter().all(Option::is_none));
        }
    }

    #[test]
    fn four_cards_split_three_one() {
        assert_eq!(fill_pattern(&paginate(&cards(4), default_capacity())), vec![3, 1]);
    }

    #[test]
    fn seven_cards_split_three_three_one() {
        let pairs = paginate(&cards(7), default_capacity());
        assert_eq!(fill_pattern(&pairs), vec![3, 3, 1]);
        assert_eq!(card_ids(&pairs[2]), vec![7]);
    }

    #[test]
    fn order_is_preserved() {
        let pairs = paginate(&cards(8), default_capacity());
        let ids: Vec<u32> = pairs.iter().flat_map(card_ids).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn backs_align_with_fronts() {
        for pair in paginate(&cards(10), default_capacity()) {
            for (front, back) in pair.fronts.slots.iter().zip(&pair.backs.slots) {
                match (front, back) {
                    (Some(f), Some(b)) => assert_eq!(f.card_id, b.card_id),
                    (None, None) => {}
                    _ => panic!("front and back slots disagree"),
                }
            }
        }
    }

    #[test]
    fn page_breaks_everywhere_but_the_end() {
        let pairs = paginate(&cards(5), default_capacity());
        assert!(pairs[0].fronts.break_after);
        assert!(pairs[0].backs.break_after);
        assert!(pairs[1].fronts.break_after);
        assert!(!pairs[1].backs.break_after);

        let single = paginate(&cards(1), default_capacity());
        assert!(single[0].fronts.break_after);
        assert!(!single[0].backs.break_after);
    }

    #[test]
    fn slot_geometry_is_uniform() {
        let pairs = paginate(&cards(4), default_capacity());
        let full = pairs[0].fronts.slot_height_mm();
        assert_eq!(pairs[1].fronts.slot_height_mm(), full);
        assert_eq!(pairs[1].backs.slot_height_mm(), full);
        assert!((full - LETTER_HEIGHT_MM / 3.0).abs() < 1e-9);
    }

    #[test]
    fn backs_use_print_placeholder() {
        let pairs = paginate(&cards(1), default_capacity());
        let back = pairs[0].backs.slots[0].as_ref().unwrap();
        assert_eq!(back.variations_text, "No variations recorded for this position.");
        assert_eq!(pairs[0].backs.side, PageSide::Backs);
    }

    #[test]
    fn custom_capacity() {
        let pairs = paginate(&cards(5), capacity_from(2).unwrap());
        assert_eq!(fill_pattern(&pairs), vec![2, 2, 1]);
        assert!(matches!(capacity_from(0), Err(Error::InvalidCapacity)));
    }
}
