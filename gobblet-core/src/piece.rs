//! Pieces and the single gobble slot each one carries.

use serde::{Deserialize, Serialize};

use crate::{Color, Size};

/// Stable identity of a piece, assigned once when a player's supply is created.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

/// A game piece.
///
/// Size, color and id never change. The piece owns whatever it is currently covering; that
/// covered piece is only reachable through this one until [`Piece::reveal`] hands it back.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    size: Size,
    color: Color,
    gobbled: Option<Box<Piece>>,
}

impl Piece {
    /// Create a piece that covers nothing.
    pub fn new(id: PieceId, size: Size, color: Color) -> Piece {
        Piece {
            id,
            size,
            color,
            gobbled: None,
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The piece directly underneath this one, if any.
    #[inline]
    pub fn gobbled(&self) -> Option<&Piece> {
        self.gobbled.as_deref()
    }

    /// Check if this piece may be put on top of `other`.
    ///
    /// An empty target always accepts; otherwise the size must be strictly greater.
    #[inline]
    pub fn can_gobble(&self, other: Option<&Piece>) -> bool {
        match other {
            None => true,
            Some(other) => self.size.can_gobble(other.size),
        }
    }

    /// Cover `other`, returning whatever was covered before.
    ///
    /// The board only gobbles with an empty slot, so the return value is `None` there. Callers
    /// that do get a piece back are responsible for putting it somewhere.
    pub fn gobble(&mut self, other: Piece) -> Option<Piece> {
        self.gobbled.replace(Box::new(other)).map(|b| *b)
    }

    /// Detach and return the covered piece, leaving the slot empty.
    pub fn reveal(&mut self) -> Option<Piece> {
        self.gobbled.take().map(|b| *b)
    }

    /// Walk the stack from this piece down to the bottom.
    pub fn stack(&self) -> impl Iterator<Item = &Piece> {
        std::iter::successors(Some(self), |p| p.gobbled())
    }

    /// Number of pieces in the stack headed by this piece (at least 1).
    pub fn depth(&self) -> usize {
        self.stack().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(id: u8, size: Size, color: Color) -> Piece {
        Piece::new(PieceId(id), size, color)
    }

    #[test]
    fn test_can_gobble_matches_size_order() {
        for a in Size::all() {
            for b in Size::all() {
                let big = piece(0, a, Color::Red);
                let small = piece(1, b, Color::Yellow);
                assert_eq!(big.can_gobble(Some(&small)), a > b, "{:?} over {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_can_gobble_empty() {
        assert!(piece(0, Size::Small, Color::Red).can_gobble(None));
    }

    #[test]
    fn test_gobble_and_reveal() {
        let mut large = piece(0, Size::Large, Color::Red);
        let small = piece(10, Size::Small, Color::Yellow);

        assert_eq!(large.gobble(small.clone()), None);
        assert_eq!(large.gobbled(), Some(&small));
        assert_eq!(large.depth(), 2);

        assert_eq!(large.reveal(), Some(small));
        assert_eq!(large.gobbled(), None);
    }

    #[test]
    fn test_reveal_empty_is_noop() {
        let mut p = piece(3, Size::Medium, Color::Red);
        let before = p.clone();
        assert_eq!(p.reveal(), None);
        assert_eq!(p, before);
        assert_eq!(p.reveal(), None);
    }

    #[test]
    fn test_gobble_returns_displaced() {
        let mut large = piece(0, Size::Large, Color::Red);
        large.gobble(piece(10, Size::Small, Color::Yellow));
        let displaced = large.gobble(piece(8, Size::Medium, Color::Yellow));
        assert_eq!(displaced.map(|p| p.id()), Some(PieceId(10)));
        assert_eq!(large.gobbled().map(|p| p.id()), Some(PieceId(8)));
    }

    #[test]
    fn test_stack_walks_top_down() {
        let mut medium = piece(8, Size::Medium, Color::Yellow);
        medium.gobble(piece(4, Size::Small, Color::Red));
        let mut large = piece(0, Size::Large, Color::Red);
        large.gobble(medium);

        let ids: Vec<_> = large.stack().map(|p| p.id()).collect();
        assert_eq!(ids, vec![PieceId(0), PieceId(8), PieceId(4)]);
        assert_eq!(large.depth(), 3);
    }
}
