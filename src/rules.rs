use std::fmt;
use std::ops::Not;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// White prefers high scores, Black low ones.
    pub fn is_maximizing(self) -> bool {
        self == Side::White
    }
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    King,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    // Material is summed in this order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::King,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Stalemate,
    InsufficientMaterial,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Decisive { winner: Side },
    Draw(DrawKind),
}

impl Outcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Decisive { winner } => Some(*winner),
            Outcome::Draw(_) => None,
        }
    }
}

/// The rules-engine seam. Everything the search knows about the game comes
/// through this trait; implementors own move generation and draw detection.
///
/// `make_move` must leave `self` untouched and hand back an independent
/// position, so sibling branches of the search never observe each other.
pub trait Position: fmt::Display + Sized {
    type Move: Clone + fmt::Debug;
    type Square: Copy + Eq;

    fn side_to_move(&self) -> Side;

    /// `None` while the game is still going.
    fn outcome(&self) -> Option<Outcome>;

    fn legal_moves(&self) -> Vec<Self::Move>;

    fn make_move(&self, mv: &Self::Move) -> Self;

    fn pieces(&self, side: Side, kind: PieceKind) -> Vec<Self::Square>;

    /// Squares attacked by the piece on `square`, empty if there is none.
    fn attacks(&self, square: Self::Square) -> Vec<Self::Square>;

    fn side_at(&self, square: Self::Square) -> Option<Side>;

    fn king_square(&self, side: Side) -> Option<Self::Square>;
}
