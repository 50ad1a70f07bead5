use std::fmt;
use std::str::FromStr;
use chess::{BitBoard, BoardStatus, ChessMove, Color, MoveGen, Piece, Square, EMPTY};
use serde::ser::{Serialize, Serializer};
use serde::de::{Deserialize, Deserializer, Visitor};
use crate::error::BoardError;
use crate::rules::{DrawKind, Outcome, PieceKind, Position, Side};

pub type Move = ChessMove;

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

fn color(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

fn piece(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::King => Piece::King,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
    }
}

fn is_light(square: Square) -> bool {
    let index = square.to_index();
    (index / 8 + index % 8) % 2 == 1
}

/// Standard chess position backed by the `chess` crate's bitboards.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Board {
    inner: chess::Board,
}

impl Board {
    pub fn new() -> Self {
        Self { inner: chess::Board::default() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let inner = chess::Board::from_str(fen).map_err(|e| BoardError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{:?}", e),
        })?;
        Ok(Self { inner })
    }

    pub fn fen(&self) -> String {
        self.inner.to_string()
    }

    // bare kings, a single knight, or bishops that all stand on one square colour
    fn is_insufficient_material(&self) -> bool {
        let others = *self.inner.combined() & !*self.inner.pieces(Piece::King);
        let knights = *self.inner.pieces(Piece::Knight);
        let bishops = *self.inner.pieces(Piece::Bishop);
        if others == EMPTY {
            return true;
        }
        if others.popcnt() == 1 && others & knights != EMPTY {
            return true;
        }
        if others & !bishops != EMPTY {
            return false;
        }
        let mut colours = bishops.map(is_light);
        match colours.next() {
            Some(first) => colours.all(|light| light == first),
            None => false,
        }
    }

    fn attack_set(&self, square: Square) -> BitBoard {
        let (Some(kind), Some(owner)) = (self.inner.piece_on(square), self.inner.color_on(square)) else {
            return EMPTY;
        };
        let blockers = *self.inner.combined();
        match kind {
            Piece::Pawn => chess::get_pawn_attacks(square, owner, !EMPTY),
            Piece::Knight => chess::get_knight_moves(square),
            Piece::Bishop => chess::get_bishop_moves(square, blockers),
            Piece::Rook => chess::get_rook_moves(square, blockers),
            Piece::Queen => chess::get_bishop_moves(square, blockers) | chess::get_rook_moves(square, blockers),
            Piece::King => chess::get_king_moves(square),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}

impl Position for Board {
    type Move = ChessMove;
    type Square = Square;

    fn side_to_move(&self) -> Side {
        self.inner.side_to_move().into()
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.inner.status() {
            BoardStatus::Checkmate => Some(Outcome::Decisive { winner: !self.side_to_move() }),
            BoardStatus::Stalemate => Some(Outcome::Draw(DrawKind::Stalemate)),
            BoardStatus::Ongoing if self.is_insufficient_material() => {
                Some(Outcome::Draw(DrawKind::InsufficientMaterial))
            }
            BoardStatus::Ongoing => None,
        }
    }

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.inner).collect()
    }

    fn make_move(&self, mv: &ChessMove) -> Self {
        Self { inner: self.inner.make_move_new(*mv) }
    }

    fn pieces(&self, side: Side, kind: PieceKind) -> Vec<Square> {
        (*self.inner.pieces(piece(kind)) & *self.inner.color_combined(color(side))).collect()
    }

    fn attacks(&self, square: Square) -> Vec<Square> {
        self.attack_set(square).collect()
    }

    fn side_at(&self, square: Square) -> Option<Side> {
        self.inner.color_on(square).map(Side::from)
    }

    fn king_square(&self, side: Side) -> Option<Square> {
        let kings = *self.inner.pieces(Piece::King) & *self.inner.color_combined(color(side));
        kings.into_iter().next()
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(&self.fen())
    }
}

struct BoardVisitor;
impl<'de> Visitor<'de> for BoardVisitor {
    type Value = Board;
    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a FEN string")
    }
    fn visit_str<E>(self, fen: &str) -> Result<Board, E> where E: serde::de::Error {
        Board::from_fen(fen).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_str(BoardVisitor)
    }
}
