use crate::rules::{Outcome, PieceKind, Position, Side};

pub const WIN_SCORE: f64 = 1000.0;
pub const DRAW_SCORE: f64 = 0.0;

const MOBILITY_WEIGHT: f64 = 0.1;
const KING_SAFETY_WEIGHT: f64 = 0.2;

/// Material value per piece kind. The king carries a weight too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceWeights {
    pub pawn: f64,
    pub king: f64,
    pub knight: f64,
    pub bishop: f64,
    pub rook: f64,
    pub queen: f64,
}

impl PieceWeights {
    pub fn weight(&self, kind: PieceKind) -> f64 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::King => self.king,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
        }
    }
}

impl Default for PieceWeights {
    fn default() -> Self {
        Self {
            pawn: 1.0,
            king: 2.5,
            knight: 3.0,
            bishop: 3.5,
            rook: 5.0,
            queen: 9.0,
        }
    }
}

/// Static evaluation, positive when White is better regardless of whose
/// turn it is.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    weights: PieceWeights,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn material_score<P: Position>(&self, position: &P, side: Side) -> f64 {
        let mut score = 0.0;
        for kind in PieceKind::ALL {
            let count = position.pieces(side, kind).len();
            score += count as f64 * self.weights.weight(kind);
        }
        score
    }

    pub fn mobility_score<P: Position>(&self, position: &P, side: Side) -> f64 {
        let attacked: usize = PieceKind::ALL
            .iter()
            .flat_map(|&kind| position.pieces(side, kind))
            .map(|square| position.attacks(square).len())
            .sum();
        attacked as f64 * MOBILITY_WEIGHT
    }

    /// Counts friendly pieces on the squares around the king.
    pub fn king_safety_score<P: Position>(&self, position: &P, side: Side) -> f64 {
        let Some(king) = position.king_square(side) else {
            return 0.0;
        };
        let defended = position
            .attacks(king)
            .into_iter()
            .filter(|&square| position.side_at(square) == Some(side))
            .count();
        defended as f64 * KING_SAFETY_WEIGHT
    }

    pub fn score<P: Position>(&self, position: &P) -> f64 {
        match position.outcome() {
            Some(outcome) => Self::terminal_score(outcome),
            None => self.static_score(position),
        }
    }

    pub(crate) fn terminal_score(outcome: Outcome) -> f64 {
        match outcome.winner() {
            Some(Side::White) => WIN_SCORE,
            Some(Side::Black) => -WIN_SCORE,
            None => DRAW_SCORE,
        }
    }

    fn static_score<P: Position>(&self, position: &P) -> f64 {
        let terms = [
            self.material_score(position, Side::White),
            -self.material_score(position, Side::Black),
            self.mobility_score(position, Side::White),
            -self.mobility_score(position, Side::Black),
            self.king_safety_score(position, Side::White),
            -self.king_safety_score(position, Side::Black),
        ];
        // summed left to right
        terms.iter().fold(0.0_f64, |acc, term| acc + *term)
    }
}
