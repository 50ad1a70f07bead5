#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lookahead_chess_engine::{Outcome, PieceKind, Position, Side};

pub fn init_logging() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
}

fn side_for_ply(ply: u32) -> Side {
    if ply % 2 == 0 { Side::White } else { Side::Black }
}

/// Records which ply each rules-engine call came from.
#[derive(Default, Debug)]
pub struct CallLog {
    pub legal_moves: RefCell<Vec<u32>>,
    pub make_move: RefCell<Vec<u32>>,
}

impl CallLog {
    pub fn legal_moves_at(&self, ply: u32) -> usize {
        self.legal_moves.borrow().iter().filter(|&&p| p == ply).count()
    }

    pub fn make_move_at(&self, ply: u32) -> usize {
        self.make_move.borrow().iter().filter(|&&p| p == ply).count()
    }
}

/// A game tree where every node has the same number of moves and every
/// position scores zero.
#[derive(Clone)]
pub struct UniformTree {
    pub ply: u32,
    pub branching: usize,
    pub log: Rc<CallLog>,
}

impl UniformTree {
    pub fn new(branching: usize) -> Self {
        Self { ply: 0, branching, log: Rc::new(CallLog::default()) }
    }
}

impl fmt::Display for UniformTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "uniform tree at ply {}", self.ply)
    }
}

impl Position for UniformTree {
    type Move = usize;
    type Square = u8;

    fn side_to_move(&self) -> Side {
        side_for_ply(self.ply)
    }

    fn outcome(&self) -> Option<Outcome> {
        None
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.log.legal_moves.borrow_mut().push(self.ply);
        (0..self.branching).collect()
    }

    fn make_move(&self, _mv: &usize) -> Self {
        self.log.make_move.borrow_mut().push(self.ply);
        Self { ply: self.ply + 1, branching: self.branching, log: Rc::clone(&self.log) }
    }

    fn pieces(&self, _side: Side, _kind: PieceKind) -> Vec<u8> {
        Vec::new()
    }

    fn attacks(&self, _square: u8) -> Vec<u8> {
        Vec::new()
    }

    fn side_at(&self, _square: u8) -> Option<Side> {
        None
    }

    fn king_square(&self, _side: Side) -> Option<u8> {
        None
    }
}

/// A hand-built game tree. A node's static score is its white pawn count
/// minus its black pawn count.
pub struct Node {
    pub name: &'static str,
    pub white_pawns: usize,
    pub black_pawns: usize,
    pub outcome: Option<Outcome>,
    pub children: Vec<Rc<Node>>,
}

pub fn leaf(name: &'static str, white_pawns: usize, black_pawns: usize) -> Rc<Node> {
    Rc::new(Node { name, white_pawns, black_pawns, outcome: None, children: Vec::new() })
}

pub fn branch(name: &'static str, children: Vec<Rc<Node>>) -> Rc<Node> {
    node(name, 0, 0, children)
}

pub fn node(name: &'static str, white_pawns: usize, black_pawns: usize, children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node { name, white_pawns, black_pawns, outcome: None, children })
}

pub fn terminal(name: &'static str, outcome: Outcome) -> Rc<Node> {
    Rc::new(Node { name, white_pawns: 0, black_pawns: 0, outcome: Some(outcome), children: Vec::new() })
}

#[derive(Clone)]
pub struct Scripted {
    pub node: Rc<Node>,
    pub ply: u32,
}

impl Scripted {
    pub fn root(node: Rc<Node>) -> Self {
        Self { node, ply: 0 }
    }

    /// Root with Black to move.
    pub fn black_root(node: Rc<Node>) -> Self {
        Self { node, ply: 1 }
    }
}

impl fmt::Display for Scripted {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "node {}", self.node.name)
    }
}

impl Position for Scripted {
    type Move = usize;
    type Square = u8;

    fn side_to_move(&self) -> Side {
        side_for_ply(self.ply)
    }

    fn outcome(&self) -> Option<Outcome> {
        self.node.outcome
    }

    fn legal_moves(&self) -> Vec<usize> {
        (0..self.node.children.len()).collect()
    }

    fn make_move(&self, mv: &usize) -> Self {
        Self { node: Rc::clone(&self.node.children[*mv]), ply: self.ply + 1 }
    }

    fn pieces(&self, side: Side, kind: PieceKind) -> Vec<u8> {
        match (side, kind) {
            (Side::White, PieceKind::Pawn) => vec![0; self.node.white_pawns],
            (Side::Black, PieceKind::Pawn) => vec![0; self.node.black_pawns],
            _ => Vec::new(),
        }
    }

    fn attacks(&self, _square: u8) -> Vec<u8> {
        Vec::new()
    }

    fn side_at(&self, _square: u8) -> Option<Side> {
        None
    }

    fn king_square(&self, _side: Side) -> Option<u8> {
        None
    }
}
