use log::{debug, trace};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::rules::{DrawKind, Outcome, Position};

/// Anything that can propose a move for a position.
pub trait Engine<P: Position> {
    fn suggest(&self, position: &P, depth: i32, breadth: i32) -> Result<Option<P::Move>, SearchError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMove<M> {
    pub mv: M,
    pub score: f64,
}

/// Ordered moves from [`Searcher::generate_candidates`], consumed once.
pub struct Candidates<M>(std::vec::IntoIter<ScoredMove<M>>);

impl<M> Iterator for Candidates<M> {
    type Item = M;

    fn next(&mut self) -> Option<M> {
        self.0.next().map(|scored| scored.mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Remaining lookahead. Breadth halves on every ply; once it hits zero the
/// next ply is evaluated statically whatever depth was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    pub depth: u32,
    pub breadth: u32,
}

impl SearchBudget {
    pub fn new(depth: i32, breadth: i32) -> Result<Self, SearchError> {
        let invalid = |reason| SearchError::InvalidBudget {
            depth: depth.into(),
            breadth: breadth.into(),
            reason,
        };
        let depth_u = u32::try_from(depth).map_err(|_| invalid("depth must not be negative"))?;
        let breadth_u = u32::try_from(breadth).map_err(|_| invalid("breadth must not be negative"))?;
        Ok(Self { depth: depth_u, breadth: breadth_u })
    }

    pub fn child(self) -> Self {
        Self {
            depth: if self.breadth > 0 { self.depth.saturating_sub(1) } else { 0 },
            breadth: self.breadth / 2,
        }
    }

    pub fn candidate_limit(self) -> usize {
        self.breadth.max(1) as usize
    }
}

impl From<SearchConfig> for SearchBudget {
    fn from(config: SearchConfig) -> Self {
        Self { depth: config.depth, breadth: config.breadth }
    }
}

/// Breadth-pruned fixed-depth search over a [`Position`].
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    evaluator: Evaluator,
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { evaluator: Evaluator::new(), config }
    }

    /// Every legal move with the static score of the position it leads to,
    /// best first for the side to move. Equal scores keep move-generation
    /// order.
    pub fn scored_candidates<P: Position>(&self, position: &P) -> Vec<ScoredMove<P::Move>> {
        let mut scored: Vec<ScoredMove<P::Move>> = position
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let score = self.evaluator.score(&position.make_move(&mv));
                ScoredMove { mv, score }
            })
            .collect();
        if position.side_to_move().is_maximizing() {
            scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        } else {
            scored.sort_by(|a, b| a.score.total_cmp(&b.score));
        }
        scored
    }

    /// The full ordered candidate list. `_k` is the number of candidates the
    /// caller intends to explore; truncating is left to the caller.
    pub fn generate_candidates<P: Position>(&self, position: &P, _k: usize) -> Candidates<P::Move> {
        Candidates(self.scored_candidates(position).into_iter())
    }

    pub fn eval<P: Position>(&self, position: &P, depth: i32, breadth: i32) -> Result<f64, SearchError> {
        self.eval_budget(position, SearchBudget::new(depth, breadth)?)
    }

    fn eval_budget<P: Position>(&self, position: &P, budget: SearchBudget) -> Result<f64, SearchError> {
        if let Some(outcome) = position.outcome() {
            return Ok(Evaluator::terminal_score(outcome));
        }
        if budget.depth == 0 {
            return Ok(self.evaluator.score(position));
        }

        let child_budget = budget.child();
        let mut evals = Vec::new();
        for mv in self.generate_candidates(position, budget.candidate_limit()) {
            let next = position.make_move(&mv);
            evals.push(self.eval_budget(&next, child_budget)?);
        }
        extremum(position, evals.into_iter()).ok_or_else(|| no_candidates(position))
    }

    /// Like [`Engine::suggest`] but also returns the evaluation of the
    /// chosen move.
    pub fn suggest_scored<P: Position>(
        &self,
        position: &P,
        depth: i32,
        breadth: i32,
    ) -> Result<Option<ScoredMove<P::Move>>, SearchError> {
        self.suggest_within(position, SearchBudget::new(depth, breadth)?)
    }

    fn suggest_within<P: Position>(
        &self,
        position: &P,
        budget: SearchBudget,
    ) -> Result<Option<ScoredMove<P::Move>>, SearchError> {
        if budget.breadth == 0 {
            return Err(SearchError::InvalidBudget {
                depth: budget.depth.into(),
                breadth: 0,
                reason: "breadth must be at least 1 to suggest a move",
            });
        }

        match position.outcome() {
            Some(Outcome::Decisive { winner }) => {
                debug!("game is over, {:?} won", winner);
                return Ok(None);
            }
            Some(Outcome::Draw(DrawKind::Stalemate)) => {
                debug!("stalemate");
                return Ok(None);
            }
            _ => {}
        }

        let width = budget.breadth as usize;
        let maximizing = position.side_to_move().is_maximizing();
        let mut best: Option<ScoredMove<P::Move>> = None;
        for mv in self.generate_candidates(position, width).take(width) {
            // root children keep the full budget
            let score = self.eval_budget(&position.make_move(&mv), budget)?;
            trace!("candidate {:?} scored {}", mv, score);
            let improves = match &best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(ScoredMove { mv, score });
            }
        }

        match best {
            Some(scored) => {
                debug!("suggesting {:?} ({})", scored.mv, scored.score);
                Ok(Some(scored))
            }
            None => Err(no_candidates(position)),
        }
    }

    /// Suggests with the budget this searcher was configured with.
    pub fn suggest_default<P: Position>(&self, position: &P) -> Result<Option<P::Move>, SearchError> {
        let scored = self.suggest_within(position, SearchBudget::from(self.config))?;
        Ok(scored.map(|scored| scored.mv))
    }
}

impl<P: Position> Engine<P> for Searcher {
    fn suggest(&self, position: &P, depth: i32, breadth: i32) -> Result<Option<P::Move>, SearchError> {
        Ok(self.suggest_scored(position, depth, breadth)?.map(|scored| scored.mv))
    }
}

fn extremum<P: Position>(position: &P, evals: impl Iterator<Item = f64>) -> Option<f64> {
    if position.side_to_move().is_maximizing() {
        evals.reduce(f64::max)
    } else {
        evals.reduce(f64::min)
    }
}

fn no_candidates<P: Position>(position: &P) -> SearchError {
    SearchError::NoCandidates { position: position.to_string() }
}
