#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A non-terminal position produced no legal moves. The rules engine
    /// broke its contract; the suggestion is aborted.
    #[error("no candidate moves at a non-terminal position: {position}")]
    NoCandidates { position: String },

    #[error("invalid search budget (depth {depth}, breadth {breadth}): {reason}")]
    InvalidBudget {
        depth: i64,
        breadth: i64,
        reason: &'static str,
    },

    #[error("invalid search config: {0}")]
    Config(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },
}
