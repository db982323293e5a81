use thiserror::Error;

/// Errors of constructing and analysing bimatrix games.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameError{
    /// Payoff matrix must have at least one row and one column.
    #[error("Payoff matrix has no entries (shape: {rows:}x{cols:})")]
    EmptyMatrix{
        rows: usize,
        cols: usize,
    },
    /// Rows of literal matrix have different lengths.
    #[error("Row {row:} has {found:} entries, expected {expected:}")]
    RaggedRows{
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Matrices of both players must have identical shape.
    #[error("Payoff matrices have different shapes: row player {row:?}, column player {column:?}")]
    ShapeMismatch{
        row: (usize, usize),
        column: (usize, usize),
    },
    /// Strategy length does not match number of actions of player.
    #[error("Strategy has {found:} entries, expected {expected:}. {context:}")]
    StrategyDimension{
        expected: usize,
        found: usize,
        context: String,
    },
    #[error("Value can't be probability: {0}")]
    NotAProbability(f64),
    #[error("Probabilities sum to {sum:} instead of 1")]
    NotADistribution{
        sum: f64,
    },
    /// Label for Lemke-Howson must be in range `0..rows+cols`.
    #[error("Label {label:} is out of range (number of labels: {limit:})")]
    InvalidLabel{
        label: usize,
        limit: usize,
    },
    #[error("Degenerate game: {context:}")]
    Degenerate{
        context: String,
    },
    #[error("Pure action {index:} out of range for {actions:} actions")]
    ActionOutOfRange{
        index: usize,
        actions: usize,
    },
}
