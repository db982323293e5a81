use std::fmt::{Display, Formatter};
use crate::strategy::MixedStrategy;
use crate::util::format_decimal;

/// Pair of strategies, one for each player, returned by equilibrium solvers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equilibrium{
    pub row: MixedStrategy,
    pub column: MixedStrategy,
}

impl Equilibrium{
    pub fn new(row: MixedStrategy, column: MixedStrategy) -> Self{
        Self{row, column}
    }

    /// Checks if both players play single action.
    pub fn is_pure(&self, tolerance: f64) -> bool{
        self.row.pure_action(tolerance).is_some() && self.column.pure_action(tolerance).is_some()
    }

    /// Checks (within `tolerance`) if strategies of both players are entrywise equal.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool{
        fn close(a: &MixedStrategy, b: &MixedStrategy, tolerance: f64) -> bool{
            a.len() == b.len() && a.probabilities().iter()
                .zip(b.probabilities().iter())
                .all(|(x, y)| (x - y).abs() <= tolerance)
        }
        close(&self.row, &other.row, tolerance) && close(&self.column, &other.column, tolerance)
    }
}

impl Display for Equilibrium{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Expected payoffs of both players.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPair{
    pub row: f64,
    pub column: f64,
}

impl PayoffPair{
    pub fn new(row: f64, column: f64) -> Self{
        Self{row, column}
    }
}

impl Display for PayoffPair{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", format_decimal(self.row), format_decimal(self.column))
    }
}
