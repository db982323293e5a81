use serde::{Deserialize, Serialize};
use agon_core::error::GameError;
use agon_core::game::Game;
use agon_core::matrix::PayoffMatrix;

/// Ways of deriving a strictly competitive game from a single base matrix.
/// The two encodings are not equivalent in general.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitiveEncoding{
    /// Row player keeps the base matrix, column player gets its negation: `(A, -A)`.
    Negation,
    /// Row player gets the negated base, column player its transpose: `(-A, (-A)ᵀ)`.
    NegatedTranspose,
}

impl CompetitiveEncoding{

    pub fn row_matrix(&self, base: &PayoffMatrix) -> PayoffMatrix{
        match self{
            CompetitiveEncoding::Negation => base.clone(),
            CompetitiveEncoding::NegatedTranspose => base.negated(),
        }
    }

    pub fn column_matrix(&self, base: &PayoffMatrix) -> PayoffMatrix{
        match self{
            CompetitiveEncoding::Negation => base.negated(),
            CompetitiveEncoding::NegatedTranspose => base.negated().transposed(),
        }
    }

    /// Builds game from base matrix.
    /// [`NegatedTranspose`](CompetitiveEncoding::NegatedTranspose) requires square matrix,
    /// otherwise shapes of players' matrices differ.
    /// ```
    /// use agon_classic::encoding::CompetitiveEncoding;
    /// use agon_core::matrix::PayoffMatrix;
    /// let base = PayoffMatrix::from_array([[1, 10], [0, 5]]);
    /// let game = CompetitiveEncoding::NegatedTranspose.encode(&base).unwrap();
    /// assert_eq!(format!("{}", game.row_matrix()), "[[-1, -10], [0, -5]]");
    /// assert_eq!(format!("{}", game.column_matrix()), "[[-1, 0], [-10, -5]]");
    /// ```
    pub fn encode(&self, base: &PayoffMatrix) -> Result<Game, GameError>{
        log::debug!("Encoding base matrix {} with {:?}", base, self);
        Game::new(self.row_matrix(base), self.column_matrix(base))
    }
}

#[cfg(test)]
mod tests{
    use agon_core::error::GameError;
    use agon_core::matrix::PayoffMatrix;
    use crate::encoding::CompetitiveEncoding;

    fn bases() -> Vec<PayoffMatrix>{
        vec![
            PayoffMatrix::from_array([[1, 10], [0, 5]]),
            PayoffMatrix::from_array([[10, 4], [12, 0]]),
            PayoffMatrix::from_array([[3, -2, 7], [0, 1, -4], [5, 5, 2]]),
        ]
    }

    #[test]
    fn negation_negates_every_entry(){
        for base in bases(){
            let game = CompetitiveEncoding::Negation.encode(&base).unwrap();
            let (rows, cols) = base.shape();
            for i in 0..rows{
                for j in 0..cols{
                    assert_eq!(game.row_matrix()[(i, j)], base[(i, j)]);
                    assert_eq!(game.column_matrix()[(i, j)], -base[(i, j)]);
                }
            }
            assert!(game.is_zero_sum(0.0));
        }
    }

    #[test]
    fn negated_transpose_swaps_indices(){
        for base in bases(){
            let game = CompetitiveEncoding::NegatedTranspose.encode(&base).unwrap();
            let (rows, cols) = base.shape();
            for i in 0..rows{
                for j in 0..cols{
                    assert_eq!(game.row_matrix()[(i, j)], -base[(i, j)]);
                    assert_eq!(game.column_matrix()[(i, j)], -base[(j, i)]);
                }
            }
        }
    }

    #[test]
    fn encodings_differ(){
        let base = PayoffMatrix::from_array([[1, 10], [0, 5]]);
        assert_ne!(
            CompetitiveEncoding::Negation.encode(&base).unwrap(),
            CompetitiveEncoding::NegatedTranspose.encode(&base).unwrap()
        );
    }

    #[test]
    fn negated_transpose_needs_square_base(){
        let base = PayoffMatrix::from_array([[1, 2, 3], [4, 5, 6]]);
        assert!(CompetitiveEncoding::Negation.encode(&base).is_ok());
        assert_eq!(
            CompetitiveEncoding::NegatedTranspose.encode(&base),
            Err(GameError::ShapeMismatch { row: (2, 3), column: (3, 2) })
        );
    }
}
