use std::fmt::{Display, Formatter};
use std::ops::Index;
use ndarray::{Array1, Array2};
use crate::error::GameError;
use crate::payoff::Payoff;
use crate::strategy::MixedStrategy;
use crate::util::format_vector;

/// Dense payoff matrix of one player.
/// Entry `(i, j)` is the payoff when row player plays action `i` and column player
/// plays action `j`.
///
/// ```
/// use agon_core::matrix::PayoffMatrix;
/// let m = PayoffMatrix::from_array([[10, 4], [12, 0]]);
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m[(1, 0)], 12.0);
/// assert_eq!(m.negated()[(1, 0)], -12.0);
/// assert_eq!(m.transposed()[(1, 0)], 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffMatrix{
    values: Array2<f64>,
}

impl PayoffMatrix{

    pub fn new(values: Array2<f64>) -> Result<Self, GameError>{
        let (rows, cols) = values.dim();
        if rows == 0 || cols == 0{
            return Err(GameError::EmptyMatrix { rows, cols });
        }
        Ok(Self{values})
    }

    /// Builds matrix from fixed size literal. Both dimensions must be positive.
    pub fn from_array<P: Payoff, const R: usize, const C: usize>(rows: [[P; C]; R]) -> Self{
        const { assert!(R > 0 && C > 0, "payoff matrix must have at least one row and one column") };
        Self{
            values: Array2::from_shape_fn((R, C), |(i, j)| rows[i][j].as_f64())
        }
    }

    /// Builds matrix from rows of possibly different lengths, rejecting ragged input.
    /// ```
    /// use agon_core::matrix::PayoffMatrix;
    /// use agon_core::error::GameError;
    /// let rows = vec![vec![1, 2, 3], vec![4, 5]];
    /// assert_eq!(PayoffMatrix::from_rows(&rows), Err(GameError::RaggedRows{row: 1, expected: 3, found: 2}));
    /// ```
    pub fn from_rows<P: Payoff, R: AsRef<[P]>>(rows: &[R]) -> Result<Self, GameError>{
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        for (i, row) in rows.iter().enumerate(){
            let found = row.as_ref().len();
            if found != expected{
                return Err(GameError::RaggedRows { row: i, expected, found });
            }
        }
        Self::new(Array2::from_shape_fn((rows.len(), expected), |(i, j)| rows[i].as_ref()[j].as_f64()))
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize){
        self.values.dim()
    }

    pub fn rows(&self) -> usize{
        self.values.nrows()
    }

    pub fn cols(&self) -> usize{
        self.values.ncols()
    }

    pub fn values(&self) -> &Array2<f64>{
        &self.values
    }

    pub fn min(&self) -> f64{
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Entrywise negation.
    pub fn negated(&self) -> Self{
        Self{
            values: self.values.mapv(|v| -v)
        }
    }

    pub fn transposed(&self) -> Self{
        Self{
            values: self.values.t().to_owned()
        }
    }

    /// Matrix with `shift` added to every entry.
    pub fn shifted(&self, shift: f64) -> Self{
        Self{
            values: self.values.mapv(|v| v + shift)
        }
    }

    /// Expected payoff of every row when the column player plays `column` (`M σc`).
    pub fn row_payoffs(&self, column: &MixedStrategy) -> Result<Array1<f64>, GameError>{
        check_dimension(self.cols(), column, "column strategy against payoff matrix")?;
        Ok(self.values.dot(column.probabilities()))
    }

    /// Expected payoff of every column when the row player plays `row` (`σrᵀ M`).
    pub fn column_payoffs(&self, row: &MixedStrategy) -> Result<Array1<f64>, GameError>{
        check_dimension(self.rows(), row, "row strategy against payoff matrix")?;
        Ok(row.probabilities().dot(&self.values))
    }

    /// Bilinear form `σrᵀ M σc`.
    pub fn bilinear(&self, row: &MixedStrategy, column: &MixedStrategy) -> Result<f64, GameError>{
        check_dimension(self.rows(), row, "row strategy against payoff matrix")?;
        Ok(row.probabilities().dot(&self.row_payoffs(column)?))
    }
}

fn check_dimension(expected: usize, strategy: &MixedStrategy, context: &str) -> Result<(), GameError>{
    if strategy.len() != expected{
        return Err(GameError::StrategyDimension {
            expected,
            found: strategy.len(),
            context: context.to_string(),
        })
    }
    Ok(())
}

impl Index<(usize, usize)> for PayoffMatrix{
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.values[[index.0, index.1]]
    }
}

impl Display for PayoffMatrix{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self.values.rows()
            .into_iter()
            .map(|r| format_vector(r.iter()))
            .collect();
        write!(f, "[{}]", rows.join(", "))
    }
}

#[cfg(test)]
mod tests{
    use ndarray::Array2;
    use crate::error::GameError;
    use crate::matrix::PayoffMatrix;
    use crate::strategy::MixedStrategy;

    #[test]
    fn empty_matrix_is_rejected(){
        assert_eq!(PayoffMatrix::new(Array2::zeros((0, 2))), Err(GameError::EmptyMatrix { rows: 0, cols: 2 }));
        let no_rows: Vec<Vec<i32>> = Vec::new();
        assert!(matches!(PayoffMatrix::from_rows(&no_rows), Err(GameError::EmptyMatrix {..})));
    }

    #[test]
    fn pure_pair_picks_entry(){
        let m = PayoffMatrix::from_array([[1, 10], [0, 5]]);
        for i in 0..2{
            for j in 0..2{
                let row = MixedStrategy::pure(2, i).unwrap();
                let col = MixedStrategy::pure(2, j).unwrap();
                assert_eq!(m.bilinear(&row, &col).unwrap(), m[(i, j)]);
            }
        }
    }

    #[test]
    fn bilinear_is_invariant_to_weight_scaling(){
        let m = PayoffMatrix::from_array([[10, 4], [12, 0]]);
        let row = MixedStrategy::from_weights(vec![1.0, 3.0]).unwrap();
        let row_scaled = MixedStrategy::from_weights(vec![7.0, 21.0]).unwrap();
        let col = MixedStrategy::from_weights(vec![2.0, 2.0]).unwrap();
        let a = m.bilinear(&row, &col).unwrap();
        let b = m.bilinear(&row_scaled, &col).unwrap();
        assert!((a - b).abs() < 1e-12);
        assert!((a - 6.25).abs() < 1e-12);
    }

    #[test]
    fn dimension_mismatch_is_error(){
        let m = PayoffMatrix::from_array([[1, 2, 3], [4, 5, 6]]);
        let three = MixedStrategy::uniform(3).unwrap();
        let two = MixedStrategy::uniform(2).unwrap();
        assert!(m.bilinear(&two, &three).is_ok());
        assert!(matches!(m.bilinear(&three, &two), Err(GameError::StrategyDimension { expected: 2, found: 3, .. })));
        assert!(matches!(m.row_payoffs(&two), Err(GameError::StrategyDimension { expected: 3, found: 2, .. })));
    }

    #[test]
    fn transpose_of_negation(){
        let m = PayoffMatrix::from_array([[1, 10], [0, 5]]);
        let t = m.negated().transposed();
        assert_eq!(t, PayoffMatrix::from_array([[-1, 0], [-10, -5]]));
        assert_eq!(format!("{t}"), "[[-1, 0], [-10, -5]]");
    }
}
