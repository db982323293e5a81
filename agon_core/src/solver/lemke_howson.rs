use ndarray::{Array1, Array2};
use crate::equilibrium::Equilibrium;
use crate::error::GameError;
use crate::game::Game;
use crate::matrix::PayoffMatrix;
use crate::solver::EquilibriumSolver;
use crate::solver::linear::PIVOT_EPSILON;
use crate::strategy::MixedStrategy;

/// Finds one equilibrium by complementary pivoting.
///
/// Labels `0..rows` are actions of the row player, labels `rows..rows+cols` are actions of
/// the column player. Starting from the artificial equilibrium, label
/// `initial_dropped_label` is dropped and pivoting continues until it is picked up again.
/// Different labels may lead to different equilibria.
///
/// ```
/// use agon_core::game::Game;
/// use agon_core::matrix::PayoffMatrix;
/// use agon_core::solver::{EquilibriumSolver, LemkeHowson};
/// let game = Game::new(
///     PayoffMatrix::from_array([[10, 4], [12, 0]]),
///     PayoffMatrix::from_array([[10, 12], [4, 0]]),
/// ).unwrap();
/// let eq = LemkeHowson::new(0).solve(&game).unwrap();
/// assert_eq!(format!("{}", eq[0]), "([1, 0], [0, 1])");
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct LemkeHowson{
    pub initial_dropped_label: usize,
}

impl LemkeHowson{
    pub fn new(initial_dropped_label: usize) -> Self{
        Self{initial_dropped_label}
    }
}

/// Tableau of one polytope, columns indexed by label, last column holds right hand side.
struct Tableau{
    coefficients: Array2<f64>,
    rhs: Array1<f64>,
    basis: Vec<usize>,
}

impl Tableau{

    /// Constraints `M z + s = 1`, where `z` carries labels `offset..offset+M.cols()`
    /// and slack `s` carries labels `slack_offset..slack_offset+M.rows()`.
    fn new(matrix: &Array2<f64>, offset: usize, slack_offset: usize, labels: usize) -> Self{
        let (rows, cols) = matrix.dim();
        let mut coefficients = Array2::zeros((rows, labels));
        for i in 0..rows{
            for j in 0..cols{
                coefficients[[i, offset + j]] = matrix[[i, j]];
            }
            coefficients[[i, slack_offset + i]] = 1.0;
        }
        Self{
            coefficients,
            rhs: Array1::ones(rows),
            basis: (slack_offset..slack_offset + rows).collect(),
        }
    }

    fn is_basic(&self, label: usize) -> bool{
        self.basis.contains(&label)
    }

    /// Brings `entering` into the basis, returns label that left.
    fn pivot(&mut self, entering: usize) -> Result<usize, GameError>{
        let rows = self.basis.len();
        let mut leaving_row: Option<(usize, f64)> = None;
        for r in 0..rows{
            let coefficient = self.coefficients[[r, entering]];
            if coefficient > PIVOT_EPSILON{
                let ratio = self.rhs[r] / coefficient;
                if leaving_row.map(|(_, best)| ratio < best - PIVOT_EPSILON).unwrap_or(true){
                    leaving_row = Some((r, ratio));
                }
            }
        }
        let (r, _) = leaving_row.ok_or_else(|| GameError::Degenerate {
            context: format!("no pivot row for entering label {entering}")
        })?;
        let pivot = self.coefficients[[r, entering]];
        self.coefficients.row_mut(r).mapv_inplace(|v| v / pivot);
        self.rhs[r] /= pivot;
        let pivot_row = self.coefficients.row(r).to_owned();
        let pivot_rhs = self.rhs[r];
        for i in 0..rows{
            if i == r{
                continue;
            }
            let factor = self.coefficients[[i, entering]];
            if factor != 0.0{
                self.coefficients.row_mut(i).scaled_add(-factor, &pivot_row);
                self.rhs[i] -= factor * pivot_rhs;
            }
        }
        let leaving = self.basis[r];
        self.basis[r] = entering;
        Ok(leaving)
    }

    /// Values of variables with labels `offset..offset+count`, zero when not basic.
    /// Rounding residue below [`PIVOT_EPSILON`] is cut to zero.
    fn values(&self, offset: usize, count: usize) -> Array1<f64>{
        let mut values = Array1::zeros(count);
        for (r, label) in self.basis.iter().enumerate(){
            if (offset..offset + count).contains(label){
                let value = self.rhs[r];
                values[label - offset] = if value < 0.0 && value > -PIVOT_EPSILON { 0.0 } else { value };
            }
        }
        values
    }
}

/// Matrix with every entry strictly positive, equilibria of shifted game are unchanged.
fn positive(matrix: &PayoffMatrix) -> Array2<f64>{
    let min = matrix.min();
    if min <= 0.0{
        matrix.shifted(1.0 - min).values().clone()
    } else {
        matrix.values().clone()
    }
}

impl EquilibriumSolver for LemkeHowson{
    fn solve(&self, game: &Game) -> Result<Vec<Equilibrium>, GameError> {
        let (rows, cols) = game.shape();
        let labels = rows + cols;
        if self.initial_dropped_label >= labels{
            return Err(GameError::InvalidLabel { label: self.initial_dropped_label, limit: labels });
        }
        let a = positive(game.row_matrix());
        let b = positive(game.column_matrix());

        // x (labels 0..rows) with slacks of column actions: Bᵀ x + t = 1
        let mut row_tableau = Tableau::new(&b.t().to_owned(), 0, rows, labels);
        // y (labels rows..) with slacks of row actions: A y + s = 1
        let mut column_tableau = Tableau::new(&a, rows, 0, labels);

        let mut entering = self.initial_dropped_label;
        let mut in_row_tableau = !row_tableau.is_basic(entering);
        let limit = 64 * labels * labels;
        for _ in 0..limit{
            let leaving = if in_row_tableau{
                row_tableau.pivot(entering)?
            } else {
                column_tableau.pivot(entering)?
            };
            #[cfg(feature = "log_trace")]
            log::trace!("Label {entering} entered, label {leaving} left");
            if leaving == self.initial_dropped_label{
                let row = MixedStrategy::from_weights(row_tableau.values(0, rows))?;
                let column = MixedStrategy::from_weights(column_tableau.values(rows, cols))?;
                let equilibrium = Equilibrium::new(row, column);
                #[cfg(feature = "log_debug")]
                log::debug!("Lemke-Howson with dropped label {} found {}", self.initial_dropped_label, equilibrium);
                return Ok(vec![equilibrium]);
            }
            entering = leaving;
            in_row_tableau = !in_row_tableau;
        }
        Err(GameError::Degenerate {
            context: format!("complementary pivoting did not finish in {limit} steps")
        })
    }

    fn name(&self) -> &'static str {
        "Lemke-Howson"
    }
}
