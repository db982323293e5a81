use ndarray::{Array1, Array2};
use crate::equilibrium::Equilibrium;
use crate::error::GameError;
use crate::game::Game;
use crate::matrix::PayoffMatrix;
use crate::solver::EquilibriumSolver;
use crate::solver::linear::solve_linear_system;
use crate::strategy::MixedStrategy;

/// Default tolerance of [`SupportEnumeration`].
pub const SUPPORT_TOLERANCE: f64 = 1e-10;

/// Finds equilibria by trying every pair of supports.
///
/// For each nonempty set of row actions (ordered by size, then lexicographically) and each
/// nonempty set of column actions it computes strategies making the opponent indifferent
/// between actions in support. Candidate pair is kept if both strategies are positive exactly
/// on their supports and every supported action is a best response.
///
/// ```
/// use agon_core::game::Game;
/// use agon_core::matrix::PayoffMatrix;
/// use agon_core::solver::{EquilibriumSolver, SupportEnumeration};
/// let matching_pennies = Game::zero_sum(PayoffMatrix::from_array([[1, -1], [-1, 1]]));
/// let equilibria = SupportEnumeration::default().solve(&matching_pennies).unwrap();
/// assert_eq!(equilibria.len(), 1);
/// assert_eq!(format!("{}", equilibria[0]), "([0.5, 0.5], [0.5, 0.5])");
/// ```
#[derive(Debug, Copy, Clone)]
pub struct SupportEnumeration{
    /// Minimal probability of supported action and allowed slack in best response check.
    pub tolerance: f64,
    /// When set, only supports of equal size are tried.
    ///
    /// Found equilibria do not change. For supports of unequal size one indifference system
    /// has more unknowns than equations, its free variables are fixed at zero and the candidate
    /// is rejected for having zero weight inside its support. The flag only skips these pairs.
    pub non_degenerate: bool,
}

impl Default for SupportEnumeration{
    fn default() -> Self {
        Self{
            tolerance: SUPPORT_TOLERANCE,
            non_degenerate: false,
        }
    }
}

impl SupportEnumeration{
    pub fn new(tolerance: f64, non_degenerate: bool) -> Self{
        Self{tolerance, non_degenerate}
    }

    /// Candidate pairs of supports, in the order they are tried.
    pub fn support_pairs(&self, rows: usize, cols: usize) -> Vec<(Vec<usize>, Vec<usize>)>{
        let column_supports = powerset(cols);
        let mut pairs = Vec::new();
        for row_support in powerset(rows){
            for column_support in column_supports.iter()
                .filter(|s| !self.non_degenerate || s.len() == row_support.len()){

                pairs.push((row_support.clone(), column_support.clone()));
            }
        }
        pairs
    }

    fn try_supports(&self, game: &Game, row_support: &[usize], column_support: &[usize])
        -> Result<Option<Equilibrium>, GameError>{

        let (rows, cols) = game.shape();
        let column = match indifference_strategy(game.row_matrix(), row_support, column_support, false)
            .and_then(|w| self.obeying_support(w, column_support, cols)){
            Some(s) => s,
            None => return Ok(None)
        };
        let row = match indifference_strategy(game.column_matrix(), column_support, row_support, true)
            .and_then(|w| self.obeying_support(w, row_support, rows)){
            Some(s) => s,
            None => return Ok(None)
        };
        let candidate = Equilibrium::new(row, column);
        if game.is_equilibrium(&candidate, self.tolerance)?{
            Ok(Some(candidate))
        } else {
            Ok(None)
        }
    }

    fn obeying_support(&self, weights: Array1<f64>, support: &[usize], actions: usize) -> Option<MixedStrategy>{
        if weights.iter().any(|w| *w <= self.tolerance){
            return None;
        }
        let mut full = Array1::zeros(actions);
        for (w, i) in weights.iter().zip(support.iter()){
            full[*i] = *w;
        }
        MixedStrategy::from_weights(full).ok()
    }
}

/// Strategy of one player (on `own_support`) making the opponent indifferent between actions
/// in `opponent_support`. Returns weights of supported actions in order of `own_support`.
///
/// `matrix` is the opponent's payoff matrix; when `transposed` is set the opponent is the
/// column player, so its actions are columns of `matrix`.
fn indifference_strategy(matrix: &PayoffMatrix, opponent_support: &[usize], own_support: &[usize], transposed: bool)
    -> Option<Array1<f64>>{

    let payoff = |opponent: usize, own: usize| if transposed {
        matrix[(own, opponent)]
    } else {
        matrix[(opponent, own)]
    };
    let equations = opponent_support.len();
    let unknowns = own_support.len();
    let mut a = Array2::zeros((equations, unknowns));
    let mut b = Array1::zeros(equations);
    for (e, pair) in opponent_support.windows(2).enumerate(){
        for (k, own) in own_support.iter().enumerate(){
            a[[e, k]] = payoff(pair[0], *own) - payoff(pair[1], *own);
        }
    }
    for k in 0..unknowns{
        a[[equations - 1, k]] = 1.0;
    }
    b[equations - 1] = 1.0;
    solve_linear_system(a, b)
}

/// Nonempty subsets of `0..n`, ordered by size and then lexicographically.
pub fn powerset(n: usize) -> Vec<Vec<usize>>{
    let mut sets = Vec::new();
    for size in 1..=n{
        let mut current = Vec::with_capacity(size);
        combinations(0, n, size, &mut current, &mut sets);
    }
    sets
}

fn combinations(start: usize, n: usize, size: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>){
    if current.len() == size{
        out.push(current.clone());
        return;
    }
    for i in start..n{
        current.push(i);
        combinations(i + 1, n, size, current, out);
        current.pop();
    }
}

impl EquilibriumSolver for SupportEnumeration{
    fn solve(&self, game: &Game) -> Result<Vec<Equilibrium>, GameError> {
        let (rows, cols) = game.shape();
        let mut equilibria = Vec::new();
        for (row_support, column_support) in self.support_pairs(rows, cols){
            if let Some(eq) = self.try_supports(game, &row_support, &column_support)?{
                #[cfg(feature = "log_debug")]
                log::debug!("Supports {row_support:?} x {column_support:?} give equilibrium {eq}");
                equilibria.push(eq);
            } else {
                #[cfg(feature = "log_trace")]
                log::trace!("Supports {row_support:?} x {column_support:?} rejected");
            }
        }
        #[cfg(feature = "log_info")]
        log::info!("Support enumeration found {} equilibria", equilibria.len());
        Ok(equilibria)
    }

    fn name(&self) -> &'static str {
        "support enumeration"
    }
}

#[cfg(test)]
mod tests{
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use crate::equilibrium::Equilibrium;
    use crate::game::Game;
    use crate::matrix::PayoffMatrix;
    use crate::solver::{powerset, EquilibriumSolver, LemkeHowson, SupportEnumeration};
    use crate::strategy::PROBABILITY_TOLERANCE;

    fn assert_valid(game: &Game, eq: &Equilibrium){
        for s in [&eq.row, &eq.column]{
            assert!(s.probabilities().iter().all(|p| *p >= 0.0), "negative probability in {eq}");
            assert!((s.probabilities().sum() - 1.0).abs() < PROBABILITY_TOLERANCE, "{eq} does not sum to 1");
        }
        assert!(game.is_equilibrium(eq, 1e-9).unwrap(), "{eq} is not an equilibrium of {game}");
    }

    fn hawk_dove() -> Game{
        Game::new(
            PayoffMatrix::from_array([[10, 4], [12, 0]]),
            PayoffMatrix::from_array([[10, 12], [4, 0]])
        ).unwrap()
    }

    #[test]
    fn powerset_order(){
        assert_eq!(powerset(3), vec![
            vec![0], vec![1], vec![2],
            vec![0, 1], vec![0, 2], vec![1, 2],
            vec![0, 1, 2]
        ]);
        assert!(powerset(0).is_empty());
    }

    #[test]
    fn non_degenerate_pairs_have_equal_size(){
        let pairs = SupportEnumeration::new(1e-10, true).support_pairs(3, 2);
        assert!(pairs.iter().all(|(r, c)| r.len() == c.len()));
        assert_eq!(pairs.len(), 3 * 2 + 3);
        assert_eq!(SupportEnumeration::default().support_pairs(3, 2).len(), 7 * 3);
    }

    #[test]
    fn hawk_dove_has_three_equilibria(){
        let game = hawk_dove();
        let equilibria = SupportEnumeration::default().solve(&game).unwrap();
        assert_eq!(equilibria.len(), 3);
        assert_eq!(format!("{}", equilibria[0]), "([1, 0], [0, 1])");
        assert_eq!(format!("{}", equilibria[1]), "([0, 1], [1, 0])");
        assert!(equilibria[0].is_pure(1e-12) && !equilibria[2].is_pure(1e-12));
        assert!((equilibria[2].row.probability(0) - 2.0/3.0).abs() < 1e-12);
        assert!((equilibria[2].column.probability(0) - 2.0/3.0).abs() < 1e-12);
        for eq in equilibria.iter(){
            for s in [&eq.row, &eq.column]{
                assert!(s.probabilities().iter().all(|p| *p >= 0.0));
                assert!((s.probabilities().sum() - 1.0).abs() < PROBABILITY_TOLERANCE);
            }
            let p = game.equilibrium_payoffs(eq).unwrap();
            let direct = game.row_matrix().bilinear(&eq.row, &eq.column).unwrap();
            assert_eq!(p.row, direct);
        }
    }

    #[test]
    fn random_integer_games_give_valid_equilibria(){
        let mut rng = StdRng::seed_from_u64(2016);
        for _ in 0..1000{
            let mut entries = || [[0i64; 2]; 2].map(|row| row.map(|_| rng.random_range(-5i64..=5)));
            let game = Game::new(
                PayoffMatrix::from_array(entries()),
                PayoffMatrix::from_array(entries())).unwrap();
            for eq in SupportEnumeration::default().solve(&game).unwrap().iter(){
                assert_valid(&game, eq);
            }
            for label in 0..4{
                let found = LemkeHowson::new(label).solve(&game).unwrap();
                assert_valid(&game, &found[0]);
            }
        }
    }

    #[test]
    fn random_real_games_contain_lemke_howson_results(){
        let mut rng = StdRng::seed_from_u64(2017);
        for _ in 0..500{
            let mut entries = || [[0.0f64; 2]; 2].map(|row| row.map(|_| rng.random_range(-10.0f64..10.0)));
            let game = Game::new(
                PayoffMatrix::from_array(entries()),
                PayoffMatrix::from_array(entries())).unwrap();
            let all = SupportEnumeration::default().solve(&game).unwrap();
            assert!(!all.is_empty(), "no equilibrium for {game}");
            for eq in all.iter(){
                assert_valid(&game, eq);
            }
            for label in 0..4{
                let found = LemkeHowson::new(label).solve(&game).unwrap();
                assert!(all.iter().any(|e| e.approx_eq(&found[0], 1e-6)), "{} missing for {game}", found[0]);
            }
        }
    }

    #[test]
    fn non_degenerate_flag_keeps_equilibria(){
        let games = [
            hawk_dove(),
            Game::new(
                PayoffMatrix::from_array([[-3, 1], [-1, -3]]),
                PayoffMatrix::from_array([[2, 2], [-3, -1]])).unwrap(),
            Game::zero_sum(PayoffMatrix::from_array([[1, 1, 0], [1, 1, 0]])),
        ];
        for game in games.iter(){
            let all = SupportEnumeration::default().solve(game).unwrap();
            let equal_sizes = SupportEnumeration::new(1e-10, true).solve(game).unwrap();
            assert_eq!(all, equal_sizes);
        }
    }

    #[test]
    fn rock_paper_scissors_uniform(){
        let game = Game::zero_sum(PayoffMatrix::from_array([[0, -1, 1], [1, 0, -1], [-1, 1, 0]]));
        let equilibria = SupportEnumeration::default().solve(&game).unwrap();
        assert_eq!(equilibria.len(), 1);
        for p in equilibria[0].row.probabilities().iter(){
            assert!((p - 1.0/3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rectangular_game(){
        // row player prefers to match, column player dominant action 1
        let game = Game::new(
            PayoffMatrix::from_array([[3, 0], [0, 2], [1, 1]]),
            PayoffMatrix::from_array([[0, 1], [0, 1], [0, 1]]),
        ).unwrap();
        let equilibria = SupportEnumeration::default().solve(&game).unwrap();
        assert_eq!(equilibria.len(), 1);
        assert_eq!(format!("{}", equilibria[0]), "([0, 1, 0], [0, 1])");
    }
}
