use std::fmt::{Display, Formatter};
use ndarray::Array1;
use rand::Rng;
use crate::error::GameError;
use crate::util::format_vector;

/// Tolerance used when checking that probabilities sum up to one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Probability distribution over actions of one player.
///
/// Every entry is nonnegative and entries sum to `1` (within [`PROBABILITY_TOLERANCE`]).
/// ```
/// use agon_core::strategy::MixedStrategy;
/// let sigma = MixedStrategy::new(vec![0.25, 0.75]).unwrap();
/// assert_eq!(sigma.len(), 2);
/// assert_eq!(sigma.support(1e-12), vec![0, 1]);
/// assert!(MixedStrategy::new(vec![0.5, 0.6]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixedStrategy{
    probabilities: Array1<f64>,
}

impl MixedStrategy{

    /// Creates strategy from probabilities, checking they form distribution.
    /// Tiny negative values (above `-PROBABILITY_TOLERANCE`) are clamped to zero.
    pub fn new(probabilities: impl Into<Array1<f64>>) -> Result<Self, GameError>{
        let mut probabilities = probabilities.into();
        for p in probabilities.iter_mut(){
            if !p.is_finite() || *p < -PROBABILITY_TOLERANCE || *p > 1.0 + PROBABILITY_TOLERANCE{
                return Err(GameError::NotAProbability(*p));
            }
            if *p < 0.0{
                *p = 0.0;
            }
        }
        let sum = probabilities.sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE{
            return Err(GameError::NotADistribution { sum });
        }
        Ok(Self{probabilities})
    }

    /// Strategy always playing action `index` out of `actions`.
    pub fn pure(actions: usize, index: usize) -> Result<Self, GameError>{
        if index >= actions{
            return Err(GameError::ActionOutOfRange { index, actions });
        }
        let mut probabilities = Array1::zeros(actions);
        probabilities[index] = 1.0;
        Ok(Self{probabilities})
    }

    /// Normalises nonnegative weights into distribution.
    /// ```
    /// use agon_core::strategy::MixedStrategy;
    /// let sigma = MixedStrategy::from_weights(vec![2.0, 6.0]).unwrap();
    /// assert_eq!(sigma.probability(1), 0.75);
    /// ```
    pub fn from_weights(weights: impl Into<Array1<f64>>) -> Result<Self, GameError>{
        let weights = weights.into();
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0){
            return Err(GameError::NotAProbability(*w));
        }
        let sum = weights.sum();
        if sum <= 0.0{
            return Err(GameError::NotADistribution { sum });
        }
        Ok(Self{
            probabilities: weights / sum
        })
    }

    /// Uniform distribution over `actions` actions.
    pub fn uniform(actions: usize) -> Result<Self, GameError>{
        Self::from_weights(Array1::<f64>::ones(actions))
    }

    pub fn len(&self) -> usize{
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool{
        self.probabilities.is_empty()
    }

    pub fn probabilities(&self) -> &Array1<f64>{
        &self.probabilities
    }

    pub fn probability(&self, action: usize) -> f64{
        self.probabilities[action]
    }

    /// Indices of actions played with probability greater than `tolerance`.
    pub fn support(&self, tolerance: f64) -> Vec<usize>{
        self.probabilities.iter()
            .enumerate()
            .filter(|(_, p)| **p > tolerance)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns index of action if strategy is pure.
    pub fn pure_action(&self, tolerance: f64) -> Option<usize>{
        match self.support(tolerance).as_slice(){
            [single] => Some(*single),
            _ => None
        }
    }

    /// Draws index of action according to distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize{
        let sample: f64 = rng.random_range(0.0..1.0);
        let mut accumulated = 0.0;
        let mut last_supported = 0;
        for (i, p) in self.probabilities.iter().enumerate(){
            if *p <= 0.0{
                continue;
            }
            accumulated += p;
            last_supported = i;
            if sample < accumulated{
                return i;
            }
        }
        last_supported
    }
}

impl Display for MixedStrategy{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_vector(self.probabilities.iter()))
    }
}

#[cfg(test)]
mod tests{
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::error::GameError;
    use crate::strategy::MixedStrategy;

    #[test]
    fn pure_strategy_out_of_range(){
        assert_eq!(MixedStrategy::pure(2, 2), Err(GameError::ActionOutOfRange { index: 2, actions: 2 }));
        let s = MixedStrategy::pure(3, 1).unwrap();
        assert_eq!(s.pure_action(1e-12), Some(1));
        assert_eq!(format!("{s}"), "[0, 1, 0]");
    }

    #[test]
    fn reject_negative_probability(){
        assert!(matches!(MixedStrategy::new(vec![1.5, -0.5]), Err(GameError::NotAProbability(_))));
        assert!(matches!(MixedStrategy::from_weights(vec![0.0, 0.0]), Err(GameError::NotADistribution{..})));
    }

    #[test]
    fn clamp_rounding_noise(){
        let s = MixedStrategy::new(vec![1.0 + 1e-12, -1e-12]).unwrap();
        assert_eq!(s.probability(1), 0.0);
        assert_eq!(s.support(1e-12), vec![0]);
    }

    #[test]
    fn sample_never_picks_unsupported_action(){
        let s = MixedStrategy::new(vec![0.0, 0.3, 0.0, 0.7]).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let mut counts = [0usize; 4];
        for _ in 0..2000{
            counts[s.sample(&mut rng)] += 1;
        }
        assert_eq!(counts[0], 0);
        assert_eq!(counts[2], 0);
        assert!(counts[1] > 400 && counts[1] < 800);
    }
}
