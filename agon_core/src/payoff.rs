use std::fmt::Debug;

/// `Payoff` is trait for numeric types that can be placed in payoff matrix.
/// It is implemented for standard numeric types; every payoff is
/// evaluated as `f64` once it enters [`PayoffMatrix`](crate::matrix::PayoffMatrix).
pub trait Payoff: Copy + Debug + PartialOrd + Send{
    /// Value of payoff used in expected payoff calculation.
    fn as_f64(&self) -> f64;
}

macro_rules! impl_payoff_std {
    ($($x: ty), +) => {
        $(
          impl Payoff for $x{
              fn as_f64(&self) -> f64{
                  *self as f64
              }
          }

        )*

    }
}

impl_payoff_std![u8, u16, u32, u64, i8, i16, i32, i64, f32];

impl Payoff for f64{
    fn as_f64(&self) -> f64 {
        *self
    }
}
