use std::fmt;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{EstimateError, EstimateResult};

/// Source of points in the square [-1, 1] x [-1, 1].
pub trait PointSampler {
    fn sample_point(&mut self) -> (f64, f64);
}

impl<F> PointSampler for F
where
    F: FnMut() -> (f64, f64),
{
    fn sample_point(&mut self) -> (f64, f64) {
        self()
    }
}

/// Draws both coordinates independently from the closed interval [-1, 1].
pub struct UniformSquare<R> {
    rng: R,
    range: Uniform<f64>,
}

impl<R: Rng> UniformSquare<R> {
    pub fn new(rng: R) -> Self {
        UniformSquare {
            rng,
            range: Uniform::new_inclusive(-1.0, 1.0),
        }
    }
}

impl UniformSquare<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Same seed, same sequence of points.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PointSampler for UniformSquare<R> {
    fn sample_point(&mut self) -> (f64, f64) {
        let x = self.range.sample(&mut self.rng);
        let y = self.range.sample(&mut self.rng);
        (x, y)
    }
}

/// Outcome of one estimation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub points: u64,
    pub inside: u64,
}

impl Estimate {
    pub fn value(&self) -> f64 {
        4.0 * (self.inside as f64 / self.points as f64)
    }

    pub fn abs_error(&self) -> f64 {
        (std::f64::consts::PI - self.value()).abs()
    }
}

impl fmt::Display for Estimate {
    // `{:?}` keeps the trailing `.0` on whole numbers, e.g. `2.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Approximation of pi using Monte Carlo method with {} points: {:?}",
            self.points,
            self.value()
        )
    }
}

/// Sample `num_points` points and count those inside the unit circle.
///
/// Points on the circle itself (`x² + y² == 1`) count as inside.
pub fn count_inside<S>(num_points: i64, sampler: &mut S) -> EstimateResult<Estimate>
where
    S: PointSampler + ?Sized,
{
    if num_points <= 0 {
        return Err(EstimateError::InvalidArgument { num_points });
    }
    let points = num_points as u64;
    debug!(points, "starting monte carlo run");

    let mut inside = 0u64;
    for _ in 0..points {
        let (x, y) = sampler.sample_point();
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }

    let estimate = Estimate { points, inside };
    debug!(points, inside, value = estimate.value(), "monte carlo run finished");
    Ok(estimate)
}

/// Approximate pi from `num_points` samples.
pub fn estimate_pi<S>(num_points: i64, sampler: &mut S) -> EstimateResult<f64>
where
    S: PointSampler + ?Sized,
{
    count_inside(num_points, sampler).map(|estimate| estimate.value())
}
