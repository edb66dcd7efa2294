//! Monte Carlo estimation of pi.
//!
//! Points are drawn uniformly from the square [-1, 1] x [-1, 1]. The unit
//! circle covers π/4 of that square, so four times the fraction of points
//! landing inside it approximates π.

pub mod error;
pub mod logging;
pub mod monte_carlo;

pub use error::{EstimateError, EstimateResult};
pub use monte_carlo::{count_inside, estimate_pi, Estimate, PointSampler, UniformSquare};
