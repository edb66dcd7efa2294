/// Estimator errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    #[error("invalid argument: number of points must be positive, got {num_points}")]
    InvalidArgument { num_points: i64 },
}

pub type EstimateResult<T> = Result<T, EstimateError>;
