//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `uat-space`.
#[derive(Debug, Error)]
pub enum SpaceError {
    #[error("grid dimension `{what}` must be non-zero")]
    EmptyDimension { what: &'static str },
}

pub type SpaceResult<T> = Result<T, SpaceError>;
