use lift_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid run configuration, surfaced before any state is touched.
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
