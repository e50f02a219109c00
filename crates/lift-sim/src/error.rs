use lift_car::CarError;
use lift_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match car count {expected}")]
    CarCountMismatch {
        expected: usize,
        got: usize,
        what: &'static str,
    },

    #[error("request error: {0}")]
    Core(#[from] CoreError),

    /// A car invariant was violated mid-tick.  Fatal: the run aborts with
    /// the violated invariant named.
    #[error("car invariant violated: {0}")]
    Car(#[from] CarError),
}

pub type SimResult<T> = Result<T, SimError>;
