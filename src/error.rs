use crate::board::{Move, Occupancy};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PegError {
    /// Rejected while building the starting position.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A move was applied to an occupancy where it is not legal.
    #[error("illegal move {mv} on occupancy {occupancy:#06x}")]
    InvariantViolation { mv: Move, occupancy: Occupancy },

    #[error("could not build search thread pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, PegError>;
