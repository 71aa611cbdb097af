//! Error types for the resource pool

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Pool is exhausted - all {capacity} resources have been issued")]
    PoolExhausted { capacity: usize },

    #[error("Invalid pool configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Global pool is already initialized")]
    AlreadyInitialized,

    #[error("Failed to export metrics: {0}")]
    MetricsExport(String),
}

pub type PoolResult<T> = Result<T, PoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message_names_capacity() {
        let err = PoolError::PoolExhausted { capacity: 10 };
        assert_eq!(
            err.to_string(),
            "Pool is exhausted - all 10 resources have been issued"
        );
    }
}
