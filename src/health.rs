//! Health monitoring for resource pools

use crate::pool::PoolState;
use std::time::Duration;

/// Health status of a resource pool
///
/// A depleting pool only ever moves toward exhaustion, so health degrades
/// monotonically: first a low-watermark warning, then unhealthy once the
/// last resource is issued.
///
/// # Examples
///
/// ```
/// use esox_resourcepool::{PoolState, ResourcePool};
///
/// let pool = ResourcePool::with_capacity(3);
///
/// let health = pool.get_health_status();
/// assert!(health.is_healthy());
/// assert_eq!(health.state, PoolState::HasCapacity);
/// assert_eq!(health.remaining, 3);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HealthStatus {
    /// Whether the pool can still issue resources
    pub is_healthy: bool,

    /// Current pool state
    pub state: PoolState,

    /// Number of warnings detected
    pub warning_count: usize,

    /// Fraction of capacity issued (0.0 to 1.0)
    pub utilization: f64,

    /// Resources not yet issued
    pub remaining: usize,

    /// Resources already issued
    pub issued: usize,

    /// Total capacity
    pub capacity: usize,

    /// How long the pool has been exhausted, if it is
    pub exhausted_for: Option<Duration>,

    /// Warning messages
    pub warnings: Vec<String>,
}

impl HealthStatus {
    /// Create a new health status
    pub(crate) fn new(
        remaining: usize,
        capacity: usize,
        low_watermark: f64,
        exhausted_for: Option<Duration>,
    ) -> Self {
        let issued = capacity.saturating_sub(remaining);
        let utilization = if capacity > 0 {
            issued as f64 / capacity as f64
        } else {
            0.0
        };
        let state = PoolState::from_remaining(remaining);

        let mut warnings = Vec::new();

        match state {
            PoolState::Exhausted => {
                warnings.push(format!("Pool is exhausted ({capacity} of {capacity} issued)"));
            }
            PoolState::HasCapacity => {
                let left = remaining as f64 / capacity as f64;
                if left <= low_watermark {
                    warnings.push(format!(
                        "Low capacity: {:.1}% remaining",
                        left * 100.0
                    ));
                }
            }
        }

        Self {
            is_healthy: state == PoolState::HasCapacity,
            state,
            warning_count: warnings.len(),
            utilization,
            remaining,
            issued,
            capacity,
            exhausted_for,
            warnings,
        }
    }

    /// Check if the pool is healthy
    pub fn is_healthy(&self) -> bool {
        self.is_healthy
    }
}
