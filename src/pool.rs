//! Core resource pool implementation

use crate::config::PoolConfiguration;
use crate::errors::{PoolError, PoolResult};
use crate::health::HealthStatus;
use crate::metrics::{MetricsTracker, PoolMetrics};
use crate::resource::Resource;

#[cfg(feature = "metrics")]
use crate::metrics::MetricsExporter;

use crossbeam::utils::CachePadded;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, trace, warn};

static NEXT_POOL_ID: AtomicUsize = AtomicUsize::new(1);

/// Logical state of a pool.
///
/// `Exhausted` is terminal: there is no way to hand a resource back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PoolState {
    /// At least one resource can still be issued
    HasCapacity,

    /// Every resource has been issued
    Exhausted,
}

impl PoolState {
    pub(crate) fn from_remaining(remaining: usize) -> Self {
        if remaining > 0 {
            PoolState::HasCapacity
        } else {
            PoolState::Exhausted
        }
    }
}

/// Fixed-capacity pool that issues each of its resources at most once.
///
/// All resources are created when the pool is built. [`acquire`] hands them
/// out from the end of the slot sequence until none are left, after which it
/// keeps returning `None`. Acquisition is lock-free and safe to call from
/// many threads at once.
///
/// [`acquire`]: ResourcePool::acquire
///
/// # Examples
///
/// ```
/// use esox_resourcepool::ResourcePool;
///
/// let pool = ResourcePool::with_capacity(2);
/// assert!(pool.acquire().is_some());
/// assert!(pool.acquire().is_some());
/// assert!(pool.acquire().is_none());
/// assert_eq!(pool.remaining(), 0);
/// ```
pub struct ResourcePool {
    id: usize,
    slots: Box<[Resource]>,
    remaining: CachePadded<AtomicUsize>,
    config: PoolConfiguration,
    metrics: MetricsTracker,
}

impl ResourcePool {
    /// Create a pool from a validated configuration
    pub fn new(config: PoolConfiguration) -> PoolResult<Self> {
        config.validate()?;
        Ok(Self::populate(config))
    }

    /// Create a pool with `capacity` resources and default settings
    pub fn with_capacity(capacity: usize) -> Self {
        Self::populate(PoolConfiguration::default().with_capacity(capacity))
    }

    pub(crate) fn populate(config: PoolConfiguration) -> Self {
        let id = NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed);
        let capacity = config.capacity;

        info!(pool = %config.pool_name, capacity, "initialization block");

        let slots: Box<[Resource]> = (0..capacity).map(|slot| Resource::make(id, slot)).collect();

        let metrics = MetricsTracker::new();
        if capacity == 0 {
            metrics.mark_exhausted();
        }

        Self {
            id,
            slots,
            remaining: CachePadded::new(AtomicUsize::new(capacity)),
            config,
            metrics,
        }
    }

    /// Take the next unissued resource, or `None` once the pool is exhausted.
    pub fn acquire(&self) -> Option<&Resource> {
        let claimed = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| left.checked_sub(1));

        match claimed {
            Ok(left) => {
                let resource = &self.slots[left - 1];
                self.metrics.record_acquired();
                debug!(pool = %self.config.pool_name, resource = %resource, remaining = left - 1, "resource acquired");

                if left == 1 {
                    self.metrics.mark_exhausted();
                    warn!(pool = %self.config.pool_name, capacity = self.capacity(), "pool exhausted");
                }
                Some(resource)
            }
            Err(_) => {
                self.metrics.record_empty();
                trace!(pool = %self.config.pool_name, "acquire on exhausted pool");
                None
            }
        }
    }

    /// Like [`acquire`](ResourcePool::acquire), but reports exhaustion as an error
    pub fn try_acquire(&self) -> PoolResult<&Resource> {
        self.acquire().ok_or(PoolError::PoolExhausted {
            capacity: self.capacity(),
        })
    }

    /// Identifier carried by every resource of this pool
    pub fn id(&self) -> usize {
        self.id
    }

    /// Name from the configuration
    pub fn name(&self) -> &str {
        &self.config.pool_name
    }

    /// Total number of resources
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Resources not yet issued
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Resources already issued
    pub fn issued_count(&self) -> usize {
        self.capacity() - self.remaining()
    }

    /// Current logical state
    pub fn state(&self) -> PoolState {
        PoolState::from_remaining(self.remaining())
    }

    /// Get health status
    pub fn get_health_status(&self) -> HealthStatus {
        HealthStatus::new(
            self.remaining(),
            self.capacity(),
            self.config.low_watermark,
            self.metrics.exhausted_for(),
        )
    }

    /// Get pool metrics
    pub fn get_metrics(&self) -> PoolMetrics {
        self.metrics.get_metrics(self.remaining(), self.capacity())
    }

    /// Export metrics
    pub fn export_metrics(&self) -> HashMap<String, String> {
        self.get_metrics().export()
    }

    /// Export metrics in Prometheus format, labelled with the pool name
    #[cfg(feature = "metrics")]
    pub fn export_metrics_prometheus(
        &self,
        tags: Option<&HashMap<String, String>>,
    ) -> PoolResult<String> {
        MetricsExporter::export_prometheus(&self.get_metrics(), &self.config.pool_name, tags)
    }
}

impl std::fmt::Debug for ResourcePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcePool")
            .field("id", &self.id)
            .field("name", &self.config.pool_name)
            .field("capacity", &self.capacity())
            .field("remaining", &self.remaining())
            .finish()
    }
}
