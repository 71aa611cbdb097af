//! Metrics collection and export for resource pools

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[cfg(feature = "metrics")]
use crate::errors::{PoolError, PoolResult};

/// Metrics data for a pool
///
/// # Examples
///
/// ```
/// use esox_resourcepool::ResourcePool;
///
/// let pool = ResourcePool::with_capacity(1);
/// let _first = pool.acquire();
/// let _second = pool.acquire();
///
/// let metrics = pool.get_metrics();
/// assert_eq!(metrics.total_acquired, 1);
/// assert_eq!(metrics.exhausted_events, 1);
/// assert_eq!(metrics.remaining, 0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolMetrics {
    /// Successful acquisitions
    pub total_acquired: usize,

    /// Acquisitions answered with the exhaustion sentinel
    pub exhausted_events: usize,

    /// Resources not yet issued
    pub remaining: usize,

    /// Resources already issued
    pub issued: usize,

    /// Fraction of capacity issued (0.0 to 1.0)
    pub utilization: f64,

    /// Total capacity
    pub capacity: usize,

    /// How long the pool has been exhausted, if it is
    pub exhausted_for: Option<Duration>,
}

impl PoolMetrics {
    /// Export metrics as a HashMap
    pub fn export(&self) -> HashMap<String, String> {
        let mut metrics = HashMap::new();
        metrics.insert("total_acquired".to_string(), self.total_acquired.to_string());
        metrics.insert("exhausted_events".to_string(), self.exhausted_events.to_string());
        metrics.insert("remaining".to_string(), self.remaining.to_string());
        metrics.insert("issued".to_string(), self.issued.to_string());
        metrics.insert("utilization".to_string(), format!("{:.2}", self.utilization));
        metrics.insert("capacity".to_string(), self.capacity.to_string());
        if let Some(elapsed) = self.exhausted_for {
            metrics.insert(
                "exhausted_for_ms".to_string(),
                elapsed.as_millis().to_string(),
            );
        }
        metrics
    }
}

/// Metrics exporter for Prometheus format
#[cfg(feature = "metrics")]
pub struct MetricsExporter;

#[cfg(feature = "metrics")]
impl MetricsExporter {
    /// Export metrics in Prometheus exposition format
    ///
    /// # Examples
    ///
    /// ```
    /// use esox_resourcepool::ResourcePool;
    /// use std::collections::HashMap;
    ///
    /// let pool = ResourcePool::with_capacity(3);
    /// let _handle = pool.acquire();
    ///
    /// let mut tags = HashMap::new();
    /// tags.insert("service".to_string(), "api".to_string());
    ///
    /// let output = pool.export_metrics_prometheus(Some(&tags)).unwrap();
    /// assert!(output.contains("resourcepool_resources_remaining"));
    /// assert!(output.contains("service=\"api\""));
    /// ```
    pub fn export_prometheus(
        metrics: &PoolMetrics,
        pool_name: &str,
        tags: Option<&HashMap<String, String>>,
    ) -> PoolResult<String> {
        use prometheus::{Encoder, Gauge, IntCounter, IntGauge, Opts, Registry, TextEncoder};

        if tags.is_some_and(|tags| tags.contains_key("pool")) {
            return Err(PoolError::MetricsExport(
                "tag \"pool\" is reserved for the pool name".to_string(),
            ));
        }

        let registry = Registry::new();
        let opts = |name: &str, help: &str| {
            let mut opts = Opts::new(name, help).const_label("pool", pool_name);
            if let Some(tags) = tags {
                for (key, value) in tags {
                    opts = opts.const_label(key.as_str(), value.as_str());
                }
            }
            opts
        };

        let remaining = IntGauge::with_opts(opts(
            "resourcepool_resources_remaining",
            "Resources not yet issued",
        ))
        .map_err(export_error)?;
        remaining.set(metrics.remaining as i64);

        let issued = IntGauge::with_opts(opts(
            "resourcepool_resources_issued",
            "Resources already issued",
        ))
        .map_err(export_error)?;
        issued.set(metrics.issued as i64);

        let utilization = Gauge::with_opts(opts(
            "resourcepool_utilization",
            "Pool utilization ratio",
        ))
        .map_err(export_error)?;
        utilization.set(metrics.utilization);

        let acquired = IntCounter::with_opts(opts(
            "resourcepool_acquired_total",
            "Total successful acquisitions",
        ))
        .map_err(export_error)?;
        acquired.inc_by(metrics.total_acquired as u64);

        let exhausted = IntCounter::with_opts(opts(
            "resourcepool_exhausted_total",
            "Acquisitions refused because the pool was exhausted",
        ))
        .map_err(export_error)?;
        exhausted.inc_by(metrics.exhausted_events as u64);

        registry.register(Box::new(remaining)).map_err(export_error)?;
        registry.register(Box::new(issued)).map_err(export_error)?;
        registry.register(Box::new(utilization)).map_err(export_error)?;
        registry.register(Box::new(acquired)).map_err(export_error)?;
        registry.register(Box::new(exhausted)).map_err(export_error)?;

        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&registry.gather(), &mut buffer)
            .map_err(export_error)?;
        String::from_utf8(buffer).map_err(|err| PoolError::MetricsExport(err.to_string()))
    }
}

#[cfg(feature = "metrics")]
fn export_error(err: prometheus::Error) -> PoolError {
    PoolError::MetricsExport(err.to_string())
}

/// Internal metrics tracker
pub(crate) struct MetricsTracker {
    total_acquired: AtomicUsize,
    exhausted_events: AtomicUsize,
    exhausted_at: Mutex<Option<Instant>>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self {
            total_acquired: AtomicUsize::new(0),
            exhausted_events: AtomicUsize::new(0),
            exhausted_at: Mutex::new(None),
        }
    }

    pub fn record_acquired(&self) {
        self.total_acquired.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty(&self) {
        self.exhausted_events.fetch_add(1, Ordering::Relaxed);
    }

    /// Marks the moment the pool ran dry. Only the first call sticks.
    pub fn mark_exhausted(&self) {
        self.exhausted_at.lock().get_or_insert_with(Instant::now);
    }

    pub fn exhausted_for(&self) -> Option<Duration> {
        self.exhausted_at.lock().map(|at| at.elapsed())
    }

    pub fn get_metrics(&self, remaining: usize, capacity: usize) -> PoolMetrics {
        let issued = capacity.saturating_sub(remaining);
        let utilization = if capacity > 0 {
            issued as f64 / capacity as f64
        } else {
            0.0
        };

        PoolMetrics {
            total_acquired: self.total_acquired.load(Ordering::Relaxed),
            exhausted_events: self.exhausted_events.load(Ordering::Relaxed),
            remaining,
            issued,
            utilization,
            capacity,
            exhausted_for: self.exhausted_for(),
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}
