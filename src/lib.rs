//! # EsoxSolutions.ResourcePool
//!
//! Fixed-capacity pool of opaque resource handles that are built eagerly and
//! issued at most once each.
//!
//! ## Features
//!
//! - Eager population of every slot when the pool is built
//! - Lock-free acquisition, safe under concurrent callers
//! - Explicit exhaustion sentinel instead of a panic or hard failure
//! - Handles that can't be forged or duplicated outside the crate
//! - Process-wide pool with explicit one-time initialization
//! - Health monitoring and metrics
//! - Prometheus metrics export
//!
//! ## Quick Start
//!
//! ```rust
//! use esox_resourcepool::ResourcePool;
//!
//! let pool = ResourcePool::with_capacity(10);
//! match pool.acquire() {
//!     Some(resource) => println!("Got: {}", resource),
//!     None => println!("Pool exhausted"),
//! }
//! assert_eq!(pool.remaining(), 9);
//! ```

mod pool;
mod config;
mod metrics;
mod health;
mod resource;
mod errors;
pub mod global;

pub use pool::{PoolState, ResourcePool};
pub use config::{PoolConfiguration, DEFAULT_CAPACITY};
pub use metrics::PoolMetrics;
#[cfg(feature = "metrics")]
pub use metrics::MetricsExporter;
pub use health::HealthStatus;
pub use resource::Resource;
pub use errors::{PoolError, PoolResult};
