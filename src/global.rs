//! Process-wide pool, initialized once on first use

use crate::config::PoolConfiguration;
use crate::errors::{PoolError, PoolResult};
use crate::pool::ResourcePool;
use crate::resource::Resource;

use std::sync::OnceLock;

static POOL: OnceLock<ResourcePool> = OnceLock::new();

/// Get the global pool, building it with the default configuration if this
/// is the first call. Concurrent first calls build the pool exactly once.
pub fn initialize() -> &'static ResourcePool {
    POOL.get_or_init(|| ResourcePool::populate(PoolConfiguration::default()))
}

/// Build the global pool from `config`.
///
/// Fails with [`PoolError::AlreadyInitialized`] when the pool already exists,
/// whichever configuration it was built from.
pub fn initialize_with(config: PoolConfiguration) -> PoolResult<&'static ResourcePool> {
    if is_initialized() {
        return Err(PoolError::AlreadyInitialized);
    }
    config.validate()?;

    // Another thread may still win the race between the check and the init.
    let mut installed = false;
    let pool = POOL.get_or_init(|| {
        installed = true;
        ResourcePool::populate(config)
    });

    if installed {
        Ok(pool)
    } else {
        Err(PoolError::AlreadyInitialized)
    }
}

/// Whether the global pool has been built
pub fn is_initialized() -> bool {
    POOL.get().is_some()
}

/// Acquire one resource from the global pool, initializing it if needed
pub fn get_connection() -> Option<&'static Resource> {
    initialize().acquire()
}
