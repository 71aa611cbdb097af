//! Opaque resource handles

use std::fmt;

/// A single unit of pool capacity.
///
/// Handles carry identity only. They can't be built, cloned or defaulted
/// outside this crate; the only way to obtain one is to acquire it from a
/// [`ResourcePool`](crate::ResourcePool).
///
/// # Examples
///
/// ```
/// use esox_resourcepool::ResourcePool;
///
/// let pool = ResourcePool::with_capacity(2);
/// let a = pool.acquire().unwrap();
/// let b = pool.acquire().unwrap();
/// assert_ne!(a, b);
/// assert_eq!(a.pool_id(), b.pool_id());
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Resource {
    pool_id: usize,
    id: usize,
}

impl Resource {
    /// Internal factory, called once per slot while a pool is populated.
    pub(crate) fn make(pool_id: usize, id: usize) -> Self {
        Self { pool_id, id }
    }

    /// Slot index this handle was created for
    pub fn id(&self) -> usize {
        self.id
    }

    /// Identifier of the pool that owns this handle
    pub fn pool_id(&self) -> usize {
        self.pool_id
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resource@{}:{}", self.pool_id, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_identity() {
        let resource = Resource::make(3, 7);
        assert_eq!(resource.to_string(), "Resource@3:7");
    }

    #[test]
    fn test_same_slot_in_different_pools_differs() {
        assert_ne!(Resource::make(1, 0), Resource::make(2, 0));
    }
}
