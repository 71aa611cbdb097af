//! Pool configuration options

use crate::errors::{PoolError, PoolResult};

/// Number of resources a pool holds when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Configuration for resource pool construction
///
/// # Examples
///
/// ```
/// use esox_resourcepool::PoolConfiguration;
///
/// let config = PoolConfiguration::new()
///     .with_capacity(4)
///     .with_pool_name("db")
///     .with_low_watermark(0.25);
///
/// assert_eq!(config.capacity, 4);
/// assert_eq!(config.pool_name, "db");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolConfiguration {
    /// Number of resources created at initialization. Zero yields a pool
    /// that starts exhausted.
    pub capacity: usize,

    /// Name used in log lines and metric labels
    pub pool_name: String,

    /// Fraction of capacity at or below which health reports a warning
    pub low_watermark: f64,
}

impl Default for PoolConfiguration {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            pool_name: "connections".to_string(),
            low_watermark: 0.1,
        }
    }
}

impl PoolConfiguration {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of resources
    ///
    /// # Examples
    ///
    /// ```
    /// use esox_resourcepool::PoolConfiguration;
    ///
    /// let config = PoolConfiguration::new().with_capacity(0);
    /// assert_eq!(config.capacity, 0);
    /// ```
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the pool name
    pub fn with_pool_name(mut self, name: impl Into<String>) -> Self {
        self.pool_name = name.into();
        self
    }

    /// Set the low watermark fraction
    pub fn with_low_watermark(mut self, fraction: f64) -> Self {
        self.low_watermark = fraction;
        self
    }

    /// Check that the configuration can build a pool
    pub fn validate(&self) -> PoolResult<()> {
        if self.pool_name.trim().is_empty() {
            return Err(PoolError::InvalidConfiguration(
                "pool name must not be empty".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.low_watermark) {
            return Err(PoolError::InvalidConfiguration(format!(
                "low watermark must be within [0, 1], got {}",
                self.low_watermark
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_ten() {
        let config = PoolConfiguration::default();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.pool_name, "connections");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        let config = PoolConfiguration::new().with_pool_name("  ");
        assert!(matches!(
            config.validate(),
            Err(PoolError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_watermark_out_of_range() {
        assert!(PoolConfiguration::new().with_low_watermark(1.5).validate().is_err());
        assert!(PoolConfiguration::new().with_low_watermark(-0.1).validate().is_err());
        assert!(PoolConfiguration::new().with_low_watermark(f64::NAN).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_fills_defaults() {
        let config: PoolConfiguration = serde_json::from_str(r#"{"capacity": 3}"#).unwrap();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.pool_name, "connections");
        assert_eq!(config.low_watermark, 0.1);
    }
}
