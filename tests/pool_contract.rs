use esox_resourcepool::{
    global, PoolConfiguration, PoolError, PoolState, ResourcePool, DEFAULT_CAPACITY,
};
use std::collections::HashSet;

#[test]
fn first_capacity_calls_succeed_then_sentinel() {
    for capacity in [0, 1, 2, 7, 10, 33] {
        let pool = ResourcePool::with_capacity(capacity);
        let mut seen = HashSet::new();

        for n in 1..=capacity {
            let resource = pool.acquire().expect("pool should still have capacity");
            assert!(seen.insert(resource.id()), "handle issued twice");
            assert_eq!(pool.remaining(), capacity - n);
        }

        assert!(pool.acquire().is_none());
        assert_eq!(pool.remaining(), 0);
        assert_eq!(pool.state(), PoolState::Exhausted);
    }
}

#[test]
fn configured_pool_reports_health_and_metrics() {
    let config = PoolConfiguration::new()
        .with_capacity(4)
        .with_pool_name("workers")
        .with_low_watermark(0.25);
    let pool = ResourcePool::new(config).unwrap();
    assert_eq!(pool.name(), "workers");

    pool.acquire();
    pool.acquire();
    pool.acquire();
    let health = pool.get_health_status();
    assert!(health.is_healthy());
    assert_eq!(health.warning_count, 1);

    pool.acquire();
    assert!(!pool.get_health_status().is_healthy());

    let exported = pool.export_metrics();
    assert_eq!(exported["total_acquired"], "4");
    assert_eq!(exported["remaining"], "0");
    assert!(exported.contains_key("exhausted_for_ms"));
}

#[cfg(feature = "metrics")]
#[test]
fn prometheus_export_carries_pool_label() {
    let pool = ResourcePool::new(PoolConfiguration::new().with_pool_name("db")).unwrap();
    pool.acquire();

    let output = pool.export_metrics_prometheus(None).unwrap();
    assert!(output.contains("resourcepool_acquired_total{pool=\"db\"} 1"));
    assert!(output.contains("resourcepool_resources_remaining{pool=\"db\"} 9"));
}

// The global pool is process-wide, so every assertion about it lives in this one test.
#[test]
fn global_pool_initializes_once_and_depletes() {
    assert!(!global::is_initialized());

    let pool = global::initialize_with(PoolConfiguration::default()).unwrap();
    assert!(global::is_initialized());
    assert_eq!(pool.capacity(), DEFAULT_CAPACITY);

    assert_eq!(
        global::initialize_with(PoolConfiguration::new().with_capacity(3)).unwrap_err(),
        PoolError::AlreadyInitialized
    );
    assert_eq!(
        global::initialize_with(PoolConfiguration::new().with_pool_name("")).unwrap_err(),
        PoolError::AlreadyInitialized
    );
    assert!(std::ptr::eq(global::initialize(), pool));

    let first = global::get_connection().expect("fresh pool has capacity");
    assert_eq!(first.id(), DEFAULT_CAPACITY - 1);
    assert_eq!(pool.remaining(), 9);

    for _ in 0..9 {
        assert!(global::get_connection().is_some());
    }
    assert!(global::get_connection().is_none());
    assert_eq!(pool.remaining(), 0);
    assert_eq!(pool.get_metrics().exhausted_events, 1);
}
