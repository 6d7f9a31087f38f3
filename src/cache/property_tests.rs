//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's behavioral guarantees over arbitrary
//! operation sequences.

use proptest::prelude::*;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys (non-empty, bounded length)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, hits and misses reflect exactly the
    // get outcomes that occurred, and total_entries matches the map size.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(TEST_DEFAULT_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value);
                }
                CacheOp::Get { key } => {
                    match store.get(&key) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::Delete { key } => {
                    let _ = store.delete(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }

    // For any key-value pair, storing the pair and then retrieving it before
    // expiration returns the exact value that was stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), value.clone());

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // For any key in the cache, after a delete a subsequent get returns
    // absence, and deleting again is a harmless no-op.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), value);

        prop_assert!(store.get(&key).is_some(), "Key should exist before delete");

        prop_assert!(store.delete(&key), "First delete should remove the entry");
        prop_assert!(store.get(&key).is_none(), "Key should not exist after delete");

        let len_before = store.len();
        prop_assert!(!store.delete(&key), "Second delete should be a no-op");
        prop_assert_eq!(store.len(), len_before, "Idempotent delete must not change the cache");
    }

    // For any key, storing V1 and then V2 with the same key results in get
    // returning V2, never V1.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), value1);
        store.set(key.clone(), value2.clone());

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value2), "Overwrite should return new value");

        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // After clear, every previously-set key is absent, expired or not.
    #[test]
    fn prop_clear_totality(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..30)
    ) {
        let mut store = CacheStore::new(TEST_DEFAULT_TTL);

        for (key, value) in &entries {
            store.set(key.clone(), value.clone());
        }

        store.clear();

        prop_assert!(store.is_empty(), "Cache should be empty after clear");
        for (key, _) in &entries {
            prop_assert!(store.get(key).is_none(), "Key should be absent after clear");
        }
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // For any entry stored with a TTL, once the TTL has elapsed a get
    // returns absence, and the entry is gone from backing storage after
    // that single get.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in key_strategy(),
        value in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_DEFAULT_TTL);

        let ttl = Duration::from_millis(30);
        store.set_with_ttl(key.clone(), value.clone(), ttl);

        let result_before = store.get(&key);
        prop_assert_eq!(result_before, Some(value), "Value should match before expiration");

        // Wait for TTL to expire (small buffer for timing)
        sleep(Duration::from_millis(40));

        prop_assert!(store.get(&key).is_none(), "Entry should not be found after TTL expires");
        prop_assert_eq!(store.cleanup_expired(), 0, "Lazy expiry should already have removed it");
    }
}

// == Property Test for Concurrent Operation Correctness ==
// Exercises the cache through the shared-lock handle path.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // For any set of concurrent operations, every observed value is the
    // argument of some completed set for that key, and internal state stays
    // consistent.
    #[test]
    fn prop_concurrent_operation_correctness(
        initial_entries in prop::collection::vec(
            (key_strategy(), value_strategy()),
            1..20
        ),
        operations in prop::collection::vec(cache_op_strategy(), 10..50)
    ) {
        use std::sync::Arc;
        use tokio::sync::RwLock;

        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let store = Arc::new(RwLock::new(CacheStore::new(TEST_DEFAULT_TTL)));

            {
                let mut cache = store.write().await;
                for (key, value) in &initial_entries {
                    cache.set(key.clone(), value.clone());
                }
            }

            let mut handles = vec![];

            for op in operations {
                let store_clone = Arc::clone(&store);

                let handle = tokio::spawn(async move {
                    match op {
                        CacheOp::Set { key, value } => {
                            let mut cache = store_clone.write().await;
                            cache.set(key, value);
                        }
                        CacheOp::Get { key } => {
                            let mut cache = store_clone.write().await;
                            if let Some(value) = cache.get(&key) {
                                // A torn entry would produce a value no set
                                // ever stored; all written values are
                                // non-empty and bounded.
                                assert!(!value.is_empty());
                                assert!(value.len() <= 256);
                            }
                        }
                        CacheOp::Delete { key } => {
                            let mut cache = store_clone.write().await;
                            let _ = cache.delete(&key);
                        }
                    }
                });

                handles.push(handle);
            }

            for handle in handles {
                handle.await.expect("Task should not panic");
            }

            // Cache ends in a consistent state
            let cache = store.read().await;
            let stats = cache.stats();
            prop_assert_eq!(stats.total_entries, cache.len());

            let hit_rate = stats.hit_rate();
            prop_assert!(
                (0.0..=1.0).contains(&hit_rate),
                "Hit rate should be between 0 and 1, got {}",
                hit_rate
            );

            Ok(())
        })?;
    }
}
