//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cached derived value against a simple model
//! over random operation sequences.

use proptest::prelude::*;
use std::cell::Cell;

use crate::cache::{CachedDerivedValue, Lookup};

// == Strategies ==
#[derive(Debug, Clone)]
enum CacheOp {
    SetPrimary(i64),
    Resolve,
    ResolveFailing,
    Seed(i64),
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (-1000i64..1000).prop_map(CacheOp::SetPrimary),
        Just(CacheOp::Resolve),
        Just(CacheOp::ResolveFailing),
        (-1000i64..1000).prop_map(CacheOp::Seed),
    ]
}

/// Same as `cache_op_strategy` without pre-seeding, which can break coherence.
fn coherent_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (-1000i64..1000).prop_map(CacheOp::SetPrimary),
        Just(CacheOp::Resolve),
        Just(CacheOp::ResolveFailing),
    ]
}

fn transform(p: &i64) -> i64 {
    p * 3 + 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Statistics and transform call counts match a reference model
    #[test]
    fn prop_statistics_accuracy(
        initial in -1000i64..1000,
        ops in prop::collection::vec(cache_op_strategy(), 1..60)
    ) {
        let mut cell: CachedDerivedValue<i64, i64> = CachedDerivedValue::new(initial);
        let calls = Cell::new(0u64);

        let mut model: Option<i64> = None;
        let (mut hits, mut misses, mut failures, mut invalidations) = (0u64, 0u64, 0u64, 0u64);

        for op in ops {
            match op {
                CacheOp::SetPrimary(v) => {
                    if model.take().is_some() {
                        invalidations += 1;
                    }
                    cell.set_primary(v);
                }
                CacheOp::Resolve => {
                    let resolved = cell
                        .resolve(|p| {
                            calls.set(calls.get() + 1);
                            Ok::<_, ()>(transform(p))
                        })
                        .unwrap();
                    match model {
                        Some(expected) => {
                            hits += 1;
                            prop_assert_eq!(resolved.lookup, Lookup::Hit);
                            prop_assert_eq!(resolved.value, expected);
                        }
                        None => {
                            misses += 1;
                            prop_assert_eq!(resolved.lookup, Lookup::Miss);
                            model = Some(resolved.value);
                        }
                    }
                }
                CacheOp::ResolveFailing => {
                    let result = cell.resolve(|_| {
                        calls.set(calls.get() + 1);
                        Err::<i64, _>("boom")
                    });
                    match model {
                        Some(expected) => {
                            hits += 1;
                            prop_assert_eq!(result.map(|r| r.value), Ok(expected));
                        }
                        None => {
                            misses += 1;
                            failures += 1;
                            prop_assert_eq!(result.map(|r| r.value), Err("boom"));
                        }
                    }
                }
                CacheOp::Seed(v) => {
                    cell.set_derived_cached(v);
                    model = Some(v);
                }
            }

            prop_assert_eq!(cell.derived_cached().copied(), model);
        }

        let stats = cell.stats();
        prop_assert_eq!(stats.hits, hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, misses, "Misses mismatch");
        prop_assert_eq!(stats.failures, failures, "Failures mismatch");
        prop_assert_eq!(stats.invalidations, invalidations, "Invalidations mismatch");
        prop_assert_eq!(calls.get(), misses, "Transform should run once per miss");
    }

    // Without pre-seeding, a present derived value always matches the primary
    #[test]
    fn prop_cache_coherence(
        initial in -1000i64..1000,
        ops in prop::collection::vec(coherent_op_strategy(), 1..60)
    ) {
        let mut cell: CachedDerivedValue<i64, i64> = CachedDerivedValue::new(initial);

        for op in ops {
            match op {
                CacheOp::SetPrimary(v) => cell.set_primary(v),
                CacheOp::Resolve => {
                    let _ = cell.resolve(|p| Ok::<_, ()>(transform(p)));
                }
                CacheOp::ResolveFailing => {
                    let _ = cell.resolve(|_| Err::<i64, _>(()));
                }
                CacheOp::Seed(_) => unreachable!("not generated"),
            }

            if let Some(derived) = cell.derived_cached() {
                prop_assert_eq!(*derived, transform(cell.primary()));
            }
        }
    }

    // Replacing the primary always empties the cache, even with the same value
    #[test]
    fn prop_set_primary_invalidates(
        primary in -1000i64..1000,
        seeded in prop::option::of(-1000i64..1000),
        same_value in any::<bool>(),
        other in -1000i64..1000
    ) {
        let mut cell = match seeded {
            Some(d) => CachedDerivedValue::with_derived(primary, d),
            None => CachedDerivedValue::new(primary),
        };

        let next = if same_value { primary } else { other };
        cell.set_primary(next);

        prop_assert!(cell.derived_cached().is_none());
        prop_assert_eq!(*cell.primary(), next);
        prop_assert_eq!(cell.stats().invalidations, u64::from(seeded.is_some()));
    }

    // Back-to-back resolves run the transform at most once
    #[test]
    fn prop_idempotent_resolve(primary in -1000i64..1000, repeats in 2usize..10) {
        let mut cell: CachedDerivedValue<i64, i64> = CachedDerivedValue::new(primary);
        let calls = Cell::new(0u32);

        let mut values = Vec::new();
        for _ in 0..repeats {
            let resolved = cell
                .resolve(|p| {
                    calls.set(calls.get() + 1);
                    Ok::<_, ()>(transform(p))
                })
                .unwrap();
            values.push(resolved.value);
        }

        prop_assert_eq!(calls.get(), 1);
        prop_assert!(values.iter().all(|v| *v == transform(&primary)));
    }
}
