//! Allocator uniqueness under concurrent callers.

use std::collections::HashSet;
use std::sync::Arc;
use tinylink::domain::repositories::CounterRepository;
use tinylink::infrastructure::persistence::MemoryCounterRepository;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_allocations_have_no_gaps_or_repeats() {
    const TASKS: u64 = 200;

    let counter = Arc::new(MemoryCounterRepository::new());
    counter.ensure_initialized(0).await.unwrap();

    let mut handles = Vec::with_capacity(TASKS as usize);
    for _ in 0..TASKS {
        let counter = Arc::clone(&counter);
        handles.push(tokio::spawn(
            async move { counter.allocate_next().await.unwrap() },
        ));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        let value = handle.await.unwrap();
        assert!(seen.insert(value), "value {} allocated twice", value);
    }

    let expected: HashSet<u64> = (1..=TASKS).collect();
    assert_eq!(seen, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_allocations_from_offset() {
    const TASKS: u64 = 50;
    const INITIAL: u64 = 1_000;

    let counter = Arc::new(MemoryCounterRepository::new());
    counter.ensure_initialized(INITIAL).await.unwrap();

    let mut handles = Vec::with_capacity(TASKS as usize);
    for _ in 0..TASKS {
        let counter = Arc::clone(&counter);
        handles.push(tokio::spawn(
            async move { counter.allocate_next().await.unwrap() },
        ));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        seen.insert(handle.await.unwrap());
    }

    let expected: HashSet<u64> = (INITIAL + 1..=INITIAL + TASKS).collect();
    assert_eq!(seen, expected);
}
