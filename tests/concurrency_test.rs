use feasibility::application::engine::FeasibilityEngine;
use feasibility::domain::output::Output;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_engine_across_tasks() {
    let engine = Arc::new(FeasibilityEngine::new());
    let mut rng = StdRng::seed_from_u64(29);
    let inputs: Vec<_> = (0..64)
        .map(|_| common::random_assumptions(&mut rng))
        .collect();

    let expected: Vec<Output> = inputs.iter().map(|a| engine.compute(a)).collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|a| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.compute(&a) })
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FeasibilityEngine>();
    assert_send_sync::<Output>();
}
