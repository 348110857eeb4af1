use std::sync::Barrier;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn tagged(w: u32) -> FetchJob<'static> {
    Box::new(move || Ok(RgbaImage::new(w, 1)))
}

#[test]
fn zero_workers_is_rejected() {
    assert!(matches!(
        PoolExecutor::new(0),
        Err(CardError::Validation(_))
    ));
}

#[test]
fn pool_preserves_submission_order() {
    let exec = PoolExecutor::new(4).unwrap();
    assert_eq!(exec.workers(), 4);

    let mut jobs: Vec<FetchJob<'_>> = (1..=8).map(tagged).collect();
    jobs.push(Box::new(|| Err(FetchError::Status(500))));
    let out = exec.run_all(jobs);

    assert_eq!(out.len(), 9);
    for (i, r) in out.iter().take(8).enumerate() {
        assert_eq!(r.as_ref().unwrap().width(), i as u32 + 1);
    }
    assert_eq!(out[8].as_ref().unwrap_err(), &FetchError::Status(500));
}

#[test]
fn pool_runs_jobs_concurrently() {
    // Every job waits for all others; this only completes if they run at the same time.
    let exec = PoolExecutor::new(DEFAULT_FETCH_WORKERS).unwrap();
    let barrier = Barrier::new(7);
    let jobs: Vec<FetchJob<'_>> = (0..7)
        .map(|_| {
            let barrier = &barrier;
            Box::new(move || {
                barrier.wait();
                Ok(RgbaImage::new(1, 1))
            }) as FetchJob<'_>
        })
        .collect();
    let out = exec.run_all(jobs);
    assert!(out.iter().all(Result::is_ok));
}

#[test]
fn inline_runs_in_order_on_caller() {
    let counter = AtomicUsize::new(0);
    let jobs: Vec<FetchJob<'_>> = (0..3)
        .map(|_| {
            let counter = &counter;
            Box::new(move || {
                let n = counter.fetch_add(1, Ordering::SeqCst) as u32;
                Ok(RgbaImage::new(n + 1, 1))
            }) as FetchJob<'_>
        })
        .collect();
    let widths: Vec<u32> = InlineExecutor
        .run_all(jobs)
        .into_iter()
        .map(|r| r.unwrap().width())
        .collect();
    assert_eq!(widths, vec![1, 2, 3]);
}
