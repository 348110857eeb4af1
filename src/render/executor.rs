use image::RgbaImage;
use rayon::prelude::*;

use crate::foundation::error::{CardError, CardResult, FetchError};

/// Outcome of one image fetch.
pub type ImageResult = Result<RgbaImage, FetchError>;

/// One unit of fetch work handed to a [`FetchExecutor`].
pub type FetchJob<'a> = Box<dyn FnOnce() -> ImageResult + Send + 'a>;

/// Default worker count of [`PoolExecutor`].
pub const DEFAULT_FETCH_WORKERS: usize = 10;

/// Bounded execution service for independent fetches.
///
/// `run_all` returns once every job finished, with results in submission order.
pub trait FetchExecutor: Send + Sync {
    /// Run `jobs` and collect their results in order.
    fn run_all(&self, jobs: Vec<FetchJob<'_>>) -> Vec<ImageResult>;
}

/// Runs jobs on a dedicated rayon pool. Share one instance across requests; once all workers are
/// busy, further jobs queue.
#[derive(Debug)]
pub struct PoolExecutor {
    pool: rayon::ThreadPool,
}

impl PoolExecutor {
    /// Build a pool with `workers` threads.
    pub fn new(workers: usize) -> CardResult<Self> {
        if workers == 0 {
            return Err(CardError::validation("fetch workers must be >= 1"));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("outfit-fetch-{i}"))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build fetch thread pool: {e}"))?;
        Ok(Self { pool })
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl FetchExecutor for PoolExecutor {
    fn run_all(&self, jobs: Vec<FetchJob<'_>>) -> Vec<ImageResult> {
        self.pool.install(|| {
            jobs.into_par_iter()
                .with_max_len(1)
                .map(|job| job())
                .collect()
        })
    }
}

/// Runs jobs one after another on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineExecutor;

impl FetchExecutor for InlineExecutor {
    fn run_all(&self, jobs: Vec<FetchJob<'_>>) -> Vec<ImageResult> {
        jobs.into_iter().map(|job| job()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/executor.rs"]
mod tests;
