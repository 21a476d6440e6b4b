use std::{ops::Range, sync::Arc};

use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// A span is out of order, overlaps its predecessor or exceeds the buffer.
    #[error("invalid span {0}..{1} for a buffer of length {2}")]
    InvalidPartition(usize, usize, usize),
}

/// A fixed-size pool of worker threads.
///
/// The pool is built once and shared by every parallel filter call. Cloning
/// the handle is cheap and refers to the same threads.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    pool: Arc<ThreadPool>,
    num_threads: usize,
}

impl WorkerPool {
    /// Build a pool with exactly `num_threads` workers.
    ///
    /// # Errors
    ///
    /// Returns [`ParallelError::InvalidThreadCount`] when `num_threads` is zero.
    pub fn new(num_threads: usize) -> Result<Self, ParallelError> {
        if num_threads == 0 {
            return Err(ParallelError::InvalidThreadCount(num_threads));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("convbench-worker-{i}"))
            .build()
            .map_err(|e| ParallelError::BuildError(e.to_string()))?;

        log::debug!("built worker pool with {num_threads} threads");

        Ok(Self {
            pool: Arc::new(pool),
            num_threads,
        })
    }

    /// Number of worker threads in the pool.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Run `op` on each disjoint span of `dst`, one task per span.
    ///
    /// `spans` must be sorted and non-overlapping. `op` receives the position of
    /// the span in `spans` together with the mutable sub-slice it owns. The call
    /// blocks until every task has finished.
    ///
    /// # Arguments
    ///
    /// * `dst` - The destination buffer shared between the workers.
    /// * `spans` - The index ranges of `dst` assigned to each task.
    /// * `op` - The operation to run on each span.
    ///
    /// # Errors
    ///
    /// Returns [`ParallelError::InvalidPartition`] if a span is malformed.
    pub fn for_each_span<T, F>(
        &self,
        dst: &mut [T],
        spans: &[Range<usize>],
        op: F,
    ) -> Result<(), ParallelError>
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Sync,
    {
        let len = dst.len();
        let mut chunks = Vec::with_capacity(spans.len());
        let mut rest = dst;
        let mut offset = 0;

        for span in spans {
            if span.start < offset || span.start > span.end || span.end > len {
                return Err(ParallelError::InvalidPartition(span.start, span.end, len));
            }
            let (_, tail) = std::mem::take(&mut rest).split_at_mut(span.start - offset);
            let (chunk, tail) = tail.split_at_mut(span.end - span.start);
            chunks.push(chunk);
            rest = tail;
            offset = span.end;
        }

        let op = &op;
        self.pool.scope(|s| {
            for (k, chunk) in chunks.into_iter().enumerate() {
                if chunk.is_empty() {
                    continue;
                }
                s.spawn(move |_| op(k, chunk));
            }
        });

        Ok(())
    }
}

/// Controls how filter operations are executed.
#[derive(Debug, Clone, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// This is the reference implementation every other strategy must match.
    #[default]
    Serial,

    /// Split the work statically across the threads of a [`WorkerPool`].
    Parallel(WorkerPool),
}

impl ExecutionStrategy {
    /// Short human readable name of the strategy.
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionStrategy::Serial => "sequential",
            ExecutionStrategy::Parallel(_) => "parallel",
        }
    }
}

/// Split `0..len` into at most `parts` contiguous, non-empty ranges.
///
/// Range sizes differ by at most one; the first `len % parts` ranges take the
/// extra element. Returns an empty vector when `len` or `parts` is zero.
///
/// # Examples
///
/// ```
/// use convbench_imgproc::parallel::partition_even;
///
/// assert_eq!(partition_even(10, 3), vec![0..4, 4..7, 7..10]);
/// assert_eq!(partition_even(2, 4), vec![0..1, 1..2]);
/// ```
pub fn partition_even(len: usize, parts: usize) -> Vec<Range<usize>> {
    if len == 0 || parts == 0 {
        return Vec::new();
    }

    let parts = parts.min(len);
    let base = len / parts;
    let extra = len % parts;

    let mut start = 0;
    (0..parts)
        .map(|i| {
            let size = base + usize::from(i < extra);
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_even_split() {
        assert_eq!(partition_even(12, 4), vec![0..3, 3..6, 6..9, 9..12]);
        assert_eq!(partition_even(7, 3), vec![0..3, 3..5, 5..7]);
        assert_eq!(partition_even(1, 1), vec![0..1]);
    }

    #[test]
    fn test_partition_even_covers_everything() {
        for len in 0..40 {
            for parts in 1..9 {
                let ranges = partition_even(len, parts);
                let covered: Vec<usize> = ranges.iter().cloned().flatten().collect();
                assert_eq!(covered, (0..len).collect::<Vec<_>>());
                assert!(ranges.iter().all(|r| !r.is_empty()));
                assert!(ranges.len() <= parts);
            }
        }
    }

    #[test]
    fn test_partition_even_degenerate() {
        assert!(partition_even(0, 4).is_empty());
        assert!(partition_even(5, 0).is_empty());
    }

    #[test]
    fn test_pool_zero_threads() {
        let res = WorkerPool::new(0);
        assert!(matches!(res, Err(ParallelError::InvalidThreadCount(0))));
    }

    #[test]
    fn test_for_each_span() -> Result<(), ParallelError> {
        let pool = WorkerPool::new(3)?;
        assert_eq!(pool.num_threads(), 3);

        let mut dst = vec![0usize; 10];
        let spans = partition_even(dst.len(), pool.num_threads());
        pool.for_each_span(&mut dst, &spans, |k, chunk| {
            chunk.iter_mut().for_each(|v| *v = k + 1);
        })?;
        assert_eq!(dst, vec![1, 1, 1, 1, 2, 2, 2, 3, 3, 3]);

        Ok(())
    }

    #[test]
    fn test_for_each_span_with_gaps() -> Result<(), ParallelError> {
        let pool = WorkerPool::new(2)?;
        let mut dst = vec![0u8; 8];
        pool.for_each_span(&mut dst, &[1..3, 3..3, 5..7], |_, chunk| {
            chunk.iter_mut().for_each(|v| *v = 9);
        })?;
        assert_eq!(dst, vec![0, 9, 9, 0, 0, 9, 9, 0]);

        Ok(())
    }

    #[test]
    fn test_for_each_span_invalid() -> Result<(), ParallelError> {
        let pool = WorkerPool::new(2)?;
        let mut dst = vec![0u8; 4];

        let res = pool.for_each_span(&mut dst, &[0..3, 2..4], |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidPartition(2, 4, 4)));

        let res = pool.for_each_span(&mut dst, &[0..5], |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidPartition(0, 5, 4)));

        Ok(())
    }

    #[test]
    fn test_strategy_label() -> Result<(), ParallelError> {
        assert_eq!(ExecutionStrategy::default().label(), "sequential");
        let strategy = ExecutionStrategy::Parallel(WorkerPool::new(1)?);
        assert_eq!(strategy.label(), "parallel");

        Ok(())
    }
}
