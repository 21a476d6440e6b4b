use std::time::{Duration, Instant};

/// Elapsed wall-clock time of one strategy on one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    /// Label of the execution strategy.
    pub strategy: &'static str,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
}

/// Run `op` and measure its wall-clock duration.
///
/// The duration is only returned when `op` succeeds.
pub fn timed<T, E>(
    strategy: &'static str,
    op: impl FnOnce() -> Result<T, E>,
) -> Result<(T, TimingSample), E> {
    let start = Instant::now();
    let value = op()?;
    let sample = TimingSample {
        strategy,
        elapsed: start.elapsed(),
    };
    Ok((value, sample))
}

/// Ratio `sequential / parallel`, or `None` when `parallel` is zero.
pub fn speedup(sequential: Duration, parallel: Duration) -> Option<f64> {
    if parallel.is_zero() {
        return None;
    }
    Some(sequential.as_secs_f64() / parallel.as_secs_f64())
}

/// Timings of both strategies for one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTiming {
    /// File name of the input, without directory.
    pub file_name: String,
    /// Elapsed time of the sequential pipeline.
    pub sequential: Duration,
    /// Elapsed time of the parallel pipeline.
    pub parallel: Duration,
}

impl FileTiming {
    /// Speedup of the parallel pipeline over the sequential one.
    pub fn speedup(&self) -> Option<f64> {
        speedup(self.sequential, self.parallel)
    }
}

/// Running totals over every processed file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchSummary {
    /// Per-file timings in processing order.
    pub files: Vec<FileTiming>,
    /// Sum of the sequential timings.
    pub total_sequential: Duration,
    /// Sum of the parallel timings.
    pub total_parallel: Duration,
}

impl BenchSummary {
    /// Add one file to the totals.
    pub fn record(&mut self, timing: FileTiming) {
        self.total_sequential += timing.sequential;
        self.total_parallel += timing.parallel;
        self.files.push(timing);
    }

    /// Number of processed files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Speedup over the whole run: total sequential / total parallel.
    pub fn overall_speedup(&self) -> Option<f64> {
        speedup(self.total_sequential, self.total_parallel)
    }

    /// Mean of the per-file speedups, ignoring files whose speedup is undefined.
    pub fn mean_speedup(&self) -> Option<f64> {
        let speedups: Vec<f64> = self.files.iter().filter_map(FileTiming::speedup).collect();
        if speedups.is_empty() {
            return None;
        }
        Some(speedups.iter().sum::<f64>() / speedups.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(name: &str, seq_ms: u64, par_ms: u64) -> FileTiming {
        FileTiming {
            file_name: name.to_string(),
            sequential: Duration::from_millis(seq_ms),
            parallel: Duration::from_millis(par_ms),
        }
    }

    #[test]
    fn test_speedup() {
        let s = speedup(Duration::from_millis(300), Duration::from_millis(100));
        assert!((s.unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_speedup_zero_parallel() {
        assert_eq!(speedup(Duration::from_millis(5), Duration::ZERO), None);
        assert_eq!(speedup(Duration::ZERO, Duration::ZERO), None);
        assert_eq!(timing("a.png", 10, 0).speedup(), None);
    }

    #[test]
    fn test_summary_totals() {
        let mut summary = BenchSummary::default();
        assert_eq!(summary.overall_speedup(), None);
        assert_eq!(summary.mean_speedup(), None);

        summary.record(timing("a.png", 400, 100));
        summary.record(timing("b.png", 200, 100));
        summary.record(timing("c.png", 50, 0));

        assert_eq!(summary.file_count(), 3);
        assert_eq!(summary.total_sequential, Duration::from_millis(650));
        assert_eq!(summary.total_parallel, Duration::from_millis(200));
        assert!((summary.overall_speedup().unwrap() - 3.25).abs() < 1e-12);
        // c.png has no defined speedup and is left out of the mean
        assert!((summary.mean_speedup().unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_timed() {
        let res: Result<(u32, TimingSample), ()> = timed("sequential", || Ok(7));
        let (value, sample) = res.unwrap();
        assert_eq!(value, 7);
        assert_eq!(sample.strategy, "sequential");

        let res: Result<(u32, TimingSample), &str> = timed("parallel", || Err("boom"));
        assert_eq!(res.err(), Some("boom"));
    }
}
