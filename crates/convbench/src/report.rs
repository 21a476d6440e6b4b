use std::io::{self, Write};

use crate::timing::{BenchSummary, FileTiming};

const FILE_WIDTH: usize = 40;
const SECONDS_WIDTH: usize = 15;
const RULE_WIDTH: usize = 80;

/// Format a speedup factor, `n/a` when it is undefined.
pub fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(s) if s.is_finite() => format!("x{s:.2}"),
        _ => String::from("n/a"),
    }
}

/// Streams the benchmark table to a writer.
///
/// The header is written once, rows as files finish and the summary at the
/// end of the run.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the report and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the worker configuration.
    pub fn banner(&mut self, num_threads: usize, available: usize) -> io::Result<()> {
        writeln!(self.out, "--- parallel configuration ---")?;
        writeln!(self.out, "Worker threads:       {num_threads}")?;
        writeln!(self.out, "Available processors: {available}")?;
        writeln!(self.out, "{}", "-".repeat(30))
    }

    /// Print the column titles.
    pub fn header(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<FILE_WIDTH$}{:<SECONDS_WIDTH$}{:<SECONDS_WIDTH$}{}",
            "File", "Sequential(s)", "Parallel(s)", "Speedup"
        )?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }

    /// Print one file.
    pub fn row(&mut self, timing: &FileTiming) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<FILE_WIDTH$}{:<SECONDS_WIDTH$.6}{:<SECONDS_WIDTH$.6}{}",
            timing.file_name,
            timing.sequential.as_secs_f64(),
            timing.parallel.as_secs_f64(),
            format_speedup(timing.speedup())
        )?;
        self.out.flush()
    }

    /// Print the totals.
    pub fn summary(&mut self, summary: &BenchSummary) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(self.out, "Summary ({} files):", summary.file_count())?;
        writeln!(
            self.out,
            "Total sequential time: {:.6} s",
            summary.total_sequential.as_secs_f64()
        )?;
        writeln!(
            self.out,
            "Total parallel time:   {:.6} s",
            summary.total_parallel.as_secs_f64()
        )?;
        writeln!(
            self.out,
            "Overall speedup:       {}",
            format_speedup(summary.overall_speedup())
        )?;
        writeln!(
            self.out,
            "Mean per-file speedup: {}",
            format_speedup(summary.mean_speedup())
        )?;
        self.out.flush()
    }
}
