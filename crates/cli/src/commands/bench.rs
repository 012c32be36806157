//! `q16 bench`: wall-clock timing of the kernel sweeps.
//!
//! A quick on-target figure; the criterion and iai-callgrind suites in
//! `q16-math` are the tracked benchmarks.

use anyhow::{bail, Result};
use q16_math::{Kernel, Q16};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Raw logarithm inputs: 1000, 2000, ... 99000.
fn log_sweep() -> impl Iterator<Item = Q16> {
    (1_000..100_000).step_by(1_000).map(Q16::from_bits)
}

/// Signed exponential inputs across `[-10, 10)` in steps of 0.125.
fn exp_sweep() -> impl Iterator<Item = Q16> {
    (-80..80).map(|i| Q16::from_bits(i << 13))
}

/// Execute the benchmark.
pub fn execute(kernel: &Kernel, iterations: u32) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }
    log::info!("benchmarking {:?} over {} passes", kernel.config(), iterations);

    let log = time_sweep(iterations, log_sweep, |y| kernel.log(y));
    let exp = time_sweep(iterations, exp_sweep, |x| kernel.exp_signed(x));

    println!("{:<12} {:>10} {:>12}", "kernel", "calls", "ns/call");
    println!("{}", "-".repeat(36));
    for (name, timing) in [("log", log), ("exp_signed", exp)] {
        println!(
            "{:<12} {:>10} {:>12.1}",
            name,
            timing.calls,
            timing.nanos_per_call()
        );
    }
    Ok(())
}

struct Timing {
    calls: u64,
    elapsed: Duration,
}

impl Timing {
    fn nanos_per_call(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.calls.max(1) as f64
    }
}

fn time_sweep<I, F>(iterations: u32, inputs: fn() -> I, kernel: F) -> Timing
where
    I: Iterator<Item = Q16>,
    F: Fn(Q16) -> Q16,
{
    let mut calls = 0u64;
    let start = Instant::now();
    for _ in 0..iterations {
        for input in inputs() {
            black_box(kernel(black_box(input)));
            calls += 1;
        }
    }
    let elapsed = start.elapsed();
    log::debug!("{} calls in {:?}", calls, elapsed);
    Timing { calls, elapsed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweeps() {
        assert_eq!(log_sweep().count(), 99);
        assert_eq!(log_sweep().next(), Some(Q16::from_bits(1_000)));
        assert_eq!(exp_sweep().count(), 160);
        assert_eq!(exp_sweep().next(), Some(Q16::from_int(-10)));
    }

    #[test]
    fn test_time_sweep_counts_calls() {
        let kernel = Kernel::default();
        let timing = time_sweep(3, log_sweep, |y| kernel.log(y));
        assert_eq!(timing.calls, 297);
        assert!(timing.nanos_per_call() >= 0.0);
    }
}
