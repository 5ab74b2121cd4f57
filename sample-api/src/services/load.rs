//! CPU and memory load generators backing the load-test routes.
//!
//! Both run synchronously for the requested wall-clock duration and are meant
//! to be driven from the blocking thread pool.

use rand::Rng;
use std::hint::black_box;
use std::time::{Duration, Instant};

const MIB: usize = 1024 * 1024;

/// Parses a query value the lenient way: leading decimal digits are taken,
/// anything else (missing, non-numeric, zero) yields `default`.
pub fn parse_or_default(raw: Option<&str>, default: u64) -> u64 {
    let Some(raw) = raw else {
        return default;
    };

    let digits: String = raw
        .trim_start()
        .trim_start_matches('+')
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<u64>() {
        Ok(0) | Err(_) => default,
        Ok(n) => n,
    }
}

/// Spins on floating point work until `duration` has elapsed.
/// Returns the number of iterations performed.
pub fn burn_cpu(duration: Duration) -> u64 {
    let mut rng = rand::thread_rng();
    let end = Instant::now() + duration;
    let mut iterations = 0u64;

    while Instant::now() < end {
        black_box(rng.gen::<f64>().sqrt());
        iterations += 1;
    }

    iterations
}

/// Allocates `size_mb` MiB and sorts it repeatedly until `duration` has
/// elapsed. Always performs at least one pass. Returns the number of passes.
pub fn churn_memory(size_mb: u64, duration: Duration) -> anyhow::Result<u64> {
    let len = usize::try_from(size_mb)
        .ok()
        .and_then(|mb| mb.checked_mul(MIB))
        .ok_or_else(|| anyhow::anyhow!("メモリサイズが大きすぎます: {}MB", size_mb))?;

    let mut buffer: Vec<u8> = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|e| anyhow::anyhow!("{}MB のメモリを確保できませんでした: {}", size_mb, e))?;
    buffer.resize(len, b'x');

    let end = Instant::now() + duration;
    let mut passes = 0u64;

    loop {
        buffer.sort_unstable();
        black_box(&buffer);
        passes += 1;
        if Instant::now() >= end {
            break;
        }
    }

    Ok(passes)
}
