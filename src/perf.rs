//! Handler profiling.
//!
//! Pointer move handlers run for every input sample, so they are the hot
//! path of the crate. With the `profiling` feature enabled each handler is
//! wrapped in a `ScopedTimer`; without it the macro compiles to nothing.
//!
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("pointer_move");
//!     // ... handler body ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Handlers slower than this are reported at `warn`
pub const SLOW_HANDLER_MS: f64 = 1.0;

/// Number of samples kept per handler
const STATS_SAMPLE_COUNT: usize = 100;

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Time a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::SLOW_HANDLER_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that reports its scope when dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            tracing::warn!(
                handler = self.name,
                elapsed_ms = format!("{:.3}", ms),
                "Slow pointer handler"
            );
        } else {
            tracing::trace!(handler = self.name, elapsed_ms = ms, "Handler timing");
        }
    }
}

/// Rolling timing statistics for one handler.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }
}

/// Per-handler statistics, keyed by handler name.
#[derive(Debug, Default)]
pub struct HandlerStats {
    stats: HashMap<&'static str, OperationStats>,
}

impl HandlerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, ms: f64) {
        self.stats.entry(name).or_default().record(ms);
    }

    /// Run `f`, recording how long it took under `name`.
    pub fn time<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(name, start.elapsed().as_secs_f64() * 1000.0);
        out
    }

    pub fn get(&self, name: &str) -> Option<&OperationStats> {
        self.stats.get(name)
    }

    /// Log a one-line summary per handler at `debug`.
    pub fn log_summary(&self) {
        let mut names: Vec<_> = self.stats.keys().copied().collect();
        names.sort_unstable();
        for name in names {
            let stats = &self.stats[name];
            tracing::debug!(
                handler = name,
                count = stats.count(),
                avg_ms = format!("{:.3}", stats.average()),
                max_ms = format!("{:.3}", stats.max()),
                "Handler stats"
            );
        }
    }
}
