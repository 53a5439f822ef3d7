//! Metrics module for the facade library
//!
//! This module provides a metrics interface for collecting and reporting
//! per-operation timings. By default, metrics are disabled and use a no-op
//! implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};

// Global flag to check if metrics are enabled
static METRICS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Metrics provider interface
pub trait MetricsProvider: Send + Sync {
    /// Records a counter increment
    fn increment_counter(&self, name: &str, value: u64);

    /// Records a timer duration
    fn record_timer(&self, name: &str, duration: Duration);

    /// Registers a timer
    fn register_timer(&self, name: &str);
}

/// A no-op metrics provider that discards all metrics
#[derive(Debug, Default)]
pub struct NoopMetricsProvider;

impl NoopMetricsProvider {
    /// Create a new no-op metrics provider
    pub fn new() -> Self {
        Self
    }

    /// Create a boxed instance ready for use with set_metrics_provider
    pub fn boxed() -> Box<dyn MetricsProvider> {
        Box::new(Self::new())
    }
}

impl MetricsProvider for NoopMetricsProvider {
    fn increment_counter(&self, _name: &str, _value: u64) {}
    fn record_timer(&self, _name: &str, _duration: Duration) {}
    fn register_timer(&self, _name: &str) {}
}

// Global metrics provider
static METRICS_PROVIDER: RwLock<Option<Box<dyn MetricsProvider>>> = RwLock::new(None);

/// Set the metrics provider for the facade library
pub fn set_metrics_provider(provider: Box<dyn MetricsProvider>) {
    let mut global_provider = METRICS_PROVIDER.write().unwrap();
    *global_provider = Some(provider);
    METRICS_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable metrics collection
pub fn disable_metrics() {
    let mut global_provider = METRICS_PROVIDER.write().unwrap();
    *global_provider = None;
    METRICS_ENABLED.store(false, Ordering::SeqCst);
}

/// Check if metrics are enabled
pub fn metrics_enabled() -> bool {
    METRICS_ENABLED.load(Ordering::SeqCst)
}

/// Register a timer metric
pub fn register_timer(name: &str) {
    if metrics_enabled() {
        if let Some(provider) = METRICS_PROVIDER.read().unwrap().as_ref() {
            provider.register_timer(name);
        }
    }
}

/// Increment a counter metric
pub fn increment_counter(name: &str, value: u64) {
    if metrics_enabled() {
        if let Some(provider) = METRICS_PROVIDER.read().unwrap().as_ref() {
            provider.increment_counter(name, value);
        }
    }
}

/// Record a timer metric
pub fn record_timer(name: &str, duration: Duration) {
    if metrics_enabled() {
        if let Some(provider) = METRICS_PROVIDER.read().unwrap().as_ref() {
            provider.record_timer(name, duration);
        }
    }
}

/// Timer for measuring and recording operation duration
#[derive(Debug)]
pub struct Timer {
    /// Name of the timer metric
    name: String,

    /// Start time of the operation
    start: Instant,
}

impl Timer {
    /// Create a new timer with the given name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        register_timer(&name);

        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed time
    pub fn observe_duration(&self) {
        record_timer(&self.name, self.start.elapsed());
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.observe_duration();
    }
}

/// Macro for creating a timer
#[macro_export]
macro_rules! timer {
    ($name:expr) => {{
        if $crate::metrics::metrics_enabled() {
            Some($crate::metrics::Timer::new($name))
        } else {
            None
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingProvider {
        timers: Arc<Mutex<HashMap<String, usize>>>,
    }

    impl MetricsProvider for RecordingProvider {
        fn increment_counter(&self, _name: &str, _value: u64) {}

        fn record_timer(&self, name: &str, _duration: Duration) {
            *self
                .timers
                .lock()
                .unwrap()
                .entry(name.to_string())
                .or_insert(0) += 1;
        }

        fn register_timer(&self, _name: &str) {}
    }

    #[test]
    fn timer_records_once_on_drop() {
        let provider = RecordingProvider::default();
        set_metrics_provider(Box::new(provider.clone()));

        {
            let _timer = timer!("awsfacade.test.timer");
        }

        // Other tests may record their own metrics concurrently, so only this
        // test's metric name is inspected.
        let observed = provider
            .timers
            .lock()
            .unwrap()
            .get("awsfacade.test.timer")
            .copied();
        assert_eq!(observed, Some(1));

        disable_metrics();
        assert!(!metrics_enabled());
    }
}
