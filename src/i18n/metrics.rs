//! Translation metrics and observability module.
//!
//! Counts lookups and the fallbacks taken by the soft-fail string path, plus
//! enum lookups and their failures. Counters only ever increase.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Number of string translations requested
    string_lookups: AtomicUsize,

    /// Number of string translations whose language had no table
    missing_languages: AtomicUsize,

    /// Number of string translations whose name had no entry
    missing_keys: AtomicUsize,

    /// Number of enum translations requested
    enum_lookups: AtomicUsize,

    /// Number of enum translations that failed
    enum_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            string_lookups: AtomicUsize::new(0),
            missing_languages: AtomicUsize::new(0),
            missing_keys: AtomicUsize::new(0),
            enum_lookups: AtomicUsize::new(0),
            enum_failures: AtomicUsize::new(0),
        })
    }

    pub fn record_string_lookup(&self) {
        self.string_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_language(&self) {
        self.missing_languages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_enum_lookup(&self) {
        self.enum_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_enum_failure(&self) {
        self.enum_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn string_lookups(&self) -> usize {
        self.string_lookups.load(Ordering::Relaxed)
    }

    pub fn missing_languages(&self) -> usize {
        self.missing_languages.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    pub fn enum_lookups(&self) -> usize {
        self.enum_lookups.load(Ordering::Relaxed)
    }

    pub fn enum_failures(&self) -> usize {
        self.enum_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.string_lookups();
        let missing_languages = self.missing_languages();
        let missing_keys = self.missing_keys();
        let string_hit_rate = if lookups > 0 {
            let misses = (missing_languages + missing_keys).min(lookups);
            ((lookups - misses) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            string_lookups: lookups,
            missing_languages,
            missing_keys,
            string_hit_rate,
            enum_lookups: self.enum_lookups(),
            enum_failures: self.enum_failures(),
        }
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub string_lookups: usize,
    pub missing_languages: usize,
    pub missing_keys: usize,

    /// Share of string lookups that found a translation, as a percentage (0-100)
    pub string_hit_rate: f64,

    pub enum_lookups: usize,
    pub enum_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests use a private instance; the global one is shared with every
    // other test in the crate.
    fn fresh() -> TranslationMetrics {
        TranslationMetrics {
            string_lookups: AtomicUsize::new(0),
            missing_languages: AtomicUsize::new(0),
            missing_keys: AtomicUsize::new(0),
            enum_lookups: AtomicUsize::new(0),
            enum_failures: AtomicUsize::new(0),
        }
    }

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(
            TranslationMetrics::global(),
            TranslationMetrics::global()
        ));
    }

    #[test]
    fn test_empty_report() {
        let report = fresh().report();
        assert_eq!(report.string_lookups, 0);
        assert_eq!(report.string_hit_rate, 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let metrics = fresh();
        for _ in 0..4 {
            metrics.record_string_lookup();
        }
        metrics.record_missing_key();

        let report = metrics.report();
        assert_eq!(report.string_lookups, 4);
        assert_eq!(report.missing_keys, 1);
        assert!((report.string_hit_rate - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enum_counters() {
        let metrics = fresh();
        metrics.record_enum_lookup();
        metrics.record_enum_lookup();
        metrics.record_enum_failure();

        assert_eq!(metrics.enum_lookups(), 2);
        assert_eq!(metrics.enum_failures(), 1);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = fresh();
        metrics.record_string_lookup();
        metrics.record_missing_language();

        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["string_lookups"], 1);
        assert_eq!(json["missing_languages"], 1);
        assert_eq!(json["string_hit_rate"], 0.0);
    }
}
