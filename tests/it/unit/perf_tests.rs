//! Unit tests for perf module.

use resizekit::perf::{ScopedTimer, measure, measure_and_log};

#[test]
fn test_scoped_timer_creation() {
    // Timer drops here, no warning expected since threshold is very high
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_returns_result_and_elapsed() {
    let (value, elapsed_ms) = measure(|| 2 + 2);
    assert_eq!(value, 4);
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_measure_and_log_passes_result_through() {
    let value = measure_and_log("cheap_op", 1000.0, || "ok");
    assert_eq!(value, "ok");
}
