use super::*;

// --- Admission ---

#[test]
fn first_attempt_is_admitted() {
    let mut guard = ExportGuard::default();
    assert!(guard.try_begin(0.0));
}

#[test]
fn second_attempt_inside_the_window_is_dropped() {
    let mut guard = ExportGuard::default();
    assert!(guard.try_begin(0.0));
    assert!(!guard.try_begin(1.0));
    assert!(!guard.try_begin(500.0));
    assert!(!guard.try_begin(999.9));
}

#[test]
fn attempt_at_the_window_edge_is_admitted() {
    let mut guard = ExportGuard::default();
    assert!(guard.try_begin(0.0));
    assert!(guard.try_begin(1000.0));
}

#[test]
fn each_admission_opens_a_fresh_window() {
    let mut guard = ExportGuard::default();
    assert!(guard.try_begin(0.0));
    assert!(guard.try_begin(1000.0));
    assert!(!guard.try_begin(1500.0));
    assert!(guard.try_begin(2000.0));
}

#[test]
fn dropped_attempt_does_not_extend_the_window() {
    let mut guard = ExportGuard::default();
    assert!(guard.try_begin(0.0));
    assert!(!guard.try_begin(900.0));
    assert!(guard.try_begin(1000.0));
}

// --- Release ---

#[test]
fn release_after_the_window_re_admits() {
    let mut guard = ExportGuard::default();
    assert!(guard.try_begin(0.0));
    guard.release(1000.0);
    assert!(guard.try_begin(1001.0));
}

#[test]
fn early_release_does_not_shorten_the_window() {
    let mut guard = ExportGuard::default();
    assert!(guard.try_begin(0.0));
    guard.release(200.0);
    assert!(!guard.try_begin(300.0));
}

#[test]
fn missed_release_does_not_wedge_the_guard() {
    let mut guard = ExportGuard::default();
    assert!(guard.try_begin(0.0));
    assert!(guard.try_begin(5000.0));
}
