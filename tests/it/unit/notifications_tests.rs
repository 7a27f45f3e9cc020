//! Unit tests for notifications module.

use chartastic::notifications::{Toast, ToastManager, ToastVariant};
use std::time::Duration;

#[test]
fn test_titled_toast_display_line() {
    let toast = Toast::success("sales.csv has been loaded and parsed.")
        .with_title("File Loaded Successfully");
    assert_eq!(toast.variant, ToastVariant::Success);
    assert_eq!(toast.title.as_deref(), Some("File Loaded Successfully"));
    assert_eq!(
        toast.display_line(),
        "✓ File Loaded Successfully: sales.csv has been loaded and parsed."
    );
}

#[test]
fn test_untitled_toast_display_line() {
    let toast = Toast::error("Pie charts can only have one Value column.");
    assert_eq!(toast.display_line(), "✗ Pie charts can only have one Value column.");
}

#[test]
fn test_variant_sets_duration() {
    assert_eq!(Toast::info("x").duration, Duration::from_secs(3));
    assert_eq!(Toast::warning("x").duration, Duration::from_secs(4));
    assert_eq!(Toast::error("x").duration, Duration::from_secs(5));
    assert_eq!(
        Toast::info("x").with_duration(Duration::from_secs(42)).duration,
        Duration::from_secs(42)
    );
}

#[test]
fn test_fresh_toast_is_visible() {
    let toast = Toast::success("Displaying bar chart.").with_duration(Duration::from_secs(10));
    assert!(!toast.is_expired());
    assert!(toast.remaining_percent() > 0.99);
    assert_eq!(toast.opacity(false), 1.0);
    assert_eq!(toast.opacity(true), 1.0);
}

#[test]
fn test_zero_duration_toast_is_expired() {
    let toast = Toast::info("gone").with_duration(Duration::ZERO);
    assert!(toast.is_expired());
    assert_eq!(toast.remaining_percent(), 0.0);
    assert_eq!(toast.opacity(false), 0.0);
    // Reduced motion never fades
    assert_eq!(toast.opacity(true), 1.0);
}

#[test]
fn test_toast_ids_are_unique() {
    let a = Toast::success("a");
    let b = Toast::success("b");
    assert_ne!(a.id, b.id);
}

#[test]
fn test_manager_remove_and_expire() {
    let mut manager = ToastManager::new();
    manager.push(Toast::success("kept").with_duration(Duration::from_secs(60)));
    manager.push(Toast::info("expired").with_duration(Duration::ZERO));
    manager.push(Toast::warning("removed"));

    let removed_id = manager.toasts()[2].id;
    manager.remove(removed_id);
    assert_eq!(manager.count(), 2);

    assert_eq!(manager.remove_expired(), 1);
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.toasts()[0].message, "kept");

    manager.clear();
    assert!(manager.latest().is_none());
}

/// Expiration over real time. Ignored because it sleeps.
///
/// To run: cargo test test_toast_expires_after_duration -- --ignored
#[test]
#[ignore]
fn test_toast_expires_after_duration() {
    let toast = Toast::success("Test").with_duration(Duration::from_millis(1));
    std::thread::sleep(Duration::from_millis(10));
    assert!(toast.is_expired());
}
