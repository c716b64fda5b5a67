//! Staleness classification tests

use apicache_domain::value_objects::{CacheEntry, CachedRead, StalenessVerdict};
use serde_json::json;

#[test]
fn test_entry_younger_than_ttl_is_fresh() {
    assert_eq!(StalenessVerdict::classify(1800, 0, 3600), StalenessVerdict::Fresh);
    assert_eq!(StalenessVerdict::classify(3599, 0, 3600), StalenessVerdict::Fresh);
}

#[test]
fn test_age_equal_to_ttl_is_stale() {
    assert_eq!(StalenessVerdict::classify(3600, 0, 3600), StalenessVerdict::Stale);
}

#[test]
fn test_entry_older_than_ttl_is_stale() {
    assert_eq!(StalenessVerdict::classify(4000, 0, 3600), StalenessVerdict::Stale);
}

#[test]
fn test_classification_over_a_range_of_ages() {
    let ttl = 60;
    for written_at in [0_i64, 1_000, 1_700_000_000] {
        for age in 0..=120_i64 {
            let verdict = StalenessVerdict::classify(written_at + age, written_at, ttl);
            let expected = if age < 60 {
                StalenessVerdict::Fresh
            } else {
                StalenessVerdict::Stale
            };
            assert_eq!(verdict, expected, "written_at={written_at} age={age}");
        }
    }
}

#[test]
fn test_zero_ttl_is_always_stale() {
    assert_eq!(StalenessVerdict::classify(10, 10, 0), StalenessVerdict::Stale);
}

#[test]
fn test_future_write_time_counts_as_fresh() {
    assert_eq!(StalenessVerdict::classify(100, 200, 3600), StalenessVerdict::Fresh);
}

#[test]
fn test_stale_read_keeps_payload() {
    let entry = CacheEntry::new(json!({"a": 1}), 0);
    let read = CachedRead::from_entry(entry, 4000, 3600);

    assert_eq!(read.verdict, StalenessVerdict::Stale);
    assert_eq!(read.payload, Some(json!({"a": 1})));
    assert_eq!(read.written_at, Some(0));
}

#[test]
fn test_missing_read_has_no_payload() {
    let read = CachedRead::missing();

    assert_eq!(read.verdict, StalenessVerdict::Missing);
    assert!(read.payload.is_none());
    assert!(read.written_at_rfc3339().is_none());
    assert!(!read.verdict.has_payload());
}

#[test]
fn test_verdict_display() {
    assert_eq!(StalenessVerdict::Missing.to_string(), "missing");
    assert_eq!(StalenessVerdict::Fresh.to_string(), "fresh");
    assert_eq!(StalenessVerdict::Stale.to_string(), "stale");
}
