use chrono::NaiveDate;
use luasync_admin::KeyRegistry;
use luasync_admin::types::license::KeyStatus;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn generated_keys_match_the_license_format() {
    let registry = KeyRegistry::new();
    for _ in 0..100 {
        let key = registry.generate_key();
        let parts: Vec<&str> = key.split('-').collect();
        assert_eq!(parts.len(), 3, "unexpected shape: {key}");
        assert_eq!(parts[0], "LUASYNC");
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 6);
        for c in parts[1].chars().chain(parts[2].chars()) {
            assert!(
                c.is_ascii_uppercase() || c.is_ascii_digit(),
                "unexpected char {c} in {key}"
            );
        }
    }
}

#[test]
fn append_key_defaults_expiry_to_one_month_later() {
    let mut registry = KeyRegistry::new();
    let created = date(2024, 1, 15);
    registry.append_key("LUASYNC-AAAAAAAA-BBBBBB".to_string(), created, None);

    let last = registry.keys().last().expect("appended key missing");
    assert_eq!(last.created, created);
    assert_eq!(last.expires, date(2024, 2, 15));
    assert_eq!(last.status, KeyStatus::Active);
}

#[test]
fn append_key_honors_an_explicit_expiry() {
    let mut registry = KeyRegistry::new();
    registry.append_key(
        "LUASYNC-CCCCCCCC-DDDDDD".to_string(),
        date(2024, 3, 1),
        Some(date(2024, 3, 8)),
    );

    let last = registry.keys().last().expect("appended key missing");
    assert_eq!(last.expires, date(2024, 3, 8));
}

#[test]
fn delete_key_operates_on_the_shifted_list() {
    let mut registry = KeyRegistry::new();
    let seeded: Vec<String> = registry.keys().iter().map(|k| k.key.clone()).collect();
    assert_eq!(seeded.len(), 3);

    registry.delete_key(1);
    registry.delete_key(1);
    assert_eq!(registry.keys().len(), 1);
    // Both deletes hit position 1; only the original head survives.
    assert_eq!(registry.keys()[0].key, seeded[0]);

    // Out of range is a silent no-op.
    registry.delete_key(5);
    assert_eq!(registry.keys().len(), 1);
}

#[test]
fn stats_summary_tracks_active_presence_only() {
    let mut registry = KeyRegistry::new();
    let stats = registry.compute_stats();
    assert_eq!(stats.total_count, 3);
    assert_eq!(stats.active_summary, "30 days");

    // The two Active seeds sit at the front; removing them leaves only
    // the Expired one.
    registry.delete_key(0);
    registry.delete_key(0);
    let stats = registry.compute_stats();
    assert_eq!(stats.total_count, 1);
    assert_eq!(stats.active_summary, "none");
    assert_eq!(registry.keys()[0].status, KeyStatus::Expired);
}
