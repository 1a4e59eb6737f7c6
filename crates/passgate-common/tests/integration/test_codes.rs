use passgate_common::code::{
    checksum::{generate_with_checksum, validate_with_checksum, CHECKSUM_LEN},
    window,
};

const WINDOW_MS: i64 = 5 * 60_000;

#[test_log::test]
fn rotating_codes_change_every_window() {
    let start = 1_700_000_100_000 / WINDOW_MS * WINDOW_MS;
    let codes: Vec<String> = (0..4)
        .map(|n| window::generate("GATE-A", 5, start + n * WINDOW_MS))
        .collect();

    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test_log::test]
fn rotating_code_grace_period() {
    let now = 1_700_000_100_000;
    let code = window::generate("GATE-A", 5, now);

    assert!(window::validate(&code, "GATE-A", 5, now));
    assert!(window::validate(&code, "GATE-A", 5, now + WINDOW_MS));
    assert!(!window::validate(&code, "GATE-A", 5, now + 2 * WINDOW_MS));
    assert!(!window::validate(&code, "GATE-A", 5, now - WINDOW_MS));
}

#[test_log::test]
fn code_for_window_matches_generate() {
    let now = 1_700_000_100_000;
    assert_eq!(
        window::generate("GATE-A", 5, now),
        window::code_for_window("GATE-A", window::window_index(now, 5))
    );
}

#[test_log::test]
fn checksum_tamper_sensitivity() {
    let code = generate_with_checksum("VISITOR-2024-0042");
    assert_eq!(validate_with_checksum(&code), Some("VISITOR-2024-0042"));

    let suffix_start = code.len() - CHECKSUM_LEN;
    let mut swapped = code[..suffix_start].to_string();
    swapped.push_str(&generate_with_checksum("VISITOR-2024-0043")[suffix_start..]);
    assert_eq!(validate_with_checksum(&swapped), None);
}
