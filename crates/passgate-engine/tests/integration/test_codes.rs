use std::sync::Arc;

use passgate_engine::{
    generate_numeric_code, generate_unique_id, generate_with_checksum, validate_with_checksum,
    Engine, ManualClock, DEFAULT_NUMERIC_CODE_LEN,
};

const WINDOW_MINUTES: i64 = 5;
const WINDOW_MS: i64 = WINDOW_MINUTES * 60_000;

fn engine_at(now_ms: i64) -> (Engine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(now_ms));
    let engine = Engine::builder()
        .with_secret("rotating-code-secret")
        .with_clock(clock.clone())
        .build()
        .unwrap();
    (engine, clock)
}

#[test_log::test]
fn rotating_code_is_sixteen_uppercase_hex() {
    let (engine, _) = engine_at(1_700_000_000_000);
    let code = engine.rotating_code("GATE-A", WINDOW_MINUTES);
    assert_eq!(code.len(), 16);
    assert!(code.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
}

#[test_log::test]
fn producer_and_verifier_agree_without_shared_state() {
    let (producer, _) = engine_at(1_700_000_000_000);
    let (verifier, _) = engine_at(1_700_000_000_000 + 1_000);

    let code = producer.rotating_code("GATE-A", WINDOW_MINUTES);
    assert_eq!(code, verifier.rotating_code("GATE-A", WINDOW_MINUTES));
    assert!(verifier.validate_rotating_code(&code, "GATE-A", WINDOW_MINUTES));
}

#[test_log::test]
fn one_window_of_grace() {
    let (engine, clock) = engine_at(1_700_000_000_000);
    let code = engine.rotating_code("GATE-A", WINDOW_MINUTES);

    assert!(engine.validate_rotating_code(&code, "GATE-A", WINDOW_MINUTES));

    clock.advance(WINDOW_MS);
    assert!(engine.validate_rotating_code(&code, "GATE-A", WINDOW_MINUTES));

    clock.advance(WINDOW_MS);
    assert!(!engine.validate_rotating_code(&code, "GATE-A", WINDOW_MINUTES));
}

#[test_log::test]
fn degenerate_window_still_yields_a_code() {
    let (engine, clock) = engine_at(1_700_000_000_000);
    let code = engine.rotating_code("GATE-A", 0);
    assert_eq!(code.len(), 16);

    clock.advance(365 * 24 * 60 * 60_000);
    assert_eq!(engine.rotating_code("GATE-A", 0), code);
    assert!(engine.validate_rotating_code(&code, "GATE-A", -5));
}

#[test_log::test]
fn checksum_codes() {
    let code = generate_with_checksum("ABC123");
    assert_eq!(code, generate_with_checksum("ABC123"));
    assert_eq!(validate_with_checksum(&code), Some("ABC123"));

    let mut corrupted = code.clone().into_bytes();
    corrupted[2] = b'X';
    assert_eq!(
        validate_with_checksum(std::str::from_utf8(&corrupted).unwrap()),
        None
    );

    assert_eq!(validate_with_checksum("ABC"), None);
}

#[test_log::test]
fn random_identifiers() {
    let id = generate_unique_id().unwrap();
    assert!(id.len() > 10);
    assert_ne!(id, generate_unique_id().unwrap());

    let otp = generate_numeric_code(6).unwrap();
    assert_eq!(otp.len(), 6);
    assert!(otp.bytes().all(|b| b.is_ascii_digit()));

    assert_eq!(
        generate_numeric_code(DEFAULT_NUMERIC_CODE_LEN).unwrap().len(),
        DEFAULT_NUMERIC_CODE_LEN
    );
}
