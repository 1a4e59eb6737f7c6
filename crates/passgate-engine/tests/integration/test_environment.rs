use passgate_engine::{CredentialType, Engine, Error, SECRET_ENV, SECRET_FILE_ENV};

#[test_log::test]
fn explicit_secret_builds() {
    let engine = Engine::builder().with_secret("explicit").build().unwrap();
    assert!(format!("{engine:?}").contains("system"));
}

#[test_log::test]
fn same_secret_same_key() {
    let a = Engine::builder().with_secret("shared").build().unwrap();
    let b = Engine::builder().with_secret("shared").build().unwrap();

    let blob = a
        .generate(
            9,
            passgate_common::payload::CredentialType::Visitor,
            a.now_ms() + 60_000,
            &["lobby"],
        )
        .unwrap();
    assert_eq!(b.parse(&blob).unwrap().user_id, 9);
}

#[test_log::test]
fn missing_secret_is_config_error() {
    let err = Engine::builder().build().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert_eq!(err.to_string(), "configuration error: secret not provided");
}

/// The only test in this binary touching the process environment.
#[test_log::test]
fn secret_from_process_environment() {
    std::env::remove_var(SECRET_ENV);
    std::env::remove_var(SECRET_FILE_ENV);

    let err = Engine::builder().from_environment().err().unwrap();
    assert!(matches!(err, Error::Config("secret not inferrable")));

    std::env::set_var(SECRET_ENV, "env-secret");
    let from_env = Engine::builder().from_environment().unwrap().build().unwrap();
    std::env::remove_var(SECRET_ENV);

    let explicit = Engine::builder().with_secret("env-secret").build().unwrap();
    let blob = explicit
        .generate(4, CredentialType::Employee, explicit.now_ms() + 60_000, &["lobby"])
        .unwrap();
    assert_eq!(from_env.parse(&blob).unwrap().user_id, 4);
}
