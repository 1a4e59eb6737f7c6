use passgate_common::{
    blob::{CredentialBlob, IV_LEN},
    payload::{CredentialPayload, CredentialType},
};

const PAYLOAD: &str = r#"{"userId":1,"credentialType":"employee","issuedAt":1700000000000,"expiryTime":1700003600000,"permissions":["basic_access"],"nonce":"9f86d081884c7d659a2feaa0c55ad015"}"#;

#[test_log::test]
fn wire_payload_roundtrip() {
    let payload: CredentialPayload = serde_json::from_str(PAYLOAD).unwrap();
    assert_eq!(payload.user_id, 1);
    assert_eq!(payload.credential_type, CredentialType::Employee);
    assert_eq!(payload.expiry_time - payload.issued_at, 3_600_000);
    assert_eq!(payload.permissions, ["basic_access"]);

    assert_eq!(serde_json::to_string(&payload).unwrap(), PAYLOAD);
}

#[test_log::test]
fn unknown_fields_are_tolerated() {
    let payload: CredentialPayload = serde_json::from_str(
        r#"{"userId":2,"credentialType":"visitor","issuedAt":0,"expiryTime":0,"nonce":"x","gate":"north"}"#,
    )
    .unwrap();
    assert_eq!(payload.credential_type, CredentialType::Visitor);
}

#[test_log::test]
fn blob_wire_format() {
    let blob = CredentialBlob {
        iv: [0xff; IV_LEN],
        ciphertext: vec![0x01; 32],
    };
    let text = blob.to_string();
    assert_eq!(text.len(), IV_LEN * 2 + 1 + 64);
    assert!(text.starts_with(&"ff".repeat(IV_LEN)));
    assert_eq!(CredentialBlob::parse(&text), Ok(blob));
}
