use super::*;

#[test]
fn parses_full_body() {
    let status = ProfileStatus::from_json(r#"{"exists":false,"email":"a@b.com","name":"A"}"#).unwrap();
    assert_eq!(
        status,
        ProfileStatus { exists: false, email: Some("a@b.com".into()), name: Some("A".into()) }
    );
}

#[test]
fn missing_fields_default() {
    let status = ProfileStatus::from_json(r#"{"exists":true}"#).unwrap();
    assert!(status.exists);
    assert!(status.email.is_none());
    assert!(status.name.is_none());
}

#[test]
fn missing_exists_reads_as_no_profile() {
    let status = ProfileStatus::from_json(r#"{"email":"a@b.com"}"#).unwrap();
    assert!(!status.exists);
}

#[test]
fn null_name_reads_as_absent() {
    let status = ProfileStatus::from_json(r#"{"exists":false,"name":null}"#).unwrap();
    assert!(status.name.is_none());
}

#[test]
fn unknown_fields_are_ignored() {
    let status = ProfileStatus::from_json(r#"{"exists":true,"plan":"pro"}"#).unwrap();
    assert!(status.exists);
}

#[test]
fn non_object_body_is_a_parse_error() {
    assert!(matches!(ProfileStatus::from_json("null"), Err(GateError::BodyParse(_))));
    assert!(matches!(ProfileStatus::from_json("<html>"), Err(GateError::BodyParse(_))));
}

#[test]
fn wrong_field_type_is_a_parse_error() {
    let err = ProfileStatus::from_json(r#"{"exists":"yes"}"#).unwrap_err();
    assert!(err.retryable());
}
