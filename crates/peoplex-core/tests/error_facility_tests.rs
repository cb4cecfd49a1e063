use peoplex_core::errors::{ExError, ExErrorKind, PeopleXError};

#[test]
fn test_site_not_found_verifiable_by_kind() {
    let err = PeopleXError::SiteNotFound { site_id: 42 };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("42"));
    assert_eq!(ex_err.op(), Some("fetch_site"));
}

#[test]
fn test_observatory_not_found_carries_id() {
    let err = PeopleXError::ObservatoryNotFound { observatory_id: 7 };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.entity_id(), Some("7"));
    assert!(ex_err.message().contains("Observatory not found"));
}

#[test]
fn test_unknown_strategy_is_invalid_input() {
    let err = PeopleXError::UnknownStrategy {
        name: "prefetch".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert!(ex_err.message().contains("prefetch"));
    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_invalid_batch_size_structured_fields() {
    let ex_err: ExError = PeopleXError::InvalidBatchSize { batch_size: 0 }.into();

    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
    assert_eq!(ex_err.op(), Some("insert_people_batched"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::ConstraintViolation, "ERR_CONSTRAINT_VIOLATION"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
