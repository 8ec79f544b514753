// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activities_client::error::{FormError, StoreError, TransportError};
use std::time::Duration;

#[test]
fn test_is_not_found_matches() {
    let err = StoreError::NotFound("a".to_string());
    assert!(err.is_not_found());

    let err = StoreError::from(TransportError::NotFound("a".to_string()));
    assert!(err.is_not_found());

    let err = StoreError::from(TransportError::Http {
        status: 404,
        body: String::new(),
    });
    assert!(err.is_not_found());
}

#[test]
fn test_is_not_found_no_match() {
    let err = StoreError::from(TransportError::Network("reset".to_string()));
    assert!(!err.is_not_found());

    let err = StoreError::Timeout {
        operation: "list",
        after: Duration::from_secs(1),
    };
    assert!(!err.is_not_found());

    let err = StoreError::DuplicateId("a".to_string());
    assert!(!err.is_not_found());
}

#[test]
fn test_error_messages() {
    let err = StoreError::Timeout {
        operation: "update",
        after: Duration::from_secs(30),
    };
    assert_eq!(err.to_string(), "update timed out after 30s");

    let err = StoreError::from(TransportError::Http {
        status: 500,
        body: "oops".to_string(),
    });
    assert_eq!(err.to_string(), "HTTP 500: oops");

    let err = FormError::from(StoreError::MissingId);
    assert_eq!(err.to_string(), "Activity has no id");
}
