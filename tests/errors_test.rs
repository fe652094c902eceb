// ABOUTME: Tests for error codes, constructors, conversions, and error responses
// ABOUTME: Verifies HTTP status mapping and serialized error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fooddraft::errors::{AppError, ErrorCode, ErrorResponse};
use std::error::Error as _;

#[test]
fn test_status_mapping_for_collaborator_errors() {
    assert_eq!(AppError::invalid_input("x").http_status(), 400);
    assert_eq!(
        AppError::config_invalid("OPENFOODFACTS_CACHE_TTL_SECS", "not a number").http_status(),
        500
    );
    assert_eq!(
        AppError::external_rate_limited("Open Food Facts").http_status(),
        503
    );
    assert_eq!(AppError::external_service("Open Food Facts", "boom").http_status(), 502);
    assert_eq!(AppError::quota_exceeded("x").http_status(), 429);
    assert_eq!(AppError::internal("x").http_status(), 500);
}

#[test]
fn test_messages_name_the_service() {
    let error = AppError::external_rate_limited("Open Food Facts");
    assert_eq!(error.code, ErrorCode::ExternalRateLimited);
    assert!(error.to_string().contains("Open Food Facts: rate limit exceeded"));

    let error = AppError::external_unavailable("Open Food Facts", "connection refused");
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(error.message, "Open Food Facts: connection refused");
}

#[test]
fn test_json_error_converts_with_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = AppError::from(json_error);
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.source().is_some());
}

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse::from(
        AppError::quota_exceeded("Bookmark limit of 2 reached").with_request_id("req-1"),
    );
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["error"]["code"], "QUOTA_EXCEEDED");
    assert_eq!(json["error"]["message"], "Bookmark limit of 2 reached");
    assert_eq!(json["error"]["request_id"], "req-1");
}

#[test]
fn test_request_id_is_omitted_when_absent() {
    let json = serde_json::to_value(ErrorResponse::from(AppError::internal("bad"))).unwrap();
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(json["error"].get("request_id").is_none());
}
