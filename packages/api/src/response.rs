// ABOUTME: Shared API response envelope and semantic result codes
// ABOUTME: Every endpoint answers HTTP 200 with {code, msg, data}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;
use tagboard_storage::StorageError;

/// Application-level status carried in the `code` field, independent of the HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    Error,
    InvalidParams,
    ErrorExistTag,
    ErrorNotExistTag,
}

impl ResultCode {
    pub fn code(self) -> i32 {
        match self {
            ResultCode::Success => 200,
            ResultCode::Error => 500,
            ResultCode::InvalidParams => 400,
            ResultCode::ErrorExistTag => 10001,
            ResultCode::ErrorNotExistTag => 10002,
        }
    }

    pub fn msg(self) -> &'static str {
        match self {
            ResultCode::Success => "ok",
            ResultCode::Error => "fail",
            ResultCode::InvalidParams => "invalid request parameters",
            ResultCode::ErrorExistTag => "tag name already exists",
            ResultCode::ErrorNotExistTag => "tag does not exist",
        }
    }

    /// Code reported when a storage call fails after validation passed
    pub fn from_storage_error(err: &StorageError) -> Self {
        match err {
            StorageError::DuplicateName(_) => ResultCode::ErrorExistTag,
            StorageError::NotFound => ResultCode::ErrorNotExistTag,
            _ => ResultCode::Error,
        }
    }
}

/// Payload for operations that return no data; serializes as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyData {}

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(code: ResultCode, data: T) -> Self {
        ApiResponse {
            code: code.code(),
            msg: code.msg(),
            data,
        }
    }

    pub fn success(data: T) -> Self {
        Self::new(ResultCode::Success, data)
    }

    pub fn is_success(&self) -> bool {
        self.code == ResultCode::Success.code()
    }
}

impl ApiResponse<EmptyData> {
    pub fn empty(code: ResultCode) -> Self {
        Self::new(code, EmptyData {})
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, ResponseJson(self)).into_response()
    }
}
