//! JSON response envelope shared by the API endpoints.
//!
//! Every response carries a numeric code (0 = success, negative = failure)
//! and a short message; payloads ride in the optional `data` field. Failures
//! are reported inside the envelope with HTTP status 200, so clients switch
//! on `code` rather than on the status line.

use axum::Json;
use gadget_id_core::identity::IdentityField;
use serde::Serialize;

/// Code carried by successful responses.
pub const CODE_OK: i32 = 0;
/// Malformed request body or blank required field.
pub const CODE_INVALID_ARGUMENTS: i32 = -1;

/// Response envelope: `{ code, msg, data? }`.
#[derive(Debug, Serialize)]
pub struct Response<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Response<T> {
    /// Success with a payload.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            code: CODE_OK,
            msg: "success".to_string(),
            data: Some(data),
        })
    }
}

impl Response<()> {
    /// Success without a payload.
    pub fn ok_empty() -> Json<Self> {
        Json(Self {
            code: CODE_OK,
            msg: "success".to_string(),
            data: None,
        })
    }

    /// Failure with a caller-visible code and message.
    pub fn err(code: i32, msg: impl Into<String>) -> Json<Self> {
        Json(Self {
            code,
            msg: msg.into(),
            data: None,
        })
    }
}

/// Map a failed save to its per-field error code.
pub fn save_error_code(field: IdentityField) -> i32 {
    match field {
        IdentityField::Vid => -2,
        IdentityField::Pid => -3,
        IdentityField::Manufacturer => -4,
        IdentityField::Product => -5,
    }
}
