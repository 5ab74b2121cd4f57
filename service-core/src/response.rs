//! Response envelopes shared by every JSON endpoint.
//!
//! Successful responses carry `status: "success"`, failed ones
//! `status: "error"`. Both are stamped with an ISO-8601 UTC timestamp.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Current time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessBody<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

pub fn success<T: Serialize>(data: T, message: Option<&str>) -> SuccessBody<T> {
    SuccessBody {
        status: STATUS_SUCCESS,
        data: Some(data),
        timestamp: timestamp(),
        message: message.map(str::to_owned),
    }
}

/// A success envelope without a payload, only a message.
pub fn acknowledged(message: &str) -> SuccessBody<()> {
    SuccessBody {
        status: STATUS_SUCCESS,
        data: None,
        timestamp: timestamp(),
        message: Some(message.to_owned()),
    }
}

pub fn failure(error: impl Into<String>, detail: Option<String>) -> ErrorBody {
    ErrorBody {
        status: STATUS_ERROR,
        error: error.into(),
        timestamp: timestamp(),
        detail: detail.filter(|d| !d.is_empty()),
    }
}
