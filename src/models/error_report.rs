// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Error reporting models. The `{error_class, error_message}` pair is the
//! wire shape used both for client-reported errors and for API error
//! responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Wire shape of an API error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error_class: String,
    pub error_message: String,
}

/// A client-reported error received on the errors endpoint.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReportErrorRequest {
    pub error_class: String,
    pub error_message: String,
    /// Gateway request id the error was observed on, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Stored error report record.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub id: Uuid,
    pub error_class: String,
    pub error_message: String,
    pub request_id: Option<String>,
    pub reported_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_request_optional_request_id() {
        let req: ReportErrorRequest = serde_json::from_str(
            r#"{"error_class":"ConnectionLost","error_message":"socket closed"}"#,
        )
        .unwrap();
        assert_eq!(req.error_class, "ConnectionLost");
        assert_eq!(req.request_id, None);
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse {
            error_class: "TokenNotFound".to_string(),
            error_message: "no such token".to_string(),
        })
        .unwrap();
        assert_eq!(json["error_class"], "TokenNotFound");
        assert_eq!(json["error_message"], "no such token");
    }
}
