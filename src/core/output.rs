//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use serde::Serialize;

use crate::error::{Error, ErrorCode, Hint, Result};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                "{{\"success\":false,\"error\":{{\"code\":\"internal.json_error\",\"message\":\"{}\"}}}}",
                e
            )
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
                retryable: err.retryable,
            }),
        }
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) {
    use std::io::{self, Write};

    let payload = match result {
        Ok(data) => CliResponse::success(data).to_json(),
        Err(err) => CliResponse::<()>::from_error(&err).to_json(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // Ignore BrokenPipe so piping into `head` exits cleanly.
    let _ = writeln!(handle, "{}", payload);
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationMissingArgument | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::AssetNotFound | ErrorCode::TaskDescriptorInvalid => 4,

        // External tool failures abort packaging with the conventional
        // exit code the surrounding automation checks for.
        ErrorCode::BundleFailed
        | ErrorCode::InstallFailed
        | ErrorCode::ArchiveFailed
        | ErrorCode::GitCommandFailed => 1,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_data_and_no_error() {
        let response = CliResponse::success(serde_json::json!({"tasks": []}));
        let json = response.to_json();
        assert!(json.contains("\"success\": true"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn bundle_failure_maps_to_exit_code_1() {
        assert_eq!(exit_code_for_error(ErrorCode::BundleFailed), 1);
        assert_eq!(exit_code_for_error(ErrorCode::InstallFailed), 1);
    }

    #[test]
    fn validation_maps_to_exit_code_2() {
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
    }

    #[test]
    fn missing_inputs_map_to_exit_code_4() {
        assert_eq!(exit_code_for_error(ErrorCode::AssetNotFound), 4);
        assert_eq!(exit_code_for_error(ErrorCode::TaskDescriptorInvalid), 4);
    }
}
