//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use gemsmith::error::Hint;
use gemsmith::{Error, ErrorCode, Result};
use serde::Serialize;

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
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
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
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
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

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::EngineInvalidRoot
        | ErrorCode::ArtifactModuleFileMissing
        | ErrorCode::ArtifactFileListMissing => 4,

        ErrorCode::GeneratorFailed | ErrorCode::LockAlreadyHeld => 20,

        ErrorCode::InternalIoError | ErrorCode::InternalJsonError | ErrorCode::InternalUnexpected => {
            1
        }
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemsmith::error::GeneratorFailedDetails;

    #[test]
    fn generator_failure_serializes_captured_output() {
        let err = Error::generator_failed(GeneratorFailedDetails {
            command: "o3de.sh create-from-template".to_string(),
            exit_code: 3,
            stdout: "some stdout".to_string(),
            stderr: "template not found".to_string(),
        });

        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();
        assert!(json.contains("\"code\": \"generator.failed\""));
        assert!(json.contains("template not found"));
        assert!(json.contains("\"exitCode\": 3"));
    }

    #[test]
    fn error_codes_map_to_exit_code_families() {
        let validation = Error::validation_invalid_argument("name", "bad", None);
        let (_, code) = map_cmd_result_to_json::<serde_json::Value>(Err(validation));
        assert_eq!(code, 2);

        let missing = Error::module_file_missing("/gem/Source/XModule.cpp");
        let (_, code) = map_cmd_result_to_json::<serde_json::Value>(Err(missing));
        assert_eq!(code, 4);

        let lock = Error::lock_already_held("/tmp/gemsmith.lock");
        let (_, code) = map_cmd_result_to_json::<serde_json::Value>(Err(lock));
        assert_eq!(code, 20);
    }

    #[test]
    fn success_maps_to_given_exit_code() {
        let (value, code) = map_cmd_result_to_json(Ok((serde_json::json!({"ok": true}), 0)));
        assert_eq!(code, 0);
        assert!(value.is_ok());
    }

    #[test]
    fn module_file_missing_envelope_carries_hint() {
        let err = Error::module_file_missing("/gem/Source/XModule.cpp");
        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();
        assert!(json.contains("artifact.module_file_missing"));
        assert!(json.contains("*_files.cmake"));
    }
}
