use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    EngineInvalidRoot,

    ArtifactModuleFileMissing,
    ArtifactFileListMissing,

    GeneratorFailed,
    LockAlreadyHeld,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::EngineInvalidRoot => "engine.invalid_root",

            ErrorCode::ArtifactModuleFileMissing => "artifact.module_file_missing",
            ErrorCode::ArtifactFileListMissing => "artifact.file_list_missing",

            ErrorCode::GeneratorFailed => "generator.failed",
            ErrorCode::LockAlreadyHeld => "lock.already_held",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidEngineRootDetails {
    pub path: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArtifactDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorFailedDetails {
    pub command: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let problem = problem.into();
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details)
    }

    pub fn engine_invalid_root(path: impl Into<String>, problem: impl Into<String>) -> Self {
        let problem = problem.into();
        let details = serde_json::to_value(InvalidEngineRootDetails {
            path: path.into(),
            problem: problem.clone(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::EngineInvalidRoot, problem, details)
    }

    pub fn module_file_missing(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::missing_artifact(
            ErrorCode::ArtifactModuleFileMissing,
            format!("Module file not found at {}", path),
            path,
        )
        .with_hint(
            "Make sure the project directory points to a valid Gem directory, not the root \
             of a project. Usually it's where *_files.cmake resides",
        )
    }

    pub fn file_list_missing(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::missing_artifact(
            ErrorCode::ArtifactFileListMissing,
            format!("Could not find {}", path),
            path,
        )
    }

    fn missing_artifact(code: ErrorCode, message: String, path: String) -> Self {
        let details = serde_json::to_value(MissingArtifactDetails { path })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(code, message, details)
    }

    pub fn generator_failed(details: GeneratorFailedDetails) -> Self {
        let message = format!("Failed to create component (exit code {})", details.exit_code);
        let details =
            serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::GeneratorFailed, message, details)
    }

    pub fn lock_already_held(path: impl Into<String>) -> Self {
        let details = serde_json::json!({ "path": path.into() });
        Self::new(
            ErrorCode::LockAlreadyHeld,
            "Another instance may already be running",
            details,
        )
        .with_hint("If no other gemsmith process is running, delete the lock file and retry")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": error.into(),
            "context": context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
