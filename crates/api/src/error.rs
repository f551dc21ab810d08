// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use serde::Deserialize;
use sportshub_domain::DomainError;
use sportshub_recruit::{CoreError, FailureMessage};
use thiserror::Error;

/// Shown when a write operation is attempted without a signed-in profile.
pub const LOGIN_REQUIRED_MESSAGE: &str = "글을 작성하려면 로그인이 필요합니다.";

/// A backend operation, used to pick the message shown on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List posts in a category.
    List,
    /// Fetch a single post.
    Fetch,
    /// Create a post.
    Create,
    /// Update a post.
    Update,
    /// Delete a post.
    Delete,
    /// Apply to a post.
    Apply,
    /// List applications to a post, sent by a profile, or received by one.
    ListApplications,
    /// Accept or reject an application.
    ReviewApplication,
    /// Withdraw an application.
    CancelApplication,
}

impl Operation {
    /// Returns the operation name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Apply => "apply",
            Self::ListApplications => "list_applications",
            Self::ReviewApplication => "review_application",
            Self::CancelApplication => "cancel_application",
        }
    }

    /// Returns the message shown when a failure carries no server message.
    ///
    /// Update failures include the HTTP status when one is known.
    #[must_use]
    pub fn fallback_message(&self, status: Option<u16>) -> String {
        match (self, status) {
            (Self::List | Self::Fetch, _) => {
                String::from("게시글을 불러오는 중 오류가 발생했습니다.")
            }
            (Self::Create, _) => String::from("게시글 생성 중 오류가 발생했습니다."),
            (Self::Update, Some(status)) => {
                format!("게시글 수정 중 오류가 발생했습니다. (HTTP {status})")
            }
            (Self::Update, None) => String::from("게시글 수정 중 오류가 발생했습니다."),
            (Self::Delete, _) => String::from("게시글 삭제 중 오류가 발생했습니다."),
            (Self::Apply, _) => String::from("신청 처리 중 오류가 발생했습니다."),
            (Self::ListApplications, _) => {
                String::from("신청 내역을 불러오는 중 오류가 발생했습니다.")
            }
            (Self::ReviewApplication, _) => {
                String::from("신청 상태 변경 중 오류가 발생했습니다.")
            }
            (Self::CancelApplication, _) => String::from("신청 취소 중 오류가 발생했습니다."),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failures of the HTTP transport, before they are tied to an operation.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// The response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No profile is signed in.
    AuthenticationRequired,
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A workflow rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A submission reached the backend and failed.
    SubmissionFailed {
        /// The message shown to the user.
        message: String,
    },
    /// The backend answered with a non-success status.
    Backend {
        /// The operation that failed.
        operation: Operation,
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, if any.
        message: Option<String>,
    },
    /// No response was received.
    Transport {
        /// The operation that failed.
        operation: Operation,
        /// Description of the transport failure.
        message: String,
    },
    /// A success response could not be read.
    Decode {
        /// The operation that failed.
        operation: Operation,
        /// Description of the decoding failure.
        message: String,
    },
}

impl ApiError {
    /// Builds an API error from a transport failure.
    #[must_use]
    pub fn from_client(operation: Operation, err: ClientError) -> Self {
        match err {
            ClientError::Http(err) => Self::Transport {
                operation,
                message: err.to_string(),
            },
            ClientError::Server { status, body } => Self::Backend {
                operation,
                status,
                message: server_message(&body),
            },
            ClientError::Json(err) => Self::Decode {
                operation,
                message: err.to_string(),
            },
        }
    }

    /// Returns the message shown to the user.
    ///
    /// A backend error uses the server's `message` when present; every
    /// other failure of a backend operation uses that operation's fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthenticationRequired => String::from(LOGIN_REQUIRED_MESSAGE),
            Self::InvalidInput { message, .. }
            | Self::DomainRuleViolation { message, .. }
            | Self::SubmissionFailed { message } => message.clone(),
            Self::Backend {
                operation,
                status,
                message,
            } => message
                .clone()
                .unwrap_or_else(|| operation.fallback_message(Some(*status))),
            Self::Transport { operation, .. } | Self::Decode { operation, .. } => {
                operation.fallback_message(None)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationRequired => write!(f, "Authentication required"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::SubmissionFailed { message } => write!(f, "Submission failed: {message}"),
            Self::Backend {
                operation,
                status,
                message,
            } => write!(
                f,
                "Backend rejected {operation} with HTTP {status}: {}",
                message.as_deref().unwrap_or("<no message>")
            ),
            Self::Transport { operation, message } => {
                write!(f, "No response for {operation}: {message}")
            }
            Self::Decode { operation, message } => {
                write!(f, "Unreadable response for {operation}: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl FailureMessage for ApiError {
    /// Failures that never produced a readable response use the gateway's
    /// `fallback`; everything else uses [`ApiError::user_message`].
    fn failure_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport { .. } | Self::Decode { .. } => fallback.to_string(),
            _ => self.user_message(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts a non-empty `message` from a JSON error body.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingRequiredFields { fields } => ApiError::InvalidInput {
            field: fields
                .first()
                .map_or_else(|| String::from("title"), |f| f.as_str().to_string()),
            message,
        },
        DomainError::MissingSchedule | DomainError::DateParseError { .. } => {
            ApiError::InvalidInput {
                field: String::from("gameDate"),
                message,
            }
        }
        DomainError::TimeParseError { .. } => ApiError::InvalidInput {
            field: String::from("gameTime"),
            message,
        },
        DomainError::ScheduleInPast { .. } => ApiError::DomainRuleViolation {
            rule: String::from("future_schedule"),
            message,
        },
        DomainError::UnresolvableSchedule { .. } => ApiError::DomainRuleViolation {
            rule: String::from("resolvable_schedule"),
            message,
        },
        DomainError::NoPersonnelSelected
        | DomainError::InvalidPosition(_)
        | DomainError::InvalidPositionEntry(_) => ApiError::InvalidInput {
            field: String::from("positionCounts"),
            message,
        },
        DomainError::InvalidPositionMode(_) => ApiError::InvalidInput {
            field: String::from("positionMode"),
            message,
        },
        DomainError::MissingTeamName => ApiError::InvalidInput {
            field: String::from("teamName"),
            message,
        },
        DomainError::InvalidTimezone(_) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message,
        },
        DomainError::InvalidCategory(_) => ApiError::InvalidInput {
            field: String::from("category"),
            message,
        },
        DomainError::InvalidRecruitmentFlow(_) | DomainError::InvalidParticipantType(_) => {
            ApiError::InvalidInput {
                field: String::from("recruitmentFlow"),
                message,
            }
        }
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidTargetType(_) => ApiError::InvalidInput {
            field: String::from("targetType"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::FlowNotApplicable { .. } => ApiError::InvalidInput {
            field: String::from("recruitmentFlow"),
            message: err.to_string(),
        },
        CoreError::SubmissionInProgress | CoreError::AlreadySubmitted => {
            ApiError::DomainRuleViolation {
                rule: String::from("single_submission"),
                message: err.to_string(),
            }
        }
        CoreError::SubmissionFailed { message } => ApiError::SubmissionFailed { message },
    }
}
