// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission of a built post to the backend.
//!
//! The gateway serialises submissions for one composition session:
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Succeeded
//!   ^                  |
//!   +------ err -------+   (message retained)
//! ```
//!
//! `Succeeded` is terminal. The draft is owned by the caller and is never
//! touched here, so a failed submission loses no input.

use crate::error::CoreError;
use std::future::Future;
use tracing::{info, warn};

/// Shown when a failed submission carries no message of its own.
pub const GENERIC_SAVE_FAILURE: &str = "게시글 저장 중 오류가 발생했습니다.";

/// An error that can describe itself to the user.
pub trait FailureMessage {
    /// Returns the message shown to the user.
    ///
    /// Implementations return `fallback` when the error carries no
    /// message of its own.
    fn failure_message(&self, fallback: &str) -> String;
}

/// Where a submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Ready to submit.
    #[default]
    Idle,
    /// Waiting for the backend.
    Submitting,
    /// The backend accepted the post.
    Succeeded,
}

impl SubmissionState {
    /// Returns the state name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Submitting",
            Self::Succeeded => "Succeeded",
        }
    }
}

/// Guards a single post submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionGateway {
    state: SubmissionState,
    last_error: Option<String>,
    fallback: String,
}

impl Default for SubmissionGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionGateway {
    /// Creates an idle gateway using the generic save failure message.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fallback(GENERIC_SAVE_FAILURE)
    }

    /// Creates an idle gateway with an operation-specific fallback message.
    #[must_use]
    pub fn with_fallback(fallback: &str) -> Self {
        Self {
            state: SubmissionState::Idle,
            last_error: None,
            fallback: fallback.to_string(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns whether a new submission would be accepted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    /// Returns the message of the most recent failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Moves from `Idle` to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A submission is already pending
    /// - A previous submission succeeded
    pub fn begin(&mut self) -> Result<(), CoreError> {
        match self.state {
            SubmissionState::Idle => {
                self.state = SubmissionState::Submitting;
                Ok(())
            }
            SubmissionState::Submitting => Err(CoreError::SubmissionInProgress),
            SubmissionState::Succeeded => Err(CoreError::AlreadySubmitted),
        }
    }

    /// Records the outcome of a pending submission.
    ///
    /// Success is terminal. Failure returns to `Idle` and retains the
    /// error's user message.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SubmissionFailed` carrying the user message if
    /// `outcome` is an error.
    pub fn finish<T, E>(&mut self, outcome: Result<T, E>) -> Result<T, CoreError>
    where
        E: FailureMessage + std::fmt::Display,
    {
        match outcome {
            Ok(value) => {
                self.state = SubmissionState::Succeeded;
                self.last_error = None;
                info!("Submission succeeded");
                Ok(value)
            }
            Err(err) => {
                let message: String = err.failure_message(&self.fallback);
                warn!(error = %err, message = %message, "Submission failed");
                self.state = SubmissionState::Idle;
                self.last_error = Some(message.clone());
                Err(CoreError::SubmissionFailed { message })
            }
        }
    }

    /// Submits `payload` through `callback`.
    ///
    /// The callback is not invoked unless the gateway is `Idle`.
    ///
    /// # Arguments
    ///
    /// * `payload` - The built request
    /// * `callback` - Performs the backend call
    ///
    /// # Returns
    ///
    /// * `Ok(T)` with the callback's result on success
    /// * `Err(CoreError)` if the submission was refused or failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A submission is already pending or has succeeded
    /// - The callback fails
    pub async fn submit<P, T, E, F, Fut>(
        &mut self,
        payload: P,
        callback: F,
    ) -> Result<T, CoreError>
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: FailureMessage + std::fmt::Display,
    {
        self.begin()?;
        let outcome: Result<T, E> = callback(payload).await;
        self.finish(outcome)
    }
}
