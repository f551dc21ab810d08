// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sportshub_domain::DomainError;

/// Errors that can occur while editing or submitting a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The recruitment flow was changed on a category that has none.
    FlowNotApplicable {
        /// The draft's category.
        category: String,
    },
    /// A submission is already pending.
    SubmissionInProgress,
    /// The draft was already submitted successfully.
    AlreadySubmitted,
    /// The submission callback failed.
    SubmissionFailed {
        /// The message shown to the user.
        message: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::FlowNotApplicable { category } => {
                write!(f, "Recruitment flow does not apply to {category} posts")
            }
            Self::SubmissionInProgress => write!(f, "A submission is already in progress"),
            Self::AlreadySubmitted => write!(f, "This draft has already been submitted"),
            Self::SubmissionFailed { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
