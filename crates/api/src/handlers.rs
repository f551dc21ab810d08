// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Post workflows: validate, build, submit.
//!
//! Every write requires a signed-in profile. Drafts are validated against a
//! context built immediately before the call and are never modified here, so
//! a failed submission can be retried with the same input.

use crate::build::{build_creation_request, build_update_request, draft_from_post};
use crate::client::RecruitApi;
use crate::error::{ApiError, Operation, translate_core_error, translate_domain_error};
use crate::request_response::{
    ApplicationDecision, ApplicationRecord, ApplicationRequest, ApplicationStatusRequest,
    ListQuery, RecruitPost, RecruitPostCreationRequestDto, RecruitPostUpdateRequestDto,
};
use sportshub_domain::{Author, PostDraft, ValidatedDraft, ValidationContext, validate_for_submit};
use sportshub_recruit::SubmissionGateway;
use tracing::{debug, info};

/// The signed-in identity, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    /// The signed-in profile, if any.
    pub profile_id: Option<i64>,
    /// The profile's team, if any.
    pub team_id: Option<i64>,
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub const fn new(profile_id: Option<i64>, team_id: Option<i64>) -> Self {
        Self {
            profile_id,
            team_id,
        }
    }

    /// Returns the signed-in profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthenticationRequired` if no profile is signed in.
    pub const fn profile_id(&self) -> Result<i64, ApiError> {
        match self.profile_id {
            Some(profile_id) => Ok(profile_id),
            None => Err(ApiError::AuthenticationRequired),
        }
    }

    /// Returns the author identity for a new post.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No profile is signed in
    /// - The profile has no team
    pub fn author(&self) -> Result<Author, ApiError> {
        let profile_id: i64 = self.profile_id()?;
        let team_id: i64 = self.team_id.ok_or_else(|| ApiError::InvalidInput {
            field: String::from("teamId"),
            message: String::from("A team is required to publish a post"),
        })?;
        Ok(Author::new(team_id, profile_id))
    }
}

/// Creates a gateway that reports `operation`'s fallback message when a
/// submission gets no readable response.
#[must_use]
pub fn submission_gateway(operation: Operation) -> SubmissionGateway {
    SubmissionGateway::with_fallback(&operation.fallback_message(None))
}

fn validate<'a>(
    draft: &'a PostDraft,
    context: &ValidationContext,
) -> Result<ValidatedDraft<'a>, ApiError> {
    let validated: ValidatedDraft<'a> =
        validate_for_submit(draft, context).map_err(translate_domain_error)?;
    for warning in validated.warnings() {
        debug!(
            field = %warning.field,
            message = %warning.message(),
            "Submitting with advisory"
        );
    }
    Ok(validated)
}

/// Validates a draft and creates the post.
///
/// # Arguments
///
/// * `api` - The backend
/// * `gateway` - Guards against duplicate submission
/// * `draft` - The draft to publish
/// * `session` - The signed-in identity
/// * `context` - Freshly read instant and entry timezone
///
/// # Errors
///
/// Returns an error if:
/// - No profile is signed in
/// - The draft fails a blocking rule
/// - The gateway refuses the submission
/// - The backend call fails
pub async fn create_post<A: RecruitApi>(
    api: &A,
    gateway: &mut SubmissionGateway,
    draft: &PostDraft,
    session: &Session,
    context: &ValidationContext,
) -> Result<RecruitPost, ApiError> {
    let author: Author = session.author()?;
    let validated: ValidatedDraft<'_> = validate(draft, context)?;
    let request: RecruitPostCreationRequestDto = build_creation_request(&validated, author);

    let post: RecruitPost = gateway
        .submit(request, |request| async move { api.create_post(&request).await })
        .await
        .map_err(translate_core_error)?;
    info!(post_id = post.id, "Published recruit post");
    Ok(post)
}

/// Validates a draft and updates an existing post.
///
/// # Errors
///
/// Returns an error if:
/// - No profile is signed in
/// - The draft fails a blocking rule
/// - The gateway refuses the submission
/// - The backend call fails
pub async fn update_post<A: RecruitApi>(
    api: &A,
    gateway: &mut SubmissionGateway,
    post_id: i64,
    draft: &PostDraft,
    session: &Session,
    context: &ValidationContext,
) -> Result<RecruitPost, ApiError> {
    session.profile_id()?;
    let validated: ValidatedDraft<'_> = validate(draft, context)?;
    let request: RecruitPostUpdateRequestDto = build_update_request(&validated);

    gateway
        .submit(request, |request| async move {
            api.update_post(post_id, &request).await
        })
        .await
        .map_err(translate_core_error)
}

/// Loads a post into a draft for editing.
///
/// # Errors
///
/// Returns an error if the post cannot be fetched or its stored values
/// cannot be read back into a draft.
pub async fn load_draft<A: RecruitApi>(api: &A, post_id: i64) -> Result<PostDraft, ApiError> {
    let post: RecruitPost = api.fetch_post(post_id).await?;
    draft_from_post(&post).map_err(translate_domain_error)
}

/// Lists posts on one board.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn list_posts<A: RecruitApi>(
    api: &A,
    query: ListQuery,
) -> Result<Vec<RecruitPost>, ApiError> {
    api.list_posts(query).await
}

/// Deletes a post.
///
/// # Errors
///
/// Returns an error if no profile is signed in or the backend call fails.
pub async fn delete_post<A: RecruitApi>(
    api: &A,
    post_id: i64,
    session: &Session,
) -> Result<(), ApiError> {
    session.profile_id()?;
    api.delete_post(post_id).await
}

/// Applies to a post as the signed-in profile.
///
/// # Errors
///
/// Returns an error if no profile is signed in or the backend call fails.
pub async fn apply_to_post<A: RecruitApi>(
    api: &A,
    post_id: i64,
    message: &str,
    session: &Session,
) -> Result<ApplicationRecord, ApiError> {
    let request: ApplicationRequest = ApplicationRequest {
        applicant_profile_id: session.profile_id()?,
        message: Some(message.trim().to_string()).filter(|m| !m.is_empty()),
    };
    api.apply_to_post(post_id, &request).await
}

/// Lists the applications to a post.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn list_applications<A: RecruitApi>(
    api: &A,
    post_id: i64,
) -> Result<Vec<ApplicationRecord>, ApiError> {
    api.list_applications(post_id).await
}

/// Lists the applications the signed-in profile has sent.
///
/// # Errors
///
/// Returns an error if no profile is signed in or the backend call fails.
pub async fn sent_applications<A: RecruitApi>(
    api: &A,
    session: &Session,
) -> Result<Vec<ApplicationRecord>, ApiError> {
    api.list_sent_applications(session.profile_id()?).await
}

/// Lists the applications to posts written by the signed-in profile.
///
/// # Errors
///
/// Returns an error if no profile is signed in or the backend call fails.
pub async fn received_applications<A: RecruitApi>(
    api: &A,
    session: &Session,
) -> Result<Vec<ApplicationRecord>, ApiError> {
    api.list_received_applications(session.profile_id()?).await
}

/// Accepts or rejects an application.
///
/// # Errors
///
/// Returns an error if no profile is signed in or the backend call fails.
pub async fn review_application<A: RecruitApi>(
    api: &A,
    post_id: i64,
    application_id: i64,
    decision: ApplicationDecision,
    session: &Session,
) -> Result<ApplicationRecord, ApiError> {
    session.profile_id()?;
    let request: ApplicationStatusRequest = ApplicationStatusRequest {
        status: decision.status(),
    };
    let record: ApplicationRecord = api
        .update_application_status(post_id, application_id, &request)
        .await?;
    info!(post_id, application_id, status = %record.status, "Reviewed application");
    Ok(record)
}

/// Withdraws an application.
///
/// # Errors
///
/// Returns an error if no profile is signed in or the backend call fails.
pub async fn cancel_application<A: RecruitApi>(
    api: &A,
    post_id: i64,
    application_id: i64,
    session: &Session,
) -> Result<(), ApiError> {
    session.profile_id()?;
    api.cancel_application(post_id, application_id).await
}
