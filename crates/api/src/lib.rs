// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod build;
mod client;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use build::{build_creation_request, build_update_request, draft_from_post, target_type_for};
pub use client::{RecruitApi, RecruitClient};
pub use error::{
    ApiError, ClientError, LOGIN_REQUIRED_MESSAGE, Operation, translate_core_error,
    translate_domain_error,
};
pub use handlers::{
    Session, apply_to_post, cancel_application, create_post, delete_post, list_applications,
    list_posts, load_draft, received_applications, review_application, sent_applications,
    submission_gateway, update_post,
};
pub use request_response::{
    ApplicationDecision, ApplicationRecord, ApplicationRequest, ApplicationStatus,
    ApplicationStatusRequest, DEFAULT_PAGE_SIZE, ListQuery, RecruitPost,
    RecruitPostCreationRequestDto, RecruitPostUpdateRequestDto, count_recruiting, filter_posts,
    normalize_application_list, normalize_post_list,
};
