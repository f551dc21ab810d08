// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client for the recruitment backend.

use crate::error::{ApiError, ClientError, Operation};
use crate::request_response::{
    ApplicationRecord, ApplicationRequest, ApplicationStatusRequest, ListQuery, RecruitPost,
    RecruitPostCreationRequestDto, RecruitPostUpdateRequestDto, normalize_application_list,
    normalize_post_list,
};
use serde_json::Value;
use sportshub_domain::RecruitCategory;
use std::future::Future;
use tracing::{info, warn};

/// Backend operations on recruitment posts.
pub trait RecruitApi {
    /// Lists posts on one board.
    fn list_posts(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<RecruitPost>, ApiError>> + Send;

    /// Fetches a single post.
    fn fetch_post(&self, post_id: i64)
    -> impl Future<Output = Result<RecruitPost, ApiError>> + Send;

    /// Creates a post.
    fn create_post(
        &self,
        request: &RecruitPostCreationRequestDto,
    ) -> impl Future<Output = Result<RecruitPost, ApiError>> + Send;

    /// Updates a post.
    fn update_post(
        &self,
        post_id: i64,
        request: &RecruitPostUpdateRequestDto,
    ) -> impl Future<Output = Result<RecruitPost, ApiError>> + Send;

    /// Deletes a post.
    fn delete_post(&self, post_id: i64) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Applies to a post.
    fn apply_to_post(
        &self,
        post_id: i64,
        request: &ApplicationRequest,
    ) -> impl Future<Output = Result<ApplicationRecord, ApiError>> + Send;

    /// Lists the applications to a post.
    fn list_applications(
        &self,
        post_id: i64,
    ) -> impl Future<Output = Result<Vec<ApplicationRecord>, ApiError>> + Send;

    /// Lists the applications a profile has sent.
    fn list_sent_applications(
        &self,
        profile_id: i64,
    ) -> impl Future<Output = Result<Vec<ApplicationRecord>, ApiError>> + Send;

    /// Lists the applications to posts written by a profile.
    fn list_received_applications(
        &self,
        profile_id: i64,
    ) -> impl Future<Output = Result<Vec<ApplicationRecord>, ApiError>> + Send;

    /// Sets the review status of an application.
    fn update_application_status(
        &self,
        post_id: i64,
        application_id: i64,
        request: &ApplicationStatusRequest,
    ) -> impl Future<Output = Result<ApplicationRecord, ApiError>> + Send;

    /// Withdraws an application.
    fn cancel_application(
        &self,
        post_id: i64,
        application_id: i64,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// `reqwest` implementation of [`RecruitApi`].
#[derive(Debug, Clone)]
pub struct RecruitClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecruitClient {
    /// Creates a client for the backend at `base_url`, e.g. `http://localhost:8084`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/api/recruit/posts", self.base_url)
    }

    fn post_url(&self, post_id: i64) -> String {
        format!("{}/{post_id}", self.posts_url())
    }

    fn applications_url(&self, post_id: i64) -> String {
        format!("{}/applications", self.post_url(post_id))
    }

    fn application_url(&self, post_id: i64, application_id: i64) -> String {
        format!("{}/{application_id}", self.applications_url(post_id))
    }

    /// Sends a request and returns the body of a success response.
    async fn send(request: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let resp: reqwest::Response = request.send().await?;
        let status: reqwest::StatusCode = resp.status();
        if !status.is_success() {
            let body: String = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.text().await?)
    }

    async fn send_json(request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let body: String = Self::send(request).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches a list body. A body that is not JSON reads as `null`.
    async fn fetch_list(
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, ApiError> {
        match Self::send_json(request).await {
            Ok(value) => Ok(value),
            Err(ClientError::Json(e)) => {
                warn!(
                    operation = %operation,
                    error = %e,
                    "List response is not JSON, treating as empty"
                );
                Ok(Value::Null)
            }
            Err(e) => {
                let err: ApiError = ApiError::from_client(operation, e);
                log_failure(operation, &err);
                Err(err)
            }
        }
    }

    async fn fetch_applications(&self, url: &str) -> Result<Vec<ApplicationRecord>, ApiError> {
        let value: Value =
            Self::fetch_list(Operation::ListApplications, self.client.get(url)).await?;
        let applications: Vec<ApplicationRecord> = normalize_application_list(&value);
        info!(count = applications.len(), "Listed applications");
        Ok(applications)
    }

    fn read_post(
        operation: Operation,
        value: &Value,
        category: Option<RecruitCategory>,
    ) -> Result<RecruitPost, ApiError> {
        RecruitPost::from_value(value, category).ok_or_else(|| ApiError::Decode {
            operation,
            message: String::from("response is not a recruit post"),
        })
    }
}

fn log_failure(operation: Operation, err: &ApiError) {
    warn!(operation = %operation, error = %err, "Recruit backend call failed");
}

impl RecruitApi for RecruitClient {
    async fn list_posts(&self, query: ListQuery) -> Result<Vec<RecruitPost>, ApiError> {
        let url: String = self.posts_url();
        info!(
            url = %url,
            category = %query.category,
            page = query.page,
            size = query.size,
            "Listing recruit posts"
        );

        let value: Value =
            Self::fetch_list(Operation::List, self.client.get(&url).query(&query)).await?;

        let posts: Vec<RecruitPost> = normalize_post_list(&value, query.category);
        info!(count = posts.len(), "Listed recruit posts");
        Ok(posts)
    }

    async fn fetch_post(&self, post_id: i64) -> Result<RecruitPost, ApiError> {
        let url: String = self.post_url(post_id);
        info!(url = %url, post_id, "Fetching recruit post");

        let value: Value = Self::send_json(self.client.get(&url))
            .await
            .map_err(|e| ApiError::from_client(Operation::Fetch, e))
            .inspect_err(|err| log_failure(Operation::Fetch, err))?;
        Self::read_post(Operation::Fetch, &value, None)
    }

    async fn create_post(
        &self,
        request: &RecruitPostCreationRequestDto,
    ) -> Result<RecruitPost, ApiError> {
        let url: String = self.posts_url();
        info!(
            url = %url,
            category = %request.category,
            writer_profile_id = request.writer_profile_id,
            required_personnel = request.required_personnel,
            "Creating recruit post"
        );

        let value: Value = Self::send_json(self.client.post(&url).json(request))
            .await
            .map_err(|e| ApiError::from_client(Operation::Create, e))
            .inspect_err(|err| log_failure(Operation::Create, err))?;
        let post: RecruitPost =
            Self::read_post(Operation::Create, &value, Some(request.category))?;
        info!(post_id = post.id, "Created recruit post");
        Ok(post)
    }

    async fn update_post(
        &self,
        post_id: i64,
        request: &RecruitPostUpdateRequestDto,
    ) -> Result<RecruitPost, ApiError> {
        let url: String = self.post_url(post_id);
        info!(url = %url, post_id, "Updating recruit post");

        let value: Value = Self::send_json(self.client.put(&url).json(request))
            .await
            .map_err(|e| ApiError::from_client(Operation::Update, e))
            .inspect_err(|err| log_failure(Operation::Update, err))?;
        Self::read_post(Operation::Update, &value, request.category)
    }

    async fn delete_post(&self, post_id: i64) -> Result<(), ApiError> {
        let url: String = self.post_url(post_id);
        info!(url = %url, post_id, "Deleting recruit post");

        Self::send(self.client.delete(&url))
            .await
            .map_err(|e| ApiError::from_client(Operation::Delete, e))
            .inspect_err(|err| log_failure(Operation::Delete, err))?;
        Ok(())
    }

    async fn apply_to_post(
        &self,
        post_id: i64,
        request: &ApplicationRequest,
    ) -> Result<ApplicationRecord, ApiError> {
        let url: String = self.applications_url(post_id);
        info!(
            url = %url,
            post_id,
            applicant_profile_id = request.applicant_profile_id,
            "Applying to recruit post"
        );

        let value: Value = Self::send_json(self.client.post(&url).json(request))
            .await
            .map_err(|e| ApiError::from_client(Operation::Apply, e))
            .inspect_err(|err| log_failure(Operation::Apply, err))?;
        Ok(ApplicationRecord::from_response(&value, post_id, request))
    }

    async fn list_applications(&self, post_id: i64) -> Result<Vec<ApplicationRecord>, ApiError> {
        let url: String = self.applications_url(post_id);
        info!(url = %url, post_id, "Listing applications to post");
        self.fetch_applications(&url).await
    }

    async fn list_sent_applications(
        &self,
        profile_id: i64,
    ) -> Result<Vec<ApplicationRecord>, ApiError> {
        let url: String = format!(
            "{}/api/recruit/applications/by-applicant/{profile_id}",
            self.base_url
        );
        info!(url = %url, profile_id, "Listing sent applications");
        self.fetch_applications(&url).await
    }

    async fn list_received_applications(
        &self,
        profile_id: i64,
    ) -> Result<Vec<ApplicationRecord>, ApiError> {
        let url: String = format!(
            "{}/api/recruit/applications/received/{profile_id}",
            self.base_url
        );
        info!(url = %url, profile_id, "Listing received applications");
        self.fetch_applications(&url).await
    }

    async fn update_application_status(
        &self,
        post_id: i64,
        application_id: i64,
        request: &ApplicationStatusRequest,
    ) -> Result<ApplicationRecord, ApiError> {
        let url: String = self.application_url(post_id, application_id);
        info!(
            url = %url,
            post_id,
            application_id,
            status = %request.status,
            "Reviewing application"
        );

        let value: Value = Self::send_json(self.client.patch(&url).json(request))
            .await
            .map_err(|e| ApiError::from_client(Operation::ReviewApplication, e))
            .inspect_err(|err| log_failure(Operation::ReviewApplication, err))?;
        Ok(
            ApplicationRecord::from_value(&value).unwrap_or_else(|| ApplicationRecord {
                id: application_id,
                post_id,
                status: request.status,
                ..ApplicationRecord::default()
            }),
        )
    }

    async fn cancel_application(&self, post_id: i64, application_id: i64) -> Result<(), ApiError> {
        let url: String = self.application_url(post_id, application_id);
        info!(url = %url, post_id, application_id, "Cancelling application");

        Self::send(self.client.delete(&url))
            .await
            .map_err(|e| ApiError::from_client(Operation::CancelApplication, e))
            .inspect_err(|err| log_failure(Operation::CancelApplication, err))?;
        Ok(())
    }
}
