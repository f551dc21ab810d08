// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::TestFailure;
use crate::{CoreError, GENERIC_SAVE_FAILURE, SubmissionGateway, SubmissionState};
use std::cell::Cell;

#[tokio::test]
async fn test_successful_submission_is_terminal() {
    let mut gateway: SubmissionGateway = SubmissionGateway::new();
    assert!(gateway.can_submit());

    let result: Result<u32, CoreError> = gateway
        .submit(7_u32, |id| async move { Ok::<u32, TestFailure>(id + 1) })
        .await;

    assert_eq!(result.unwrap(), 8);
    assert_eq!(gateway.state(), SubmissionState::Succeeded);
    assert!(!gateway.can_submit());
}

#[tokio::test]
async fn test_resubmit_after_success_skips_callback() {
    let calls: Cell<u32> = Cell::new(0);
    let mut gateway: SubmissionGateway = SubmissionGateway::new();
    let _ = gateway
        .submit((), |()| {
            calls.set(calls.get() + 1);
            async { Ok::<(), TestFailure>(()) }
        })
        .await;

    let second: Result<(), CoreError> = gateway
        .submit((), |()| {
            calls.set(calls.get() + 1);
            async { Ok::<(), TestFailure>(()) }
        })
        .await;

    assert_eq!(second.unwrap_err(), CoreError::AlreadySubmitted);
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_submit_while_pending_is_rejected() {
    let calls: Cell<u32> = Cell::new(0);
    let mut gateway: SubmissionGateway = SubmissionGateway::new();
    gateway.begin().unwrap();
    assert_eq!(gateway.state(), SubmissionState::Submitting);
    assert!(!gateway.can_submit());

    let result: Result<(), CoreError> = gateway
        .submit((), |()| {
            calls.set(calls.get() + 1);
            async { Ok::<(), TestFailure>(()) }
        })
        .await;

    assert_eq!(result.unwrap_err(), CoreError::SubmissionInProgress);
    assert_eq!(calls.get(), 0);
    assert_eq!(gateway.state(), SubmissionState::Submitting);
}

#[tokio::test]
async fn test_failure_without_message_uses_fallback() {
    let mut gateway: SubmissionGateway = SubmissionGateway::new();
    let result: Result<(), CoreError> = gateway
        .submit((), |()| async { Err::<(), TestFailure>(TestFailure(None)) })
        .await;

    assert_eq!(
        result.unwrap_err(),
        CoreError::SubmissionFailed {
            message: String::from(GENERIC_SAVE_FAILURE),
        }
    );
    assert_eq!(gateway.state(), SubmissionState::Idle);
    assert_eq!(gateway.last_error(), Some(GENERIC_SAVE_FAILURE));
}

#[tokio::test]
async fn test_failure_keeps_server_message_and_allows_retry() {
    let mut gateway: SubmissionGateway =
        SubmissionGateway::with_fallback("게시글 생성 중 오류가 발생했습니다.");
    let _ = gateway
        .submit((), |()| async {
            Err::<(), TestFailure>(TestFailure(Some(String::from("이미 마감된 경기입니다."))))
        })
        .await;
    assert_eq!(gateway.last_error(), Some("이미 마감된 경기입니다."));
    assert!(gateway.can_submit());

    let retry: Result<&str, CoreError> = gateway
        .submit((), |()| async { Ok::<&str, TestFailure>("created") })
        .await;
    assert_eq!(retry.unwrap(), "created");
    assert_eq!(gateway.last_error(), None);
    assert_eq!(gateway.state(), SubmissionState::Succeeded);
}

#[test]
fn test_finish_with_operation_fallback() {
    let mut gateway: SubmissionGateway =
        SubmissionGateway::with_fallback("게시글 생성 중 오류가 발생했습니다.");
    gateway.begin().unwrap();
    let result: Result<(), CoreError> = gateway.finish(Err(TestFailure(None)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "게시글 생성 중 오류가 발생했습니다."
    );
}
