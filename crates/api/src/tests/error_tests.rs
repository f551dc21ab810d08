// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, ClientError, LOGIN_REQUIRED_MESSAGE, Operation, translate_core_error,
    translate_domain_error,
};
use sportshub_domain::{DomainError, Field};
use sportshub_recruit::{CoreError, FailureMessage, GENERIC_SAVE_FAILURE};

#[test]
fn test_fallback_messages_per_operation() {
    assert_eq!(
        Operation::Create.fallback_message(None),
        "게시글 생성 중 오류가 발생했습니다."
    );
    assert_eq!(
        Operation::Delete.fallback_message(Some(500)),
        "게시글 삭제 중 오류가 발생했습니다."
    );
    assert_eq!(
        Operation::Apply.fallback_message(None),
        "신청 처리 중 오류가 발생했습니다."
    );
    assert_eq!(
        Operation::List.fallback_message(None),
        Operation::Fetch.fallback_message(Some(404))
    );
}

#[test]
fn test_update_fallback_includes_status_when_known() {
    assert_eq!(
        Operation::Update.fallback_message(Some(500)),
        "게시글 수정 중 오류가 발생했습니다. (HTTP 500)"
    );
    assert_eq!(
        Operation::Update.fallback_message(None),
        "게시글 수정 중 오류가 발생했습니다."
    );
}

#[test]
fn test_server_message_wins_over_fallback() {
    let err: ApiError = ApiError::from_client(
        Operation::Create,
        ClientError::Server {
            status: 400,
            body: String::from(r#"{"message":"팀 정보가 올바르지 않습니다."}"#),
        },
    );
    assert_eq!(err.user_message(), "팀 정보가 올바르지 않습니다.");
}

#[test]
fn test_non_json_error_body_uses_fallback() {
    let err: ApiError = ApiError::from_client(
        Operation::Update,
        ClientError::Server {
            status: 502,
            body: String::from("<html>Bad Gateway</html>"),
        },
    );
    assert_eq!(
        err,
        ApiError::Backend {
            operation: Operation::Update,
            status: 502,
            message: None,
        }
    );
    assert_eq!(
        err.user_message(),
        "게시글 수정 중 오류가 발생했습니다. (HTTP 502)"
    );
}

#[test]
fn test_blank_server_message_is_ignored() {
    let err: ApiError = ApiError::from_client(
        Operation::Delete,
        ClientError::Server {
            status: 403,
            body: String::from(r#"{"message":"  "}"#),
        },
    );
    assert_eq!(err.user_message(), "게시글 삭제 중 오류가 발생했습니다.");
}

#[test]
fn test_transport_failure_uses_fallback() {
    let err: ApiError = ApiError::Transport {
        operation: Operation::Apply,
        message: String::from("connection refused"),
    };
    assert_eq!(err.user_message(), "신청 처리 중 오류가 발생했습니다.");
    assert_eq!(err.failure_message(GENERIC_SAVE_FAILURE), GENERIC_SAVE_FAILURE);
    assert_eq!(
        err.failure_message(&Operation::Apply.fallback_message(None)),
        "신청 처리 중 오류가 발생했습니다."
    );
}

#[test]
fn test_failure_message_prefers_server_message() {
    let with_message: ApiError = ApiError::Backend {
        operation: Operation::Create,
        status: 400,
        message: Some(String::from("이미 마감된 경기입니다.")),
    };
    assert_eq!(
        with_message.failure_message(GENERIC_SAVE_FAILURE),
        "이미 마감된 경기입니다."
    );

    let without_message: ApiError = ApiError::Backend {
        operation: Operation::Update,
        status: 502,
        message: None,
    };
    assert_eq!(
        without_message.failure_message(GENERIC_SAVE_FAILURE),
        "게시글 수정 중 오류가 발생했습니다. (HTTP 502)"
    );

    let decode: ApiError = ApiError::Decode {
        operation: Operation::Create,
        message: String::from("expected value"),
    };
    assert_eq!(decode.failure_message(GENERIC_SAVE_FAILURE), GENERIC_SAVE_FAILURE);
}

#[test]
fn test_application_operation_fallbacks() {
    assert_eq!(
        Operation::ListApplications.fallback_message(Some(500)),
        "신청 내역을 불러오는 중 오류가 발생했습니다."
    );
    assert_eq!(
        Operation::ReviewApplication.fallback_message(None),
        "신청 상태 변경 중 오류가 발생했습니다."
    );
    assert_eq!(
        Operation::CancelApplication.fallback_message(None),
        "신청 취소 중 오류가 발생했습니다."
    );
    assert_eq!(Operation::CancelApplication.as_str(), "cancel_application");
}

#[test]
fn test_authentication_required_message() {
    assert_eq!(
        ApiError::AuthenticationRequired.user_message(),
        LOGIN_REQUIRED_MESSAGE
    );
}

#[test]
fn test_translate_domain_error_keeps_field_and_message() {
    let err: ApiError = translate_domain_error(DomainError::MissingRequiredFields {
        fields: vec![Field::Content, Field::Region],
    });
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("content"),
            message: String::from("제목, 내용, 지역은 필수 입력 항목입니다."),
        }
    );

    let err: ApiError = translate_domain_error(DomainError::ScheduleInPast {
        scheduled: String::from("2026-10-18 20:00"),
    });
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "future_schedule"
    ));
}

#[test]
fn test_translate_core_error() {
    assert!(matches!(
        translate_core_error(CoreError::AlreadySubmitted),
        ApiError::DomainRuleViolation { .. }
    ));
    assert_eq!(
        translate_core_error(CoreError::SubmissionFailed {
            message: String::from("실패"),
        })
        .user_message(),
        "실패"
    );
    assert_eq!(
        translate_core_error(CoreError::DomainViolation(DomainError::MissingTeamName)),
        ApiError::InvalidInput {
            field: String::from("teamName"),
            message: String::from("팀 이름은 필수 입력 항목입니다."),
        }
    );
}
