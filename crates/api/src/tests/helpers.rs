// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use sportshub_domain::{
    PersonnelSelection, PostDraft, RecruitCategory, ValidationContext,
};
use sportshub_recruit::{FixedClock, validation_context};
use std::sync::{Arc, Mutex};
use time::macros::{date, time};

/// 2026-10-19 12:00 in Seoul.
pub fn create_test_context() -> ValidationContext {
    let clock: FixedClock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 3, 0, 0).unwrap());
    validation_context(&clock, chrono_tz::Asia::Seoul)
}

pub fn create_valid_draft(category: RecruitCategory) -> PostDraft {
    let mut draft: PostDraft = PostDraft::new(category);
    draft.title = String::from("  주말 경기 모집합니다 ");
    draft.content = String::from("토요일 저녁 풋살 경기 함께 하실 분 구합니다.");
    draft.region = String::from("서울");
    draft.sub_region = String::from("   ");
    draft.game_date = Some(date!(2026 - 10 - 24));
    draft.game_time = Some(time!(19:00));
    draft.personnel = PersonnelSelection::Simple { all: 5 };
    draft.team_name = String::from("강남FC");
    draft
}

/// A request seen by the stub backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

/// An in-process backend answering every request with one canned response.
pub struct StubBackend {
    pub base_url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl StubBackend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }
}

async fn answer(
    State(stub): State<StubState>,
    method: Method,
    uri: Uri,
    body: String,
) -> impl IntoResponse {
    stub.recorded.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });
    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body,
    )
}

pub async fn spawn_stub(status: StatusCode, body: &str) -> StubBackend {
    let recorded: Arc<Mutex<Vec<Recorded>>> = Arc::new(Mutex::new(Vec::new()));
    let state: StubState = StubState {
        status,
        body: body.to_string(),
        recorded: Arc::clone(&recorded),
    };
    let app: Router = Router::new().fallback(answer).with_state(state);

    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        base_url: format!("http://{addr}/"),
        recorded,
    }
}

/// Returns a base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub const CREATED_POST: &str = r#"{
    "id": 41,
    "title": "주말 경기 모집합니다",
    "content": "토요일 저녁 풋살 경기 함께 하실 분 구합니다.",
    "region": "서울",
    "category": "MERCENARY",
    "targetType": "USER",
    "fromParticipant": "TEAM",
    "toParticipant": "INDIVIDUAL",
    "matchDate": "2026-10-24",
    "gameTime": "19:00:00",
    "status": "RECRUITING",
    "requiredPersonnel": 5,
    "preferredPositions": "ALL:5",
    "writerProfileId": 42
}"#;
