// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApplicationRecord, ApplicationRequest, ApplicationStatus, RecruitPost, count_recruiting,
    filter_posts, normalize_application_list, normalize_post_list,
};
use serde_json::{Value, json};
use sportshub_domain::{ParticipantType, RecruitCategory, RecruitStatus, RecruitTargetType};

#[test]
fn test_bare_array_is_read() {
    let value: Value = json!([{ "id": 1, "title": "A" }, { "id": 2, "title": "B" }]);
    let posts: Vec<RecruitPost> = normalize_post_list(&value, RecruitCategory::Team);
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].title, "B");
}

#[test]
fn test_page_object_is_read() {
    let value: Value = json!({ "content": [{ "id": 3 }], "totalElements": 1 });
    let posts: Vec<RecruitPost> = normalize_post_list(&value, RecruitCategory::Match);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 3);
    assert_eq!(posts[0].category, RecruitCategory::Match);
}

#[test]
fn test_unexpected_shapes_are_empty() {
    for value in [
        json!(null),
        json!("posts"),
        json!(42),
        json!({ "items": [] }),
        json!({ "content": "none" }),
    ] {
        assert!(normalize_post_list(&value, RecruitCategory::Mercenary).is_empty());
    }
}

#[test]
fn test_missing_fields_take_defaults() {
    let post: RecruitPost =
        RecruitPost::from_value(&json!({}), Some(RecruitCategory::Mercenary)).unwrap();
    assert_eq!(post.id, 0);
    assert_eq!(post.title, "");
    assert_eq!(post.status, RecruitStatus::Recruiting);
    assert_eq!(post.target_type, RecruitTargetType::User);
    assert_eq!(post.from_participant, ParticipantType::Individual);
    assert_eq!(post.to_participant, ParticipantType::Team);
    assert_eq!(post.accepted_count, 0);
    assert_eq!(post.author_id, None);
}

#[test]
fn test_backend_names_are_mapped() {
    let value: Value = json!({
        "id": 5,
        "matchDate": "2026-10-24",
        "imageUrl": "https://cdn.example/p.png",
        "writerProfileId": 42,
        "status": "COMPLETED",
        "category": "TEAM",
        "acceptedCount": 3
    });
    let post: RecruitPost = RecruitPost::from_value(&value, None).unwrap();
    assert_eq!(post.game_date.as_deref(), Some("2026-10-24"));
    assert_eq!(post.thumbnail_url.as_deref(), Some("https://cdn.example/p.png"));
    assert_eq!(post.author_id, Some(42));
    assert_eq!(post.status, RecruitStatus::Completed);
    assert_eq!(post.category, RecruitCategory::Team);
    assert_eq!(post.accepted_count, 3);
}

#[test]
fn test_unknown_enum_values_fall_back() {
    let value: Value = json!({ "status": "ARCHIVED", "targetType": "TEAM_TO_INDIVIDUAL" });
    let post: RecruitPost = RecruitPost::from_value(&value, None).unwrap();
    assert_eq!(post.status, RecruitStatus::Recruiting);
    assert_eq!(post.target_type, RecruitTargetType::User);
    assert_eq!(post.category, RecruitCategory::Mercenary);
}

#[test]
fn test_non_object_items_are_skipped() {
    let value: Value = json!([{ "id": 8 }, "junk", 3, null]);
    let posts: Vec<RecruitPost> = normalize_post_list(&value, RecruitCategory::Team);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 8);
}

#[test]
fn test_badly_typed_fields_keep_the_post() {
    let value: Value = json!([
        {
            "id": 1,
            "imageUrl": "https://cdn.example/a.png",
            "thumbnailUrl": "https://cdn.example/b.png"
        },
        { "id": 2, "matchDate": "2026-10-24", "gameDate": "2026-10-25" },
        { "id": 3, "createdAt": { "epoch": 1 }, "title": "잠실 풋살" },
        { "id": 4, "cost": 5000.0 },
        { "id": "seven", "title": "번호 없음" },
        { "id": 6 }
    ]);
    let posts: Vec<RecruitPost> = normalize_post_list(&value, RecruitCategory::Mercenary);

    let ids: Vec<i64> = posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 0, 6]);
    assert_eq!(
        posts[0].thumbnail_url.as_deref(),
        Some("https://cdn.example/a.png")
    );
    assert_eq!(posts[1].game_date.as_deref(), Some("2026-10-24"));
    assert_eq!(posts[2].created_at, None);
    assert_eq!(posts[2].title, "잠실 풋살");
    assert_eq!(posts[3].cost, Some(5000));
    assert_eq!(posts[4].title, "번호 없음");
}

#[test]
fn test_secondary_names_are_used_when_primary_is_unreadable() {
    let value: Value = json!({
        "imageUrl": null,
        "thumbnailUrl": "https://cdn.example/t.png",
        "matchDate": 20_261_024,
        "gameDate": "2026-10-24",
        "writerProfileId": "unknown",
        "authorId": 42
    });
    let post: RecruitPost = RecruitPost::from_value(&value, None).unwrap();
    assert_eq!(post.thumbnail_url.as_deref(), Some("https://cdn.example/t.png"));
    assert_eq!(post.game_date.as_deref(), Some("2026-10-24"));
    assert_eq!(post.author_id, Some(42));
}

#[test]
fn test_array_dates_and_numeric_strings_are_read() {
    let value: Value = json!({
        "id": "12",
        "matchDate": [2026, 10, 24],
        "gameTime": [19, 30],
        "createdAt": [2026, 10, 19, 9, 5, 7, 123],
        "updatedAt": [2026, 10, 19, 9, 5],
        "requiredPersonnel": "5",
        "cost": -1
    });
    let post: RecruitPost = RecruitPost::from_value(&value, None).unwrap();
    assert_eq!(post.id, 12);
    assert_eq!(post.game_date.as_deref(), Some("2026-10-24"));
    assert_eq!(post.game_time.as_deref(), Some("19:30:00"));
    assert_eq!(post.created_at.as_deref(), Some("2026-10-19T09:05:07"));
    assert_eq!(post.updated_at.as_deref(), Some("2026-10-19T09:05:00"));
    assert_eq!(post.required_personnel, Some(5));
    assert_eq!(post.cost, None);
}

fn create_listing() -> Vec<RecruitPost> {
    normalize_post_list(
        &json!([
            { "id": 1, "title": "Weekend FUTSAL", "region": "서울", "content": "잠실 경기" },
            {
                "id": 2,
                "title": "용병 구함",
                "region": "Busan",
                "content": "해운대",
                "status": "COMPLETED"
            },
            { "id": 3, "title": "골키퍼 모집", "region": "인천", "content": "Night game at 9" }
        ]),
        RecruitCategory::Mercenary,
    )
}

fn ids_of(posts: &[RecruitPost]) -> Vec<i64> {
    posts.iter().map(|post| post.id).collect()
}

#[test]
fn test_blank_search_keeps_every_post() {
    assert_eq!(ids_of(&filter_posts(create_listing(), "")), vec![1, 2, 3]);
    assert_eq!(ids_of(&filter_posts(create_listing(), "   ")), vec![1, 2, 3]);
}

#[test]
fn test_search_matches_title_region_and_content() {
    assert_eq!(ids_of(&filter_posts(create_listing(), "futsal")), vec![1]);
    assert_eq!(ids_of(&filter_posts(create_listing(), "busan")), vec![2]);
    assert_eq!(ids_of(&filter_posts(create_listing(), "NIGHT")), vec![3]);
    assert_eq!(ids_of(&filter_posts(create_listing(), "모집")), vec![3]);
}

#[test]
fn test_search_without_match_is_empty() {
    assert!(filter_posts(create_listing(), "대전").is_empty());
}

#[test]
fn test_count_recruiting_ignores_completed() {
    assert_eq!(count_recruiting(&create_listing()), 2);
    assert_eq!(count_recruiting(&[]), 0);
}

#[test]
fn test_application_request_wire_shape() {
    let request: ApplicationRequest = ApplicationRequest {
        applicant_profile_id: 42,
        message: Some(String::from("골키퍼 가능합니다")),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "applicantProfileId": 42, "message": "골키퍼 가능합니다" })
    );
}

#[test]
fn test_application_record_fills_from_request() {
    let request: ApplicationRequest = ApplicationRequest {
        applicant_profile_id: 42,
        message: Some(String::from("참여 희망합니다")),
    };
    let record: ApplicationRecord =
        ApplicationRecord::from_response(&json!({ "id": 77, "status": "PENDING" }), 9, &request);
    assert_eq!(record.id, 77);
    assert_eq!(record.post_id, 9);
    assert_eq!(record.applicant_profile_id, 42);
    assert_eq!(record.message.as_deref(), Some("참여 희망합니다"));
    assert_eq!(record.status, ApplicationStatus::Pending);

    let empty: ApplicationRecord = ApplicationRecord::from_response(&Value::Null, 9, &request);
    assert_eq!(empty.post_id, 9);
}

#[test]
fn test_application_record_reads_description_alias() {
    let request: ApplicationRequest = ApplicationRequest {
        applicant_profile_id: 1,
        message: None,
    };
    let record: ApplicationRecord = ApplicationRecord::from_response(
        &json!({
            "id": 1,
            "postId": 2,
            "applicantProfileId": 3,
            "description": "hi",
            "status": "ACCEPTED"
        }),
        2,
        &request,
    );
    assert_eq!(record.message.as_deref(), Some("hi"));
    assert_eq!(record.status, ApplicationStatus::Accepted);
}

#[test]
fn test_application_list_is_read_leniently() {
    let value: Value = json!([
        {
            "id": 1,
            "postId": 41,
            "applicantProfileId": 42,
            "description": "참여 희망",
            "status": "REJECTED",
            "applicationDate": [2026, 10, 19, 10, 0, 0]
        },
        { "id": "2", "status": "WITHDRAWN", "applicationDate": false },
        "junk"
    ]);
    let records: Vec<ApplicationRecord> = normalize_application_list(&value);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, ApplicationStatus::Rejected);
    assert_eq!(records[0].message.as_deref(), Some("참여 희망"));
    assert_eq!(
        records[0].application_date.as_deref(),
        Some("2026-10-19T10:00:00")
    );
    assert_eq!(records[1].id, 2);
    assert_eq!(records[1].status, ApplicationStatus::Pending);
    assert_eq!(records[1].application_date, None);

    assert!(normalize_application_list(&json!({ "error": "x" })).is_empty());
}
