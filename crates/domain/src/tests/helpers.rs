// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PersonnelSelection, PostDraft, RecruitCategory, ValidationContext};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use time::macros::{date, time};

/// 2026-10-19 12:00 in Seoul.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 3, 0, 0).unwrap()
}

pub const fn seoul() -> Tz {
    chrono_tz::Asia::Seoul
}

pub fn create_test_context() -> ValidationContext {
    ValidationContext::new(fixed_now(), seoul())
}

pub fn create_valid_draft(category: RecruitCategory) -> PostDraft {
    let mut draft: PostDraft = PostDraft::new(category);
    draft.title = String::from("주말 경기 모집합니다");
    draft.content = String::from("토요일 저녁 풋살 경기 함께 하실 분 구합니다.");
    draft.region = String::from("서울");
    draft.sub_region = String::from("강남구");
    draft.game_date = Some(date!(2026 - 10 - 24));
    draft.game_time = Some(time!(19:00));
    draft.personnel = PersonnelSelection::Simple { all: 5 };
    draft.team_name = String::from("강남FC");
    draft
}
