// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FailureMessage, FixedClock, validation_context};
use chrono::{TimeZone, Utc};
use sportshub_domain::ValidationContext;

/// 2026-10-19 12:00 in Seoul.
pub fn create_test_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 3, 0, 0).unwrap())
}

pub fn create_test_context() -> ValidationContext {
    validation_context(&create_test_clock(), chrono_tz::Asia::Seoul)
}

/// Backend failure double: optionally carries a server message.
#[derive(Debug)]
pub struct TestFailure(pub Option<String>);

impl std::fmt::Display for TestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "test failure: {:?}", self.0)
    }
}

impl FailureMessage for TestFailure {
    fn failure_message(&self, fallback: &str) -> String {
        self.0.clone().unwrap_or_else(|| fallback.to_string())
    }
}
