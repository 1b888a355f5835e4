use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::TimeWindow;

pub const RUN_FIELDS: [&str; 7] = [
    "name",
    "run_type",
    "start_time",
    "end_time",
    "status",
    "error",
    "thread_id",
];
pub const RUN_LIMIT: u32 = 5;

/// Body of `POST /api/v1/runs/query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunQuery {
    pub session: Vec<String>,
    pub start_time: String,
    pub select: Vec<String>,
    pub limit: u32,
}

impl RunQuery {
    pub fn recent(session_id: impl Into<String>, window: TimeWindow, now: DateTime<Utc>) -> Self {
        Self {
            session: vec![session_id.into()],
            start_time: window.start_time(now),
            select: RUN_FIELDS.iter().map(|field| field.to_string()).collect(),
            limit: RUN_LIMIT,
        }
    }
}
