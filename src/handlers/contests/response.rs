//! Contest response DTOs
//!
//! All timing fields are epoch milliseconds.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    catalog::infer_topic,
    models::{ContestPhase, Difficulty, Problem},
};

/// Problem as presented to clients, with the derived topic attached
#[derive(Debug, Clone, Serialize)]
pub struct ProblemView {
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
    pub topic: &'static str,
}

impl From<&Problem> for ProblemView {
    fn from(p: &Problem) -> Self {
        Self {
            title: p.title.clone(),
            slug: p.slug.clone(),
            difficulty: p.difficulty,
            topic: infer_topic(&p.title, &p.slug),
        }
    }
}

/// Create contest response
#[derive(Debug, Serialize)]
pub struct CreateContestResponse {
    pub contest_id: String,
    pub problems: Vec<ProblemView>,
}

/// One participant's progress within a contest
#[derive(Debug, Clone, Serialize)]
pub struct UserProgress {
    pub name: Option<String>,
    /// problem index -> solved (only solved indices appear)
    pub solved: BTreeMap<i32, bool>,
}

/// Full contest view
#[derive(Debug, Serialize)]
pub struct ContestView {
    pub id: String,
    pub problems: Vec<ProblemView>,
    pub created_at: i64,
    pub start_time: Option<i64>,
    pub duration: i64,
    pub phase: ContestPhase,
    pub results: BTreeMap<String, UserProgress>,
    pub creator_id: Option<String>,
    pub creator_name: Option<String>,
}

/// Start contest response
#[derive(Debug, Serialize)]
pub struct StartContestResponse {
    pub started_at: i64,
    pub duration: i64,
}

/// Lightweight status response for polling
#[derive(Debug, Serialize)]
pub struct ContestStatusResponse {
    pub start_time: Option<i64>,
    pub duration: i64,
    pub phase: ContestPhase,
}

/// Mark solved/unsolved response
#[derive(Debug, Serialize)]
pub struct MarkProblemResponse {
    pub ok: bool,
    pub contest: ContestView,
}
