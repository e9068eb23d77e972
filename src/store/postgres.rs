//! Postgres-backed contest store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};

use crate::{
    error::AppResult,
    models::{Contest, ContestTiming, DifficultyFilter, Problem, SolvedResult, User},
};

use super::ContestStore;

/// Contest row as stored; the problem set lives in a JSONB column
#[derive(Debug, FromRow)]
struct ContestRow {
    id: String,
    num_problems: i32,
    difficulty: String,
    problems: Json<Vec<Problem>>,
    duration_seconds: i64,
    created_at: DateTime<Utc>,
    start_time: Option<DateTime<Utc>>,
    creator_id: Option<String>,
}

impl From<ContestRow> for Contest {
    fn from(row: ContestRow) -> Self {
        Contest {
            id: row.id,
            num_problems: row.num_problems,
            difficulty: row
                .difficulty
                .parse::<DifficultyFilter>()
                .unwrap_or_default(),
            problems: row.problems.0,
            duration_seconds: row.duration_seconds,
            created_at: row.created_at,
            start_time: row.start_time,
            creator_id: row.creator_id,
        }
    }
}

#[derive(Debug, FromRow)]
struct TimingRow {
    start_time: Option<DateTime<Utc>>,
    duration_seconds: i64,
}

/// Production store over a sqlx connection pool
///
/// The pool hands out a connection per query and returns it on every exit
/// path, which is all the scoped acquisition this store needs.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContestStore for PgStore {
    async fn insert_contest(&self, contest: &Contest) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contests
                (id, num_problems, difficulty, problems, duration_seconds, created_at, start_time, creator_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&contest.id)
        .bind(contest.num_problems)
        .bind(contest.difficulty.to_string())
        .bind(Json(&contest.problems))
        .bind(contest.duration_seconds)
        .bind(contest.created_at)
        .bind(contest.start_time)
        .bind(&contest.creator_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch_contest(&self, id: &str) -> AppResult<Option<Contest>> {
        let row = sqlx::query_as::<_, ContestRow>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Contest::from))
    }

    async fn try_start(
        &self,
        id: &str,
        started_at: DateTime<Utc>,
        duration_override: Option<i64>,
    ) -> AppResult<Option<Contest>> {
        // Conditional update: the WHERE clause makes "at most one start"
        // hold without a read-then-write race.
        let row = sqlx::query_as::<_, ContestRow>(
            r#"
            UPDATE contests
            SET
                start_time = $2,
                duration_seconds = COALESCE($3, duration_seconds)
            WHERE id = $1 AND start_time IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(started_at)
        .bind(duration_override)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Contest::from))
    }

    async fn fetch_timing(&self, id: &str) -> AppResult<Option<ContestTiming>> {
        let row = sqlx::query_as::<_, TimingRow>(
            r#"SELECT start_time, duration_seconds FROM contests WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| ContestTiming {
            start_time: r.start_time,
            duration_seconds: r.duration_seconds,
        }))
    }

    async fn upsert_user(&self, id: &str, name: Option<&str>) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET name = COALESCE($2, users.name)
            "#,
        )
        .bind(id)
        .bind(name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch_user(&self, id: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT id, name FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn fetch_users(&self, ids: &[String]) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT id, name FROM users WHERE id = ANY($1)"#)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn upsert_result(
        &self,
        contest_id: &str,
        user_id: &str,
        problem_index: i32,
        solved_at: DateTime<Utc>,
    ) -> AppResult<()> {
        // ON CONFLICT on the unique triple: concurrent marks converge to one
        // row instead of racing an insert against a select.
        sqlx::query(
            r#"
            INSERT INTO results (contest_id, user_id, problem_index, solved_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (contest_id, user_id, problem_index)
            DO UPDATE SET solved_at = $4
            "#,
        )
        .bind(contest_id)
        .bind(user_id)
        .bind(problem_index)
        .bind(solved_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_result(
        &self,
        contest_id: &str,
        user_id: &str,
        problem_index: i32,
    ) -> AppResult<()> {
        sqlx::query(
            r#"DELETE FROM results WHERE contest_id = $1 AND user_id = $2 AND problem_index = $3"#,
        )
        .bind(contest_id)
        .bind(user_id)
        .bind(problem_index)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch_contest_results(&self, contest_id: &str) -> AppResult<Vec<SolvedResult>> {
        let rows = sqlx::query_as::<_, SolvedResult>(
            r#"
            SELECT contest_id, user_id, problem_index, solved_at
            FROM results
            WHERE contest_id = $1
            "#,
        )
        .bind(contest_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn fetch_all_results(&self) -> AppResult<Vec<SolvedResult>> {
        let rows = sqlx::query_as::<_, SolvedResult>(
            r#"SELECT contest_id, user_id, problem_index, solved_at FROM results"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn fetch_recent_results(&self, limit: i64) -> AppResult<Vec<SolvedResult>> {
        let rows = sqlx::query_as::<_, SolvedResult>(
            r#"
            SELECT contest_id, user_id, problem_index, solved_at
            FROM results
            ORDER BY solved_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
