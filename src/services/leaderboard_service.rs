//! Leaderboard aggregation
//!
//! Result rows are reduced to per-user solved counts on every read. The
//! unique-triple invariant means each row is already one distinct solve, so
//! counting rows is counting problems.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{
    error::AppResult,
    handlers::contests::response::UserProgress,
    models::SolvedResult,
    store::ContestStore,
};

/// One global leaderboard entry
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub user_id: String,
    pub name: Option<String>,
    pub solved_count: i64,
}

/// Leaderboard service for aggregation logic
pub struct LeaderboardService;

impl LeaderboardService {
    /// Per-contest progress map, keyed by user id
    pub fn per_contest(
        rows: &[SolvedResult],
        names: &HashMap<String, Option<String>>,
    ) -> BTreeMap<String, UserProgress> {
        let mut results: BTreeMap<String, UserProgress> = BTreeMap::new();
        for row in rows {
            let entry = results
                .entry(row.user_id.clone())
                .or_insert_with(|| UserProgress {
                    name: names.get(&row.user_id).cloned().flatten(),
                    solved: BTreeMap::new(),
                });
            entry.solved.insert(row.problem_index, true);
        }
        results
    }

    /// Global ranking across all contests, descending by solved count with
    /// names ascending as the tie-break (unnamed users last)
    pub async fn global(store: &dyn ContestStore) -> AppResult<Vec<LeaderboardRow>> {
        let rows = store.fetch_all_results().await?;

        let mut counts: HashMap<String, i64> = HashMap::new();
        for row in &rows {
            *counts.entry(row.user_id.clone()).or_default() += 1;
        }

        let user_ids: Vec<String> = counts.keys().cloned().collect();
        let names: HashMap<String, Option<String>> = store
            .fetch_users(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        let mut ranked: Vec<LeaderboardRow> = counts
            .into_iter()
            .map(|(user_id, solved_count)| LeaderboardRow {
                name: names.get(&user_id).cloned().flatten(),
                user_id,
                solved_count,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.solved_count
                .cmp(&a.solved_count)
                .then_with(|| match (&a.name, &b.name) {
                    (Some(x), Some(y)) => x.cmp(y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => a.user_id.cmp(&b.user_id),
                })
        });

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(contest_id: &str, user_id: &str, problem_index: i32) -> SolvedResult {
        SolvedResult {
            contest_id: contest_id.to_string(),
            user_id: user_id.to_string(),
            problem_index,
            solved_at: Utc::now(),
        }
    }

    #[test]
    fn test_per_contest_counts_distinct_indices() {
        let rows = vec![row("c1", "u1", 0), row("c1", "u1", 2), row("c1", "u2", 0)];
        let mut names = HashMap::new();
        names.insert("u1".to_string(), Some("Ada".to_string()));

        let results = LeaderboardService::per_contest(&rows, &names);

        assert_eq!(results.len(), 2);
        assert_eq!(results["u1"].solved.len(), 2);
        assert_eq!(results["u1"].name.as_deref(), Some("Ada"));
        assert_eq!(results["u2"].solved.len(), 1);
        assert_eq!(results["u2"].name, None);
    }

    #[test]
    fn test_per_contest_empty() {
        let results = LeaderboardService::per_contest(&[], &HashMap::new());
        assert!(results.is_empty());
    }

    #[test]
    fn test_global_ranking_order() {
        tokio_test::block_on(async {
            let store = crate::store::MemStore::new();
            store.upsert_user("u1", Some("Zoe")).await.unwrap();
            store.upsert_user("u2", Some("Ada")).await.unwrap();

            let now = Utc::now();
            // u1 solves two problems across two contests, u2 and u3 one each
            store.upsert_result("c1", "u1", 0, now).await.unwrap();
            store.upsert_result("c2", "u1", 1, now).await.unwrap();
            store.upsert_result("c1", "u2", 0, now).await.unwrap();
            store.upsert_result("c2", "u3", 0, now).await.unwrap();

            let ranked = LeaderboardService::global(&store).await.unwrap();

            assert_eq!(ranked.len(), 3);
            assert_eq!(ranked[0].user_id, "u1");
            assert_eq!(ranked[0].solved_count, 2);
            // Tie between u2 (Ada) and u3 (unnamed): named user first
            assert_eq!(ranked[1].user_id, "u2");
            assert_eq!(ranked[2].user_id, "u3");
            assert_eq!(ranked[2].name, None);
        });
    }

    #[test]
    fn test_global_counts_rows_across_contests() {
        tokio_test::block_on(async {
            let store = crate::store::MemStore::new();
            let now = Utc::now();
            store.upsert_user("u1", None).await.unwrap();
            store.upsert_result("c1", "u1", 0, now).await.unwrap();
            // Same index in a different contest still counts separately
            store.upsert_result("c2", "u1", 0, now).await.unwrap();

            let ranked = LeaderboardService::global(&store).await.unwrap();
            assert_eq!(ranked[0].solved_count, 2);
        });
    }
}
