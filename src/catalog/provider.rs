//! Problem pool provider
//!
//! Fetches the raw problem catalog and reduces it to the candidate pool:
//! premium-only entries are dropped, numeric difficulty levels become labels,
//! and only Easy/Medium problems are ever offered.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::time::Duration;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{Difficulty, DifficultyFilter, Problem},
};

use super::topic::infer_topic;

/// Source of candidate problems; the production impl is a network fetch, so
/// callers treat every call as fallible
#[async_trait]
pub trait PoolProvider: Send + Sync {
    /// Fetch the full candidate pool (already premium-filtered and
    /// restricted to Easy/Medium)
    async fn fetch_pool(&self) -> AppResult<Vec<Problem>>;
}

/// Raw catalog entry shapes, as served by the upstream API
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    stat_status_pairs: Vec<StatStatusPair>,
}

#[derive(Debug, Deserialize)]
struct StatStatusPair {
    stat: Stat,
    difficulty: DifficultyLevel,
    paid_only: bool,
}

#[derive(Debug, Deserialize)]
struct Stat {
    #[serde(rename = "question__title")]
    question_title: String,
    #[serde(rename = "question__title_slug")]
    question_title_slug: String,
}

#[derive(Debug, Deserialize)]
struct DifficultyLevel {
    level: u8,
}

/// HTTP-backed catalog provider
pub struct CatalogClient {
    url: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let client = Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Catalog(e.to_string()))?;

        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }
}

#[async_trait]
impl PoolProvider for CatalogClient {
    async fn fetch_pool(&self) -> AppResult<Vec<Problem>> {
        tracing::info!("Fetching problem catalog from {}", self.url);
        let res = self.client.get(&self.url).send().await?;
        let catalog: CatalogResponse = res.json().await?;

        let pool = to_candidates(catalog.stat_status_pairs);
        tracing::info!("{} candidate problems in the pool", pool.len());
        Ok(pool)
    }
}

/// Reduce raw catalog entries to the candidate pool
fn to_candidates(entries: Vec<StatStatusPair>) -> Vec<Problem> {
    entries
        .into_iter()
        .filter(|e| !e.paid_only)
        .filter_map(|e| {
            let difficulty = Difficulty::from_level(e.difficulty.level)?;
            // Hard problems are never offered
            if difficulty == Difficulty::Hard {
                return None;
            }
            Some(Problem {
                title: e.stat.question_title,
                slug: e.stat.question_title_slug,
                difficulty,
            })
        })
        .collect()
}

/// Narrow a candidate pool by exact difficulty and/or inferred topic
///
/// A topic yielding fewer candidates than requested is an error; callers must
/// not silently fall back to a different topic.
pub fn filter_pool(
    pool: Vec<Problem>,
    difficulty: DifficultyFilter,
    topic: Option<&str>,
    requested: usize,
) -> AppResult<Vec<Problem>> {
    let filtered: Vec<Problem> = match difficulty.exact() {
        Some(exact) => pool.into_iter().filter(|p| p.difficulty == exact).collect(),
        None => pool,
    };

    let filtered = match topic {
        Some(topic) => {
            let by_topic: Vec<Problem> = filtered
                .into_iter()
                .filter(|p| infer_topic(&p.title, &p.slug) == topic)
                .collect();
            if by_topic.len() < requested {
                return Err(AppError::InsufficientPool {
                    requested,
                    available: by_topic.len(),
                });
            }
            by_topic
        }
        None => filtered,
    };

    if filtered.len() < requested {
        return Err(AppError::InsufficientPool {
            requested,
            available: filtered.len(),
        });
    }

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, slug: &str, level: u8, paid: bool) -> StatStatusPair {
        StatStatusPair {
            stat: Stat {
                question_title: title.to_string(),
                question_title_slug: slug.to_string(),
            },
            difficulty: DifficultyLevel { level },
            paid_only: paid,
        }
    }

    fn problem(title: &str, difficulty: Difficulty) -> Problem {
        Problem {
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            difficulty,
        }
    }

    #[test]
    fn test_catalog_response_shape() {
        // Raw upstream payload, double-underscore field names included
        let raw = r#"{
            "stat_status_pairs": [
                {
                    "stat": {
                        "question__title": "Two Sum",
                        "question__title_slug": "two-sum"
                    },
                    "difficulty": { "level": 1 },
                    "paid_only": false
                },
                {
                    "stat": {
                        "question__title": "Paid Problem",
                        "question__title_slug": "paid-problem"
                    },
                    "difficulty": { "level": 2 },
                    "paid_only": true
                }
            ]
        }"#;

        let catalog: CatalogResponse = serde_json::from_str(raw).unwrap();
        let pool = to_candidates(catalog.stat_status_pairs);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].title, "Two Sum");
        assert_eq!(pool[0].slug, "two-sum");
        assert_eq!(pool[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_to_candidates_drops_premium_and_hard() {
        let pool = to_candidates(vec![
            entry("Two Sum", "two-sum", 1, false),
            entry("Paid Problem", "paid-problem", 1, true),
            entry("Median of Arrays", "median-of-arrays", 3, false),
            entry("Add Two Numbers", "add-two-numbers", 2, false),
        ]);

        let slugs: Vec<&str> = pool.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["two-sum", "add-two-numbers"]);
    }

    #[test]
    fn test_filter_pool_by_exact_difficulty() {
        let pool = vec![
            problem("Two Sum Array", Difficulty::Easy),
            problem("Add Two Numbers", Difficulty::Medium),
        ];

        let filtered = filter_pool(pool, DifficultyFilter::Easy, None, 1).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_filter_pool_by_topic_insufficient() {
        let pool = vec![
            problem("Reverse Linked List", Difficulty::Easy),
            problem("Two Sum Array", Difficulty::Easy),
        ];

        let err = filter_pool(pool, DifficultyFilter::Mixed, Some("Linked List"), 2).unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientPool {
                requested: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn test_filter_pool_insufficient_overall() {
        let pool = vec![problem("Two Sum Array", Difficulty::Easy)];
        let err = filter_pool(pool, DifficultyFilter::Mixed, None, 3).unwrap_err();
        assert!(matches!(err, AppError::InsufficientPool { .. }));
    }
}
