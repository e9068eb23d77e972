//! DSA Duel - Timed Shared Coding Contests
//!
//! This library provides the core functionality for DSA Duel, a small
//! service where friends spin up a timed contest over randomly sampled
//! problems from an external catalog and race a shared countdown.
//!
//! # Features
//!
//! - Random sampling without replacement from a difficulty/topic-filtered pool
//! - Created -> Running -> Expired contest lifecycle with a soft creator gate
//! - Per-user, per-problem solved ledger with per-contest and global leaderboards
//! - Client countdown/cutover synchronization against the server clock
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Store**: Persistence behind one contract (Postgres or in-memory)
//! - **Catalog**: Problem pool provider, filtering, and sampling
//! - **Sync**: Client-side countdown and polling helpers

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
