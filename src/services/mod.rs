//! Business logic services

pub mod contest_service;
pub mod leaderboard_service;
pub mod user_service;

pub use contest_service::ContestService;
pub use leaderboard_service::{LeaderboardRow, LeaderboardService};
pub use user_service::UserService;
