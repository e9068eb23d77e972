//! Domain models

pub mod contest;
pub mod problem;
pub mod result;
pub mod user;

pub use contest::{Contest, ContestPhase, ContestTiming};
pub use problem::{Difficulty, DifficultyFilter, Problem};
pub use result::SolvedResult;
pub use user::User;
