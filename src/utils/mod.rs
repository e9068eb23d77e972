//! Utility functions

pub mod id;
pub mod time;
