//! Client-side countdown and synchronization
//!
//! Library support for clients of the contest API: deriving remaining time
//! from the server's start timestamp, detecting expiry locally, waiting for
//! a start via status polling, and optimistic mark state.

pub mod countdown;
pub mod poller;

pub use countdown::{Countdown, CountdownHandle, CountdownState, Tick, spawn_countdown};
pub use poller::{MarkTracker, StatusSource, wait_for_start, wait_for_start_every};
