//! Client-side countdown
//!
//! Remaining time is always derived from the server-issued start timestamp
//! plus duration, never from a locally accumulated counter, so a client that
//! joins late or re-renders arbitrarily still agrees with the server about
//! when the contest ends.

use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::{
    constants::COUNTDOWN_TICK_MS,
    models::ContestTiming,
    utils::time::{epoch_ms, format_clock},
};

/// A contest window as the client sees it: start in epoch ms plus duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub start_ms: i64,
    pub duration_seconds: i64,
}

impl Countdown {
    pub fn new(start_ms: i64, duration_seconds: i64) -> Self {
        Self {
            start_ms,
            duration_seconds,
        }
    }

    /// Build from a server status response; `None` until the contest starts
    pub fn from_timing(timing: &ContestTiming) -> Option<Self> {
        timing
            .start_time
            .map(|start| Self::new(epoch_ms(start), timing.duration_seconds))
    }

    pub fn end_ms(&self) -> i64 {
        self.start_ms + self.duration_seconds * 1000
    }

    /// Remaining milliseconds at `now_ms`, clamped to zero
    pub fn time_left_ms(&self, now_ms: i64) -> i64 {
        (self.end_ms() - now_ms).max(0)
    }

    pub fn is_over(&self, now_ms: i64) -> bool {
        self.time_left_ms(now_ms) == 0
    }
}

/// One observation of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub time_left_ms: i64,
    /// True exactly once: on the first observation at or past the end
    pub just_ended: bool,
}

impl Tick {
    /// Remaining time as an MM:SS display string
    pub fn clock(&self) -> String {
        format_clock(self.time_left_ms)
    }
}

/// Countdown plus the fired-once end latch
///
/// `observe` may be called from every re-render; the latch guarantees the
/// end transition is reported a single time no matter how often the zero
/// state is observed.
#[derive(Debug)]
pub struct CountdownState {
    countdown: Countdown,
    ended: bool,
}

impl CountdownState {
    pub fn new(countdown: Countdown) -> Self {
        Self {
            countdown,
            ended: false,
        }
    }

    pub fn observe(&mut self, now_ms: i64) -> Tick {
        let time_left_ms = self.countdown.time_left_ms(now_ms);
        let just_ended = time_left_ms == 0 && !self.ended;
        if just_ended {
            self.ended = true;
        }
        Tick {
            time_left_ms,
            just_ended,
        }
    }
}

/// Background countdown driver; the task is aborted on drop so a torn-down
/// view never leaks a ticking timer
pub struct CountdownHandle {
    task: JoinHandle<()>,
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Drive a countdown on the wall clock, invoking `on_tick` roughly every
/// second and `on_end` exactly once when time runs out
pub fn spawn_countdown<T, E>(countdown: Countdown, on_tick: T, on_end: E) -> CountdownHandle
where
    T: FnMut(i64) + Send + 'static,
    E: FnOnce() + Send + 'static,
{
    spawn_countdown_with_clock(countdown, || epoch_ms(Utc::now()), on_tick, on_end)
}

/// Same driver with an injected clock
pub fn spawn_countdown_with_clock<C, T, E>(
    countdown: Countdown,
    clock: C,
    mut on_tick: T,
    on_end: E,
) -> CountdownHandle
where
    C: Fn() -> i64 + Send + 'static,
    T: FnMut(i64) + Send + 'static,
    E: FnOnce() + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut state = CountdownState::new(countdown);
        let mut interval = tokio::time::interval(Duration::from_millis(COUNTDOWN_TICK_MS));
        let mut on_end = Some(on_end);
        loop {
            interval.tick().await;
            let tick = state.observe(clock());
            tracing::trace!(clock = %tick.clock(), "countdown tick");
            on_tick(tick.time_left_ms);
            if tick.just_ended {
                if let Some(on_end) = on_end.take() {
                    on_end();
                }
                break;
            }
        }
    });
    CountdownHandle { task }
}
