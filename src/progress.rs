//! Progress callback for trajectory aggregation.
//!
//! Implementations are told each time a user's row has been emitted. The
//! aggregator itself is sequential, but callbacks are shared behind an
//! `Arc` and may be polled from another thread, so they must be
//! `Send + Sync`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::info;

/// Trait for receiving progress updates while users are flushed.
pub trait ProgressCallback: Send + Sync {
    /// Called after a user's row was written. `users_done` counts from 1.
    fn on_user(&self, users_done: u64, user_id: &str);
}

/// No-op implementation, the aggregator's default.
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_user(&self, _users_done: u64, _user_id: &str) {}
}

/// Logs the running user count every `every` users.
pub struct LogProgress {
    every: u64,
}

impl LogProgress {
    /// `every == 0` disables logging.
    pub fn new(every: u64) -> Self {
        Self { every }
    }
}

impl ProgressCallback for LogProgress {
    fn on_user(&self, users_done: u64, _user_id: &str) {
        if self.every > 0 && users_done % self.every == 0 {
            info!("Number of users: {}", users_done);
        }
    }
}

/// Simple atomic progress tracker that can be polled from another thread.
/// Useful for testing and as a reference implementation.
pub struct AtomicProgressTracker {
    pub last_user: Mutex<String>,
    pub completed: AtomicU64,
}

impl Default for AtomicProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicProgressTracker {
    pub fn new() -> Self {
        Self {
            last_user: Mutex::new(String::new()),
            completed: AtomicU64::new(0),
        }
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }
}

impl ProgressCallback for AtomicProgressTracker {
    fn on_user(&self, users_done: u64, user_id: &str) {
        if let Ok(mut last) = self.last_user.lock() {
            *last = user_id.to_string();
        }
        self.completed.store(users_done, Ordering::SeqCst);
    }
}
