// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for session refresh activity.
#[derive(Debug, Default)]
pub struct SessionMetrics {
	refresh_attempts: AtomicU64,
	refresh_successes: AtomicU64,
	refresh_failures: AtomicU64,
	singleflight_joins: AtomicU64,
}
impl SessionMetrics {
	/// Returns the total number of refresh calls started.
	pub fn refresh_attempts(&self) -> u64 {
		self.refresh_attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of refreshes that rotated credentials.
	pub fn refresh_successes(&self) -> u64 {
		self.refresh_successes.load(Ordering::Relaxed)
	}

	/// Returns the number of refreshes that ended the session.
	pub fn refresh_failures(&self) -> u64 {
		self.refresh_failures.load(Ordering::Relaxed)
	}

	/// Returns the number of requests that adopted an already-resolved refresh outcome instead
	/// of starting their own rotation.
	pub fn singleflight_joins(&self) -> u64 {
		self.singleflight_joins.load(Ordering::Relaxed)
	}

	pub(crate) fn record_attempt(&self) {
		self.refresh_attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_success(&self) {
		self.refresh_successes.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.refresh_failures.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_join(&self) {
		self.singleflight_joins.fetch_add(1, Ordering::Relaxed);
	}
}
