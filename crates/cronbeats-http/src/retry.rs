// Copyright (c) 2026 Cronbeats Contributors. All rights reserved.
// SPDX-License-Identifier: MIT

//! Retry logic with exponential backoff for transient failures.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
	/// Maximum number of retries after the initial attempt.
	pub max_retries: u32,
	/// Delay before the first retry; doubles on each subsequent retry.
	pub initial_backoff: Duration,
	/// Upper bound on any single backoff delay (before jitter).
	pub max_backoff: Duration,
	/// Maximum random jitter added to each backoff delay.
	pub jitter: Duration,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_retries: 2,
			initial_backoff: Duration::from_millis(250),
			max_backoff: Duration::from_secs(10),
			jitter: Duration::from_millis(100),
		}
	}
}

impl RetryConfig {
	/// Disables retries entirely.
	pub fn none() -> Self {
		Self {
			max_retries: 0,
			..Self::default()
		}
	}

	/// Backoff delay before the given retry (1-based), jitter included.
	pub fn backoff_for(&self, retry: u32) -> Duration {
		let exponent = retry.saturating_sub(1).min(20);
		let backoff = self
			.initial_backoff
			.saturating_mul(1u32 << exponent)
			.min(self.max_backoff);

		let jitter_ms = self.jitter.as_millis() as u64;
		if jitter_ms == 0 {
			backoff
		} else {
			backoff + Duration::from_millis(fastrand::u64(0..=jitter_ms))
		}
	}
}

/// Errors that can indicate whether a retry might succeed.
pub trait RetryableError {
	fn is_retryable(&self) -> bool;
}

impl RetryableError for reqwest::Error {
	fn is_retryable(&self) -> bool {
		// Timeouts and connection-level failures (refused, DNS) are worth
		// retrying; everything else (builder misuse, decode) is not.
		self.is_timeout() || self.is_connect()
	}
}

/// Runs an operation, retrying transient failures with exponential backoff.
///
/// The operation is attempted once, then retried up to `config.max_retries`
/// times as long as the returned error reports itself retryable. The first
/// success, or the first non-retryable error, or the error of the final
/// attempt is returned.
pub async fn retry<T, E, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T, E>
where
	F: FnMut() -> Fut,
	Fut: Future<Output = Result<T, E>>,
	E: RetryableError + fmt::Display,
{
	let mut attempt: u32 = 0;
	loop {
		match op().await {
			Ok(value) => return Ok(value),
			Err(err) if err.is_retryable() && attempt < config.max_retries => {
				attempt += 1;
				let delay = config.backoff_for(attempt);
				debug!(
					attempt,
					delay_ms = delay.as_millis() as u64,
					error = %err,
					"Retrying after transient failure"
				);
				tokio::time::sleep(delay).await;
			}
			Err(err) => return Err(err),
		}
	}
}
