// Copyright (c) 2026 Cronbeats Contributors. All rights reserved.
// SPDX-License-Identifier: MIT

//! Error types for the Cronbeats SDK.

use cronbeats_core::InvalidJobKey;
use cronbeats_http::RetryableError;
use thiserror::Error;

/// Cronbeats SDK errors.
///
/// Only configuration errors escape the library, out of
/// [`build`](crate::CronbeatsClientBuilder::build). Everything else is
/// internal to the delivery path: lifecycle calls absorb these and return
/// normally.
#[derive(Debug, Error)]
pub enum CronbeatsError {
	/// No job key was supplied to the builder.
	#[error("job key is required")]
	MissingJobKey,

	/// The supplied job key is malformed.
	#[error(transparent)]
	InvalidJobKey(#[from] InvalidJobKey),

	/// HTTP request failed at the transport level.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// Server returned an error response.
	#[error("server error ({status}): {message}")]
	ServerError { status: u16, message: String },

	/// Rate limited by the server.
	#[error("rate limited, retry after {retry_after_secs:?} seconds")]
	RateLimited {
		/// Parsed `Retry-After` header, informational only: retries follow
		/// the configured backoff schedule, not this value.
		retry_after_secs: Option<u64>,
	},

	/// Client has been shut down.
	#[error("client has been shut down")]
	ClientShutdown,
}

impl RetryableError for CronbeatsError {
	fn is_retryable(&self) -> bool {
		match self {
			CronbeatsError::RequestFailed(e) => e.is_retryable(),
			CronbeatsError::ServerError { status, .. } => (500..=599).contains(status),
			CronbeatsError::RateLimited { .. } => true,
			_ => false,
		}
	}
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, CronbeatsError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn server_error_5xx_is_retryable() {
		for status in [500, 502, 503, 504, 599] {
			let err = CronbeatsError::ServerError {
				status,
				message: "test".to_string(),
			};
			assert!(err.is_retryable(), "status {status} should be retryable");
		}
	}

	#[test]
	fn server_error_4xx_is_not_retryable() {
		for status in [400, 401, 403, 404, 422] {
			let err = CronbeatsError::ServerError {
				status,
				message: "test".to_string(),
			};
			assert!(
				!err.is_retryable(),
				"status {status} should not be retryable"
			);
		}
	}

	#[test]
	fn rate_limited_is_retryable() {
		let err = CronbeatsError::RateLimited {
			retry_after_secs: Some(30),
		};
		assert!(err.is_retryable());
	}

	#[test]
	fn configuration_errors_are_not_retryable() {
		assert!(!CronbeatsError::MissingJobKey.is_retryable());
		assert!(!CronbeatsError::InvalidJobKey(InvalidJobKey).is_retryable());
	}

	#[test]
	fn shutdown_is_not_retryable() {
		assert!(!CronbeatsError::ClientShutdown.is_retryable());
	}
}
