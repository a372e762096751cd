// Copyright (c) 2026 Cronbeats Contributors. All rights reserved.
// SPDX-License-Identifier: MIT

//! The Cronbeats client and its builder.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cronbeats_core::{JobKey, ProgressUpdate, TelemetryEvent};
use cronbeats_http::RetryConfig;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::{CronbeatsError, Result};

/// Default endpoint for the hosted Cronbeats service.
const DEFAULT_BASE_URL: &str = "https://cronbeats.io";
/// Path of the telemetry ingestion endpoint.
const EVENTS_PATH: &str = "/api/v1/events";
/// Default per-attempt request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the Cronbeats client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Timeout for each individual HTTP attempt.
	pub request_timeout: Duration,
	/// Retry configuration for HTTP requests.
	pub retry_config: RetryConfig,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
			retry_config: RetryConfig::default(),
		}
	}
}

/// Builder for constructing a [`CronbeatsClient`].
pub struct CronbeatsClientBuilder {
	job_key: Option<String>,
	base_url: Option<String>,
	user_agent: Option<String>,
	config: ClientConfig,
}

impl CronbeatsClientBuilder {
	/// Creates a new builder with default settings.
	pub fn new() -> Self {
		Self {
			job_key: None,
			base_url: None,
			user_agent: None,
			config: ClientConfig::default(),
		}
	}

	/// Sets the job key (required, exactly 8 Base62 characters).
	///
	/// Found on the job's page in the Cronbeats dashboard.
	pub fn job_key(mut self, key: impl Into<String>) -> Self {
		self.job_key = Some(key.into());
		self
	}

	/// Sets the base URL of the monitoring service.
	///
	/// Defaults to the hosted service at `https://cronbeats.io`.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	/// Overrides the User-Agent header sent with every request.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}

	/// Sets the per-attempt HTTP request timeout.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.config.request_timeout = timeout;
		self
	}

	/// Sets the retry configuration.
	pub fn retry_config(mut self, config: RetryConfig) -> Self {
		self.config.retry_config = config;
		self
	}

	/// Builds the client, validating the job key.
	///
	/// Fails fast on a missing or malformed job key: a caller holding a
	/// broken key never gets a working client.
	pub fn build(self) -> Result<CronbeatsClient> {
		let job_key: JobKey = self
			.job_key
			.ok_or(CronbeatsError::MissingJobKey)?
			.parse()?;

		let base_url = self
			.base_url
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
			.trim_end_matches('/')
			.to_string();

		let http_builder = match &self.user_agent {
			Some(ua) => cronbeats_http::builder_with_user_agent(ua),
			None => cronbeats_http::builder(),
		};
		let http_client = http_builder
			.timeout(self.config.request_timeout)
			.build()
			.map_err(CronbeatsError::RequestFailed)?;

		let inner = Arc::new(ClientInner {
			job_key,
			endpoint: format!("{}{}", base_url, EVENTS_PATH),
			base_url: base_url.clone(),
			http_client,
			config: self.config,
			closed: AtomicBool::new(false),
		});

		info!(base_url = %base_url, job_key = %inner.job_key, "Cronbeats client initialized");

		Ok(CronbeatsClient { inner })
	}
}

impl Default for CronbeatsClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Internal client state.
struct ClientInner {
	job_key: JobKey,
	endpoint: String,
	base_url: String,
	http_client: Client,
	config: ClientConfig,
	closed: AtomicBool,
}

/// Client for reporting job lifecycle events to Cronbeats.
///
/// All lifecycle methods are fire-and-forget: delivery failures of any kind
/// (network errors, timeouts, server errors, exhausted retries) are absorbed
/// and logged at debug level, never surfaced. The monitored job behaves
/// identically whether the service is up, degraded, or down.
///
/// Delivery runs inline in the calling task. Each call is bounded by
/// `request_timeout × (max_retries + 1)` plus the backoff delays between
/// attempts; with default settings that is roughly 16 seconds in the worst
/// case, and a single round-trip when the service is healthy.
///
/// The client is cheap to clone and safe to share across tasks.
///
/// # Example
///
/// ```ignore
/// use cronbeats::CronbeatsClient;
///
/// let client = CronbeatsClient::new("abc123DE")?;
///
/// client.start().await;
/// // ... do the job's work ...
/// client.progress((50, "halfway")).await;
/// // ...
/// client.success().await;
/// ```
#[derive(Clone)]
pub struct CronbeatsClient {
	inner: Arc<ClientInner>,
}

impl CronbeatsClient {
	/// Creates a new builder for constructing a client.
	pub fn builder() -> CronbeatsClientBuilder {
		CronbeatsClientBuilder::new()
	}

	/// Creates a client with default settings for the given job key.
	pub fn new(job_key: impl Into<String>) -> Result<Self> {
		Self::builder().job_key(job_key).build()
	}

	/// The validated job key this client reports for.
	pub fn job_key(&self) -> &JobKey {
		&self.inner.job_key
	}

	/// Reports that a job run is beginning.
	pub async fn start(&self) {
		self.report(TelemetryEvent::start(self.inner.job_key.clone()))
			.await;
	}

	/// Reports that the job run completed without error.
	pub async fn success(&self) {
		self.report(TelemetryEvent::success(self.inner.job_key.clone()))
			.await;
	}

	/// Reports that the job run failed.
	pub async fn fail(&self) {
		self.report(TelemetryEvent::fail(self.inner.job_key.clone()))
			.await;
	}

	/// Reports intermediate progress.
	///
	/// Accepts anything that converts into a [`ProgressUpdate`]: a bare
	/// percentage, a `(percentage, message)` pair, a bare message, or an
	/// explicitly constructed update. All shapes normalize to the same wire
	/// payload.
	pub async fn progress(&self, update: impl Into<ProgressUpdate>) {
		self.report(TelemetryEvent::progress(
			self.inner.job_key.clone(),
			update.into(),
		))
		.await;
	}

	/// Shuts down the client. Subsequent lifecycle calls are dropped
	/// without touching the network. Idempotent.
	pub fn shutdown(&self) {
		if !self.inner.closed.swap(true, Ordering::SeqCst) {
			info!("Cronbeats client shutdown");
		}
	}

	/// Returns true if the client has been shut down.
	pub fn is_closed(&self) -> bool {
		self.inner.closed.load(Ordering::SeqCst)
	}

	/// The never-raise boundary: every delivery outcome is absorbed here.
	async fn report(&self, event: TelemetryEvent) {
		let kind = event.event;
		match self.deliver(&event).await {
			Ok(()) => {
				debug!(event = %kind, "Telemetry event delivered");
			}
			Err(err) => {
				debug!(event = %kind, error = %err, "Telemetry event abandoned");
			}
		}
	}

	/// Sends one event with bounded retries.
	///
	/// Transport errors, 429 and 5xx responses are retried per the retry
	/// configuration; any other non-2xx status is terminal on the first
	/// attempt.
	async fn deliver(&self, event: &TelemetryEvent) -> Result<()> {
		if self.is_closed() {
			return Err(CronbeatsError::ClientShutdown);
		}

		let inner = &self.inner;
		cronbeats_http::retry(&inner.config.retry_config, || async move {
			let response = inner
				.http_client
				.post(&inner.endpoint)
				.json(event)
				.send()
				.await
				.map_err(CronbeatsError::RequestFailed)?;

			let status = response.status();
			if status.is_success() {
				return Ok(());
			}

			if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
				let retry_after = response
					.headers()
					.get("Retry-After")
					.and_then(|v| v.to_str().ok())
					.and_then(|s| s.parse().ok());
				return Err(CronbeatsError::RateLimited {
					retry_after_secs: retry_after,
				});
			}

			let message = response.text().await.unwrap_or_default();
			Err(CronbeatsError::ServerError {
				status: status.as_u16(),
				message,
			})
		})
		.await
	}
}
