// Copyright (c) 2026 Cronbeats Contributors. All rights reserved.
// SPDX-License-Identifier: MIT

//! Rust SDK for Cronbeats cron job monitoring.
//!
//! This crate reports the lifecycle of a scheduled job to the Cronbeats
//! service: a `start` event when a run begins, `progress` events along the
//! way, and `success` or `fail` when it ends.
//!
//! The delivery engine is deliberately boring and safe for the host job:
//!
//! - **Fire-and-forget**: lifecycle calls never return errors. Network
//!   failures, timeouts, and server errors are retried within a bounded
//!   budget and then dropped with a debug log. Monitoring can degrade; the
//!   job it monitors cannot be crashed by it.
//! - **Bounded latency**: each call is capped by the per-attempt timeout
//!   times the attempt budget plus backoff, so a dead monitoring service
//!   delays the job by a known worst case instead of hanging it.
//! - **Fail-fast configuration**: an invalid job key is rejected at
//!   construction, the only place an error is surfaced.
//!
//! # Example
//!
//! ```ignore
//! use cronbeats::CronbeatsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CronbeatsClient::new("abc123DE")?;
//!
//!     client.start().await;
//!
//!     for (done, step) in run_steps() {
//!         client.progress((done, step)).await;
//!     }
//!
//!     client.success().await;
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{ClientConfig, CronbeatsClient, CronbeatsClientBuilder};
pub use error::{CronbeatsError, Result};

// Re-export core and HTTP types for convenience
pub use cronbeats_core::{
	EventKind, InvalidJobKey, JobKey, ProgressUpdate, TelemetryEvent, MAX_MESSAGE_BYTES,
};
pub use cronbeats_http::RetryConfig;
