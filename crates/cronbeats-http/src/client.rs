// Copyright (c) 2026 Cronbeats Contributors. All rights reserved.
// SPDX-License-Identifier: MIT

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client builder with the standard Cronbeats User-Agent
/// header.
///
/// Use this when you need to customize the client (e.g., set timeout).
///
/// # Example
/// ```ignore
/// let client = cronbeats_http::builder()
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client builder with a custom User-Agent header.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder().user_agent(user_agent.into())
}

/// Returns the standard Cronbeats User-Agent string.
///
/// Format: `cronbeats-rust/{version}`
pub fn user_agent() -> String {
	format!("cronbeats-rust/{}", env!("CARGO_PKG_VERSION"))
}
