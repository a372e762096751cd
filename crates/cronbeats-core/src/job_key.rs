// Copyright (c) 2026 Cronbeats Contributors. All rights reserved.
// SPDX-License-Identifier: MIT

//! Job key validation and types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a job key in characters.
pub const JOB_KEY_LEN: usize = 8;

/// Error returned when a job key fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("job key must be exactly {JOB_KEY_LEN} Base62 characters")]
pub struct InvalidJobKey;

/// An 8-character Base62 key identifying a monitored job.
///
/// The key is validated once on construction and immutable afterwards; a
/// `JobKey` in hand is always well-formed. On the wire it serializes as a
/// plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct JobKey(String);

impl JobKey {
	/// Validates and wraps a job key.
	pub fn new(key: impl Into<String>) -> Result<Self, InvalidJobKey> {
		let key = key.into();
		if Self::is_valid(&key) {
			Ok(Self(key))
		} else {
			Err(InvalidJobKey)
		}
	}

	/// Returns true if the string is a well-formed job key.
	///
	/// Base62 is exactly the ASCII alphanumerics, so the byte length check
	/// doubles as a character count.
	pub fn is_valid(key: &str) -> bool {
		key.len() == JOB_KEY_LEN && key.bytes().all(|b| b.is_ascii_alphanumeric())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for JobKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for JobKey {
	type Err = InvalidJobKey;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl TryFrom<String> for JobKey {
	type Error = InvalidJobKey;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl AsRef<str> for JobKey {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
