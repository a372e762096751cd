// Copyright (c) 2026 Cronbeats Contributors. All rights reserved.
// SPDX-License-Identifier: MIT

//! Telemetry event types for job lifecycle reporting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::JobKey;

/// Maximum progress message size in bytes.
pub const MAX_MESSAGE_BYTES: usize = 255;

/// Highest meaningful progress percentage.
const MAX_SEQ: u8 = 100;

/// Kind of telemetry event in a job run's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
	/// Job run is beginning
	Start,
	/// Job run completed without error
	Success,
	/// Job run failed
	Fail,
	/// Job run is partway through
	Progress,
}

impl fmt::Display for EventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Start => write!(f, "start"),
			Self::Success => write!(f, "success"),
			Self::Fail => write!(f, "fail"),
			Self::Progress => write!(f, "progress"),
		}
	}
}

impl FromStr for EventKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"start" => Ok(Self::Start),
			"success" => Ok(Self::Success),
			"fail" => Ok(Self::Fail),
			"progress" => Ok(Self::Progress),
			_ => Err(format!("unknown event kind: {}", s)),
		}
	}
}

/// A normalized progress report.
///
/// Progress can be expressed as a percentage, a free-text message, or both.
/// Every construction path funnels into this one representation so the send
/// path never branches on input shape: the percentage is clamped to 100 and
/// the message truncated to [`MAX_MESSAGE_BYTES`] up front.
///
/// A message-only update carries no percentage and the dashboard renders no
/// progress bar for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
	seq: Option<u8>,
	message: Option<String>,
}

impl ProgressUpdate {
	/// Creates a percentage-only update, clamped to 100.
	pub fn percent(seq: u8) -> Self {
		Self {
			seq: Some(seq.min(MAX_SEQ)),
			message: None,
		}
	}

	/// Creates a message-only update (no progress bar).
	pub fn message_only(message: impl Into<String>) -> Self {
		Self {
			seq: None,
			message: Some(truncate_message(&message.into())),
		}
	}

	/// Attaches a message to this update.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(truncate_message(&message.into()));
		self
	}

	/// The progress percentage, if one was supplied.
	pub fn seq(&self) -> Option<u8> {
		self.seq
	}

	/// The progress message, if one was supplied.
	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}
}

impl From<u8> for ProgressUpdate {
	fn from(seq: u8) -> Self {
		Self::percent(seq)
	}
}

impl From<(u8, &str)> for ProgressUpdate {
	fn from((seq, message): (u8, &str)) -> Self {
		Self::percent(seq).with_message(message)
	}
}

impl From<(u8, String)> for ProgressUpdate {
	fn from((seq, message): (u8, String)) -> Self {
		Self::percent(seq).with_message(message)
	}
}

impl From<&str> for ProgressUpdate {
	fn from(message: &str) -> Self {
		Self::message_only(message)
	}
}

/// Truncate a message to the wire limit at a UTF-8 boundary.
fn truncate_message(message: &str) -> String {
	if message.len() <= MAX_MESSAGE_BYTES {
		return message.to_string();
	}
	let valid_len = message
		.char_indices()
		.take_while(|(i, c)| i + c.len_utf8() <= MAX_MESSAGE_BYTES)
		.last()
		.map(|(i, c)| i + c.len_utf8())
		.unwrap_or(0);
	message[..valid_len].to_string()
}

/// One telemetry event as sent on the wire.
///
/// `seq` and `message` are present only for progress events that carry them;
/// a message-only progress event has no `seq` field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryEvent {
	pub job_key: JobKey,
	pub event: EventKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub seq: Option<u8>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl TelemetryEvent {
	/// A `start` event marking the beginning of a job run.
	pub fn start(job_key: JobKey) -> Self {
		Self::bare(job_key, EventKind::Start)
	}

	/// A `success` event marking a completed job run.
	pub fn success(job_key: JobKey) -> Self {
		Self::bare(job_key, EventKind::Success)
	}

	/// A `fail` event marking a failed job run.
	pub fn fail(job_key: JobKey) -> Self {
		Self::bare(job_key, EventKind::Fail)
	}

	/// A `progress` event carrying the normalized update.
	pub fn progress(job_key: JobKey, update: ProgressUpdate) -> Self {
		Self {
			job_key,
			event: EventKind::Progress,
			seq: update.seq,
			message: update.message,
		}
	}

	fn bare(job_key: JobKey, event: EventKind) -> Self {
		Self {
			job_key,
			event,
			seq: None,
			message: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn job_key() -> JobKey {
		JobKey::new("abc123DE").unwrap()
	}

	proptest! {
		#[test]
		fn event_kind_roundtrip(kind in prop_oneof![
			Just(EventKind::Start),
			Just(EventKind::Success),
			Just(EventKind::Fail),
			Just(EventKind::Progress),
		]) {
			let s = kind.to_string();
			let parsed: EventKind = s.parse().unwrap();
			prop_assert_eq!(kind, parsed);
		}

		#[test]
		fn percent_always_within_range(seq in any::<u8>()) {
			let update = ProgressUpdate::percent(seq);
			prop_assert!(update.seq().unwrap() <= 100);
		}

		#[test]
		fn truncated_message_is_bounded_prefix(s in "\\PC{0,400}") {
			let update = ProgressUpdate::message_only(s.clone());
			let message = update.message().unwrap();
			prop_assert!(message.len() <= MAX_MESSAGE_BYTES);
			prop_assert!(s.starts_with(message));
		}
	}

	#[test]
	fn event_kind_serializes_snake_case() {
		assert_eq!(
			serde_json::to_string(&EventKind::Start).unwrap(),
			"\"start\""
		);
		assert_eq!(
			serde_json::to_string(&EventKind::Progress).unwrap(),
			"\"progress\""
		);
	}

	#[test]
	fn construction_paths_serialize_identically() {
		let positional = TelemetryEvent::progress(job_key(), (50, "halfway").into());
		let structured = TelemetryEvent::progress(
			job_key(),
			ProgressUpdate::percent(50).with_message("halfway"),
		);

		assert_eq!(
			serde_json::to_vec(&positional).unwrap(),
			serde_json::to_vec(&structured).unwrap()
		);
	}

	#[test]
	fn progress_payload_shape() {
		let event = TelemetryEvent::progress(job_key(), (50, "halfway").into());
		assert_eq!(
			serde_json::to_string(&event).unwrap(),
			r#"{"job_key":"abc123DE","event":"progress","seq":50,"message":"halfway"}"#
		);
	}

	#[test]
	fn message_only_progress_omits_seq() {
		let event = TelemetryEvent::progress(job_key(), ProgressUpdate::message_only("status only"));
		let json = serde_json::to_string(&event).unwrap();
		assert!(!json.contains("seq"));
		assert_eq!(
			json,
			r#"{"job_key":"abc123DE","event":"progress","message":"status only"}"#
		);
	}

	#[test]
	fn lifecycle_payloads_carry_no_progress_fields() {
		for event in [
			TelemetryEvent::start(job_key()),
			TelemetryEvent::success(job_key()),
			TelemetryEvent::fail(job_key()),
		] {
			let json = serde_json::to_string(&event).unwrap();
			assert!(!json.contains("seq"));
			assert!(!json.contains("message"));
		}
	}

	#[test]
	fn oversized_percent_clamps_to_100() {
		assert_eq!(ProgressUpdate::percent(250).seq(), Some(100));
	}

	#[test]
	fn truncation_respects_utf8_boundaries() {
		// 2-byte chars; 255 is not a multiple of 2, so a naive byte slice
		// would split a character.
		let s = "é".repeat(200);
		let update = ProgressUpdate::message_only(s);
		let message = update.message().unwrap();
		assert!(message.len() <= MAX_MESSAGE_BYTES);
		assert_eq!(message.len() % 2, 0);
	}
}
