// Copyright (c) 2026 Cronbeats Contributors. All rights reserved.
// SPDX-License-Identifier: MIT

//! Core types for the Cronbeats job monitoring SDK.
//!
//! This crate holds the wire-level data model shared by the SDK: job keys,
//! telemetry event kinds, progress updates, and the event payload itself.
//! It performs no I/O.

mod event;
mod job_key;

pub use event::{EventKind, ProgressUpdate, TelemetryEvent, MAX_MESSAGE_BYTES};
pub use job_key::{InvalidJobKey, JobKey, JOB_KEY_LEN};
