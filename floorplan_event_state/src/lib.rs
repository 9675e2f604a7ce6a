// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Event State: small state machines for pointer interactions.
//!
//! Each module handles one interaction pattern that needs state carried across
//! several input events:
//!
//! - [`drag`]: Track a pan gesture and derive the viewport offset from pointer travel
//! - [`hover`]: Track which target is under the pointer and emit enter/leave transitions
//!
//! The managers do not know about scenes, viewports, or rendering. They accept
//! pre-computed information (raw pointer positions, hit-test results) and
//! produce deltas or transitions that the caller interprets.
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
pub mod hover;
