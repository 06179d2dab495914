// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nested_scroll --heading-base-level=0

//! Understory Nested Scroll: deterministic, `no_std` gesture arbitration for nested scrolling.
//!
//! ## Overview
//!
//! When scrollable content sits inside a container that scrolls along the same axis
//! (for example a horizontal carousel on a page of a horizontal pager), both compete for
//! the same drag. This crate decides, sample by sample, whether the outer container may
//! intercept the gesture or whether the content keeps it.
//!
//! It handles exactly one pointer, one governing ancestor, and one content element.
//! It is not a general gesture recognizer.
//!
//! ## Inputs
//!
//! - An [`AxisProvider`](crate::types::AxisProvider): the governing ancestor's axis, resolved once
//!   at attachment (see [`ancestry`](crate::ancestry)).
//! - A [`ScrollCapability`](crate::types::ScrollCapability): whether the content can scroll further
//!   in a direction, queried on every sample.
//! - An [`ArbiterConfig`](crate::config::ArbiterConfig): touch slop and weighting.
//!
//! ## Output
//!
//! Each sample produces at most one call to an
//! [`InterceptChannel`](crate::types::InterceptChannel): `false` keeps ancestors from
//! intercepting, `true` lets them claim the gesture.
//!
//! ## Decision rules
//!
//! - Pointer-down: ancestors are told not to intercept until the gesture is disambiguated.
//! - Pointer-move: once the weighted displacement from the down position exceeds the touch
//!   slop, a gesture across the ancestor's axis is released to the ancestor; a gesture along it
//!   stays with the content only while the content can scroll further that way.
//! - Pointer-up / cancel: the session ends without a further instruction.
//! - Nothing is emitted while no ancestor axis is known or the content has no scroll range
//!   along it.
//!
//! See [`arbiter`](crate::arbiter) for the details and [`host`](crate::host) for the
//! attach/detach wrapper a toolkit places around its content.
//!
//! ## Example
//!
//! ```
//! use understory_nested_scroll::arbiter::GestureArbiter;
//! use understory_nested_scroll::config::ArbiterConfig;
//! use understory_nested_scroll::types::{Axis, InterceptDecision, PointerSample, ScrollDirections};
//!
//! let mut arbiter = GestureArbiter::with_config(Some(Axis::Horizontal), ArbiterConfig::new(10.0));
//! // The content is scrolled to its end.
//! let content = ScrollDirections::LEFT;
//! let mut allowed: Option<bool> = None;
//!
//! arbiter.on_event(PointerSample::down(0.0, 0.0), &content, &mut allowed);
//! assert_eq!(allowed, Some(false));
//!
//! // Weighted displacement 10 is not past a slop of 10.
//! assert_eq!(arbiter.on_event(PointerSample::moved(20.0, 0.0), &content, &mut allowed), None);
//!
//! // Dragging further right: the content cannot scroll further that way, so the pager takes over.
//! assert_eq!(
//!     arbiter.on_event(PointerSample::moved(22.0, 0.0), &content, &mut allowed),
//!     Some(InterceptDecision::Allow)
//! );
//! assert_eq!(allowed, Some(true));
//! ```
//!
//! Decisions are logged through the [`log`] facade at `debug` level.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod ancestry;
pub mod arbiter;
pub mod config;
pub mod host;
pub mod types;
