// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbiter configuration: touch slop, axis weighting, and decision policy.
//!
//! Configuration is captured when a session starts, so changes take effect
//! from the next pointer-down.
//! Invalid values never fail; they are ignored with a warning and the previous
//! value is kept.

use log::warn;

/// Default touch slop in logical pixels.
///
/// Matches common platform conventions for finger jitter on touch screens.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Default weight applied to displacement along the ancestor's axis.
///
/// Ancestor containers typically use about twice the content's slop for their own axis.
pub const DEFAULT_PARALLEL_SCALE: f64 = 0.5;

/// How decisions evolve once a session has left the slop region.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DecisionPolicy {
    /// Classify every move past slop afresh.
    ///
    /// A gesture that starts parallel and curves away can hand over mid-gesture.
    #[default]
    Reevaluate,
    /// Keep the first decisive classification until the session ends.
    ///
    /// A gesture locked to the content is still released to the ancestor once the
    /// content can no longer scroll in the locked direction.
    LockFirst,
}

/// Configuration for a [`GestureArbiter`](crate::arbiter::GestureArbiter).
///
/// ## Usage
///
/// ```
/// use understory_nested_scroll::config::{ArbiterConfig, DecisionPolicy};
///
/// let config = ArbiterConfig::default()
///     .with_touch_slop(12.0)
///     .with_policy(DecisionPolicy::LockFirst);
/// assert_eq!(config.touch_slop(), 12.0);
///
/// // Non-positive slop is ignored.
/// let config = config.with_touch_slop(0.0);
/// assert_eq!(config.touch_slop(), 12.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArbiterConfig {
    touch_slop: f64,
    parallel_scale: f64,
    policy: DecisionPolicy,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            parallel_scale: DEFAULT_PARALLEL_SCALE,
            policy: DecisionPolicy::Reevaluate,
        }
    }
}

impl ArbiterConfig {
    /// Configuration with the given touch slop and default weighting and policy.
    pub fn new(touch_slop: f64) -> Self {
        Self::default().with_touch_slop(touch_slop)
    }

    /// Distance a scaled displacement must exceed before any classification.
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Weight applied to displacement along the ancestor's axis.
    pub fn parallel_scale(&self) -> f64 {
        self.parallel_scale
    }

    /// Decision policy.
    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    /// Set the touch slop. Must be finite and positive.
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        if touch_slop.is_finite() && touch_slop > 0.0 {
            self.touch_slop = touch_slop;
        } else {
            warn!(
                "ignoring touch slop {touch_slop}; keeping {}",
                self.touch_slop
            );
        }
        self
    }

    /// Set the weight for displacement along the ancestor's axis. Must be in `(0, 1]`.
    pub fn with_parallel_scale(mut self, scale: f64) -> Self {
        if scale.is_finite() && scale > 0.0 && scale <= 1.0 {
            self.parallel_scale = scale;
        } else {
            warn!(
                "ignoring parallel scale {scale}; keeping {}",
                self.parallel_scale
            );
        }
        self
    }

    /// Set the decision policy.
    pub fn with_policy(mut self, policy: DecisionPolicy) -> Self {
        self.policy = policy;
        self
    }
}
