// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture arbiter: decides, per pointer sample, whether ancestors may intercept.
//!
//! ## Overview
//!
//! A session runs from pointer-down to pointer-up (or cancel).
//!
//! - On down, the anchor is recorded and ancestors are told not to intercept,
//!   so an eager parent cannot claim the gesture before it is disambiguated.
//! - On move, the total displacement from the anchor is weighted and compared to
//!   the touch slop. Past slop, the gesture is [classified](classify):
//!   - perpendicular to the ancestor's axis: ancestors may intercept;
//!   - parallel: the content keeps the gesture if it can scroll further that way,
//!     otherwise it is handed to the ancestor so the user is not stuck.
//! - On up or cancel, the session is discarded. Nothing is emitted; the last
//!   instruction stays in effect for the rest of the gesture.
//!
//! ## Engagement
//!
//! The arbiter stays out of the way (emits nothing) when no ancestor axis is known,
//! or when the content cannot scroll either way along that axis.
//! This is checked on every down and move, since content can reach an edge mid-gesture.
//!
//! ## Policies
//!
//! With [`DecisionPolicy::Reevaluate`] (the default) every move past slop is
//! classified afresh. With [`DecisionPolicy::LockFirst`] the first decisive
//! classification holds until the session ends, except that a gesture locked to the
//! content is still released once the content can no longer scroll that way.

use kurbo::{Point, Vec2};
use log::{debug, trace};

use crate::config::{ArbiterConfig, DecisionPolicy};
use crate::types::{
    Axis, AxisProvider, Direction, InterceptChannel, InterceptDecision, PointerAction,
    PointerSample, ScrollCapability,
};

/// Outcome of classifying a displacement that has left the slop region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Classification {
    /// The gesture runs across the ancestor's axis.
    Perpendicular,
    /// The gesture runs along the ancestor's axis.
    ///
    /// Carries the signed displacement along that axis.
    Parallel(f64),
}

/// Classify a displacement from the session anchor against the ancestor's `axis`.
///
/// The component along `axis` is weighted by `parallel_scale` before comparison,
/// the cross component is taken as is.
/// Returns `None` while neither weighted component exceeds `touch_slop`.
///
/// ```
/// use kurbo::Vec2;
/// use understory_nested_scroll::arbiter::{Classification, classify};
/// use understory_nested_scroll::types::Axis;
///
/// // Exactly on the boundary is still within slop.
/// assert_eq!(classify(Axis::Horizontal, Vec2::new(20.0, 0.0), 10.0, 0.5), None);
/// assert_eq!(
///     classify(Axis::Horizontal, Vec2::new(22.0, 0.0), 10.0, 0.5),
///     Some(Classification::Parallel(22.0))
/// );
/// assert_eq!(
///     classify(Axis::Horizontal, Vec2::new(2.0, 20.0), 10.0, 0.5),
///     Some(Classification::Perpendicular)
/// );
/// ```
pub fn classify(
    axis: Axis,
    delta: Vec2,
    touch_slop: f64,
    parallel_scale: f64,
) -> Option<Classification> {
    let horizontal = axis == Axis::Horizontal;
    let scaled_dx = delta.x.abs() * if horizontal { parallel_scale } else { 1.0 };
    let scaled_dy = delta.y.abs() * if horizontal { 1.0 } else { parallel_scale };

    let past_slop = scaled_dx > touch_slop || scaled_dy > touch_slop;
    if !past_slop {
        return None;
    }
    if horizontal == (scaled_dy > scaled_dx) {
        Some(Classification::Perpendicular)
    } else {
        Some(Classification::Parallel(axis.component(delta)))
    }
}

/// State of one pointer-down to pointer-up sequence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureSession {
    anchor: Point,
    config: ArbiterConfig,
    decision: Option<InterceptDecision>,
    // Direction the content was asked to follow by the latest parallel classification.
    direction: Option<Direction>,
}

impl GestureSession {
    fn begin(anchor: Point, config: ArbiterConfig) -> Self {
        Self {
            anchor,
            config,
            decision: None,
            direction: None,
        }
    }

    /// Position of the pointer-down that started the session.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Configuration captured at pointer-down.
    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    /// The most recent classification, once the gesture has left the slop region.
    pub fn decision(&self) -> Option<InterceptDecision> {
        self.decision
    }

    /// Whether slop has been resolved in this session.
    pub fn is_resolved(&self) -> bool {
        self.decision.is_some()
    }
}

/// Intercept arbiter for a single pointer.
///
/// ## Usage
///
/// - Construct with the ancestor's [`AxisProvider`], resolved once when the host is attached.
/// - Feed every raw sample to [`GestureArbiter::on_event`] before the toolkit's own handling,
///   along with the content's [`ScrollCapability`] and the ancestors' [`InterceptChannel`].
///
/// The arbiter owns only its session. Collaborators are borrowed per call.
#[derive(Clone, Debug)]
pub struct GestureArbiter<P: AxisProvider = Option<Axis>> {
    axis: P,
    config: ArbiterConfig,
    session: Option<GestureSession>,
}

impl<P: AxisProvider + Default> Default for GestureArbiter<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: AxisProvider> GestureArbiter<P> {
    /// Create an arbiter with the default configuration.
    pub fn new(axis: P) -> Self {
        Self::with_config(axis, ArbiterConfig::default())
    }

    /// Create an arbiter with an explicit configuration.
    pub fn with_config(axis: P, config: ArbiterConfig) -> Self {
        Self {
            axis,
            config,
            session: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    /// Replace the configuration. An ongoing session keeps the one it started with.
    pub fn set_config(&mut self, config: ArbiterConfig) {
        self.config = config;
    }

    /// The axis provider.
    pub fn axis_provider(&self) -> &P {
        &self.axis
    }

    /// Replace the axis provider, ending any session.
    pub fn set_axis_provider(&mut self, axis: P) {
        self.axis = axis;
        self.reset();
    }

    /// The ongoing session, if any.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Discard any session without emitting anything.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Handle one pointer sample.
    ///
    /// Sends at most one instruction to `channel` and returns it.
    pub fn on_event<C, I>(
        &mut self,
        sample: PointerSample,
        content: &C,
        channel: &mut I,
    ) -> Option<InterceptDecision>
    where
        C: ScrollCapability + ?Sized,
        I: InterceptChannel + ?Sized,
    {
        if let PointerAction::Up | PointerAction::Cancel = sample.action {
            if self.session.take().is_some() {
                trace!("gesture session ended by {:?}", sample.action);
            }
            return None;
        }
        if sample.action == PointerAction::Down && self.session.take().is_some() {
            trace!("pointer-down ended an unfinished session");
        }

        let axis = self.axis.current_axis()?;
        if !content.can_scroll_either(axis) {
            return None;
        }
        if !sample.position.is_finite() {
            trace!("ignoring {:?} at non-finite position", sample.action);
            return None;
        }

        let decision = if sample.action == PointerAction::Down {
            self.session = Some(GestureSession::begin(sample.position, self.config));
            InterceptDecision::Disallow
        } else {
            self.track(axis, sample.position, content)?
        };

        debug!(
            "{:?} at {:?} along {:?}: {:?}",
            sample.action, sample.position, axis, decision
        );
        channel.set_intercept_allowed(decision.allows_intercept());
        Some(decision)
    }

    fn track<C>(&mut self, axis: Axis, position: Point, content: &C) -> Option<InterceptDecision>
    where
        C: ScrollCapability + ?Sized,
    {
        let session = self.session.as_mut()?;
        if session.config.policy() == DecisionPolicy::LockFirst {
            match session.decision {
                Some(InterceptDecision::Allow) => return None,
                Some(InterceptDecision::Disallow) => {
                    // The content keeps a locked gesture only while it can still scroll.
                    let direction = session.direction?;
                    if content.can_scroll(axis, direction) {
                        return None;
                    }
                    session.decision = Some(InterceptDecision::Allow);
                    return session.decision;
                }
                None => {}
            }
        }

        let delta = position - session.anchor;
        let classification = classify(
            axis,
            delta,
            session.config.touch_slop(),
            session.config.parallel_scale(),
        )?;
        let (decision, direction) = match classification {
            Classification::Perpendicular => (InterceptDecision::Allow, None),
            Classification::Parallel(along) => match Direction::from_delta(along) {
                Some(direction) if content.can_scroll(axis, direction) => {
                    (InterceptDecision::Disallow, Some(direction))
                }
                direction => (InterceptDecision::Allow, direction),
            },
        };
        session.decision = Some(decision);
        session.direction = direction;
        Some(decision)
    }
}
