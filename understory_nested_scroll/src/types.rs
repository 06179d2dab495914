// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: axes, directions, pointer samples, decisions, and the collaborator traits.
//!
//! ## Overview
//!
//! The [arbiter](crate::arbiter) never talks to a widget tree directly.
//! Everything it needs from the outside arrives through three small traits:
//!
//! - [`AxisProvider`]: the governing ancestor's primary axis, if one exists.
//! - [`ScrollCapability`]: whether the wrapped content can scroll further in a direction.
//! - [`InterceptChannel`]: where allow/disallow instructions are sent.
//!
//! Blanket implementations cover the common cases: `Option<Axis>` is an axis provider,
//! closures are capabilities and channels, and [`ScrollDirections`] describes content
//! whose capability is known up front.

use kurbo::{Point, Vec2};

/// Primary scroll axis of a container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Left/right scrolling.
    Horizontal,
    /// Up/down scrolling.
    Vertical,
}

impl Axis {
    /// Map a toolkit orientation code to an axis.
    ///
    /// `0` is horizontal and `1` is vertical. Any other code is unknown.
    pub const fn from_orientation(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Horizontal),
            1 => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Signed component of `v` along this axis.
    pub const fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

/// Scroll direction along an axis.
///
/// `Negative` is toward the start of the content (its offset shrinks),
/// `Positive` toward the end (its offset grows).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Toward the start of the content.
    Negative,
    /// Toward the end of the content.
    Positive,
}

impl Direction {
    /// Direction of a signed delta.
    ///
    /// Returns `None` for zero and NaN, which carry no direction.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta < 0.0 {
            Some(Self::Negative)
        } else if delta > 0.0 {
            Some(Self::Positive)
        } else {
            None
        }
    }
}

/// Kind of a raw pointer sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerAction {
    /// Pointer went down; starts a session.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer was lifted; ends the session.
    Up,
    /// The toolkit abandoned the gesture; ends the session.
    Cancel,
}

/// A single pointer sample in the host's coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// What happened.
    pub action: PointerAction,
    /// Where it happened.
    pub position: Point,
}

impl PointerSample {
    /// Create a sample.
    pub fn new(action: PointerAction, position: impl Into<Point>) -> Self {
        Self {
            action,
            position: position.into(),
        }
    }

    /// Shorthand for a [`PointerAction::Down`] sample.
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Down, (x, y))
    }

    /// Shorthand for a [`PointerAction::Move`] sample.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Move, (x, y))
    }

    /// Shorthand for a [`PointerAction::Up`] sample.
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Up, (x, y))
    }

    /// Shorthand for a [`PointerAction::Cancel`] sample.
    pub fn cancel(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Cancel, (x, y))
    }
}

/// Instruction sent to the [`InterceptChannel`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InterceptDecision {
    /// Ancestors may claim the rest of the gesture.
    Allow,
    /// The content keeps the gesture; ancestors must not intercept.
    Disallow,
}

impl InterceptDecision {
    /// Build from the boolean form used by [`InterceptChannel`].
    pub const fn from_allowed(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Disallow }
    }

    /// Boolean form used by [`InterceptChannel`].
    pub const fn allows_intercept(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Source of the governing ancestor's primary axis.
///
/// Returns `None` when no governing ancestor is attached; the arbiter then never engages.
pub trait AxisProvider {
    /// Axis of the governing ancestor, if any.
    fn current_axis(&self) -> Option<Axis>;
}

impl AxisProvider for Option<Axis> {
    #[inline]
    fn current_axis(&self) -> Option<Axis> {
        *self
    }
}

impl AxisProvider for Axis {
    #[inline]
    fn current_axis(&self) -> Option<Axis> {
        Some(*self)
    }
}

/// Scroll capability of the wrapped content.
///
/// The arbiter passes the sign of the pointer's displacement along `axis` as `direction`
/// unchanged, and the content answers whether it can scroll further in that direction.
/// This is queried, never stored: content may reach an edge between two samples.
pub trait ScrollCapability {
    /// Whether the content can scroll further in `direction` along `axis`.
    fn can_scroll(&self, axis: Axis, direction: Direction) -> bool;

    /// Whether the content can scroll in either direction along `axis`.
    ///
    /// Content that cannot has no competing scroll range at all.
    fn can_scroll_either(&self, axis: Axis) -> bool {
        self.can_scroll(axis, Direction::Negative) || self.can_scroll(axis, Direction::Positive)
    }
}

impl<F: Fn(Axis, Direction) -> bool> ScrollCapability for F {
    #[inline]
    fn can_scroll(&self, axis: Axis, direction: Direction) -> bool {
        self(axis, direction)
    }
}

/// Receiver of intercept permission changes for the ancestor chain.
///
/// `true` lets ancestors intercept the gesture, `false` forbids it.
pub trait InterceptChannel {
    /// Propagate the permission to ancestors.
    fn set_intercept_allowed(&mut self, allowed: bool);
}

impl<F: FnMut(bool)> InterceptChannel for F {
    #[inline]
    fn set_intercept_allowed(&mut self, allowed: bool) {
        self(allowed);
    }
}

/// Keeps only the most recent permission.
impl InterceptChannel for Option<bool> {
    #[inline]
    fn set_intercept_allowed(&mut self, allowed: bool) {
        *self = Some(allowed);
    }
}

bitflags::bitflags! {
    /// Fixed set of directions the content can scroll further in.
    ///
    /// Useful for content whose scroll range is known when the sample arrives.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ScrollDirections: u8 {
        /// Horizontal, toward the start.
        const LEFT  = 0b0000_0001;
        /// Horizontal, toward the end.
        const RIGHT = 0b0000_0010;
        /// Vertical, toward the start.
        const UP    = 0b0000_0100;
        /// Vertical, toward the end.
        const DOWN  = 0b0000_1000;
        /// Both horizontal directions.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Both vertical directions.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
    }
}

impl ScrollDirections {
    /// The single flag for `direction` along `axis`.
    pub const fn toward(axis: Axis, direction: Direction) -> Self {
        match (axis, direction) {
            (Axis::Horizontal, Direction::Negative) => Self::LEFT,
            (Axis::Horizontal, Direction::Positive) => Self::RIGHT,
            (Axis::Vertical, Direction::Negative) => Self::UP,
            (Axis::Vertical, Direction::Positive) => Self::DOWN,
        }
    }
}

impl ScrollCapability for ScrollDirections {
    #[inline]
    fn can_scroll(&self, axis: Axis, direction: Direction) -> bool {
        self.contains(Self::toward(axis, direction))
    }
}
