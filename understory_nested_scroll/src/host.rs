// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host wrapper: the piece a toolkit places between a governing container and nested content.
//!
//! ## Usage
//!
//! 1) Create a [`NestedScrollHost`] around the content (or none yet).
//! 2) When the host joins a tree, [`attach`](NestedScrollHost::attach) it with the ancestor
//!    axis, or let [`attach_with_lookup`](NestedScrollHost::attach_with_lookup) find it.
//! 3) Forward every raw sample to [`on_intercept_event`](NestedScrollHost::on_intercept_event)
//!    before the toolkit's default intercept handling.
//! 4) [`detach`](NestedScrollHost::detach) when leaving the tree.
//!
//! A host without content, or without a governing ancestor, never emits anything.
//!
//! ```
//! use understory_nested_scroll::host::NestedScrollHost;
//! use understory_nested_scroll::types::{Axis, PointerSample, ScrollDirections};
//!
//! let mut host = NestedScrollHost::new(Some(ScrollDirections::HORIZONTAL));
//! host.attach(Some(Axis::Horizontal));
//!
//! let mut allowed: Option<bool> = None;
//! host.on_intercept_event(PointerSample::down(0.0, 0.0), &mut allowed);
//! assert_eq!(allowed, Some(false));
//! // A mostly vertical drag is handed to the ancestors.
//! host.on_intercept_event(PointerSample::moved(3.0, 30.0), &mut allowed);
//! assert_eq!(allowed, Some(true));
//! ```

use log::debug;

use crate::ancestry::{ParentLookup, ScrollAxisLookup, find_governing_axis};
use crate::arbiter::GestureArbiter;
use crate::config::ArbiterConfig;
use crate::types::{Axis, InterceptChannel, InterceptDecision, PointerSample, ScrollCapability};

/// Mediates gesture ownership for a single content element.
#[derive(Clone, Debug)]
pub struct NestedScrollHost<C> {
    content: Option<C>,
    arbiter: GestureArbiter<Option<Axis>>,
}

impl<C: ScrollCapability> NestedScrollHost<C> {
    /// Create a detached host with the default configuration.
    pub fn new(content: Option<C>) -> Self {
        Self::with_config(content, ArbiterConfig::default())
    }

    /// Create a detached host with an explicit configuration.
    pub fn with_config(content: Option<C>, config: ArbiterConfig) -> Self {
        Self {
            content,
            arbiter: GestureArbiter::with_config(None, config),
        }
    }

    /// Install the governing ancestor's axis. `None` means there is none.
    pub fn attach(&mut self, axis: Option<Axis>) {
        debug!("nested scroll host attached, ancestor axis {axis:?}");
        self.arbiter.set_axis_provider(axis);
    }

    /// Resolve the governing ancestor of `node` and attach with its axis.
    ///
    /// Returns the ancestor, if one was found.
    pub fn attach_with_lookup<K, P, A>(&mut self, node: K, parents: &P, axes: &A) -> Option<K>
    where
        P: ParentLookup<K> + ?Sized,
        A: ScrollAxisLookup<K> + ?Sized,
    {
        let found = find_governing_axis(node, parents, axes);
        match found {
            Some((ancestor, axis)) => {
                self.attach(Some(axis));
                Some(ancestor)
            }
            None => {
                self.attach(None);
                None
            }
        }
    }

    /// Forget the ancestor axis and any session.
    pub fn detach(&mut self) {
        debug!("nested scroll host detached");
        self.arbiter.set_axis_provider(None);
    }

    /// Axis of the governing ancestor while attached.
    pub fn ancestor_axis(&self) -> Option<Axis> {
        *self.arbiter.axis_provider()
    }

    /// The wrapped content, if any.
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Mutable access to the wrapped content, if any.
    pub fn content_mut(&mut self) -> Option<&mut C> {
        self.content.as_mut()
    }

    /// Replace the wrapped content, ending any session. Returns the previous content.
    pub fn set_content(&mut self, content: Option<C>) -> Option<C> {
        self.arbiter.reset();
        core::mem::replace(&mut self.content, content)
    }

    /// The underlying arbiter.
    pub fn arbiter(&self) -> &GestureArbiter<Option<Axis>> {
        &self.arbiter
    }

    /// Replace the configuration; takes effect from the next pointer-down.
    pub fn set_config(&mut self, config: ArbiterConfig) {
        self.arbiter.set_config(config);
    }

    /// Handle a raw pointer sample ahead of the toolkit's default intercept handling.
    pub fn on_intercept_event<I>(
        &mut self,
        sample: PointerSample,
        channel: &mut I,
    ) -> Option<InterceptDecision>
    where
        I: InterceptChannel + ?Sized,
    {
        let content = self.content.as_ref()?;
        self.arbiter.on_event(sample, content, channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScrollDirections;
    use alloc::vec;
    use alloc::vec::Vec;

    fn feed<C: ScrollCapability>(
        host: &mut NestedScrollHost<C>,
        samples: &[PointerSample],
    ) -> Vec<bool> {
        let mut calls = Vec::new();
        for &s in samples {
            host.on_intercept_event(s, &mut |allowed: bool| calls.push(allowed));
        }
        calls
    }

    fn swipe() -> [PointerSample; 3] {
        [
            PointerSample::down(0.0, 0.0),
            PointerSample::moved(40.0, 0.0),
            PointerSample::up(40.0, 0.0),
        ]
    }

    #[test]
    fn detached_host_is_inert() {
        let mut host = NestedScrollHost::new(Some(ScrollDirections::all()));
        assert!(feed(&mut host, &swipe()).is_empty());
        assert_eq!(host.ancestor_axis(), None);
    }

    #[test]
    fn host_without_content_is_inert() {
        let mut host: NestedScrollHost<ScrollDirections> = NestedScrollHost::new(None);
        host.attach(Some(Axis::Horizontal));
        assert!(feed(&mut host, &swipe()).is_empty());
    }

    #[test]
    fn attached_host_keeps_parallel_swipe() {
        let mut host = NestedScrollHost::new(Some(ScrollDirections::RIGHT));
        host.attach(Some(Axis::Horizontal));
        assert_eq!(feed(&mut host, &swipe()), vec![false, false]);
        assert!(host.arbiter().session().is_none());
    }

    #[test]
    fn detach_ends_session_and_disengages() {
        let mut host = NestedScrollHost::new(Some(ScrollDirections::RIGHT));
        host.attach(Some(Axis::Horizontal));
        assert_eq!(feed(&mut host, &swipe()[..1]), vec![false]);
        host.detach();
        assert!(host.arbiter().session().is_none());
        assert!(feed(&mut host, &swipe()[1..]).is_empty());
    }

    #[test]
    fn content_at_edge_hands_off() {
        let mut host = NestedScrollHost::new(Some(ScrollDirections::RIGHT));
        host.attach(Some(Axis::Horizontal));
        assert_eq!(feed(&mut host, &swipe()[..2]), vec![false, false]);
        // Content scrolled to its end while the finger keeps going.
        if let Some(c) = host.content_mut() {
            *c = ScrollDirections::LEFT;
        }
        assert_eq!(
            feed(&mut host, &[PointerSample::moved(60.0, 0.0)]),
            vec![true]
        );
    }

    #[test]
    fn replacing_content_resets() {
        let mut host = NestedScrollHost::new(Some(ScrollDirections::RIGHT));
        host.attach(Some(Axis::Horizontal));
        let _ = feed(&mut host, &swipe()[..1]);
        let old = host.set_content(Some(ScrollDirections::HORIZONTAL));
        assert_eq!(old, Some(ScrollDirections::RIGHT));
        assert_eq!(host.content(), Some(&ScrollDirections::HORIZONTAL));
        assert!(host.arbiter().session().is_none());
        // Move without a new down is ignored.
        assert!(feed(&mut host, &swipe()[1..2]).is_empty());
    }

    #[test]
    fn attach_with_lookup_resolves_axis() {
        struct Parents;
        impl ParentLookup<u32> for Parents {
            fn parent_of(&self, node: &u32) -> Option<u32> {
                match *node {
                    3 => Some(2),
                    2 => Some(1),
                    _ => None,
                }
            }
        }
        struct Pagers;
        impl ScrollAxisLookup<u32> for Pagers {
            fn scroll_axis_of(&self, node: &u32) -> Option<Axis> {
                (*node == 1).then_some(Axis::Vertical)
            }
        }

        let mut host = NestedScrollHost::new(Some(ScrollDirections::VERTICAL));
        assert_eq!(host.attach_with_lookup(3, &Parents, &Pagers), Some(1));
        assert_eq!(host.ancestor_axis(), Some(Axis::Vertical));

        // Re-attaching somewhere without a governing ancestor disengages.
        assert_eq!(host.attach_with_lookup(1, &Parents, &Pagers), None);
        assert_eq!(host.ancestor_axis(), None);
    }

    #[test]
    fn config_reaches_arbiter() {
        let mut host = NestedScrollHost::with_config(
            Some(ScrollDirections::HORIZONTAL),
            ArbiterConfig::new(30.0),
        );
        host.attach(Some(Axis::Horizontal));
        // 40 weighted to 20: inside a slop of 30.
        assert_eq!(feed(&mut host, &swipe()), vec![false]);
        host.set_config(ArbiterConfig::new(10.0));
        assert_eq!(feed(&mut host, &swipe()), vec![false, false]);
    }
}
