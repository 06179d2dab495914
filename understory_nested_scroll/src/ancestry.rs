// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attach-time lookup of the governing ancestor.
//!
//! The governing ancestor is the nearest ancestor of the host that is itself a
//! scroll container with a primary axis (for example a page host).
//! Resolve it once, when the host is attached, and hand the resulting axis to the
//! [arbiter](crate::arbiter); the event path never walks the tree.

use crate::types::Axis;

/// Look up the parent of a node.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// Identify governing scroll containers.
pub trait ScrollAxisLookup<K> {
    /// Primary axis of `node` if it governs nested content, otherwise `None`.
    fn scroll_axis_of(&self, node: &K) -> Option<Axis>;
}

/// Find the nearest governing ancestor of `host` and its axis.
///
/// The host itself is not considered. Returns `None` when the walk reaches a root
/// without finding one.
///
/// ```
/// use understory_nested_scroll::ancestry::{ParentLookup, ScrollAxisLookup, find_governing_axis};
/// use understory_nested_scroll::types::Axis;
///
/// // 1 (pager) → 2 (page) → 3 (host)
/// struct Parents;
/// impl ParentLookup<u32> for Parents {
///     fn parent_of(&self, node: &u32) -> Option<u32> {
///         (*node > 1).then(|| node - 1)
///     }
/// }
/// struct Pagers;
/// impl ScrollAxisLookup<u32> for Pagers {
///     fn scroll_axis_of(&self, node: &u32) -> Option<Axis> {
///         (*node == 1).then_some(Axis::Horizontal)
///     }
/// }
///
/// assert_eq!(find_governing_axis(3, &Parents, &Pagers), Some((1, Axis::Horizontal)));
/// assert_eq!(find_governing_axis(1, &Parents, &Pagers), None);
/// ```
pub fn find_governing_axis<K, P, A>(host: K, parents: &P, axes: &A) -> Option<(K, Axis)>
where
    P: ParentLookup<K> + ?Sized,
    A: ScrollAxisLookup<K> + ?Sized,
{
    let mut cur = parents.parent_of(&host)?;
    // Walk to the root; caller ensures acyclic ancestry.
    loop {
        if let Some(axis) = axes.scroll_axis_of(&cur) {
            return Some((cur, axis));
        }
        cur = parents.parent_of(&cur)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    struct Node(u32);

    // 1 (vertical list) → 2 (horizontal pager) → 3 (page) → 4 (host)
    // 10 (host at a root's child) → 11 (root, plain)
    struct Parents;
    impl ParentLookup<Node> for Parents {
        fn parent_of(&self, node: &Node) -> Option<Node> {
            match node.0 {
                4 => Some(Node(3)),
                3 => Some(Node(2)),
                2 => Some(Node(1)),
                10 => Some(Node(11)),
                _ => None,
            }
        }
    }

    struct Containers;
    impl ScrollAxisLookup<Node> for Containers {
        fn scroll_axis_of(&self, node: &Node) -> Option<Axis> {
            match node.0 {
                1 => Some(Axis::Vertical),
                2 => Some(Axis::Horizontal),
                _ => None,
            }
        }
    }

    #[test]
    fn nearest_governing_ancestor_wins() {
        assert_eq!(
            find_governing_axis(Node(4), &Parents, &Containers),
            Some((Node(2), Axis::Horizontal))
        );
    }

    #[test]
    fn host_itself_is_skipped() {
        // Node 2 is a container, but only its ancestors count.
        assert_eq!(
            find_governing_axis(Node(2), &Parents, &Containers),
            Some((Node(1), Axis::Vertical))
        );
    }

    #[test]
    fn no_governing_ancestor() {
        assert_eq!(find_governing_axis(Node(10), &Parents, &Containers), None);
        // Detached host: no parent at all.
        assert_eq!(find_governing_axis(Node(99), &Parents, &Containers), None);
    }
}
