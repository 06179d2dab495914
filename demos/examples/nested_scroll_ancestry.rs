// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving the governing ancestor at attach time.
//!
//! A tiny widget tree: a vertical feed holds a horizontal pager, whose page holds the host.
//! The host picks the nearest governing ancestor (the pager), so a horizontal
//! list inside it competes with the pager and not with the feed.
//!
//! Run:
//! - `cargo run -p understory_demos --example nested_scroll_ancestry`

use understory_nested_scroll::ancestry::{ParentLookup, ScrollAxisLookup};
use understory_nested_scroll::host::NestedScrollHost;
use understory_nested_scroll::types::{Axis, PointerSample, ScrollDirections};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
enum Widget {
    Feed,
    Pager,
    Page,
    Host,
}

struct Parents;
impl ParentLookup<Widget> for Parents {
    fn parent_of(&self, w: &Widget) -> Option<Widget> {
        match w {
            Widget::Host => Some(Widget::Page),
            Widget::Page => Some(Widget::Pager),
            Widget::Pager => Some(Widget::Feed),
            Widget::Feed => None,
        }
    }
}

struct Containers;
impl ScrollAxisLookup<Widget> for Containers {
    fn scroll_axis_of(&self, w: &Widget) -> Option<Axis> {
        match w {
            Widget::Feed => Some(Axis::Vertical),
            Widget::Pager => Some(Axis::Horizontal),
            _ => None,
        }
    }
}

fn main() {
    let mut host = NestedScrollHost::new(Some(ScrollDirections::HORIZONTAL));
    let ancestor = host.attach_with_lookup(Widget::Host, &Parents, &Containers);
    println!("== Governing ancestor ==\n  {ancestor:?} {:?}", host.ancestor_axis());
    assert_eq!(ancestor, Some(Widget::Pager));
    assert_eq!(host.ancestor_axis(), Some(Axis::Horizontal));

    let mut latest: Option<bool> = None;
    for s in [
        PointerSample::down(50.0, 50.0),
        PointerSample::moved(80.0, 52.0),
    ] {
        host.on_intercept_event(s, &mut latest);
    }
    println!("== Horizontal drag ==\n  ancestors may intercept: {latest:?}");
    assert_eq!(latest, Some(false));

    host.detach();
    let d = host.on_intercept_event(PointerSample::down(0.0, 0.0), &mut latest);
    println!("== After detach ==\n  {d:?}");
    assert_eq!(d, None);
}
