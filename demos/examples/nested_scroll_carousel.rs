// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontal carousel on a page of a horizontal pager.
//!
//! The carousel keeps horizontal drags while it has room, hands them to the pager
//! once it reaches an edge, and releases vertical drags straight away.
//!
//! Run:
//! - `cargo run -p understory_demos --example nested_scroll_carousel`

use understory_nested_scroll::host::NestedScrollHost;
use understory_nested_scroll::types::{Axis, Direction, PointerSample, ScrollCapability};

/// Carousel content with a scroll offset inside `0..=max_offset`.
#[derive(Debug)]
struct Carousel {
    offset: f64,
    max_offset: f64,
}

impl ScrollCapability for Carousel {
    fn can_scroll(&self, axis: Axis, direction: Direction) -> bool {
        let room = match direction {
            Direction::Negative => self.offset > 0.0,
            Direction::Positive => self.offset < self.max_offset,
        };
        axis == Axis::Horizontal && room
    }
}

fn drag(
    host: &mut NestedScrollHost<Carousel>,
    label: &str,
    samples: &[PointerSample],
) -> Vec<bool> {
    let mut calls = Vec::new();
    for &s in samples {
        let d = host.on_intercept_event(s, &mut |allowed: bool| calls.push(allowed));
        println!("  {:?} {:?} -> {:?}", s.action, s.position, d);
    }
    println!("== {label}: {calls:?}");
    calls
}

fn main() {
    let mut host = NestedScrollHost::new(Some(Carousel {
        offset: 0.0,
        max_offset: 300.0,
    }));
    host.attach(Some(Axis::Horizontal));

    // Drag right at offset 0: room toward the end, the carousel keeps it.
    let kept = drag(
        &mut host,
        "drag toward the end",
        &[
            PointerSample::down(100.0, 100.0),
            PointerSample::moved(110.0, 101.0),
            PointerSample::moved(130.0, 102.0),
            PointerSample::up(130.0, 102.0),
        ],
    );
    assert_eq!(kept, vec![false, false]);

    // Drag left at offset 0: already at the start, the pager takes over.
    let handed_off = drag(
        &mut host,
        "drag past the start",
        &[
            PointerSample::down(200.0, 100.0),
            PointerSample::moved(170.0, 100.0),
            PointerSample::up(170.0, 100.0),
        ],
    );
    assert_eq!(handed_off, vec![false, true]);

    // Vertical drag: released to the ancestors regardless of room.
    if let Some(c) = host.content_mut() {
        c.offset = 150.0;
    }
    let released = drag(
        &mut host,
        "vertical drag",
        &[
            PointerSample::down(100.0, 100.0),
            PointerSample::moved(102.0, 130.0),
            PointerSample::up(102.0, 130.0),
        ],
    );
    assert_eq!(released, vec![false, true]);
}
