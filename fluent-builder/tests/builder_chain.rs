//! Public API tests for building targets through mutation chains.

use anyhow::anyhow;
use fluent_builder::FluentBuilder;
use fluent_builder::test_support::{CallCounter, Recorder};

#[derive(Debug, Default, PartialEq, Eq)]
struct Point {
    x: i32,
    y: i32,
}

impl Point {
    fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    fn set_y(&mut self, y: i32) {
        self.y = y;
    }
}

/// Type whose only constructor takes an argument.
#[derive(Debug)]
struct NeedsArgs {
    value: i32,
}

impl NeedsArgs {
    fn new(value: i32) -> Self {
        Self { value }
    }
}

#[test]
fn setters_populate_point() {
    let point = FluentBuilder::<Point>::of()
        .append(Point::set_x, || 3)
        .append(Point::set_y, || 4)
        .build()
        .expect("build");
    assert_eq!(point, Point { x: 3, y: 4 });
}

#[test]
fn rejected_guard_leaves_default_value() {
    let point = FluentBuilder::<Point>::of()
        .append_if(Point::set_x, || 3, |_, v| *v > 10)
        .build()
        .expect("build");
    assert_eq!(point, Point::default());
}

#[test]
fn missing_zero_argument_constructor_yields_none() {
    let calls = CallCounter::new();
    let counter = calls.clone();
    let builder = FluentBuilder::<NeedsArgs>::from_factory(|| {
        Err(anyhow!("NeedsArgs requires a value"))
    })
    .append(
        |n: &mut NeedsArgs, v: i32| n.value = v,
        move || {
            counter.tick();
            1
        },
    );

    assert!(builder.build().is_none());
    assert_eq!(calls.count(), 0);

    // The same chain still applies to an instance made by hand.
    assert_eq!(builder.build_from(NeedsArgs::new(0)).value, 1);
}

/// Each step stamps its position; the stamps come back in append order.
#[test]
fn execution_counter_matches_append_order() {
    let clock = CallCounter::new();
    let mut builder = FluentBuilder::<Recorder>::of();
    for _ in 0..25 {
        let clock = clock.clone();
        builder = builder.append(
            |r: &mut Recorder, tick: usize| r.record(tick as u32),
            move || clock.tick(),
        );
    }

    let built = builder.build().expect("build");
    assert_eq!(built.trace, (1..=25).collect::<Vec<u32>>());
}

/// A builder stays usable after a related node has been built.
#[test]
fn building_does_not_invalidate_chain() {
    let base = FluentBuilder::<Recorder>::of().append(|r, v| r.value = v, || 1);
    let first = base.build().expect("first");

    let extended = base.append(|r: &mut Recorder, v| r.record(v), || 9);
    let second = extended.build().expect("second");

    assert_eq!(first.trace, Vec::<u32>::new());
    assert_eq!(second.trace, vec![9]);
    assert_eq!(second.value, 1);
    assert_eq!(base.build().expect("again"), first);
}
