//! Demo targets for the CLI.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::FluentBuilder;
use crate::config::DemoConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub label: String,
}

impl Point {
    pub fn set_x(&mut self, x: i64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i64) {
        self.y = y;
    }

    pub fn set_label(&mut self, label: String) {
        self.label = label;
    }
}

/// A type that can only be created from a seed, so it has no zero-argument
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seeded {
    pub seed: u64,
}

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Zero-argument factory; always fails.
    pub fn factory() -> Result<Self> {
        bail!("Seeded has no zero-argument constructor; use Seeded::new(seed)")
    }
}

/// Command-line values that override the config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

/// Chain that builds a [`Point`] from `cfg`, then layers `overrides` on top.
///
/// Every `x` value is gated by the configured guard range; a rejected value
/// leaves whatever an earlier step set.
pub fn point_builder(cfg: &DemoConfig, overrides: Overrides) -> FluentBuilder<Point> {
    let label = cfg.point.label.clone();
    let (x, y) = (cfg.point.x, cfg.point.y);
    let guard = cfg.guard;

    let base = FluentBuilder::<Point>::of()
        .append(Point::set_label, move || label.clone())
        .append_if(Point::set_x, move || x, move |_, v| guard.admits_x(*v))
        .append(Point::set_y, move || y);

    let with_x = match overrides.x {
        Some(x) => base.append_if(Point::set_x, move || x, move |_, v| guard.admits_x(*v)),
        None => base,
    };
    match overrides.y {
        Some(y) => with_x.append(Point::set_y, move || y),
        None => with_x,
    }
}

pub fn seeded_builder() -> FluentBuilder<Seeded> {
    FluentBuilder::<Seeded>::from_factory(Seeded::factory).append(|s, v| s.seed = v, || 7)
}
