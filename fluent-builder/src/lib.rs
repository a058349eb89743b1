//! Deferred mutation chains for building objects step by step.
//!
//! A [`FluentBuilder`] records "set this field to that value" steps, each
//! optionally gated by a guard, and applies them in append order when
//! [`FluentBuilder::build`] is called. Builders are immutable: every append
//! returns a new builder that shares the existing chain.
//!
//! - **[`builder`]** / **[`step`]**: the chain itself. No I/O.
//! - **[`config`]**, **[`point`]**, **[`logging`]**: support for the demo binary.

pub mod builder;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod point;
pub mod step;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use builder::FluentBuilder;
