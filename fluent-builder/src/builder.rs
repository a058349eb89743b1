//! Immutable, append-only builder chains.
//!
//! Every [`FluentBuilder`] is a view onto a shared chain of steps. Appending
//! returns a new builder whose tail points back at the previous one, so the
//! original stays valid and unchanged. Building instantiates the target once
//! and applies the steps oldest first.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::step::{Apply, MutationStep};

type Factory<T> = dyn Fn() -> Result<T> + Send + Sync;

struct Link<T> {
    head: Option<Arc<Link<T>>>,
    step: Box<dyn Apply<T>>,
    depth: usize,
}

// Unlink iteratively so dropping a long chain does not recurse per node.
impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(link) = head {
            match Arc::try_unwrap(link) {
                Ok(mut inner) => head = inner.head.take(),
                Err(_) => break,
            }
        }
    }
}

/// Builder that records mutations now and applies them on [`build`](Self::build).
///
/// # Example
/// ```
/// use fluent_builder::FluentBuilder;
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point = FluentBuilder::<Point>::of()
///     .append(|p, v| p.x = v, || 3)
///     .append(|p, v| p.y = v, || 4)
///     .build()
///     .unwrap();
/// assert_eq!((point.x, point.y), (3, 4));
/// ```
pub struct FluentBuilder<T> {
    factory: Arc<Factory<T>>,
    tail: Option<Arc<Link<T>>>,
}

impl<T: Default + 'static> FluentBuilder<T> {
    /// Root builder for a type with a zero-argument constructor.
    pub fn of() -> Self {
        Self::from_factory(|| Ok(T::default()))
    }
}

impl<T: 'static> FluentBuilder<T> {
    /// Root builder that instantiates its target through `factory`.
    ///
    /// A factory error is the only failure `build` recovers from.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<T> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
            tail: None,
        }
    }

    /// Append a step that feeds `supplier()` into `mutator`.
    ///
    /// Nothing is evaluated until a build.
    pub fn append<U, M, S>(&self, mutator: M, supplier: S) -> Self
    where
        U: 'static,
        M: Fn(&mut T, U) + Send + Sync + 'static,
        S: Fn() -> U + Send + Sync + 'static,
    {
        self.push(MutationStep::unconditional(mutator, supplier))
    }

    /// Append a step whose mutator only runs if `guard` accepts the value.
    ///
    /// The supplier is invoked once to produce the value handed to the guard
    /// and, when the guard holds, a second time to produce the value handed
    /// to the mutator. Non-idempotent suppliers will see both calls.
    pub fn append_if<U, M, S, G>(&self, mutator: M, supplier: S, guard: G) -> Self
    where
        U: 'static,
        M: Fn(&mut T, U) + Send + Sync + 'static,
        S: Fn() -> U + Send + Sync + 'static,
        G: Fn(&T, &U) -> bool + Send + Sync + 'static,
    {
        self.push(MutationStep::guarded(mutator, supplier, guard))
    }

    fn push<U: 'static>(&self, step: MutationStep<T, U>) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            tail: Some(Arc::new(Link {
                head: self.tail.clone(),
                step: Box::new(step),
                depth: self.len() + 1,
            })),
        }
    }
}

impl<T> FluentBuilder<T> {
    /// Number of steps recorded in this chain.
    pub fn len(&self) -> usize {
        self.tail.as_ref().map_or(0, |link| link.depth)
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Instantiate the target and apply every step in append order.
    ///
    /// Returns `None` when the factory fails; the failure is logged and no
    /// step is evaluated. Panics raised by steps are not caught.
    pub fn build(&self) -> Option<T> {
        debug!(
            target_type = type_name::<T>(),
            steps = self.len(),
            "starting build"
        );
        match (self.factory)() {
            Ok(target) => Some(self.build_from(target)),
            Err(err) => {
                info!(
                    target_type = type_name::<T>(),
                    error = %format!("{err:#}"),
                    "failed to instantiate target; it needs a usable zero-argument constructor"
                );
                debug!(
                    target_type = type_name::<T>(),
                    "target could not be created, returning no value"
                );
                None
            }
        }
    }

    /// Like [`build`](Self::build) but hands the instantiation error back.
    pub fn try_build(&self) -> Result<T> {
        let target =
            (self.factory)().with_context(|| format!("instantiate {}", type_name::<T>()))?;
        Ok(self.build_from(target))
    }

    /// Apply the chain to an existing instance instead of a fresh one.
    pub fn build_from(&self, mut target: T) -> T {
        let mut links = Vec::with_capacity(self.len());
        let mut cursor = self.tail.as_deref();
        while let Some(link) = cursor {
            links.push(link);
            cursor = link.head.as_deref();
        }
        for link in links.iter().rev() {
            link.step.apply(&mut target);
        }
        target
    }
}

impl<T> Clone for FluentBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            tail: self.tail.clone(),
        }
    }
}

impl<T> fmt::Debug for FluentBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentBuilder")
            .field("target_type", &type_name::<T>())
            .field("steps", &self.len())
            .finish()
    }
}
