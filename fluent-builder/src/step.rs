//! Deferred mutation steps.
//!
//! A step pairs a value supplier with a mutator and an optional guard. Steps
//! are type-erased behind [`Apply`] so a single chain can hold steps whose
//! value types differ.

/// A unit of deferred work applied to the in-progress target during a build.
pub trait Apply<T>: Send + Sync {
    fn apply(&self, target: &mut T);
}

type Supplier<U> = Box<dyn Fn() -> U + Send + Sync>;
type Mutator<T, U> = Box<dyn Fn(&mut T, U) + Send + Sync>;
type Guard<T, U> = Box<dyn Fn(&T, &U) -> bool + Send + Sync>;

/// One `(supplier, mutator, guard)` triple. Immutable once created.
pub struct MutationStep<T, U> {
    supplier: Supplier<U>,
    mutator: Mutator<T, U>,
    guard: Option<Guard<T, U>>,
}

impl<T, U> MutationStep<T, U> {
    /// Step that always runs the mutator.
    pub fn unconditional<M, S>(mutator: M, supplier: S) -> Self
    where
        M: Fn(&mut T, U) + Send + Sync + 'static,
        S: Fn() -> U + Send + Sync + 'static,
    {
        Self {
            supplier: Box::new(supplier),
            mutator: Box::new(mutator),
            guard: None,
        }
    }

    /// Step whose mutator only runs when `guard` accepts a supplied value.
    pub fn guarded<M, S, G>(mutator: M, supplier: S, guard: G) -> Self
    where
        M: Fn(&mut T, U) + Send + Sync + 'static,
        S: Fn() -> U + Send + Sync + 'static,
        G: Fn(&T, &U) -> bool + Send + Sync + 'static,
    {
        Self {
            supplier: Box::new(supplier),
            mutator: Box::new(mutator),
            guard: Some(Box::new(guard)),
        }
    }
}

impl<T, U> Apply<T> for MutationStep<T, U> {
    /// The supplier is called once for the guard and again for the mutator;
    /// the two values are independent.
    fn apply(&self, target: &mut T) {
        if let Some(guard) = &self.guard {
            let candidate = (self.supplier)();
            if !guard(target, &candidate) {
                return;
            }
        }
        (self.mutator)(target, (self.supplier)());
    }
}
