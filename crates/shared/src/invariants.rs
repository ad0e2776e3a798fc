//! Compile-time helper for carrying validated invariants.

/// Proof wrapper indicating a value has passed request validation.
///
/// The request validators return their results wrapped in `Validated`, and
/// downstream client calls take `&Validated<T>` instead of re-checking raw
/// input. `new` is public so the validators in other crates can wrap their
/// output. Wrapping a value by hand skips validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    /// Wrap a validated value.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the inner value.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Consume and return the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
