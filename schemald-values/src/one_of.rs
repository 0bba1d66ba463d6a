//! Tagged value over up to three alternative types.

use crate::{Error, Result};
use std::any::{Any, TypeId, type_name};

/// Uninhabited placeholder for unused alternative slots.
///
/// `OneOf<String>` is `OneOf<String, Never, Never>`; the `Second` and
/// `Third` variants can never be constructed, and a `match` over them is
/// discharged with `match never {}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Never {}

impl Never {
    /// Converts an impossible value into any type.
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

/// Index marker for the first alternative.
pub enum At0 {}
/// Index marker for the second alternative.
pub enum At1 {}
/// Index marker for the third alternative.
pub enum At2 {}

/// Injection of a value into the alternative whose type it has.
///
/// The `Index` parameter keeps the three impls on [`OneOf`] coherent; it is
/// always inferred, so callers write `OneOf::of(value)` and the compiler
/// picks the slot. A value whose type is not declared has no impl, which
/// turns storing an undeclared type into a compile error.
pub trait Inject<V, Index> {
    /// Wraps `value` in its alternative.
    fn inject(value: V) -> Self;
}

/// A value that is exactly one of the declared alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OneOf<A, B = Never, C = Never> {
    /// The first declared alternative.
    First(A),
    /// The second declared alternative.
    Second(B),
    /// The third declared alternative.
    Third(C),
}

impl<A, B, C> Inject<A, At0> for OneOf<A, B, C> {
    fn inject(value: A) -> Self {
        OneOf::First(value)
    }
}

impl<A, B, C> Inject<B, At1> for OneOf<A, B, C> {
    fn inject(value: B) -> Self {
        OneOf::Second(value)
    }
}

impl<A, B, C> Inject<C, At2> for OneOf<A, B, C> {
    fn inject(value: C) -> Self {
        OneOf::Third(value)
    }
}

impl<A, B, C> OneOf<A, B, C> {
    /// Wraps a value, selecting the alternative from its type.
    pub fn of<V, I>(value: V) -> Self
    where
        Self: Inject<V, I>,
    {
        <Self as Inject<V, I>>::inject(value)
    }

    /// Zero-based index of the alternative this value holds.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            OneOf::First(_) => 0,
            OneOf::Second(_) => 1,
            OneOf::Third(_) => 2,
        }
    }

    /// Returns the value if it is the first alternative.
    #[must_use]
    pub fn first(&self) -> Option<&A> {
        match self {
            OneOf::First(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the value if it is the second alternative.
    #[must_use]
    pub fn second(&self) -> Option<&B> {
        match self {
            OneOf::Second(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value if it is the third alternative.
    #[must_use]
    pub fn third(&self) -> Option<&C> {
        match self {
            OneOf::Third(c) => Some(c),
            _ => None,
        }
    }

    /// Borrows the held value.
    pub fn as_ref(&self) -> OneOf<&A, &B, &C> {
        match self {
            OneOf::First(a) => OneOf::First(a),
            OneOf::Second(b) => OneOf::Second(b),
            OneOf::Third(c) => OneOf::Third(c),
        }
    }
}

impl<A: 'static, B: 'static, C: 'static> OneOf<A, B, C> {
    /// Wraps a value whose type is only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlternativeType`] if `V` is none of the
    /// declared alternatives.
    pub fn try_from_any<V: Any>(value: V) -> Result<Self> {
        let boxed: Box<dyn Any> = Box::new(value);
        let boxed = match boxed.downcast::<A>() {
            Ok(a) => return Ok(OneOf::First(*a)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<B>() {
            Ok(b) => return Ok(OneOf::Second(*b)),
            Err(other) => other,
        };
        match boxed.downcast::<C>() {
            Ok(c) => Ok(OneOf::Third(*c)),
            Err(_) => Err(Error::InvalidAlternativeType {
                found: type_name::<V>(),
                expected: Self::type_names().join(", "),
            }),
        }
    }

    /// Rust type names of the declared alternatives, in declaration order.
    #[must_use]
    pub fn type_names() -> Vec<&'static str> {
        let never = TypeId::of::<Never>();
        [
            (TypeId::of::<A>(), type_name::<A>()),
            (TypeId::of::<B>(), type_name::<B>()),
            (TypeId::of::<C>(), type_name::<C>()),
        ]
        .into_iter()
        .filter(|(id, _)| *id != never)
        .map(|(_, name)| name)
        .collect()
    }

    /// Number of declared alternatives (1 to 3).
    #[must_use]
    pub fn arity() -> usize {
        Self::type_names().len()
    }
}
