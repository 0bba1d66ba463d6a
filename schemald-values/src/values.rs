//! Order-preserving, absence-aware container for one property slot.

use crate::{Inject, Never, OneOf, Result};
use std::any::Any;

/// Observable shape of a [`Values`] container.
///
/// The wire format treats a lone value and a one-element array as
/// interchangeable, so the container records which one it holds instead of
/// normalizing them away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    /// Not set; the property contributes nothing when serialized.
    Absent,
    /// Explicitly set to null.
    Null,
    /// Exactly one value, built as a scalar.
    Single,
    /// A sequence of zero or more values.
    Many,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Slot<T> {
    Absent,
    Null,
    Single(T),
    Many(Vec<T>),
}

/// The values held by one property, each one of up to three alternatives.
///
/// Elements keep insertion order. Only the declared alternatives can be
/// stored: [`Values::of`] and [`Values::push`] pick the alternative from
/// the value's type at compile time, [`Values::try_push`] checks it at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Values<A, B = Never, C = Never> {
    slot: Slot<OneOf<A, B, C>>,
}

impl<A, B, C> Default for Values<A, B, C> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<A, B, C> Values<A, B, C> {
    /// A container for a property that is not set.
    #[must_use]
    pub const fn absent() -> Self {
        Self { slot: Slot::Absent }
    }

    /// A container explicitly set to null.
    #[must_use]
    pub const fn null() -> Self {
        Self { slot: Slot::Null }
    }

    /// An explicitly empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slot: Slot::Many(Vec::new()),
        }
    }

    /// A single scalar value, alternative chosen by the value's type.
    pub fn of<V, I>(value: V) -> Self
    where
        OneOf<A, B, C>: Inject<V, I>,
    {
        Self::single(OneOf::of(value))
    }

    /// A single scalar value.
    #[must_use]
    pub const fn single(value: OneOf<A, B, C>) -> Self {
        Self {
            slot: Slot::Single(value),
        }
    }

    /// A sequence of values, kept in iteration order.
    pub fn many<I>(values: I) -> Self
    where
        I: IntoIterator<Item = OneOf<A, B, C>>,
    {
        Self {
            slot: Slot::Many(values.into_iter().collect()),
        }
    }

    /// Shape of the container.
    #[must_use]
    pub const fn form(&self) -> Form {
        match self.slot {
            Slot::Absent => Form::Absent,
            Slot::Null => Form::Null,
            Slot::Single(_) => Form::Single,
            Slot::Many(_) => Form::Many,
        }
    }

    /// Returns true if the property is not set.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.slot, Slot::Absent)
    }

    /// Returns true if the property is explicitly null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.slot, Slot::Null)
    }

    /// Returns true if the container is in sequence form.
    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self.slot, Slot::Many(_))
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if no values are stored (absent, null or empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stored values in order.
    #[must_use]
    pub fn as_slice(&self) -> &[OneOf<A, B, C>] {
        match &self.slot {
            Slot::Absent | Slot::Null => &[],
            Slot::Single(value) => std::slice::from_ref(value),
            Slot::Many(values) => values,
        }
    }

    /// Iterates over the stored values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, OneOf<A, B, C>> {
        self.as_slice().iter()
    }

    /// Returns the value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&OneOf<A, B, C>> {
        self.as_slice().get(index)
    }

    /// Values held as the first alternative, in order.
    pub fn firsts(&self) -> impl Iterator<Item = &A> {
        self.iter().filter_map(OneOf::first)
    }

    /// Values held as the second alternative, in order.
    pub fn seconds(&self) -> impl Iterator<Item = &B> {
        self.iter().filter_map(OneOf::second)
    }

    /// Values held as the third alternative, in order.
    pub fn thirds(&self) -> impl Iterator<Item = &C> {
        self.iter().filter_map(OneOf::third)
    }

    /// Appends a value, alternative chosen by the value's type.
    pub fn push<V, I>(&mut self, value: V)
    where
        OneOf<A, B, C>: Inject<V, I>,
    {
        self.push_value(OneOf::of(value));
    }

    /// Appends a tagged value.
    ///
    /// An absent or null container becomes a single scalar; a scalar becomes
    /// a two-element sequence.
    pub fn push_value(&mut self, value: OneOf<A, B, C>) {
        self.slot = match std::mem::replace(&mut self.slot, Slot::Absent) {
            Slot::Absent | Slot::Null => Slot::Single(value),
            Slot::Single(existing) => Slot::Many(vec![existing, value]),
            Slot::Many(mut values) => {
                values.push(value);
                Slot::Many(values)
            }
        };
    }

    /// Resets the container to absent.
    pub fn clear(&mut self) {
        self.slot = Slot::Absent;
    }

    /// Consumes the container, returning the stored values in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<OneOf<A, B, C>> {
        match self.slot {
            Slot::Absent | Slot::Null => Vec::new(),
            Slot::Single(value) => vec![value],
            Slot::Many(values) => values,
        }
    }
}

impl<A: 'static, B: 'static, C: 'static> Values<A, B, C> {
    /// Appends a value whose type is only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAlternativeType`] if `V` is none of the
    /// declared alternatives; the container is left unchanged.
    pub fn try_push<V: Any>(&mut self, value: V) -> Result<()> {
        let value = OneOf::try_from_any(value)?;
        self.push_value(value);
        Ok(())
    }
}

impl<A> From<A> for Values<A> {
    fn from(value: A) -> Self {
        Self::single(OneOf::First(value))
    }
}

impl<A, B, C> FromIterator<OneOf<A, B, C>> for Values<A, B, C> {
    fn from_iter<I: IntoIterator<Item = OneOf<A, B, C>>>(iter: I) -> Self {
        Self::many(iter)
    }
}

/// Extending always leaves the container in sequence form, even when it
/// was absent and receives a single element.
impl<A, B, C> Extend<OneOf<A, B, C>> for Values<A, B, C> {
    fn extend<I: IntoIterator<Item = OneOf<A, B, C>>>(&mut self, iter: I) {
        let mut values = std::mem::take(self).into_vec();
        values.extend(iter);
        self.slot = Slot::Many(values);
    }
}

impl<'a, A, B, C> IntoIterator for &'a Values<A, B, C> {
    type Item = &'a OneOf<A, B, C>;
    type IntoIter = std::slice::Iter<'a, OneOf<A, B, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, B, C> IntoIterator for Values<A, B, C> {
    type Item = OneOf<A, B, C>;
    type IntoIter = std::vec::IntoIter<OneOf<A, B, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
