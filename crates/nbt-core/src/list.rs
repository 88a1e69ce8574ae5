//! Homogeneous sequences of values.
//!
//! # Element type policy
//!
//! A List's element type is fixed when it is constructed with
//! [`List::new`], and every [`List::push`] must match it. The only exception
//! is a list built with [`List::untyped`]: it has no declared type until the
//! first push, which then fixes it for good. Mixed lists are never possible.
//!
//! An untyped empty list goes on the wire with element tag 0, which is also
//! how the reader hands such a list back.

use crate::error::{NbtError, Result};
use crate::tag::Tag;
use crate::value::Value;
use serde::{Serialize, Serializer};

/// An ordered sequence of [`Value`]s sharing one element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Option<Tag>,
    items: Vec<Value>,
}

impl List {
    /// An empty list whose elements must all be `element`.
    pub fn new(element: Tag) -> Self {
        Self {
            element: Some(element),
            items: Vec::new(),
        }
    }

    /// An empty list that adopts the kind of its first pushed element.
    pub fn untyped() -> Self {
        Self {
            element: None,
            items: Vec::new(),
        }
    }

    /// Build a typed list from `values`, failing on the first element of
    /// the wrong kind.
    pub fn from_values<V, I>(element: Tag, values: I) -> Result<Self>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let mut list = List::new(element);
        for value in values {
            list.push(value)?;
        }
        Ok(list)
    }

    /// Append `value`. Fails with `TypeMismatch` if its kind differs from
    /// the declared element kind.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let found = value.tag();
        match self.element {
            Some(expected) if expected != found => {
                return Err(NbtError::TypeMismatch { expected, found });
            }
            Some(_) => {}
            None => self.element = Some(found),
        }
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// The element at `index`, or `IndexOutOfBounds`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(NbtError::IndexOutOfBounds { index, len })
    }

    /// Mutable access to an element. Replacing it with a value of another
    /// kind is the caller's responsibility to avoid; the writer trusts the
    /// declared element kind.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(NbtError::IndexOutOfBounds { index, len })
    }

    /// Declared element kind; `None` only for an untyped list that has
    /// never been pushed to.
    pub fn element_type(&self) -> Option<Tag> {
        self.element
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Reader-side constructor: elements were decoded as `element` already.
    pub(crate) fn from_decoded(element: Option<Tag>, items: Vec<Value>) -> Self {
        Self { element, items }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
