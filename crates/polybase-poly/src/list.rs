//! Position-addressed ordered sequences.
//!
//! `OrderedList` backs both the terms of a polynomial and the collection
//! of polynomials. It keeps whatever order its callers establish and
//! carries no domain logic of its own.

use std::cmp::Ordering;

/// An owned sequence addressed by 0-based position.
///
/// Insertions and deletions that name a position which does not exist
/// return `None` and leave the list untouched.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first element.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the element at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Returns the position of the first element matching `predicate`.
    pub fn find_by<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Returns the position of the first element equal to `value`.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_by(|item| item == value)
    }

    /// Returns the position of the first element not less than `value`,
    /// or `len()` if there is none.
    ///
    /// This is a front-to-back scan: on a list that is not sorted it finds
    /// the first such element, not the least one.
    #[must_use]
    pub fn lower_bound(&self, value: &T) -> usize
    where
        T: Ord,
    {
        self.lower_bound_by(|item| item.cmp(value))
    }

    /// Like [`lower_bound`](Self::lower_bound) with a caller-supplied
    /// comparison of each element against the probe.
    pub fn lower_bound_by<F>(&self, mut compare: F) -> usize
    where
        F: FnMut(&T) -> Ordering,
    {
        self.items
            .iter()
            .position(|item| compare(item) != Ordering::Less)
            .unwrap_or(self.items.len())
    }

    /// Inserts `value` at the front.
    pub fn push_front(&mut self, value: T) {
        self.items.insert(0, value);
    }

    /// Inserts `value` at the back.
    pub fn push_back(&mut self, value: T) {
        self.items.push(value);
    }

    /// Inserts `value` so that it lands at `index`, shifting the element
    /// previously there one step back. Returns the new element's position.
    pub fn insert_before(&mut self, index: usize, value: T) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        self.items.insert(index, value);
        Some(index)
    }

    /// Inserts `value` directly after the element at `index`.
    /// Returns the new element's position.
    pub fn insert_after(&mut self, index: usize, value: T) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        self.items.insert(index + 1, value);
        Some(index + 1)
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates front to back with mutable access.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
