//! The `ExtList` container: an ordered, growable sequence of elements of a
//! single type, with the non-selecting query operations that need no key.

use extlist_common::Result;
use extlist_common::error::Error;

/// An ordered, growable list of elements of one type.
///
/// `ExtList<T>` is a thin wrapper over `Vec<T>`. Homogeneity is carried by
/// the type parameter, so mixing element types is a compile error rather
/// than a runtime check. Query operations never mutate the source list:
/// every operation that yields a collection builds and returns a fresh
/// `ExtList`, which keeps calls chainable.
///
/// # Examples
///
/// ```
/// use extlist::ExtList;
///
/// let ages: ExtList<u32> = vec![25, 30, 35, 30].into();
/// assert!(ages.is_duplicate());
/// assert_eq!(ages.one(), Some(&25));
/// assert_eq!(ages.map(|age| age + 1).as_slice(), &[26, 31, 36, 31]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtList<T> {
    elements: Vec<T>,
}

// Not derived: the derived impl would require `T: Default`.
impl<T> Default for ExtList<T> {
    fn default() -> ExtList<T> {
        ExtList::new()
    }
}

impl<T> ExtList<T> {
    /// Creates a new empty list.
    pub fn new() -> ExtList<T> {
        ExtList {
            elements: Vec::new(),
        }
    }

    /// Creates a new empty list with the specified capacity.
    pub fn with_capacity(capacity: usize) -> ExtList<T> {
        ExtList {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a slice of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the list and returns the underlying `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Appends an element to the back of the list.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Inserts an element at position `index`, shifting all elements after
    /// it to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, element: T) {
        self.elements.insert(index, element);
    }

    /// Returns the first element, or `None` if the list is empty.
    ///
    /// This is the total variant of [`first`](ExtList::first): it never
    /// fails.
    pub fn one(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the first element, failing with [`ErrorKind::EmptyList`] if
    /// the list is empty.
    ///
    /// [`ErrorKind::EmptyList`]: extlist_common::error::ErrorKind::EmptyList
    pub fn first(&self) -> Result<&T> {
        self.elements.first().ok_or_else(Error::empty_list)
    }

    /// Returns a new list of `function(&element)` for every element, in
    /// source order.
    ///
    /// This is the one whole-element transformation: it does not select a
    /// value by key.
    pub fn map<U, F>(&self, function: F) -> ExtList<U>
    where
        F: Fn(&T) -> U,
    {
        self.elements.iter().map(function).collect()
    }
}

impl<T: PartialEq> ExtList<T> {
    /// Returns `true` if any element value occurs more than once, compared
    /// by equality.
    pub fn is_duplicate(&self) -> bool {
        self.elements
            .iter()
            .enumerate()
            .any(|(index, element)| self.elements[index + 1..].contains(element))
    }
}

impl<T: PartialEq + Clone> ExtList<T> {
    /// Returns the sub-sequence of `self` whose elements are also present
    /// (by equality) in `other`, preserving `self`'s order and multiplicity.
    ///
    /// ```
    /// use extlist::ExtList;
    ///
    /// let list: ExtList<i32> = vec![1, 2, 2, 3].into();
    /// assert_eq!(list.extract_duplicates(&[2, 3, 4]).as_slice(), &[2, 2, 3]);
    /// ```
    pub fn extract_duplicates(&self, other: impl AsRef<[T]>) -> ExtList<T> {
        let other = other.as_ref();
        let mut result = ExtList::with_capacity(self.len().min(other.len()));
        for element in &self.elements {
            if other.contains(element) {
                result.push(element.clone());
            }
        }
        result
    }
}

impl<T> From<Vec<T>> for ExtList<T> {
    fn from(elements: Vec<T>) -> ExtList<T> {
        ExtList { elements }
    }
}

impl<T> FromIterator<T> for ExtList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> ExtList<T> {
        ExtList {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ExtList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ExtList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ExtList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> std::ops::Index<usize> for ExtList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> AsRef<[T]> for ExtList<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

/// List concatenation, the counterpart of sequence `+`.
impl<T> std::ops::Add for ExtList<T> {
    type Output = ExtList<T>;

    fn add(mut self, other: ExtList<T>) -> ExtList<T> {
        self.elements.extend(other.elements);
        self
    }
}

/// In-place concatenation, the counterpart of sequence `+=`.
impl<T> std::ops::AddAssign for ExtList<T> {
    fn add_assign(&mut self, other: ExtList<T>) {
        self.elements.extend(other.elements);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extlist_common::error::ErrorKind;

    #[test]
    fn test_push_insert_and_order() {
        let mut list = ExtList::new();
        list.push(2);
        list.push(3);
        list.insert(0, 1);
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        assert_eq!(list[1], 2);
        assert_eq!(list.get(1), Some(&2));
        assert_eq!(list.get(3), None);
        assert_eq!(list.len(), 3);
        assert_eq!(list.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_concatenation() {
        let left: ExtList<i32> = vec![1, 2].into();
        let right: ExtList<i32> = vec![3, 4].into();
        assert_eq!((left.clone() + right.clone()).as_slice(), &[1, 2, 3, 4]);

        let mut accumulated = left;
        accumulated += right;
        assert_eq!(accumulated.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_extend() {
        let mut list: ExtList<i32> = vec![1].into();
        list.extend(vec![2, 3]);
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_one_and_first() {
        let list: ExtList<i32> = vec![10, 20].into();
        assert_eq!(list.one(), Some(&10));
        assert_eq!(*list.first().unwrap(), 10);

        let empty = ExtList::<i32>::new();
        assert_eq!(empty.one(), None);
        let err = empty.first().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyList));
    }

    #[test]
    fn test_is_duplicate() {
        let unique: ExtList<i32> = vec![1, 2, 3].into();
        assert!(!unique.is_duplicate());

        let repeated: ExtList<i32> = vec![1, 2, 2, 3].into();
        assert!(repeated.is_duplicate());

        assert!(!ExtList::<i32>::new().is_duplicate());
    }

    #[test]
    fn test_extract_duplicates_multiplicity() {
        let list: ExtList<i32> = vec![1, 2, 2, 3].into();
        let other: ExtList<i32> = vec![2, 3, 4].into();
        assert_eq!(list.extract_duplicates(&other).as_slice(), &[2, 2, 3]);
    }

    #[test]
    fn test_extract_duplicates_empty() {
        let empty = ExtList::<i32>::new();
        assert!(empty.extract_duplicates(&[1, 2]).is_empty());
    }

    #[test]
    fn test_map() {
        let list: ExtList<i32> = vec![1, 2, 3].into();
        let doubled = list.map(|value| value * 2);
        assert_eq!(doubled.as_slice(), &[2, 4, 6]);
        // The source is untouched.
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_map_empty() {
        let empty = ExtList::<i32>::new();
        assert!(empty.map(|value| value + 1).is_empty());
    }

    #[test]
    fn test_iteration() {
        let list: ExtList<i32> = vec![1, 2, 3].into();
        let borrowed: Vec<i32> = (&list).into_iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3]);
        let owned: Vec<i32> = list.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }
}
