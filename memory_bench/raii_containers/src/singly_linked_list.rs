//! Singly linked list with owned nodes.
//!
//! Each node owns the next one through `Option<Box<_>>`; the list owns the
//! head. There is no tail pointer, so anything that reaches the back of the
//! list walks the whole chain.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Add, AddAssign, Index, IndexMut};

type Link<T> = Option<Box<SinglyLinkedNode<T>>>;

/// One element of a [`SinglyLinkedList`] together with ownership of the
/// rest of the chain.
pub struct SinglyLinkedNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> SinglyLinkedNode<T> {
    fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node this one owns, `None` at the end of the chain.
    #[inline]
    pub fn next(&self) -> Option<&SinglyLinkedNode<T>> {
        self.next.as_deref()
    }
}

/// A singly linked list with O(1) `push_front` and O(n) positional access.
///
/// `len()` always equals the number of nodes reachable from the head.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First node of the chain, for walking it node by node.
    #[inline]
    pub fn head(&self) -> Option<&SinglyLinkedNode<T>> {
        self.head.as_deref()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Returns the element at `index`, walking `index` links from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node(index).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.node_mut(index).map(|node| &mut node.value)
    }

    /// Makes `value` the new head. O(1).
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(SinglyLinkedNode::boxed(value, next));
        self.len += 1;
    }

    /// Links `value` after the current last node. O(n).
    pub fn push_back(&mut self, value: T) {
        let tail = self.link_mut(self.len);
        *tail = Some(SinglyLinkedNode::boxed(value, None));
        self.len += 1;
    }

    /// Splices `value` in so that it ends up at position `index`.
    ///
    /// `index == 0` is [`push_front`](Self::push_front) and `index == len()`
    /// appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, value: T, index: usize) {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );
        if index == 0 {
            self.push_front(value);
            return;
        }
        let link = self.link_mut(index);
        let next = link.take();
        *link = Some(SinglyLinkedNode::boxed(value, next));
        self.len += 1;
    }

    /// Unlinks the node at `index` and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`, which includes every call on an empty list.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );
        let link = self.link_mut(index);
        let Some(node) = link.take() else {
            unreachable!("chain shorter than its recorded length");
        };
        let SinglyLinkedNode { value, next } = *node;
        *link = next;
        self.len -= 1;
        value
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let SinglyLinkedNode { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Frees every node, front to back.
    pub fn clear(&mut self) {
        // Unlink one node at a time so dropping a long chain does not recurse.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Moves the contents out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Releases the current contents and adopts the chain of `source`,
    /// which is left empty.
    pub fn move_from(&mut self, source: &mut Self) {
        self.clear();
        mem::swap(self, source);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    fn node(&self, index: usize) -> Option<&SinglyLinkedNode<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node?.next.as_deref();
        }
        node
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut SinglyLinkedNode<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node?.next.as_deref_mut();
        }
        node
    }

    /// The link that owns position `index`: the head for 0, otherwise the
    /// `next` of the node at `index - 1`. Requires `index <= len`.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            let Some(node) = link else {
                unreachable!("chain shorter than its recorded length");
            };
            link = &mut node.next;
        }
        link
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Walks to the tail once, then links each item after the previous one.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut tail = self.link_mut(self.len);
        for item in iter {
            tail = &mut tail.insert(SinglyLinkedNode::boxed(item, None)).next;
            added += 1;
        }
        self.len += added;
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> AddAssign<&SinglyLinkedList<T>> for SinglyLinkedList<T> {
    /// Appends a clone of every element of `rhs`, in order.
    fn add_assign(&mut self, rhs: &SinglyLinkedList<T>) {
        self.extend(rhs.iter());
    }
}

impl<T: Clone> Add<&SinglyLinkedList<T>> for &SinglyLinkedList<T> {
    type Output = SinglyLinkedList<T>;

    fn add(self, rhs: &SinglyLinkedList<T>) -> SinglyLinkedList<T> {
        let mut joined = self.clone();
        joined += rhs;
        joined
    }
}

impl<T: Clone> Add<&SinglyLinkedList<T>> for SinglyLinkedList<T> {
    type Output = SinglyLinkedList<T>;

    fn add(mut self, rhs: &SinglyLinkedList<T>) -> SinglyLinkedList<T> {
        self += rhs;
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<SinglyLinkedList<U>> for SinglyLinkedList<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SinglyLinkedList<U>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

macro_rules! impl_sequence_partial_eq {
    ([$($vars:tt)*] $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for SinglyLinkedList<T>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$rhs) -> bool {
                self.len == other.len() && self.iter().eq(other.iter())
            }
        }
    };
}

impl_sequence_partial_eq!([] [U]);
impl_sequence_partial_eq!([] &[U]);
impl_sequence_partial_eq!([] Vec<U>);
impl_sequence_partial_eq!([const N: usize] [U; N]);
impl_sequence_partial_eq!([const N: usize] &[U; N]);

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a SinglyLinkedNode<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a [`SinglyLinkedList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut SinglyLinkedNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; yields elements front to back.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
