use std::alloc::{alloc, dealloc, Layout};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Add, AddAssign, Deref, DerefMut, Range};
use std::ptr::{self, NonNull};
use std::slice;

use tracing::{debug, trace};

use crate::error::AllocError;
use crate::growth;

/// A contiguous, growable array that owns its storage.
///
/// Slots `[0, len)` hold live elements, slots `[len, capacity)` are
/// uninitialized. An empty array with no capacity never touches the
/// allocator. Appending into a full array doubles the capacity (starting
/// at one slot), see [`growth::next_capacity`].
///
/// Constructors that take a known sequence allocate exactly that many
/// slots, so [`reserved`](Self::reserved) is zero right after them.
pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the buffer is uniquely owned, so sending the array sends the `T`s.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: `&DynamicArray<T>` only hands out `&T`.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

fn allocate<T>(capacity: usize) -> Result<NonNull<T>, AllocError> {
    let layout = Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: the layout has a non-zero size.
    let raw = unsafe { alloc(layout) };
    NonNull::new(raw.cast::<T>()).ok_or(AllocError::AllocFailed { capacity, layout })
}

/// # Safety
///
/// `ptr` must have been returned by `allocate::<T>(capacity)` and not freed since.
unsafe fn deallocate<T>(ptr: NonNull<T>, capacity: usize) {
    let layout = match Layout::array::<T>(capacity) {
        Ok(layout) => layout,
        Err(_) => return,
    };
    if layout.size() != 0 {
        unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) }
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| err.handle())
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let ptr = allocate::<T>(capacity)?;
        Ok(Self {
            ptr,
            cap: capacity,
            len: 0,
            _marker: PhantomData,
        })
    }

    /// Creates an array holding `len` copies of `value`.
    pub fn with_len(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len);
        if len > 0 {
            for _ in 1..len {
                // SAFETY: capacity is exactly `len` and fewer than `len` slots are used.
                unsafe { array.push_unchecked(value.clone()) };
            }
            // SAFETY: one slot remains.
            unsafe { array.push_unchecked(value) };
        }
        array
    }

    /// Creates an array holding a clone of every element of `items`.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(items.len());
        for item in items {
            // SAFETY: capacity is exactly `items.len()`.
            unsafe { array.push_unchecked(item.clone()) };
        }
        array
    }

    /// Creates an array from the half-open range `range.start..range.end`.
    ///
    /// # Safety
    ///
    /// Both pointers must lie in (or one past the end of) the same
    /// allocation, `range.start <= range.end`, and every element in between
    /// must be initialized. The range must not be mutated while the copy is
    /// taken.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized, since a pointer range cannot encode a
    /// count of such values.
    pub unsafe fn from_ptr_range(range: Range<*const T>) -> Self
    where
        T: Clone,
    {
        let distance = unsafe { range.end.offset_from(range.start) };
        debug_assert!(distance >= 0, "inverted pointer range");
        let items = unsafe { slice::from_raw_parts(range.start, distance as usize) };
        Self::from_slice(items)
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Spare slots that can be filled without growing.
    #[inline]
    pub fn reserved(&self) -> usize {
        self.cap - self.len
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is non-null, aligned and `[0, len)` is initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Appends `value`, growing the storage first if it is full.
    ///
    /// Aborts through [`std::alloc::handle_alloc_error`] if the allocator
    /// fails; use [`try_push`](Self::try_push) to observe the failure.
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            if let Err(err) = self.grow() {
                err.handle();
            }
        }
        // SAFETY: a free slot exists after the check above.
        unsafe { self.push_unchecked(value) };
    }

    /// Appends `value`, reporting allocation failure instead of aborting.
    ///
    /// On error the array is left untouched and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.cap {
            self.grow()?;
        }
        // SAFETY: a free slot exists after the check above.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Removes the last element and returns it.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live and is now outside
        // the live range, so it is read exactly once.
        Some(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
    }

    /// Drops every element back to front and releases the storage.
    pub fn clear(&mut self) {
        self.destroy_live();
        // SAFETY: `ptr` and `cap` describe the current allocation.
        unsafe { deallocate(self.ptr, self.cap) };
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Moves the contents out, leaving `self` empty with no storage.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Releases the current contents and adopts the buffer of `source`,
    /// which is left empty with no storage.
    pub fn move_from(&mut self, source: &mut Self) {
        self.clear();
        mem::swap(self, source);
    }

    /// # Safety
    ///
    /// `self.len < self.cap` must hold.
    #[inline]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.cap);
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    fn destroy_live(&mut self) {
        // `len` shrinks before each drop so a panicking destructor never
        // sees an element dropped twice.
        while self.len > 0 {
            self.len -= 1;
            unsafe { ptr::drop_in_place(self.ptr.as_ptr().add(self.len)) };
        }
    }

    fn grow(&mut self) -> Result<(), AllocError> {
        let new_cap = growth::next_capacity(self.cap).ok_or(AllocError::CapacityOverflow)?;
        let new_ptr = allocate::<T>(new_cap).inspect_err(|err| {
            debug!(capacity = self.cap, requested = new_cap, %err, "dynamic array growth failed");
        })?;
        // SAFETY: the new buffer holds at least `len` slots and does not
        // overlap the old one. The old slots are relocated, not dropped.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            deallocate(self.ptr, self.cap);
        }
        trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            len = self.len,
            "dynamic array grew"
        );
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// The copy is sized to `self.len()`, not to `self.capacity()`.
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        *self = Self::from_slice(source.as_slice());
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for item in items {
            // SAFETY: capacity is exactly `N`.
            unsafe { array.push_unchecked(item) };
        }
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item.clone());
        }
    }
}

impl<T: Clone> AddAssign<&DynamicArray<T>> for DynamicArray<T> {
    /// Appends a clone of every element of `rhs`, in order.
    fn add_assign(&mut self, rhs: &DynamicArray<T>) {
        self.extend(rhs.iter());
    }
}

impl<T: Clone> Add<&DynamicArray<T>> for &DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn add(self, rhs: &DynamicArray<T>) -> DynamicArray<T> {
        let mut joined = self.clone();
        joined += rhs;
        joined
    }
}

impl<T: Clone> Add<&DynamicArray<T>> for DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn add(mut self, rhs: &DynamicArray<T>) -> DynamicArray<T> {
        self += rhs;
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

macro_rules! impl_slice_partial_eq {
    ([$($vars:tt)*] $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for DynamicArray<T>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self[..] == other[..]
            }
        }
    };
}

impl_slice_partial_eq!([] DynamicArray<U>);
impl_slice_partial_eq!([] [U]);
impl_slice_partial_eq!([] &[U]);
impl_slice_partial_eq!([] Vec<U>);
impl_slice_partial_eq!([const N: usize] [U; N]);
impl_slice_partial_eq!([const N: usize] &[U; N]);

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

/// Owning iterator returned by [`DynamicArray::into_iter`].
///
/// Unyielded elements are dropped and the buffer freed when it goes away.
pub struct IntoIter<T> {
    buf: NonNull<T>,
    cap: usize,
    start: usize,
    end: usize,
    _marker: PhantomData<T>,
}

// SAFETY: same ownership story as `DynamicArray`.
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` is still initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let iter = IntoIter {
            buf: self.ptr,
            cap: self.cap,
            start: 0,
            end: self.len,
            _marker: PhantomData,
        };
        // The iterator owns the buffer now.
        mem::forget(self);
        iter
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is live and leaves the live range right after.
        let item = unsafe { ptr::read(self.buf.as_ptr().add(self.start)) };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while self.end > self.start {
            self.end -= 1;
            unsafe { ptr::drop_in_place(self.buf.as_ptr().add(self.end)) };
        }
        // SAFETY: `buf`/`cap` came from the array this iterator consumed.
        unsafe { deallocate(self.buf, self.cap) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
