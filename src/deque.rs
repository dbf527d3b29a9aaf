use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ops::Index,
    ptr::NonNull,
};

use tracing::trace;

use crate::{
    error::CapacityError,
    iter::{IntoIter, Iter},
};

/// Number of element slots in every block of the chain.
pub const BLOCK_LEN: usize = 64;

/// An empty deque keeps its cursors around this slot so that either end has
/// roughly half a block of room before it needs to allocate.
const CENTER: usize = (BLOCK_LEN - 1) / 2;

pub(crate) type BlockPtr<T> = NonNull<Block<T>>;

pub(crate) struct Block<T> {
    pub(crate) data: [MaybeUninit<T>; BLOCK_LEN],
    pub(crate) left: Option<BlockPtr<T>>,
    pub(crate) right: Option<BlockPtr<T>>,
}

impl<T> Block<T> {
    fn alloc(left: Option<BlockPtr<T>>, right: Option<BlockPtr<T>>) -> BlockPtr<T> {
        let block = Box::new(Self { data: [const { MaybeUninit::uninit() }; BLOCK_LEN], left, right });
        NonNull::from(Box::leak(block))
    }

    /// # Safety
    /// `block` must have been returned by [`Block::alloc`], must not be freed twice and
    /// must not hold any live elements (they would be leaked).
    unsafe fn free(block: BlockPtr<T>) {
        drop(Box::from_raw(block.as_ptr()))
    }

    /// # Safety
    /// `block` must be live and must have a right neighbour.
    #[inline]
    pub(crate) unsafe fn next(block: BlockPtr<T>) -> BlockPtr<T> {
        (*block.as_ptr()).right.unwrap_unchecked()
    }

    /// # Safety
    /// `block` must be live and must have a left neighbour.
    #[inline]
    pub(crate) unsafe fn prev(block: BlockPtr<T>) -> BlockPtr<T> {
        (*block.as_ptr()).left.unwrap_unchecked()
    }

    /// # Safety
    /// `block` must be live and `slot` must hold an initialized element that outlives `'a`.
    #[inline]
    pub(crate) unsafe fn slot<'a>(block: BlockPtr<T>, slot: usize) -> &'a T {
        (*block.as_ptr()).data[slot].assume_init_ref()
    }
}

/// A double-ended queue stored as a doubly linked chain of fixed size blocks.
///
/// Pushing at either end fills the edge block and links in a fresh one once it is
/// exhausted; popping frees an edge block as soon as it drains. There is never a
/// reallocation of the whole buffer and never a pointer per element.
///
/// A deque may carry an upper bound on its length (see [`Deque::with_max_len`]), in
/// which case pushes past the bound are rejected with a [`CapacityError`].
pub struct Deque<T> {
    left: BlockPtr<T>,
    right: BlockPtr<T>,
    // first live slot of `left`
    head: usize,
    // one past the last live slot of `right`
    tail: usize,
    len: usize,
    cap: usize,
    max_len: Option<usize>,
    _marker: PhantomData<Box<Block<T>>>,
}

impl<T> Deque<T> {
    /// Creates an empty, unbounded deque holding a single block.
    #[inline]
    pub fn new() -> Self {
        Self::starting_at(CENTER + 1, None)
    }

    /// Creates an empty deque that never holds more than `max_len` elements.
    #[inline]
    pub fn with_max_len(max_len: usize) -> Self {
        Self::starting_at(CENTER + 1, Some(max_len))
    }

    /// An empty deque whose first push_back lands at `head` of its only block.
    fn starting_at(head: usize, max_len: Option<usize>) -> Self {
        let block = Block::alloc(None, None);
        Self {
            left: block,
            right: block,
            head,
            tail: head,
            len: 0,
            cap: BLOCK_LEN,
            max_len,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always a non-zero multiple of [`BLOCK_LEN`].
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub const fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bound_reached().is_some()
    }

    /// Returns the bound if the deque can't take another element.
    #[inline]
    fn bound_reached(&self) -> Option<usize> {
        self.max_len.filter(|&max_len| self.len >= max_len)
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { Block::slot(self.left, self.head) })
        }
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            // a non-empty deque always has its last element in `right`, so tail >= 1
            Some(unsafe { Block::slot(self.right, self.tail - 1) })
        }
    }

    /// Returns the element `idx` positions from the front, walking the chain from
    /// whichever end is closer.
    pub fn get(&self, idx: usize) -> Option<&T> {
        if idx >= self.len {
            return None;
        }

        if idx < self.len / 2 {
            let mut block = self.left;
            let mut slot = self.head + idx;
            while slot >= BLOCK_LEN {
                // SAFETY: element `idx` is live, so the chain reaches that far right
                block = unsafe { Block::next(block) };
                slot -= BLOCK_LEN;
            }
            Some(unsafe { Block::slot(block, slot) })
        } else {
            let mut from_back = self.len - 1 - idx;
            let mut block = self.right;
            let mut slot = self.tail - 1;
            while from_back > slot {
                from_back -= slot + 1;
                // SAFETY: element `idx` is live, so the chain reaches that far left
                block = unsafe { Block::prev(block) };
                slot = BLOCK_LEN - 1;
            }
            Some(unsafe { Block::slot(block, slot - from_back) })
        }
    }

    #[inline]
    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == t)
    }

    /// Appends `val` at the back. Fails without touching the deque if it is bounded and full.
    #[inline]
    pub fn push_back(&mut self, val: T) -> Result<(), CapacityError<T>> {
        if let Some(max_len) = self.bound_reached() {
            return Err(CapacityError::new(val, max_len));
        }
        self.push_back_unbounded(val);
        Ok(())
    }

    /// Prepends `val` at the front. Fails without touching the deque if it is bounded and full.
    #[inline]
    pub fn push_front(&mut self, val: T) -> Result<(), CapacityError<T>> {
        if let Some(max_len) = self.bound_reached() {
            return Err(CapacityError::new(val, max_len));
        }
        self.push_front_unbounded(val);
        Ok(())
    }

    #[inline]
    fn push_back_unbounded(&mut self, val: T) {
        if self.tail == BLOCK_LEN {
            self.grow_back();
        }
        // SAFETY: tail < BLOCK_LEN now, and the slot at tail is vacant
        unsafe { (*self.right.as_ptr()).data[self.tail].write(val) };
        self.tail += 1;
        self.len += 1;
    }

    #[inline]
    fn push_front_unbounded(&mut self, val: T) {
        if self.head == 0 {
            self.grow_front();
        }
        self.head -= 1;
        // SAFETY: the slot just before the old head is vacant
        unsafe { (*self.left.as_ptr()).data[self.head].write(val) };
        self.len += 1;
    }

    #[cold]
    fn grow_back(&mut self) {
        let block = Block::alloc(Some(self.right), None);
        unsafe { (*self.right.as_ptr()).right = Some(block) };
        self.right = block;
        self.tail = 0;
        self.cap += BLOCK_LEN;
        trace!(side = "back", capacity = self.cap, len = self.len, "block allocated");
    }

    #[cold]
    fn grow_front(&mut self) {
        let block = Block::alloc(None, Some(self.left));
        unsafe { (*self.left.as_ptr()).left = Some(block) };
        self.left = block;
        self.head = BLOCK_LEN;
        self.cap += BLOCK_LEN;
        trace!(side = "front", capacity = self.cap, len = self.len, "block allocated");
    }

    /// Removes the last element, or returns `None` if the deque is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.tail -= 1;
        self.len -= 1;
        // SAFETY: the slot held the last element and the cursor has already moved past
        // it, so it's read exactly once
        let val = unsafe { (*self.right.as_ptr()).data[self.tail].assume_init_read() };

        if self.len == 0 {
            self.recenter();
        } else if self.tail == 0 {
            self.release_back();
        }
        Some(val)
    }

    /// Removes the first element, or returns `None` if the deque is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: head points at the first element, which is read exactly once
        let val = unsafe { (*self.left.as_ptr()).data[self.head].assume_init_read() };
        self.head += 1;
        self.len -= 1;

        if self.len == 0 {
            self.recenter();
        } else if self.head == BLOCK_LEN {
            self.release_front();
        }
        Some(val)
    }

    /// Unlinks and frees the drained right block. Elements remain to its left.
    #[cold]
    fn release_back(&mut self) {
        let drained = self.right;
        let Some(left) = (unsafe { (*drained.as_ptr()).left }) else {
            unreachable!("non-empty deque drained its only block");
        };
        unsafe {
            (*left.as_ptr()).right = None;
            Block::free(drained);
        }
        self.right = left;
        self.tail = BLOCK_LEN;
        self.cap -= BLOCK_LEN;
        trace!(side = "back", capacity = self.cap, len = self.len, "block released");
    }

    /// Unlinks and frees the drained left block. Elements remain to its right.
    #[cold]
    fn release_front(&mut self) {
        let drained = self.left;
        let Some(right) = (unsafe { (*drained.as_ptr()).right }) else {
            unreachable!("non-empty deque drained its only block");
        };
        unsafe {
            (*right.as_ptr()).left = None;
            Block::free(drained);
        }
        self.left = right;
        self.head = 0;
        self.cap -= BLOCK_LEN;
        trace!(side = "front", capacity = self.cap, len = self.len, "block released");
    }

    /// Only valid once the deque is empty, at which point a single block is left.
    #[inline]
    fn recenter(&mut self) {
        debug_assert_eq!(self.left, self.right);
        self.head = CENTER + 1;
        self.tail = CENTER + 1;
    }

    /// Drops every element and frees all blocks but one.
    pub fn clear(&mut self) {
        if mem::needs_drop::<T>() {
            while self.pop_front().is_some() {}
        }

        // without drop glue the elements can simply be forgotten along with their blocks
        while self.left != self.right {
            let drained = self.left;
            unsafe {
                self.left = Block::next(drained);
                (*self.left.as_ptr()).left = None;
                Block::free(drained);
            }
            self.cap -= BLOCK_LEN;
        }
        self.len = 0;
        self.recenter();
    }

    /// Pushes every element of `iter` at the back, in order.
    ///
    /// Stops at the first element that doesn't fit and returns it. Elements pushed before
    /// that stay in the deque, and the rest of `iter` is left unconsumed.
    pub fn extend_back<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), CapacityError<T>> {
        iter.into_iter().try_for_each(|val| self.push_back(val))
    }

    /// Pushes every element of `iter` at the front, in order, so they end up reversed.
    ///
    /// Same partial semantics as [`Deque::extend_back`] when the bound is hit.
    pub fn extend_front<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), CapacityError<T>> {
        iter.into_iter().try_for_each(|val| self.push_front(val))
    }

    /// Rotates the deque `n` steps to the right: for `n > 0` the last `n` elements move to
    /// the front, for `n < 0` the first `|n|` elements move to the back. Relative order is
    /// kept in both cases.
    pub fn rotate(&mut self, n: isize) {
        if self.is_empty() {
            return;
        }

        let steps = n.unsigned_abs() % self.len;
        // rotating one way by k is rotating the other way by len - k
        let (right, steps) = if steps <= self.len / 2 {
            (n > 0, steps)
        } else {
            (n < 0, self.len - steps)
        };

        for _ in 0..steps {
            if right {
                if let Some(val) = self.pop_back() {
                    self.push_front_unbounded(val);
                }
            } else if let Some(val) = self.pop_front() {
                self.push_back_unbounded(val);
            }
        }
    }

    /// Borrowing iterator from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.left, self.head, self.right, self.tail, self.len)
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: clear leaves exactly one empty block behind
        unsafe { Block::free(self.left) };
    }
}

impl<T: Clone> Clone for Deque<T> {
    /// Copies the elements into a fresh chain. Pushing from the same head slot reproduces
    /// the layout of `self` block for block, so cursors and capacity match as well.
    fn clone(&self) -> Self {
        let mut out = Self::starting_at(self.head, self.max_len);
        self.iter().cloned().for_each(|val| out.push_back_unbounded(val));
        out
    }
}

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    /// Collects into an unbounded deque.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        iter.into_iter().for_each(|val| deque.push_back_unbounded(val));
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    #[inline]
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T> Extend<T> for Deque<T> {
    /// # Panics
    /// Panics if the deque is bounded and runs full. Use [`Deque::extend_back`] to
    /// handle the bound instead.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.extend_back(iter) {
            panic!("{err}");
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Deque<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Deque<U>> for Deque<T> {
    #[inline]
    fn eq(&self, other: &Deque<U>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Deque<T> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Deque<T> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self == other.as_slice()
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for Deque<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for Deque<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|t| t.hash(state));
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Out of bounds access")
    }
}

// The chain is owned exclusively by the deque, so it is as thread safe as a Box<[T]>.
unsafe impl<T: Send> Send for Deque<T> {}

unsafe impl<T: Sync> Sync for Deque<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
