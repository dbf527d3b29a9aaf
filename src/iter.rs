use core::{fmt, iter::FusedIterator, marker::PhantomData};

use crate::deque::{Block, BlockPtr, Deque, BLOCK_LEN};

/// Borrowing iterator over a [`Deque`], created by [`Deque::iter`].
///
/// Walks the block chain lazily from both ends; the two cursors never cross because
/// they share a single count of elements still to be yielded.
pub struct Iter<'a, T> {
    front_block: BlockPtr<T>,
    // next slot to yield from the front
    front: usize,
    back_block: BlockPtr<T>,
    // one past the next slot to yield from the back
    back: usize,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(
        front_block: BlockPtr<T>,
        front: usize,
        back_block: BlockPtr<T>,
        back: usize,
        remaining: usize,
    ) -> Self {
        Self { front_block, front, back_block, back, remaining, _marker: PhantomData }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.front == BLOCK_LEN {
            // SAFETY: elements remain past the end of this block, so it has a neighbour
            self.front_block = unsafe { Block::next(self.front_block) };
            self.front = 0;
        }
        let item = unsafe { Block::slot(self.front_block, self.front) };
        self.front += 1;
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.back == 0 {
            // SAFETY: elements remain before the start of this block, so it has a neighbour
            self.back_block = unsafe { Block::prev(self.back_block) };
            self.back = BLOCK_LEN;
        }
        self.back -= 1;
        self.remaining -= 1;
        Some(unsafe { Block::slot(self.back_block, self.back) })
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.front_block, self.front, self.back_block, self.back, self.remaining)
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct IterFormatter<'a, 'b, T>(&'b Iter<'a, T>);

        impl<'a, 'b, T: fmt::Debug> fmt::Debug for IterFormatter<'a, 'b, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.clone()).finish()
            }
        }

        f.debug_tuple("Iter").field(&IterFormatter(self)).finish()
    }
}

// Iter behaves like a &'a T
unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}

unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

/// Owning iterator over a [`Deque`], popping from whichever end is asked for.
#[derive(Clone, Debug)]
pub struct IntoIter<T>(Deque<T>);

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(deque: Deque<T>) -> Self {
        Self(deque)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
